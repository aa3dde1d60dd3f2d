//! Submission Pipeline
//!
//! Wire records, the submit-readiness gate, and the single POST to the
//! backend. The gate is pure so the "invalid list never reaches the
//! network" guarantee is a data-level fact, not a UI convention.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::BootstrapConfig;
use crate::models::Position;
use crate::platform::HostPlatform;
use crate::validate::validate_positions;

/// One position as the backend expects it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WirePosition {
    pub name: String,
    pub price: String,
    pub description: String,
    pub grouped: bool,
    /// Resolved upload URL
    pub image: String,
    pub warehouse: bool,
    #[serde(rename = "warehouseCount")]
    pub warehouse_count: String,
    pub subitems: Vec<WireSubitem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireSubitem {
    pub name: String,
    pub warehouse: bool,
    #[serde(rename = "warehouseCount")]
    pub warehouse_count: String,
}

/// Body of `POST {host}/positions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    pub data: Vec<WirePosition>,
    pub password: String,
    pub bot_id: i64,
    pub user_id: i64,
    pub message_id: i64,
}

/// Outcome of validating the list for submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitGate {
    /// At least one position is invalid; the validated list carries the
    /// error fields to render. No request was built.
    Blocked(Vec<Position>),
    /// Everything is valid; the request is ready to send.
    Ready {
        validated: Vec<Position>,
        request: SubmitRequest,
    },
}

/// Validate the whole list and build the wire request only if every
/// position is valid.
pub fn gate_submission(config: &BootstrapConfig, positions: &[Position]) -> SubmitGate {
    let validated = validate_positions(positions);
    if validated.iter().all(|p| p.is_valid) {
        let request = SubmitRequest {
            data: validated.iter().map(to_wire).collect(),
            password: config.password.clone(),
            bot_id: config.bot_id,
            user_id: config.user_id,
            message_id: config.message_id,
        };
        SubmitGate::Ready { validated, request }
    } else {
        SubmitGate::Blocked(validated)
    }
}

fn to_wire(position: &Position) -> WirePosition {
    WirePosition {
        name: position.title.clone(),
        price: position.price.clone(),
        description: position.description.clone(),
        grouped: position.kind.is_grouped(),
        image: position
            .image
            .as_ref()
            .map(|i| i.url.clone())
            .unwrap_or_default(),
        warehouse: position.warehouse,
        warehouse_count: position.warehouse_count.clone(),
        subitems: position
            .subitems
            .iter()
            .map(|s| WireSubitem {
                name: s.title.clone(),
                warehouse: s.warehouse,
                warehouse_count: s.warehouse_count.clone(),
            })
            .collect(),
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    /// HTTP 400: the backend refused the payload. The response body is
    /// logged; no mapping back onto field errors exists.
    #[error("backend rejected the submission")]
    Rejected,
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// POST the request to `{host}/positions`. Success is HTTP 201.
pub async fn submit_positions(host: &str, request: &SubmitRequest) -> Result<(), SubmitError> {
    let url = format!("{host}/positions");
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    match response.status() {
        201 => Ok(()),
        400 => {
            let body = response.text().await.unwrap_or_default();
            web_sys::console::log_1(&format!("[SUBMIT] rejected by backend: {body}").into());
            Err(SubmitError::Rejected)
        }
        status => Err(SubmitError::UnexpectedStatus(status)),
    }
}

/// Disable the trigger while the submission is outstanding
pub fn begin_submission(host: &impl HostPlatform) {
    host.disable_main_button();
}

/// Close the view on success; on any failure hand the trigger back so the
/// user can retry. Runs on both arms, so the button is never left dead.
pub fn finish_submission(host: &impl HostPlatform, result: &Result<(), SubmitError>) {
    match result {
        Ok(()) => host.close(),
        Err(_) => host.enable_main_button(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UploadedImage, MSG_REQUIRED};
    use std::cell::RefCell;

    fn config() -> BootstrapConfig {
        BootstrapConfig {
            host: "https://api.example.com".to_string(),
            password: "pw".to_string(),
            bot_id: 42,
            user_id: 1001,
            message_id: 77,
            categories: vec!["Shoes".to_string()],
        }
    }

    fn valid_position() -> Position {
        let mut p = Position::new();
        p.title = "Shoe".to_string();
        p.price = "10".to_string();
        p.image = Some(UploadedImage::done("https://cdn/shoe.png".to_string()));
        p
    }

    #[test]
    fn invalid_list_is_blocked_and_no_request_is_built() {
        let mut p = valid_position();
        p.title = String::new();

        match gate_submission(&config(), &[p]) {
            SubmitGate::Blocked(validated) => {
                assert_eq!(validated[0].title_errors, vec![MSG_REQUIRED.to_string()]);
                assert!(!validated[0].is_valid);
            }
            SubmitGate::Ready { .. } => panic!("invalid position must not pass the gate"),
        }
    }

    #[test]
    fn one_invalid_position_blocks_the_whole_list() {
        let good = valid_position();
        let mut bad = valid_position();
        bad.price = String::new();

        assert!(matches!(
            gate_submission(&config(), &[good, bad]),
            SubmitGate::Blocked(_)
        ));
    }

    #[test]
    fn valid_grouped_position_produces_wire_record() {
        let mut p = valid_position();
        p.set_grouped(true);
        p.subitems[0].title = "Size 42".to_string();

        match gate_submission(&config(), &[p]) {
            SubmitGate::Ready { request, validated } => {
                assert!(validated[0].is_valid);
                assert_eq!(request.data.len(), 1);

                let wire = &request.data[0];
                assert_eq!(wire.name, "Shoe");
                assert_eq!(wire.price, "10");
                assert!(wire.grouped);
                assert_eq!(wire.image, "https://cdn/shoe.png");
                assert_eq!(
                    wire.subitems,
                    vec![WireSubitem {
                        name: "Size 42".to_string(),
                        warehouse: false,
                        warehouse_count: String::new(),
                    }]
                );
            }
            SubmitGate::Blocked(_) => panic!("valid position must pass the gate"),
        }
    }

    #[test]
    fn request_carries_session_identity() {
        let p = valid_position();
        let SubmitGate::Ready { request, .. } = gate_submission(&config(), &[p]) else {
            panic!("valid position must pass the gate");
        };
        assert_eq!(request.password, "pw");
        assert_eq!(request.bot_id, 42);
        assert_eq!(request.user_id, 1001);
        assert_eq!(request.message_id, 77);
    }

    #[test]
    fn wire_record_serializes_with_camel_case_count() {
        let p = valid_position();
        let SubmitGate::Ready { request, .. } = gate_submission(&config(), &[p]) else {
            panic!("valid position must pass the gate");
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["data"][0]["warehouseCount"].is_string());
        assert_eq!(json["data"][0]["grouped"], false);
        assert_eq!(json["bot_id"], 42);
    }

    /// Records host calls instead of touching a real WebApp
    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<String>>,
    }

    impl HostPlatform for RecordingHost {
        fn enable_main_button(&self) {
            self.calls.borrow_mut().push("enable".to_string());
        }

        fn disable_main_button(&self) {
            self.calls.borrow_mut().push("disable".to_string());
        }

        fn haptic_impact(&self, style: &str) {
            self.calls.borrow_mut().push(format!("haptic:{style}"));
        }

        fn close(&self) {
            self.calls.borrow_mut().push("close".to_string());
        }
    }

    #[test]
    fn successful_submission_closes_the_view() {
        let host = RecordingHost::default();
        begin_submission(&host);
        finish_submission(&host, &Ok(()));
        assert_eq!(*host.calls.borrow(), vec!["disable", "close"]);
    }

    #[test]
    fn failed_submission_reenables_the_trigger() {
        let host = RecordingHost::default();
        begin_submission(&host);
        finish_submission(&host, &Err(SubmitError::Network("offline".to_string())));
        assert_eq!(*host.calls.borrow(), vec!["disable", "enable"]);
    }

    #[test]
    fn rejection_also_reenables_the_trigger() {
        let host = RecordingHost::default();
        begin_submission(&host);
        finish_submission(&host, &Err(SubmitError::Rejected));
        assert_eq!(*host.calls.borrow(), vec!["disable", "enable"]);
    }

    // A backend HTTP 400 has no defined mapping back onto field errors: the
    // body is logged and the user simply gets the save button back. This
    // test pins that gap: gating never mutates its input, so a rejected
    // submission leaves the form exactly as validated.
    #[test]
    fn rejected_submission_leaves_positions_untouched() {
        let positions = vec![valid_position()];
        let before = positions.clone();

        let SubmitGate::Ready { validated, .. } = gate_submission(&config(), &positions) else {
            panic!("valid position must pass the gate");
        };

        assert_eq!(positions, before);
        assert!(validated[0].title_errors.is_empty());
        assert!(validated[0].price_errors.is_empty());
        assert!(validated[0].image_errors.is_empty());
        assert!(validated[0].warehouse_count_errors.is_empty());
    }
}
