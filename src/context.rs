//! Application Context
//!
//! Session config and the in-flight submission flag, provided via the
//! Leptos Context API.

use leptos::prelude::*;

use crate::config::BootstrapConfig;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Parameters handed over by the hosting platform at launch
    pub config: BootstrapConfig,
    /// True while a submission is outstanding; backs the re-entrancy guard
    pub submitting: RwSignal<bool>,
}

impl AppContext {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            submitting: RwSignal::new(false),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
