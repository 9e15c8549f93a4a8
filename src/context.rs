//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::Config;

#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<Config>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Snapshot of the runtime configuration
    pub fn config(&self) -> Config {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
