//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpTodoApi;
use crate::config::ClientConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch todos from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch todos from backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ClientConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }
    
    /// Trigger a re-fetch of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// HTTP binding for the configured backend
    pub fn api(&self) -> HttpTodoApi {
        HttpTodoApi::new(self.config())
    }
}
