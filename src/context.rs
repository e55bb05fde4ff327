//! Board Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{AppConfig, RouteConfig};
use crate::store::BoardStore;

#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: BoardStore,
    config: StoredValue<AppConfig>,
}

impl BoardContext {
    pub fn new(store: BoardStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn routes(&self) -> RouteConfig {
        self.config.with_value(|c| c.routes.clone())
    }
}

pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
