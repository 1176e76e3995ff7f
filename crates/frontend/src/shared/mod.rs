pub mod api_utils;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod list_actions;
pub mod notifications;
pub mod page_bootstrap;
pub mod page_effects;
pub mod request_seq;

use leptos::prelude::*;

use crate::shared::api_utils::Gateway;
use crate::shared::config::AppConfig;

/// Gateway pointed at the configured API base
pub fn use_gateway() -> Gateway {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    Gateway::new(Default::default(), config.api.base)
}
