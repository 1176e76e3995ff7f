use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

pub const ACTIVE_PARAM: &str = "active";

/// Tabs of the current panel and the one in front.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new(tabs: Vec<Tab>) -> Self {
        let first = tabs.first().map(|t| t.key.to_string());
        Self {
            opened: RwSignal::new(tabs),
            active: RwSignal::new(first),
        }
    }

    /// Restore the active tab from `?active=` and keep the URL in sync so
    /// a reload lands on the same tab.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_search(&search) {
            self.activate_tab(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = search_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Unknown keys (a stale link) leave the current tab in front.
    pub fn activate_tab(&self, key: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if exists {
            self.active.set(Some(key.to_string()));
        } else {
            log::warn!("No tab '{}' on this panel", key);
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|a| a.as_deref() == Some(key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub key: &'static str,
    pub title: &'static str,
}

impl Tab {
    pub const fn new(key: &'static str, title: &'static str) -> Self {
        Self { key, title }
    }
}

pub fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(ACTIVE_PARAM).cloned().filter(|k| !k.is_empty())
}

pub fn search_for_active(key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM.to_string(), key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}
