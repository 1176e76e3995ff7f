//! Delegated click handling for rendered lists.
//!
//! A list binds one `on:click` on its container; rows carry
//! `data-action` and `data-id` and the handler dispatches on them, so
//! re-rendering rows never re-binds listeners.

use std::str::FromStr;

use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Select,
    Delete,
    Book,
    Block,
    Cancel,
    Toggle,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Select => "select",
            RowAction::Delete => "delete",
            RowAction::Book => "book",
            RowAction::Block => "block",
            RowAction::Cancel => "cancel",
            RowAction::Toggle => "toggle",
        }
    }
}

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(RowAction::Select),
            "delete" => Ok(RowAction::Delete),
            "book" => Ok(RowAction::Book),
            "block" => Ok(RowAction::Block),
            "cancel" => Ok(RowAction::Cancel),
            "toggle" => Ok(RowAction::Toggle),
            other => Err(format!("unknown row action '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAction {
    pub action: RowAction,
    pub id: String,
}

impl ListAction {
    pub fn from_attrs(action: Option<String>, id: Option<String>) -> Option<Self> {
        let action = action?.parse().ok()?;
        let id = id.filter(|id| !id.trim().is_empty())?;
        Some(Self { action, id })
    }
}

/// Resolve a click anywhere inside a row to the nearest `[data-action]`.
pub fn action_from_event(ev: &web_sys::MouseEvent) -> Option<ListAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let hit = target.closest("[data-action]").ok()??;
    let action = ListAction::from_attrs(hit.get_attribute("data-action"), hit.get_attribute("data-id"));
    if action.is_none() {
        log::warn!("Ignoring click on malformed list control");
    }
    action
}
