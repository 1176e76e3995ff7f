//! One add/delete flow for every managed entity.
//!
//! Users, managers, booking items and slots differ only in endpoints and
//! wording, so each of them is an [`EntityConfig`] value driving the same
//! [`CrudHandler`]. Other mutating calls (slot transitions, settings, date
//! toggles) go through [`run_action`] / [`submit_validated`] directly.

use contracts::shared::validation::{Validate, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::{
    segment, to_json, ApiError, FetchTransport, Gateway, HttpTransport, Method,
};
use crate::shared::notifications::NotificationKind;
use crate::shared::page_effects::{BrowserEffects, PageEffects};

pub const DUPLICATE_LOGIN: &str = "A user with this login already exists";

/// What the page does after a confirmed change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterChange {
    Reload,
    Stay,
}

#[derive(Debug, Clone, Copy)]
pub struct EntityConfig {
    pub entity: &'static str,
    pub collection_path: &'static str,
    pub item_path: &'static str,
    pub confirm_delete: &'static str,
    pub created: &'static str,
    pub deleted: &'static str,
    pub create_failed: &'static str,
    pub delete_failed: &'static str,
    /// Shown instead of the server text when a create hits a unique constraint
    pub duplicate_message: Option<&'static str>,
    pub after_change: AfterChange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed(Value),
    /// Client-side validation failed; nothing was sent
    Rejected(ValidationError),
    /// The user answered "no" to the confirmation; nothing was sent
    Declined,
    Failed(ApiError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

#[derive(Debug, Clone)]
pub struct Action {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub confirm: Option<String>,
    pub success: String,
    pub failure: String,
    pub duplicate: Option<String>,
    pub after: AfterChange,
}

impl Action {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            confirm: None,
            success: "Done".to_string(),
            failure: "Request failed".to_string(),
            duplicate: None,
            after: AfterChange::Stay,
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn confirm(mut self, question: impl Into<String>) -> Self {
        self.confirm = Some(question.into());
        self
    }

    pub fn messages(mut self, success: impl Into<String>, failure: impl Into<String>) -> Self {
        self.success = success.into();
        self.failure = failure.into();
        self
    }

    pub fn on_duplicate(mut self, message: impl Into<String>) -> Self {
        self.duplicate = Some(message.into());
        self
    }

    pub fn after(mut self, after: AfterChange) -> Self {
        self.after = after;
        self
    }
}

/// Message shown for a failed request
///
/// `duplicate` replaces a unique-constraint failure; callers without one see
/// the server text.
pub fn user_message(error: &ApiError, fallback: &str, duplicate: Option<&str>) -> String {
    let message = error.message().trim();
    if let Some(duplicate) = duplicate.filter(|_| message.contains("unique constraint")) {
        duplicate.to_string()
    } else if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

/// Confirm (when asked to), send, then notify and optionally reload.
pub async fn run_action<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    action: Action,
) -> Outcome {
    if let Some(question) = &action.confirm {
        if !effects.confirm(question) {
            log::debug!("{} {} declined", action.method.as_str(), action.path);
            return Outcome::Declined;
        }
    }

    match gateway.request(&action.path, action.method, action.body).await {
        Ok(value) => {
            effects.notify(&action.success, NotificationKind::Success);
            if action.after == AfterChange::Reload {
                effects.reload();
            }
            Outcome::Completed(value)
        }
        Err(e) => {
            let message = user_message(&e, &action.failure, action.duplicate.as_deref());
            effects.notify(&message, NotificationKind::Error);
            Outcome::Failed(e)
        }
    }
}

/// Validate `payload` and send it as the body of `action`.
pub async fn submit_validated<P, T, E>(
    gateway: &Gateway<T>,
    effects: &E,
    payload: &P,
    action: Action,
) -> Outcome
where
    P: Serialize + Validate,
    T: HttpTransport,
    E: PageEffects,
{
    if let Err(e) = payload.validate() {
        effects.notify(&e.to_string(), NotificationKind::Error);
        return Outcome::Rejected(e);
    }

    match to_json(payload) {
        Ok(body) => run_action(gateway, effects, action.body(body)).await,
        Err(e) => {
            effects.notify(e.message(), NotificationKind::Error);
            Outcome::Failed(e)
        }
    }
}

pub struct CrudHandler<T: HttpTransport = FetchTransport, E: PageEffects = BrowserEffects> {
    config: &'static EntityConfig,
    gateway: Gateway<T>,
    effects: E,
}

impl<T: HttpTransport, E: PageEffects> CrudHandler<T, E> {
    pub fn new(config: &'static EntityConfig, gateway: Gateway<T>, effects: E) -> Self {
        Self {
            config,
            gateway,
            effects,
        }
    }

    pub async fn create<P: Serialize + Validate>(&self, payload: &P) -> Outcome {
        let c = self.config;
        let mut action = Action::new(Method::Post, c.collection_path)
            .messages(c.created, c.create_failed)
            .after(c.after_change);
        if let Some(duplicate) = c.duplicate_message {
            action = action.on_duplicate(duplicate);
        }
        let outcome = submit_validated(&self.gateway, &self.effects, payload, action).await;
        log::info!("create {}: {}", c.entity, outcome_label(&outcome));
        outcome
    }

    pub async fn delete(&self, id: &str) -> Outcome {
        let c = self.config;
        let action = Action::new(Method::Delete, format!("{}/{}", c.item_path, segment(id)))
            .confirm(c.confirm_delete)
            .messages(c.deleted, c.delete_failed)
            .after(c.after_change);
        let outcome = run_action(&self.gateway, &self.effects, action).await;
        log::info!("delete {} {}: {}", c.entity, id, outcome_label(&outcome));
        outcome
    }
}

fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Completed(_) => "completed",
        Outcome::Rejected(_) => "rejected",
        Outcome::Declined => "declined",
        Outcome::Failed(_) => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::testing::{gateway, RecordingTransport};
    use crate::shared::page_effects::testing::{Recorded, ScriptedEffects};
    use contracts::domain::a001_booking_item::CreateBookingItemDto;
    use futures::executor::block_on;
    use serde_json::json;

    static THINGS: EntityConfig = EntityConfig {
        entity: "thing",
        collection_path: "/api/things",
        item_path: "/api/things",
        confirm_delete: "Delete this thing?",
        created: "Thing created",
        deleted: "Thing deleted",
        create_failed: "Failed to create thing",
        delete_failed: "Failed to delete thing",
        duplicate_message: None,
        after_change: AfterChange::Reload,
    };

    static ACCOUNTS: EntityConfig = EntityConfig {
        entity: "account",
        collection_path: "/api/accounts",
        item_path: "/api/accounts",
        confirm_delete: "Delete this account?",
        created: "Account created",
        deleted: "Account deleted",
        create_failed: "Failed to create account",
        delete_failed: "Failed to delete account",
        duplicate_message: Some(DUPLICATE_LOGIN),
        after_change: AfterChange::Reload,
    };

    const CONSTRAINT: &str = "pq: duplicate key value violates unique constraint \"users_login_key\"";

    fn handler(
        transport: &RecordingTransport,
        effects: &ScriptedEffects,
    ) -> CrudHandler<RecordingTransport, ScriptedEffects> {
        CrudHandler::new(&THINGS, gateway(transport), effects.clone())
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(false);

        let outcome = block_on(handler(&transport, &effects).delete("7"));

        assert_eq!(outcome, Outcome::Declined);
        assert!(transport.requests().is_empty());
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Confirm("Delete this thing?".into())]
        );
    }

    #[test]
    fn test_confirmed_delete_notifies_and_reloads() {
        let transport = RecordingTransport::default();
        transport.reply(200, "");
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(handler(&transport, &effects).delete("a/b"));

        assert_eq!(outcome, Outcome::Completed(json!({})));
        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].url, "/api/things/a%2Fb");
        assert_eq!(
            effects.recorded(),
            vec![
                Recorded::Confirm("Delete this thing?".into()),
                Recorded::Notify("Thing deleted".into(), NotificationKind::Success),
                Recorded::Reload,
            ]
        );
    }

    #[test]
    fn test_invalid_payload_is_rejected_locally() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(handler(&transport, &effects).create(&CreateBookingItemDto::new("  ")));

        assert_eq!(outcome, Outcome::Rejected(ValidationError::Required("Item name")));
        assert!(transport.requests().is_empty());
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(
                "Item name is required".into(),
                NotificationKind::Error
            )]
        );
    }

    #[test]
    fn test_failed_create_keeps_page() {
        let transport = RecordingTransport::default();
        transport.reply(500, r#"{"error":"Database error"}"#);
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(handler(&transport, &effects).create(&CreateBookingItemDto::new("Room")));

        assert_eq!(outcome, Outcome::Failed(ApiError::new("Database error")));
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"name":"Room"}"#)
        );
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(
                "Database error".into(),
                NotificationKind::Error
            )]
        );
    }

    #[test]
    fn test_stay_does_not_reload() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);
        let action = Action::new(Method::Post, "/api/booking-slots/1/block")
            .messages("Slot blocked", "Failed to block slot");

        let outcome = block_on(run_action(&gateway(&transport), &effects, action));

        assert!(outcome.is_completed());
        assert!(!effects.recorded().contains(&Recorded::Reload));
    }

    #[test]
    fn test_user_message() {
        let dup = ApiError::new(CONSTRAINT);
        assert_eq!(user_message(&dup, "x", Some(DUPLICATE_LOGIN)), DUPLICATE_LOGIN);
        assert_eq!(user_message(&dup, "x", None), CONSTRAINT);
        assert_eq!(user_message(&ApiError::new(""), "fallback", None), "fallback");
        assert_eq!(
            user_message(&ApiError::new("Slot is not available"), "x", Some(DUPLICATE_LOGIN)),
            "Slot is not available"
        );
    }

    #[test]
    fn test_constraint_failure_on_delete_keeps_server_text() {
        let transport = RecordingTransport::default();
        transport.reply(500, CONSTRAINT);
        let effects = ScriptedEffects::answering(true);
        let accounts = CrudHandler::new(&ACCOUNTS, gateway(&transport), effects.clone());

        block_on(accounts.delete("1"));

        assert_eq!(
            effects.recorded(),
            vec![
                Recorded::Confirm("Delete this account?".into()),
                Recorded::Notify(CONSTRAINT.into(), NotificationKind::Error),
            ]
        );
    }

    #[test]
    fn test_constraint_failure_on_plain_action_keeps_server_text() {
        let transport = RecordingTransport::default();
        transport.reply(500, CONSTRAINT);
        let effects = ScriptedEffects::answering(true);
        let action = Action::new(Method::Delete, "/api/booking-items/1")
            .messages("Item deleted", "Failed to delete item");

        block_on(run_action(&gateway(&transport), &effects, action));

        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(CONSTRAINT.into(), NotificationKind::Error)]
        );
    }

    #[test]
    fn test_duplicate_create_uses_configured_message() {
        let transport = RecordingTransport::default();
        transport.reply(500, CONSTRAINT);
        let effects = ScriptedEffects::answering(true);
        let accounts = CrudHandler::new(&ACCOUNTS, gateway(&transport), effects.clone());

        block_on(accounts.create(&CreateBookingItemDto::new("Room")));

        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(DUPLICATE_LOGIN.into(), NotificationKind::Error)]
        );
    }
}
