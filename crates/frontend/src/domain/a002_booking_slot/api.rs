//! Slot endpoints. Every call names its booking item explicitly; nothing
//! here remembers which item is selected.

use contracts::domain::a002_booking_slot::{
    ReplaceSlotsDto, SlotDraft, SlotList, SlotQuery, SlotTransition,
};
use serde_json::Value;

use crate::shared::api_utils::{segment, ApiError, Gateway, HttpTransport, Method, INVALID_RESPONSE};
use crate::shared::crud::{
    run_action, submit_validated, Action, AfterChange, CrudHandler, EntityConfig, Outcome,
};
use crate::shared::page_effects::PageEffects;

pub static SLOTS: EntityConfig = EntityConfig {
    entity: "slot",
    collection_path: "/api/slots",
    item_path: "/api/slots",
    confirm_delete: "Are you sure you want to delete this slot?",
    created: "Slot created",
    deleted: "Slot deleted",
    create_failed: "Failed to create slot",
    delete_failed: "Failed to delete slot",
    duplicate_message: None,
    after_change: AfterChange::Stay,
};

pub fn item_slots_path(item_id: &str) -> String {
    format!("/api/items/{}/slots", segment(item_id))
}

pub fn transition_path(slot_id: &str, transition: SlotTransition) -> String {
    format!("/api/booking-slots/{}/{}", segment(slot_id), transition.path_segment())
}

pub fn available_slots_path(query: &SlotQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::new(format!("Failed to build query: {}", e)))?;
    Ok(format!("/api/booking-slots?{}", qs))
}

fn decode_slots(value: Value) -> Result<SlotList, ApiError> {
    let list = SlotList::decode(value).map_err(|e| {
        log::warn!("Slot list rejected: {}", e);
        ApiError::new(INVALID_RESPONSE)
    })?;
    if list.skipped > 0 {
        log::warn!("Skipped {} malformed slot record(s)", list.skipped);
    }
    Ok(list)
}

/// Every slot of one item, for the manager's editor
pub async fn fetch_item_slots<T: HttpTransport>(
    gateway: &Gateway<T>,
    item_id: &str,
) -> Result<SlotList, ApiError> {
    let value = gateway.get(&item_slots_path(item_id)).await?;
    decode_slots(value)
}

/// Bookable slots of one item, on one date when the query names it
pub async fn fetch_available_slots<T: HttpTransport>(
    gateway: &Gateway<T>,
    query: &SlotQuery,
) -> Result<SlotList, ApiError> {
    let value = gateway.get(&available_slots_path(query)?).await?;
    decode_slots(value)
}

pub async fn create_slot<T: HttpTransport, E: PageEffects>(
    gateway: Gateway<T>,
    effects: E,
    draft: &SlotDraft,
) -> Outcome {
    CrudHandler::new(&SLOTS, gateway, effects).create(draft).await
}

pub async fn delete_slot<T: HttpTransport, E: PageEffects>(
    gateway: Gateway<T>,
    effects: E,
    slot_id: &str,
) -> Outcome {
    CrudHandler::new(&SLOTS, gateway, effects).delete(slot_id).await
}

/// Replace the whole schedule of an item in one request.
pub async fn replace_item_slots<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    item_id: &str,
    schedule: &ReplaceSlotsDto,
) -> Outcome {
    let action = Action::new(Method::Put, item_slots_path(item_id))
        .messages(
            format!("Schedule saved ({} slots)", schedule.slots.len()),
            "Failed to save schedule",
        );
    submit_validated(gateway, effects, schedule, action).await
}

/// Book, block or cancel a slot after the user confirms.
pub async fn apply_transition<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    slot_id: &str,
    transition: SlotTransition,
) -> Outcome {
    let action = Action::new(Method::Post, transition_path(slot_id, transition));
    let action = match transition {
        SlotTransition::Book => action
            .confirm("Confirm booking of this slot?")
            .messages("Slot booked successfully", "Failed to book slot"),
        SlotTransition::Block => action
            .confirm("Block this slot? It will no longer be bookable.")
            .messages("Slot blocked successfully", "Failed to block slot"),
        SlotTransition::Cancel => action
            .confirm("Are you sure you want to cancel this booking?")
            .messages("Booking cancelled successfully", "Failed to cancel booking")
            .after(AfterChange::Reload),
    };
    let outcome = run_action(gateway, effects, action).await;
    log::info!("slot {} {}: completed={}", slot_id, transition.path_segment(), outcome.is_completed());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::testing::{gateway, RecordingTransport};
    use crate::shared::notifications::NotificationKind;
    use crate::shared::page_effects::testing::{Recorded, ScriptedEffects};
    use contracts::shared::validation::ValidationError;
    use futures::executor::block_on;

    fn draft(start: &str, end: &str) -> SlotDraft {
        SlotDraft {
            item_id: "item-1".into(),
            date: "2024-05-01".into(),
            start_time: start.into(),
            end_time: end.into(),
            is_available: true,
        }
    }

    #[test]
    fn test_reversed_slot_is_never_sent() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(create_slot(gateway(&transport), effects.clone(), &draft("09:00", "08:00")));

        assert_eq!(outcome, Outcome::Rejected(ValidationError::StartNotBeforeEnd));
        assert!(transport.requests().is_empty());
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(
                "Start time must be before end time".into(),
                NotificationKind::Error
            )]
        );
    }

    #[test]
    fn test_created_slot_does_not_reload() {
        let transport = RecordingTransport::default();
        transport.reply(201, r#"{"id":"s-1"}"#);
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(create_slot(gateway(&transport), effects.clone(), &draft("09:00", "10:00")));

        assert!(outcome.is_completed());
        assert_eq!(transport.requests()[0].url, "/api/slots");
        assert!(!effects.recorded().contains(&Recorded::Reload));
    }

    #[test]
    fn test_available_slots_query() {
        let query = SlotQuery {
            date: Some("2024-05-01".into()),
            item_id: "item-7".into(),
        };
        assert_eq!(
            available_slots_path(&query).unwrap(),
            "/api/booking-slots?date=2024-05-01&item_id=item-7"
        );
    }

    #[test]
    fn test_all_dates_query_has_only_item() {
        let transport = RecordingTransport::default();
        transport.reply(
            200,
            r#"[{"id":"s-1","item_id":"item-7","date":"2024-05-02","start_time":"09:00","end_time":"10:00"}]"#,
        );
        let query = SlotQuery {
            date: None,
            item_id: "item-7".into(),
        };

        let list = block_on(fetch_available_slots(&gateway(&transport), &query)).unwrap();

        assert_eq!(transport.requests()[0].url, "/api/booking-slots?item_id=item-7");
        assert_eq!(list.slots[0].date, "2024-05-02");
    }

    #[test]
    fn test_item_slots_skip_malformed_records() {
        let transport = RecordingTransport::default();
        transport.reply(
            200,
            r#"[
                {"id":"2","item_id":"i","date":"2024-05-01","start_time":"10:00","end_time":"11:00"},
                {"id":"bad"},
                {"id":"1","item_id":"i","date":"2024-05-01","start_time":"09:00","end_time":"10:00"}
            ]"#,
        );

        let list = block_on(fetch_item_slots(&gateway(&transport), "i")).unwrap();

        assert_eq!(transport.requests()[0].url, "/api/items/i/slots");
        assert_eq!(list.skipped, 1);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(list.slots[0].id, "1");
    }

    #[test]
    fn test_null_slot_list_is_empty() {
        let transport = RecordingTransport::default();
        transport.reply(200, "null");

        let list = block_on(fetch_item_slots(&gateway(&transport), "i")).unwrap();

        assert!(list.slots.is_empty());
    }

    #[test]
    fn test_declined_booking_sends_nothing() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(false);

        let outcome = block_on(apply_transition(&gateway(&transport), &effects, "s-1", SlotTransition::Book));

        assert_eq!(outcome, Outcome::Declined);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_cancel_reloads() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);

        block_on(apply_transition(&gateway(&transport), &effects, "b-3", SlotTransition::Cancel));

        assert_eq!(transport.requests()[0].url, "/api/booking-slots/b-3/cancel");
        assert_eq!(transport.requests()[0].method, Method::Post);
        assert_eq!(effects.recorded().last(), Some(&Recorded::Reload));
    }

    #[test]
    fn test_overlapping_schedule_is_rejected() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);
        let schedule = ReplaceSlotsDto {
            slots: vec![draft("09:00", "10:00"), draft("09:30", "10:30")],
        };

        let outcome = block_on(replace_item_slots(&gateway(&transport), &effects, "item-1", &schedule));

        assert!(matches!(outcome, Outcome::Rejected(ValidationError::OverlappingSlots(_, _))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_replace_schedule_puts_to_item() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);
        let schedule = ReplaceSlotsDto {
            slots: vec![draft("09:00", "10:00"), draft("10:00", "11:00")],
        };

        let outcome = block_on(replace_item_slots(&gateway(&transport), &effects, "item-1", &schedule));

        assert!(outcome.is_completed());
        assert_eq!(transport.requests()[0].method, Method::Put);
        assert_eq!(transport.requests()[0].url, "/api/items/item-1/slots");
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify("Schedule saved (2 slots)".into(), NotificationKind::Success)]
        );
    }
}
