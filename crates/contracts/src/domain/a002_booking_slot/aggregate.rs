use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::validation::{parse_date, parse_time_range, require, Validate, ValidationError};

/// Временной слот объекта бронирования на конкретную дату
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSlot {
    pub id: String,
    pub item_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl BookingSlot {
    /// "09:00 - 10:00"
    pub fn time_range(&self) -> String {
        format!("{} - {}", short_time(&self.start_time), short_time(&self.end_time))
    }

    pub fn to_draft(&self) -> SlotDraft {
        SlotDraft {
            item_id: self.item_id.clone(),
            date: self.date.clone(),
            start_time: short_time(&self.start_time).to_string(),
            end_time: short_time(&self.end_time).to_string(),
            is_available: self.is_available,
        }
    }
}

/// Server stores `HH:MM:SS`; the panels show `HH:MM`.
fn short_time(value: &str) -> &str {
    if value.len() == 8 && value.as_bytes()[5] == b':' {
        &value[..5]
    } else {
        value
    }
}

/// Slot that has not been stored yet; payload of `POST /api/slots`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDraft {
    pub item_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

impl Validate for SlotDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("Booking item", &self.item_id)?;
        parse_date("Date", &self.date)?;
        parse_time_range(&self.start_time, &self.end_time)?;
        Ok(())
    }
}

/// Payload of `PUT /api/items/{id}/slots`: the full schedule of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceSlotsDto {
    pub slots: Vec<SlotDraft>,
}

impl ReplaceSlotsDto {
    /// Schedule that keeps `current` slots on other dates and puts `pending`
    /// in place of the pending day.
    ///
    /// Refuses when some stored records could not be decoded (`skipped`),
    /// since a full replace would drop them, and when the replaced day holds
    /// a slot that is no longer available.
    pub fn for_day(
        current: &[BookingSlot],
        skipped: usize,
        pending: Vec<SlotDraft>,
    ) -> Result<Self, ValidationError> {
        if skipped > 0 {
            return Err(ValidationError::UnreadableSlots(skipped));
        }
        let Some(date) = pending.first().map(|d| d.date.clone()) else {
            return Err(ValidationError::Required("Slots"));
        };
        if current.iter().any(|s| s.date == date && !s.is_available) {
            return Err(ValidationError::TakenSlotsOnDay(date));
        }

        let mut slots: Vec<SlotDraft> = current
            .iter()
            .filter(|s| s.date != date)
            .map(BookingSlot::to_draft)
            .collect();
        slots.extend(pending);
        Ok(Self { slots })
    }
}

impl Validate for ReplaceSlotsDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut windows = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            slot.validate()?;
            let (start, end) = parse_time_range(&slot.start_time, &slot.end_time)?;
            windows.push((slot.date.as_str(), start, end, slot));
        }
        windows.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        for pair in windows.windows(2) {
            let (date_a, _, end_a, slot_a) = pair[0];
            let (date_b, start_b, _, slot_b) = pair[1];
            if date_a == date_b && start_b < end_a {
                return Err(ValidationError::OverlappingSlots(
                    format!("{}-{}", slot_a.start_time, slot_a.end_time),
                    format!("{}-{}", slot_b.start_time, slot_b.end_time),
                ));
            }
        }
        Ok(())
    }
}

/// Query of `GET /api/booking-slots`; without a date every slot of the item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub item_id: String,
}

/// Lifecycle transitions of a slot: available → booked → cancelled / blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotTransition {
    Book,
    Block,
    Cancel,
}

impl SlotTransition {
    pub fn path_segment(&self) -> &'static str {
        match self {
            SlotTransition::Book => "book",
            SlotTransition::Block => "block",
            SlotTransition::Cancel => "cancel",
        }
    }
}

/// Slots decoded from a list response together with the number of
/// records that could not be decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotList {
    pub slots: Vec<BookingSlot>,
    pub skipped: usize,
}

impl SlotList {
    /// Decodes record by record. Malformed records are counted in
    /// `skipped` instead of failing the whole list; `null` is an empty list.
    pub fn decode(value: Value) -> Result<Self, String> {
        let records = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(records) => records,
            other => return Err(format!("expected a list of slots, got {}", kind_of(&other))),
        };

        let mut list = Self::default();
        for record in records {
            match serde_json::from_value::<BookingSlot>(record) {
                Ok(slot) => list.slots.push(slot),
                Err(_) => list.skipped += 1,
            }
        }
        list.slots
            .sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
        Ok(list)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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
    fn test_draft_rejects_reversed_window() {
        assert_eq!(
            draft("09:00", "08:00").validate(),
            Err(ValidationError::StartNotBeforeEnd)
        );
        assert!(draft("08:00", "09:00").validate().is_ok());
    }

    #[test]
    fn test_draft_requires_item() {
        let mut d = draft("08:00", "09:00");
        d.item_id.clear();
        assert_eq!(d.validate(), Err(ValidationError::Required("Booking item")));
    }

    #[test]
    fn test_replace_detects_overlap() {
        let dto = ReplaceSlotsDto {
            slots: vec![draft("10:00", "11:00"), draft("08:00", "09:00"), draft("10:30", "11:30")],
        };
        assert_eq!(
            dto.validate(),
            Err(ValidationError::OverlappingSlots(
                "10:00-11:00".into(),
                "10:30-11:30".into()
            ))
        );

        let ok = ReplaceSlotsDto {
            slots: vec![draft("09:00", "10:00"), draft("10:00", "11:00")],
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_same_window_on_other_day_is_fine() {
        let mut other_day = draft("09:00", "10:00");
        other_day.date = "2024-05-02".into();
        let dto = ReplaceSlotsDto {
            slots: vec![draft("09:00", "10:00"), other_day],
        };
        assert!(dto.validate().is_ok());
    }

    fn stored(id: &str, date: &str, start: &str, end: &str, available: bool) -> BookingSlot {
        BookingSlot {
            id: id.into(),
            item_id: "item-1".into(),
            date: date.into(),
            start_time: start.into(),
            end_time: end.into(),
            is_available: available,
        }
    }

    #[test]
    fn test_day_schedule_keeps_other_dates() {
        let current = vec![
            stored("a", "2024-04-30", "09:00:00", "10:00:00", false),
            stored("b", "2024-05-01", "09:00:00", "10:00:00", true),
        ];
        let dto = ReplaceSlotsDto::for_day(&current, 0, vec![draft("08:00", "09:00")]).unwrap();

        assert_eq!(dto.slots.len(), 2);
        assert_eq!(dto.slots[0].date, "2024-04-30");
        assert_eq!(dto.slots[0].start_time, "09:00");
        assert!(!dto.slots[0].is_available);
        assert_eq!(dto.slots[1], draft("08:00", "09:00"));
    }

    #[test]
    fn test_day_schedule_refuses_with_unreadable_records() {
        let current = vec![stored("a", "2024-04-30", "09:00:00", "10:00:00", true)];
        assert_eq!(
            ReplaceSlotsDto::for_day(&current, 2, vec![draft("08:00", "09:00")]),
            Err(ValidationError::UnreadableSlots(2))
        );
    }

    #[test]
    fn test_day_schedule_refuses_over_taken_slot() {
        let current = vec![stored("b", "2024-05-01", "09:00:00", "10:00:00", false)];
        assert_eq!(
            ReplaceSlotsDto::for_day(&current, 0, vec![draft("08:00", "09:00")]),
            Err(ValidationError::TakenSlotsOnDay("2024-05-01".into()))
        );
    }

    #[test]
    fn test_day_schedule_needs_drafts() {
        assert_eq!(
            ReplaceSlotsDto::for_day(&[], 0, Vec::new()),
            Err(ValidationError::Required("Slots"))
        );
    }

    #[test]
    fn test_decode_skips_malformed_records() {
        let value = json!([
            {"id": "b", "item_id": "i", "date": "2024-05-01", "start_time": "10:00:00", "end_time": "11:00:00", "is_available": true},
            {"id": "broken"},
            {"id": "a", "item_id": "i", "date": "2024-05-01", "start_time": "09:00:00", "end_time": "10:00:00"}
        ]);
        let list = SlotList::decode(value).unwrap();
        assert_eq!(list.skipped, 1);
        let ids: Vec<&str> = list.slots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(list.slots[0].time_range(), "09:00 - 10:00");
        assert!(list.slots[0].is_available);
    }

    #[test]
    fn test_decode_null_and_non_list() {
        assert_eq!(SlotList::decode(Value::Null).unwrap(), SlotList::default());
        assert!(SlotList::decode(json!({"status": "success"})).is_err());
    }

    #[test]
    fn test_transition_segments() {
        assert_eq!(SlotTransition::Book.path_segment(), "book");
        assert_eq!(SlotTransition::Block.path_segment(), "block");
        assert_eq!(SlotTransition::Cancel.path_segment(), "cancel");
    }
}
