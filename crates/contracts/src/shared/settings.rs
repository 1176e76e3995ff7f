use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::a002_booking_slot::SlotDraft;
use crate::shared::validation::{parse_date, parse_time_range, Validate, ValidationError, TIME_FORMAT};

pub const DEFAULT_SLOT_DURATION_MINUTES: i32 = 60;
pub const DEFAULT_DAY_START: &str = "08:00";
pub const DEFAULT_DAY_END: &str = "22:00";
pub const MAX_SLOT_DURATION_MINUTES: i32 = 24 * 60;

/// Глобальные настройки расписания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub slot_duration_minutes: i32,
    pub day_start_time: String,
    pub day_end_time: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            slot_duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
            day_start_time: DEFAULT_DAY_START.to_string(),
            day_end_time: DEFAULT_DAY_END.to_string(),
        }
    }
}

impl SystemSettings {
    /// Build settings from raw form input.
    pub fn from_form(duration: &str, start: &str, end: &str) -> Result<Self, ValidationError> {
        let slot_duration_minutes = duration
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::NotANumber("Slot duration"))?;
        let settings = Self {
            slot_duration_minutes,
            day_start_time: start.trim().to_string(),
            day_end_time: end.trim().to_string(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Drafts covering one working day with back-to-back slots.
    ///
    /// A trailing window shorter than the slot duration is not emitted.
    pub fn day_template(&self, item_id: &str, date: &str) -> Result<Vec<SlotDraft>, ValidationError> {
        self.validate()?;
        parse_date("Date", date)?;
        let (start, end) = parse_time_range(&self.day_start_time, &self.day_end_time)?;

        let step = self.slot_duration_minutes as u32;
        let end_min = minutes_of(end);
        let mut cursor = minutes_of(start);
        let mut drafts = Vec::new();
        while cursor + step <= end_min {
            drafts.push(SlotDraft {
                item_id: item_id.to_string(),
                date: date.to_string(),
                start_time: format_minutes(cursor),
                end_time: format_minutes(cursor + step),
                is_available: true,
            });
            cursor += step;
        }
        Ok(drafts)
    }
}

impl Validate for SystemSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.slot_duration_minutes <= 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        if self.slot_duration_minutes > MAX_SLOT_DURATION_MINUTES {
            return Err(ValidationError::DurationTooLong(MAX_SLOT_DURATION_MINUTES));
        }
        parse_time_range(&self.day_start_time, &self.day_end_time)?;
        Ok(())
    }
}

/// Response of `POST /api/settings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsSaved {
    #[serde(default)]
    pub message: Option<String>,
}

fn minutes_of(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn format_minutes(minutes: u32) -> String {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| format!("{:02}:{:02}", minutes / 60, minutes % 60))
}
