use serde::{Deserialize, Serialize};

use crate::shared::validation::{parse_date, Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateAction {
    Enable,
    Disable,
}

impl DateAction {
    /// Action offered for a date in its current state.
    pub fn for_state(enabled: bool) -> Self {
        if enabled {
            DateAction::Disable
        } else {
            DateAction::Enable
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            DateAction::Enable => "Enable",
            DateAction::Disable => "Disable",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            DateAction::Enable => "enabled",
            DateAction::Disable => "disabled",
        }
    }
}

/// Дата календаря и признак доступности для бронирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub date: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl CalendarDate {
    /// `GET /api/available-dates` only lists dates that are open.
    pub fn from_available(dates: Vec<String>) -> Vec<Self> {
        dates
            .into_iter()
            .map(|date| Self { date, enabled: true })
            .collect()
    }

    pub fn next_action(&self) -> DateAction {
        DateAction::for_state(self.enabled)
    }

    pub fn apply(&mut self, action: DateAction) {
        self.enabled = action == DateAction::Enable;
    }
}

/// Payload of `POST /api/dates/{date}/availability`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAvailabilityRequest {
    #[serde(skip)]
    pub date: String,
    pub action: DateAction,
}

impl Validate for DateAvailabilityRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        parse_date("Date", &self.date).map(|_| ())
    }
}
