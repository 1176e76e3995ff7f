//! Bootstrap data the server renders into each panel page.

use serde::{Deserialize, Serialize};

use crate::domain::a001_booking_item::BookingItem;
use crate::domain::a003_booking::UserBooking;
use crate::domain::a004_calendar_date::CalendarDate;
use crate::shared::settings::SystemSettings;
use crate::system::users::User;

/// Page variant; admin, manager and user pages are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Admin,
    Manager,
    #[default]
    User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub panel: Panel,
    pub users: Vec<User>,
    pub managers: Vec<User>,
    pub items: Vec<BookingItem>,
    pub dates: Vec<CalendarDate>,
    pub bookings: Vec<UserBooking>,
    pub settings: SystemSettings,
}

impl PageData {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_bootstrap() {
        let data = PageData::from_json(
            r#"{"panel":"manager","items":[{"id":"1","name":"Room"}]}"#,
        )
        .unwrap();
        assert_eq!(data.panel, Panel::Manager);
        assert_eq!(data.items.len(), 1);
        assert!(data.users.is_empty());
        assert_eq!(data.settings, SystemSettings::default());
    }

    #[test]
    fn test_empty_object_is_user_panel() {
        assert_eq!(PageData::from_json("{}").unwrap().panel, Panel::User);
    }
}
