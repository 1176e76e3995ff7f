use contracts::domain::a004_calendar_date::{CalendarDate, DateAction, DateAvailabilityRequest};

use crate::shared::api_utils::{segment, ApiError, Gateway, HttpTransport, Method};
use crate::shared::crud::{submit_validated, Action, Outcome};
use crate::shared::page_effects::PageEffects;

pub const AVAILABLE_DATES_PATH: &str = "/api/available-dates";

pub fn availability_path(date: &str) -> String {
    format!("/api/dates/{}/availability", segment(date))
}

/// Open or close a date for booking.
pub async fn set_date_availability<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    date: &str,
    action: DateAction,
) -> Outcome {
    let request = DateAvailabilityRequest {
        date: date.to_string(),
        action,
    };
    let post = Action::new(Method::Post, availability_path(date)).messages(
        format!("Date {} {}", date, action.past_tense()),
        "Failed to change date availability",
    );
    submit_validated(gateway, effects, &request, post).await
}

/// Dates currently open for booking
pub async fn fetch_available_dates<T: HttpTransport>(
    gateway: &Gateway<T>,
) -> Result<Vec<CalendarDate>, ApiError> {
    let mut dates = gateway
        .get_as::<Option<Vec<String>>>(AVAILABLE_DATES_PATH)
        .await?
        .unwrap_or_default();
    dates.sort();
    Ok(CalendarDate::from_available(dates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::testing::{gateway, RecordingTransport};
    use crate::shared::notifications::NotificationKind;
    use crate::shared::page_effects::testing::{Recorded, ScriptedEffects};
    use contracts::shared::validation::ValidationError;
    use futures::executor::block_on;

    #[test]
    fn test_disable_date() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(set_date_availability(
            &gateway(&transport),
            &effects,
            "2024-05-01",
            DateAction::Disable,
        ));

        assert!(outcome.is_completed());
        let sent = transport.requests();
        assert_eq!(sent[0].url, "/api/dates/2024-05-01/availability");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"action":"disable"}"#));
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(
                "Date 2024-05-01 disabled".into(),
                NotificationKind::Success
            )]
        );
    }

    #[test]
    fn test_malformed_date_is_not_sent() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(true);

        let outcome = block_on(set_date_availability(
            &gateway(&transport),
            &effects,
            "01.05.2024",
            DateAction::Enable,
        ));

        assert_eq!(outcome, Outcome::Rejected(ValidationError::InvalidDate("Date")));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_available_dates() {
        let transport = RecordingTransport::default();
        transport.reply(200, r#"["2024-05-03","2024-05-01"]"#);

        let dates = block_on(fetch_available_dates(&gateway(&transport))).unwrap();

        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].date, "2024-05-01");
        assert!(dates.iter().all(|d| d.enabled));
    }
}
