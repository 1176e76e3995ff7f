//! Client-side form validation shared by every panel.
//!
//! Validation runs before a request is built, so a failing form never
//! reaches the network.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),

    #[error("{0} must be a time in HH:MM format")]
    InvalidTime(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("Slot duration must be positive")]
    NonPositiveDuration,

    #[error("Slot duration cannot exceed {0} minutes")]
    DurationTooLong(i32),

    #[error("Start time must be before end time")]
    StartNotBeforeEnd,

    #[error("Slots {0} and {1} overlap")]
    OverlappingSlots(String, String),

    #[error("{0} slot records could not be read; reload before replacing the schedule")]
    UnreadableSlots(usize),

    #[error("{0} has booked or blocked slots and cannot be replaced")]
    TakenSlotsOnDay(String),
}

/// Implemented by every payload the panels send to the server.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    require(field, value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(field))
}

/// Accepts `HH:MM` from form inputs and `HH:MM:SS` as the server
/// stores it.
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ValidationError> {
    require(field, value)?;
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(field))
}

/// Parses both ends of a time window and checks that it is not empty.
pub fn parse_time_range(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime), ValidationError> {
    let start = parse_time("Start time", start)?;
    let end = parse_time("End time", end)?;
    if start >= end {
        return Err(ValidationError::StartNotBeforeEnd);
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(require("Login", "   "), Err(ValidationError::Required("Login")));
        assert!(require("Login", "alice").is_ok());
    }

    #[test]
    fn test_parse_time_accepts_seconds() {
        let t = parse_time("Start time", "09:30:00").unwrap();
        assert_eq!(t.format(TIME_FORMAT).to_string(), "09:30");
        assert_eq!(
            parse_time("Start time", "9.30"),
            Err(ValidationError::InvalidTime("Start time"))
        );
    }

    #[test]
    fn test_time_range_order() {
        assert!(parse_time_range("08:00", "09:00").is_ok());
        assert_eq!(
            parse_time_range("09:00", "08:00"),
            Err(ValidationError::StartNotBeforeEnd)
        );
        assert_eq!(
            parse_time_range("09:00", "09:00"),
            Err(ValidationError::StartNotBeforeEnd)
        );
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("Date", "2024-03-15").is_ok());
        assert_eq!(
            parse_date("Date", "15.03.2024"),
            Err(ValidationError::InvalidDate("Date"))
        );
        assert_eq!(parse_date("Date", ""), Err(ValidationError::Required("Date")));
    }

    #[test]
    fn test_messages_are_readable() {
        assert_eq!(
            ValidationError::PasswordTooShort(MIN_PASSWORD_LEN).to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            ValidationError::StartNotBeforeEnd.to_string(),
            "Start time must be before end time"
        );
    }
}
