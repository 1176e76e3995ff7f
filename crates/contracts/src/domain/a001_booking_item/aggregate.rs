use serde::{Deserialize, Serialize};

use crate::shared::validation::{require, Validate, ValidationError};

/// Объект бронирования (комната, рабочее место)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingItem {
    pub id: String,
    pub name: String,
}

/// Payload of `POST /api/booking-items`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingItemDto {
    pub name: String,
}

impl CreateBookingItemDto {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

impl Validate for CreateBookingItemDto {
    fn validate(&self) -> Result<(), ValidationError> {
        require("Item name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_and_required() {
        assert_eq!(CreateBookingItemDto::new("  Room 1 ").name, "Room 1");
        assert_eq!(
            CreateBookingItemDto::new("   ").validate(),
            Err(ValidationError::Required("Item name"))
        );
    }
}
