use serde::{Deserialize, Serialize};

/// Бронирование текущего пользователя, как его отдаёт `GET /api/bookings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBooking {
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub item_name: String,
}

impl UserBooking {
    pub fn summary(&self) -> String {
        format!(
            "{} {} {}-{}",
            self.item_name, self.date, self.start_time, self.end_time
        )
    }
}
