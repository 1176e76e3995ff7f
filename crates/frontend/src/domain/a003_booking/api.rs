use contracts::domain::a002_booking_slot::SlotTransition;
use contracts::domain::a003_booking::UserBooking;

use crate::domain::a002_booking_slot::api::apply_transition;
use crate::shared::api_utils::{ApiError, Gateway, HttpTransport};
use crate::shared::crud::Outcome;
use crate::shared::page_effects::PageEffects;

pub const BOOKINGS_PATH: &str = "/api/bookings";

/// Bookings of the signed-in user, newest first. The server sends `null`
/// when there are none.
pub async fn fetch_bookings<T: HttpTransport>(
    gateway: &Gateway<T>,
) -> Result<Vec<UserBooking>, ApiError> {
    let mut bookings = gateway
        .get_as::<Option<Vec<UserBooking>>>(BOOKINGS_PATH)
        .await?
        .unwrap_or_default();
    bookings.sort_by(|a, b| (&b.date, &b.start_time).cmp(&(&a.date, &a.start_time)));
    Ok(bookings)
}

/// Cancelling releases the slot the booking holds; the page reloads after.
pub async fn cancel_booking<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    booking_id: &str,
) -> Outcome {
    apply_transition(gateway, effects, booking_id, SlotTransition::Cancel).await
}
