pub mod a001_booking_item;
pub mod a002_booking_slot;
pub mod a003_booking;
pub mod a004_calendar_date;
