use contracts::shared::settings::{SettingsSaved, SystemSettings};

use crate::shared::api_utils::{decode, Gateway, HttpTransport};
use crate::shared::crud::{user_message, Outcome};
use crate::shared::notifications::NotificationKind;
use crate::shared::page_effects::PageEffects;

pub const SETTINGS_PATH: &str = "/api/settings";
pub const SAVED: &str = "Settings saved";
pub const SAVE_FAILED: &str = "Failed to save settings";

/// Validate the raw form values and send them. The server's own
/// confirmation message is shown when it sends one.
pub async fn save_settings<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    duration: &str,
    day_start: &str,
    day_end: &str,
) -> Outcome {
    let settings = match SystemSettings::from_form(duration, day_start, day_end) {
        Ok(s) => s,
        Err(e) => {
            effects.notify(&e.to_string(), NotificationKind::Error);
            return Outcome::Rejected(e);
        }
    };

    match gateway.post(SETTINGS_PATH, &settings).await {
        Ok(value) => {
            let message = decode::<SettingsSaved>(value.clone())
                .ok()
                .and_then(|saved| saved.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| SAVED.to_string());
            log::info!(
                "settings saved: {} min, {}-{}",
                settings.slot_duration_minutes,
                settings.day_start_time,
                settings.day_end_time
            );
            effects.notify(&message, NotificationKind::Success);
            Outcome::Completed(value)
        }
        Err(e) => {
            effects.notify(&user_message(&e, SAVE_FAILED, None), NotificationKind::Error);
            Outcome::Failed(e)
        }
    }
}
