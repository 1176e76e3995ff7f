use crate::shared::api_utils::{Gateway, HttpTransport};
use crate::shared::page_effects::PageEffects;

/// End the session; the login page is shown whether or not the server
/// answered.
pub async fn logout<T: HttpTransport, E: PageEffects>(
    gateway: &Gateway<T>,
    effects: &E,
    login_path: &str,
) {
    if let Err(e) = gateway.get("/logout").await {
        log::error!("Logout failed: {}", e);
    }
    effects.redirect(login_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::testing::{gateway, RecordingTransport};
    use crate::shared::page_effects::testing::{Recorded, ScriptedEffects};
    use futures::executor::block_on;

    #[test]
    fn test_redirects_after_logout() {
        let transport = RecordingTransport::default();
        transport.reply(200, "");
        let effects = ScriptedEffects::answering(true);

        block_on(logout(&gateway(&transport), &effects, "/login"));

        assert_eq!(transport.requests()[0].url, "/logout");
        assert_eq!(effects.recorded(), vec![Recorded::Redirect("/login".into())]);
    }

    #[test]
    fn test_redirects_even_when_logout_fails() {
        let transport = RecordingTransport::default();
        transport.fail("Network error");
        let effects = ScriptedEffects::answering(true);

        block_on(logout(&gateway(&transport), &effects, "/login"));

        assert_eq!(effects.recorded(), vec![Recorded::Redirect("/login".into())]);
    }
}
