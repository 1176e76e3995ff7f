use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::notifications::Notifier;
use crate::shared::page_bootstrap::load_page_data;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // One notification area for the whole page.
    provide_context(Notifier::new(config.ui.notification_timeout_ms));
    provide_context(config);

    let data = load_page_data();

    view! {
        <AppRoutes data=data />
    }
}
