use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;
use crate::system::auth::api::logout;

#[component]
pub fn Header(title: &'static str) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let gateway = use_gateway();
    let effects = use_effects();
    let login_path = config.api.login_path;

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let gateway = gateway.clone();
        let login_path = login_path.clone();
        spawn_local(async move {
            logout(&gateway, &effects, &login_path).await;
        });
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{title}</span>
            </div>
            <div class="header__actions">
                <button class="button button--ghost" id="logout-btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
