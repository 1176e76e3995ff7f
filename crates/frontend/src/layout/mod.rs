pub mod global_context;
pub mod header;
pub mod tabs;

use leptos::prelude::*;

use crate::shared::notifications::NotificationHost;

/// Page frame shared by every panel.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, logout)                  |
/// +------------------------------------------+
/// |  TabStrip                                |
/// |  TabPage ...                             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header title=title />
            <main class="app-main">
                <tabs::TabStrip />
                {children()}
            </main>
            <NotificationHost />
        </div>
    }
}
