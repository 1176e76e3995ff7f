//! Tab strip and tab bodies of a panel.
//!
//! Bodies of inactive tabs stay mounted and are only hidden, so form input
//! survives switching tabs.

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab};

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="tab-strip">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key
                children=move |tab: Tab| {
                    view! {
                        <button
                            class="tab-button"
                            class:active=move || ctx.is_active(tab.key)
                            on:click=move |_| ctx.activate_tab(tab.key)
                        >
                            {tab.title}
                        </button>
                    }
                }
            />
        </nav>
    }
}

#[component]
pub fn TabPage(tab: &'static str, children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <section
            class="tab-page"
            data-tab=tab
            style:display=move || if ctx.is_active(tab) { "block" } else { "none" }
        >
            {children()}
        </section>
    }
}
