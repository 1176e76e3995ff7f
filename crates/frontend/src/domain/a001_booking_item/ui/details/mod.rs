use contracts::domain::a001_booking_item::CreateBookingItemDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_booking_item::api::ITEMS;
use crate::shared::crud::CrudHandler;
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;

#[component]
pub fn CreateItemForm() -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();
    let (name, set_name) = signal(String::new());
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = CreateBookingItemDto::new(&name.get_untracked());
        let handler = CrudHandler::new(&ITEMS, gateway.clone(), effects);

        set_is_saving.set(true);
        spawn_local(async move {
            if handler.create(&dto).await.is_completed() {
                set_name.set(String::new());
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <form class="entity-form inline" on:submit=on_submit>
            <input
                type="text"
                id="item-name"
                placeholder="Item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
                disabled=move || is_saving.get()
            />
            <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                "Add item"
            </button>
        </form>
    }
}
