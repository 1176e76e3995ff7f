use contracts::domain::a001_booking_item::BookingItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_booking_item::api::ITEMS;
use crate::shared::crud::CrudHandler;
use crate::shared::list_actions::{action_from_event, RowAction};
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;

#[component]
pub fn ItemList(items: Vec<BookingItem>) -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();
    let rows: RwSignal<Vec<BookingItem>> = RwSignal::new(items);

    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        let Some(hit) = action_from_event(&ev).filter(|a| a.action == RowAction::Delete) else {
            return;
        };
        let handler = CrudHandler::new(&ITEMS, gateway.clone(), effects);
        spawn_local(async move {
            if handler.delete(&hit.id).await.is_completed() {
                rows.update(|list| list.retain(|i| i.id != hit.id));
            }
        });
    };

    view! {
        <div class="entity-list">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <h3>"Booking items"</h3>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || rows.with(|r| r.len()).to_string()}
                </Badge>
            </Flex>

            {move || {
                rows.with(|r| r.is_empty())
                    .then(|| view! { <p class="empty-state">"No items yet"</p> })
            }}

            <ul class="rows" on:click=on_list_click>
                <For
                    each=move || rows.get()
                    key=|i| i.id.clone()
                    children=move |i: BookingItem| {
                        view! {
                            <li class="row">
                                <span class="row-title">{i.name.clone()}</span>
                                <button
                                    class="btn-danger"
                                    data-action=RowAction::Delete.as_str()
                                    data-id=i.id.clone()
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
