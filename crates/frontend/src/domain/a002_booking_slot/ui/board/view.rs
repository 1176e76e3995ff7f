use contracts::domain::a001_booking_item::BookingItem;
use contracts::domain::a002_booking_slot::BookingSlot;
use leptos::prelude::*;
use thaw::*;

use super::view_model::SlotBoardViewModel;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::list_actions::{action_from_event, RowAction};
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;

/// Item picker with the item's bookable slots.
///
/// Shows today's slots unless `all_dates` is set, in which case every slot
/// of the item is listed with its date.
#[component]
pub fn SlotBoard(
    items: Vec<BookingItem>,
    #[prop(optional)] all_dates: bool,
) -> impl IntoView {
    let date = (!all_dates).then(today_iso);
    let heading = match &date {
        Some(date) => format!("Available slots for {}", format_date(date)),
        None => "Slots of the selected item".to_string(),
    };
    let vm = SlotBoardViewModel::new(use_gateway(), use_effects(), date);
    let (selected, slots, is_loading) = (vm.selected_item, vm.slots, vm.is_loading);

    let on_items_click = {
        let vm = vm.clone();
        move |ev: leptos::ev::MouseEvent| {
            if let Some(hit) = action_from_event(&ev).filter(|a| a.action == RowAction::Select) {
                vm.select_item(hit.id);
            }
        }
    };

    // Book buttons carry the slot id; the item comes from the selection.
    let on_slots_click = {
        let vm = vm.clone();
        move |ev: leptos::ev::MouseEvent| {
            let Some(hit) = action_from_event(&ev).filter(|a| a.action == RowAction::Book) else {
                return;
            };
            if let Some(item_id) = selected.get_untracked() {
                vm.book_command(item_id, hit.id);
            }
        }
    };

    view! {
        <div class="slot-board">
            <h3>{heading}</h3>
            <ul class="item-list" on:click=on_items_click>
                {items.into_iter().map(|item| {
                    let id = item.id.clone();
                    view! {
                        <li
                            class="row selectable"
                            class:active=move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                            data-action=RowAction::Select.as_str()
                            data-id=item.id.clone()
                        >
                            {item.name.clone()}
                        </li>
                    }
                }).collect_view()}
            </ul>

            {move || is_loading.get().then(|| view! { <Spinner /> })}

            <ul class="rows slot-list" on:click=on_slots_click>
                <For
                    each=move || slots.get()
                    key=|s| s.id.clone()
                    children=move |s: BookingSlot| {
                        let label = if all_dates {
                            format!("{} {}", format_date(&s.date), s.time_range())
                        } else {
                            s.time_range()
                        };
                        view! {
                            <li class="row">
                                <span class="row-title">{label}</span>
                                <button
                                    class="btn-primary"
                                    data-action=RowAction::Book.as_str()
                                    data-id=s.id.clone()
                                >
                                    "Book"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            {move || {
                (selected.with(|s| s.is_some()) && !is_loading.get() && slots.with(|s| s.is_empty()))
                    .then(|| view! { <p class="empty-state">"No available slots for this item"</p> })
            }}
        </div>
    }
}
