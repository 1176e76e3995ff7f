use contracts::domain::a001_booking_item::BookingItem;
use contracts::domain::a002_booking_slot::{BookingSlot, SlotDraft};
use contracts::shared::settings::SystemSettings;
use leptos::prelude::*;
use thaw::*;

use super::view_model::SlotEditorViewModel;
use crate::shared::list_actions::{action_from_event, RowAction};
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;

#[component]
pub fn SlotEditor(items: Vec<BookingItem>, settings: SystemSettings) -> impl IntoView {
    let vm = SlotEditorViewModel::new(use_gateway(), use_effects(), items, settings);

    let on_items_click = {
        let vm = vm.clone();
        move |ev: leptos::ev::MouseEvent| {
            if let Some(hit) = action_from_event(&ev).filter(|a| a.action == RowAction::Select) {
                vm.select_item(hit.id);
            }
        }
    };

    let editor = {
        let vm = vm.clone();
        move || {
            vm.selected_item
                .get()
                .map(|item_id| view! { <SelectedItemEditor vm=vm.clone() item_id=item_id /> })
        }
    };

    let selected = vm.selected_item;

    view! {
        <div class="slot-editor">
            <h3>"Slots"</h3>
            <ul class="item-list" on:click=on_items_click>
                {vm.items.get_value().into_iter().map(|item| {
                    let id = item.id.clone();
                    let is_active = move || selected.with(|s| s.as_deref() == Some(id.as_str()));
                    view! {
                        <li
                            class="row selectable"
                            class:active=is_active
                            data-action=RowAction::Select.as_str()
                            data-id=item.id.clone()
                        >
                            {item.name.clone()}
                        </li>
                    }
                }).collect_view()}
            </ul>

            {move || {
                selected.with(|s| s.is_none())
                    .then(|| view! { <p class="empty-state">"Select an item to edit its slots"</p> })
            }}

            {editor}
        </div>
    }
}

#[component]
fn SelectedItemEditor(vm: SlotEditorViewModel, item_id: String) -> impl IntoView {
    let on_add = {
        let (vm, item_id) = (vm.clone(), item_id.clone());
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.add_command(item_id.clone());
        }
    };
    let on_fill = {
        let (vm, item_id) = (vm.clone(), item_id.clone());
        move |_: leptos::ev::MouseEvent| vm.fill_day_command(&item_id)
    };
    let on_save_schedule = {
        let (vm, item_id) = (vm.clone(), item_id.clone());
        move |_: leptos::ev::MouseEvent| vm.save_schedule_command(item_id.clone())
    };
    let on_discard = {
        let vm = vm.clone();
        move |_: leptos::ev::MouseEvent| vm.discard_pending()
    };
    let on_slots_click = {
        let (vm, item_id) = (vm.clone(), item_id.clone());
        move |ev: leptos::ev::MouseEvent| {
            let Some(hit) = action_from_event(&ev) else {
                return;
            };
            match hit.action {
                RowAction::Delete => vm.delete_command(item_id.clone(), hit.id),
                RowAction::Block => vm.block_command(item_id.clone(), hit.id),
                _ => {}
            }
        }
    };

    let (date, start, end) = (vm.draft_date, vm.draft_start, vm.draft_end);
    let (slots, skipped, pending, is_loading) = (vm.slots, vm.skipped, vm.pending, vm.is_loading);

    view! {
        <div class="slot-editor-body">
            <form class="entity-form inline" on:submit=on_add>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <input
                    type="time"
                    prop:value=move || start.get()
                    on:input=move |ev| start.set(event_target_value(&ev))
                />
                <input
                    type="time"
                    prop:value=move || end.get()
                    on:input=move |ev| end.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Add slot"</button>
                <button type="button" class="btn-secondary" on:click=on_fill>
                    "Fill day from settings"
                </button>
            </form>

            {move || {
                let drafts = pending.get();
                (!drafts.is_empty()).then(|| {
                    let on_save_schedule = on_save_schedule.clone();
                    let on_discard = on_discard.clone();
                    view! {
                        <div class="pending-day">
                            <p>{format!("{} new slots for {}", drafts.len(), drafts[0].date)}</p>
                            <ul class="rows">
                                {drafts.iter().map(|d: &SlotDraft| view! {
                                    <li class="row">{format!("{} - {}", d.start_time, d.end_time)}</li>
                                }).collect_view()}
                            </ul>
                            <button class="btn-primary" on:click=on_save_schedule>"Save schedule"</button>
                            <button class="btn-secondary" on:click=on_discard>"Discard"</button>
                        </div>
                    }
                })
            }}

            {move || is_loading.get().then(|| view! { <Spinner /> })}

            {move || {
                let n = skipped.get();
                (n > 0).then(|| view! {
                    <p class="warning">{format!("{} slot record(s) could not be read", n)}</p>
                })
            }}

            <ul class="rows slot-list" on:click=on_slots_click>
                <For
                    each=move || slots.get()
                    key=|s| s.id.clone()
                    children=move |s: BookingSlot| {
                        let state = if s.is_available { "available" } else { "taken" };
                        view! {
                            <li class="row">
                                <span class="row-meta">{s.date.clone()}</span>
                                <span class="row-title">{s.time_range()}</span>
                                <span class=format!("slot-state {}", state)>{state}</span>
                                <button
                                    class="btn-secondary"
                                    data-action=RowAction::Block.as_str()
                                    data-id=s.id.clone()
                                >
                                    "Block"
                                </button>
                                <button
                                    class="btn-danger"
                                    data-action=RowAction::Delete.as_str()
                                    data-id=s.id.clone()
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            {move || {
                (!is_loading.get() && slots.with(|s| s.is_empty()))
                    .then(|| view! { <p class="empty-state">"No slots for this item"</p> })
            }}
        </div>
    }
}
