use contracts::domain::a004_calendar_date::CalendarDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_calendar_date::api;
use crate::shared::date_utils::format_date;
use crate::shared::list_actions::{action_from_event, RowAction};
use crate::shared::notifications::NotificationKind;
use crate::shared::page_effects::{use_effects, PageEffects};
use crate::shared::use_gateway;

/// Dates with an enable/disable toggle. A toggle only flips its own row.
#[component]
pub fn DateList(dates: Vec<CalendarDate>) -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();
    let rows: RwSignal<Vec<CalendarDate>> = RwSignal::new(dates);
    let (is_loading, set_is_loading) = signal(false);

    let refresh = {
        let gateway = gateway.clone();
        move |_: leptos::ev::MouseEvent| {
            let gateway = gateway.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match api::fetch_available_dates(&gateway).await {
                    Ok(list) => rows.set(list),
                    Err(e) => effects.notify(
                        &format!("Failed to load dates: {}", e),
                        NotificationKind::Error,
                    ),
                }
                set_is_loading.set(false);
            });
        }
    };

    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        let Some(hit) = action_from_event(&ev).filter(|a| a.action == RowAction::Toggle) else {
            return;
        };
        let Some(action) = rows.with_untracked(|list| {
            list.iter().find(|d| d.date == hit.id).map(CalendarDate::next_action)
        }) else {
            return;
        };
        let gateway = gateway.clone();
        spawn_local(async move {
            let outcome = api::set_date_availability(&gateway, &effects, &hit.id, action).await;
            if outcome.is_completed() {
                rows.update(|list| {
                    if let Some(d) = list.iter_mut().find(|d| d.date == hit.id) {
                        d.apply(action);
                    }
                });
            }
        });
    };

    view! {
        <div class="entity-list">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <h3>"Dates"</h3>
                <button class="btn-secondary" on:click=refresh disabled=move || is_loading.get()>
                    "Refresh"
                </button>
            </Flex>

            {move || {
                rows.with(|r| r.is_empty())
                    .then(|| view! { <p class="empty-state">"No dates open for booking"</p> })
            }}

            <ul class="rows" on:click=on_list_click>
                <For
                    each=move || rows.get()
                    key=|d| (d.date.clone(), d.enabled)
                    children=move |d: CalendarDate| {
                        let state = if d.enabled { "open" } else { "closed" };
                        view! {
                            <li class="row">
                                <span class="row-title">{format_date(&d.date)}</span>
                                <span class=format!("date-state {}", state)>{state}</span>
                                <button
                                    class="btn-secondary"
                                    data-action=RowAction::Toggle.as_str()
                                    data-id=d.date.clone()
                                >
                                    {d.next_action().button_label()}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
