use contracts::domain::a003_booking::UserBooking;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_booking::api;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::list_actions::{action_from_event, RowAction};
use crate::shared::notifications::NotificationKind;
use crate::shared::page_effects::{use_effects, PageEffects};
use crate::shared::use_gateway;

#[component]
pub fn BookingList(bookings: Vec<UserBooking>) -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();
    let rows: RwSignal<Vec<UserBooking>> = RwSignal::new(bookings);
    let (is_loading, set_is_loading) = signal(false);

    let refresh = {
        let gateway = gateway.clone();
        move |_: leptos::ev::MouseEvent| {
            let gateway = gateway.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match api::fetch_bookings(&gateway).await {
                    Ok(list) => rows.set(list),
                    Err(e) => effects.notify(
                        &format!("Failed to load bookings: {}", e),
                        NotificationKind::Error,
                    ),
                }
                set_is_loading.set(false);
            });
        }
    };

    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        let Some(hit) = action_from_event(&ev).filter(|a| a.action == RowAction::Cancel) else {
            return;
        };
        let gateway = gateway.clone();
        spawn_local(async move {
            api::cancel_booking(&gateway, &effects, &hit.id).await;
        });
    };

    view! {
        <div class="entity-list">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <h3>"My bookings"</h3>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || rows.with(|r| r.len()).to_string()}
                </Badge>
                <button class="btn-secondary" on:click=refresh disabled=move || is_loading.get()>
                    "Refresh"
                </button>
            </Flex>

            {move || {
                rows.with(|r| r.is_empty())
                    .then(|| view! { <p class="empty-state">"You have no bookings"</p> })
            }}

            <ul class="rows" on:click=on_list_click>
                <For
                    each=move || rows.get()
                    key=|b| b.id.clone()
                    children=move |b: UserBooking| {
                        let created = (!b.created_at.is_empty())
                            .then(|| format!("booked {}", format_datetime(&b.created_at)));
                        view! {
                            <li class="row" title=b.summary()>
                                <span class="row-title">{b.item_name.clone()}</span>
                                <span class="row-meta">
                                    {format!("{} {} - {}", format_date(&b.date), b.start_time, b.end_time)}
                                </span>
                                {created.map(|c| view! { <span class="row-meta">{c}</span> })}
                                <button
                                    class="btn-danger"
                                    data-action=RowAction::Cancel.as_str()
                                    data-id=b.id.clone()
                                >
                                    "Cancel"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
