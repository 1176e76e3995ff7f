use contracts::system::users::{Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::crud::CrudHandler;
use crate::shared::list_actions::{action_from_event, RowAction};
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;
use crate::system::users::api::config_for;

/// Users (or managers) rendered by the server into the page, with delete.
#[component]
pub fn UserList(role: Role, users: Vec<User>) -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();
    let config = config_for(role);
    let rows: RwSignal<Vec<User>> = RwSignal::new(users);

    // One listener for the whole list; rows only carry data attributes.
    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        let Some(hit) = action_from_event(&ev) else {
            return;
        };
        if hit.action != RowAction::Delete {
            return;
        }
        let handler = CrudHandler::new(config, gateway.clone(), effects);
        spawn_local(async move {
            if handler.delete(&hit.id).await.is_completed() {
                rows.update(|list| list.retain(|u| u.id != hit.id));
            }
        });
    };

    let heading = match role {
        Role::Manager => "Managers",
        _ => "Users",
    };

    view! {
        <div class="entity-list">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <h3>{heading}</h3>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || rows.with(|r| r.len()).to_string()}
                </Badge>
            </Flex>

            {move || {
                rows.with(|r| r.is_empty())
                    .then(|| view! { <p class="empty-state">"Nothing here yet"</p> })
            }}

            <ul class="rows" on:click=on_list_click>
                <For
                    each=move || rows.get()
                    key=|u| u.id.clone()
                    children=move |u: User| {
                        let birth = (!u.birth_date.is_empty()).then(|| u.birth_date.clone());
                        view! {
                            <li class="row">
                                <span class="row-title">{u.display_name().to_string()}</span>
                                <span class="row-meta">{u.login.clone()}</span>
                                {birth.map(|b| view! { <span class="row-meta">{b}</span> })}
                                <button
                                    class="btn-danger"
                                    data-action=RowAction::Delete.as_str()
                                    data-id=u.id.clone()
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
