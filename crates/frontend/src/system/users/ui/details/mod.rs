use contracts::system::users::{CreateUserDto, Gender, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud::CrudHandler;
use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;
use crate::system::users::api::config_for;

/// Add form for users and managers. Managers must give a birth date, a
/// missing name becomes the default manager name.
#[component]
pub fn CreateUserForm(role: Role) -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();
    let config = config_for(role);
    let prefix = role.as_str();

    let (login, set_login) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (birth_date, set_birth_date) = signal(String::new());
    let (gender, set_gender) = signal(Gender::default().as_str().to_string());
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = CreateUserDto::from_form(
            role,
            &login.get_untracked(),
            &password.get_untracked(),
            &full_name.get_untracked(),
            &birth_date.get_untracked(),
            &gender.get_untracked(),
        );
        let handler = CrudHandler::new(config, gateway.clone(), effects);

        set_is_saving.set(true);
        spawn_local(async move {
            if handler.create(&dto).await.is_completed() {
                set_login.set(String::new());
                set_password.set(String::new());
                set_full_name.set(String::new());
                set_birth_date.set(String::new());
            }
            set_is_saving.set(false);
        });
    };

    let title = match role {
        Role::Manager => "Add manager",
        _ => "Add user",
    };
    let birth_label = match role {
        Role::Manager => "Birth date *",
        _ => "Birth date",
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h3>{title}</h3>

            <div class="form-group">
                <label for=format!("{prefix}-login")>"Login *"</label>
                <input
                    type="text"
                    id=format!("{prefix}-login")
                    prop:value=move || login.get()
                    on:input=move |ev| set_login.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
            </div>

            <div class="form-group">
                <label for=format!("{prefix}-password")>"Password *"</label>
                <input
                    type="password"
                    id=format!("{prefix}-password")
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
            </div>

            <div class="form-group">
                <label for=format!("{prefix}-full-name")>"Full name"</label>
                <input
                    type="text"
                    id=format!("{prefix}-full-name")
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
            </div>

            <div class="form-group">
                <label for=format!("{prefix}-birth-date")>{birth_label}</label>
                <input
                    type="date"
                    id=format!("{prefix}-birth-date")
                    prop:value=move || birth_date.get()
                    on:input=move |ev| set_birth_date.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
            </div>

            <div class="form-group">
                <label for=format!("{prefix}-gender")>"Gender"</label>
                <select
                    id=format!("{prefix}-gender")
                    prop:value=move || gender.get()
                    on:change=move |ev| set_gender.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                >
                    <option value=Gender::Male.as_str()>"Male"</option>
                    <option value=Gender::Female.as_str()>"Female"</option>
                </select>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { title }}
                </button>
            </div>
        </form>
    }
}
