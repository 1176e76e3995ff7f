use contracts::shared::settings::SystemSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::page_effects::use_effects;
use crate::shared::use_gateway;
use crate::system::settings::api;

#[component]
pub fn SettingsForm(settings: SystemSettings) -> impl IntoView {
    let gateway = use_gateway();
    let effects = use_effects();

    let (duration, set_duration) = signal(settings.slot_duration_minutes.to_string());
    let (day_start, set_day_start) = signal(settings.day_start_time);
    let (day_end, set_day_end) = signal(settings.day_end_time);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_saving.get_untracked() {
            return;
        }
        let gateway = gateway.clone();
        let (d, s, e) = (
            duration.get_untracked(),
            day_start.get_untracked(),
            day_end.get_untracked(),
        );

        set_is_saving.set(true);
        spawn_local(async move {
            api::save_settings(&gateway, &effects, &d, &s, &e).await;
            set_is_saving.set(false);
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h3>"Schedule settings"</h3>

            <div class="form-group">
                <label for="slot-duration">"Slot duration, minutes"</label>
                <input
                    type="number"
                    id="slot-duration"
                    min="1"
                    max="1440"
                    prop:value=move || duration.get()
                    on:input=move |ev| set_duration.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="day-start">"Day starts"</label>
                <input
                    type="time"
                    id="day-start"
                    prop:value=move || day_start.get()
                    on:input=move |ev| set_day_start.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="day-end">"Day ends"</label>
                <input
                    type="time"
                    id="day-end"
                    prop:value=move || day_end.get()
                    on:input=move |ev| set_day_end.set(event_target_value(&ev))
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Save settings" }}
                </button>
            </div>
        </form>
    }
}
