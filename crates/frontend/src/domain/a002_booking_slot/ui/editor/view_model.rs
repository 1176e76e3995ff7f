use contracts::domain::a001_booking_item::BookingItem;
use contracts::domain::a002_booking_slot::{
    BookingSlot, ReplaceSlotsDto, SlotDraft, SlotTransition,
};
use contracts::shared::settings::SystemSettings;
use leptos::prelude::*;

use crate::domain::a002_booking_slot::api;
use crate::shared::api_utils::Gateway;
use crate::shared::date_utils::today_iso;
use crate::shared::notifications::NotificationKind;
use crate::shared::page_effects::{BrowserEffects, PageEffects};
use crate::shared::request_seq::LoadTracker;

/// State of the slot editor.
///
/// The selected item lives here and nowhere else; commands still take the
/// item id as a parameter. Loads are ticketed, so only the newest response
/// fills the list or clears the spinner.
#[derive(Clone)]
pub struct SlotEditorViewModel {
    gateway: Gateway,
    effects: BrowserEffects,
    pub items: StoredValue<Vec<BookingItem>>,
    pub settings: StoredValue<SystemSettings>,
    pub selected_item: RwSignal<Option<String>>,
    pub slots: RwSignal<Vec<BookingSlot>>,
    pub skipped: RwSignal<usize>,
    pub is_loading: RwSignal<bool>,
    load: LoadTracker,
    pub draft_date: RwSignal<String>,
    pub draft_start: RwSignal<String>,
    pub draft_end: RwSignal<String>,
    /// Generated but not yet saved drafts for `draft_date`
    pub pending: RwSignal<Vec<SlotDraft>>,
}

impl SlotEditorViewModel {
    pub fn new(
        gateway: Gateway,
        effects: BrowserEffects,
        items: Vec<BookingItem>,
        settings: SystemSettings,
    ) -> Self {
        let load = LoadTracker::new();
        Self {
            gateway,
            effects,
            items: StoredValue::new(items),
            settings: StoredValue::new(settings),
            selected_item: RwSignal::new(None),
            slots: RwSignal::new(Vec::new()),
            skipped: RwSignal::new(0),
            is_loading: load.is_loading,
            load,
            draft_date: RwSignal::new(today_iso()),
            draft_start: RwSignal::new(String::new()),
            draft_end: RwSignal::new(String::new()),
            pending: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected_item.with(|s| s.as_deref() == Some(item_id))
    }

    pub fn select_item(&self, item_id: String) {
        self.selected_item.set(Some(item_id.clone()));
        self.pending.set(Vec::new());
        self.load_command(item_id);
    }

    /// Reload the item's slots; ignored once another item is selected.
    pub fn load_command(&self, item_id: String) {
        if !self.is_selected(&item_id) {
            return;
        }
        let this = self.clone();
        let ticket = self.load.begin();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_item_slots(&this.gateway, &item_id).await;
            if !this.load.finish(ticket) {
                return;
            }
            match result {
                Ok(list) => {
                    this.slots.set(list.slots);
                    this.skipped.set(list.skipped);
                }
                Err(e) => {
                    this.slots.set(Vec::new());
                    this.skipped.set(0);
                    this.effects
                        .notify(&format!("Failed to load slots: {}", e), NotificationKind::Error);
                }
            }
        });
    }

    fn draft(&self, item_id: &str) -> SlotDraft {
        SlotDraft {
            item_id: item_id.to_string(),
            date: self.draft_date.get_untracked().trim().to_string(),
            start_time: self.draft_start.get_untracked().trim().to_string(),
            end_time: self.draft_end.get_untracked().trim().to_string(),
            is_available: true,
        }
    }

    pub fn add_command(&self, item_id: String) {
        let this = self.clone();
        let draft = self.draft(&item_id);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::create_slot(this.gateway.clone(), this.effects, &draft).await;
            if outcome.is_completed() {
                this.draft_start.set(String::new());
                this.draft_end.set(String::new());
                this.load_command(item_id);
            }
        });
    }

    pub fn delete_command(&self, item_id: String, slot_id: String) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if api::delete_slot(this.gateway.clone(), this.effects, &slot_id).await.is_completed() {
                this.load_command(item_id);
            }
        });
    }

    pub fn block_command(&self, item_id: String, slot_id: String) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome =
                api::apply_transition(&this.gateway, &this.effects, &slot_id, SlotTransition::Block).await;
            if outcome.is_completed() {
                this.load_command(item_id);
            }
        });
    }

    /// Generate a full day of drafts from the schedule settings.
    pub fn fill_day_command(&self, item_id: &str) {
        let date = self.draft_date.get_untracked();
        match self.settings.with_value(|s| s.day_template(item_id, date.trim())) {
            Ok(drafts) if drafts.is_empty() => {
                self.effects
                    .notify("Settings leave no room for a slot", NotificationKind::Info);
            }
            Ok(drafts) => {
                self.effects.notify(
                    &format!("{} slots prepared for {}", drafts.len(), date),
                    NotificationKind::Info,
                );
                self.pending.set(drafts);
            }
            Err(e) => self.effects.notify(&e.to_string(), NotificationKind::Error),
        }
    }

    /// Replace the item's schedule: slots on other dates are kept, the
    /// pending day replaces whatever was on that date.
    pub fn save_schedule_command(&self, item_id: String) {
        let pending = self.pending.get_untracked();
        if pending.is_empty() {
            return;
        }
        let skipped = self.skipped.get_untracked();
        let built = self
            .slots
            .with_untracked(|current| ReplaceSlotsDto::for_day(current, skipped, pending));
        let schedule = match built {
            Ok(schedule) => schedule,
            Err(e) => {
                log::warn!("Schedule of {} not replaced: {}", item_id, e);
                self.effects.notify(&e.to_string(), NotificationKind::Error);
                return;
            }
        };

        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome =
                api::replace_item_slots(&this.gateway, &this.effects, &item_id, &schedule).await;
            if outcome.is_completed() {
                this.pending.set(Vec::new());
                this.load_command(item_id);
            }
        });
    }

    pub fn discard_pending(&self) {
        self.pending.set(Vec::new());
    }
}
