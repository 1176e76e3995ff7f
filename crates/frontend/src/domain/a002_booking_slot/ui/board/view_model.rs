use contracts::domain::a002_booking_slot::{BookingSlot, SlotQuery, SlotTransition};
use leptos::prelude::*;

use crate::domain::a002_booking_slot::api;
use crate::shared::api_utils::Gateway;
use crate::shared::notifications::NotificationKind;
use crate::shared::page_effects::{BrowserEffects, PageEffects};
use crate::shared::request_seq::LoadTracker;

/// Bookable slots of the item the user picked, on one date or on all of them.
#[derive(Clone)]
pub struct SlotBoardViewModel {
    gateway: Gateway,
    effects: BrowserEffects,
    pub selected_item: RwSignal<Option<String>>,
    /// `None` lists every date
    pub date: StoredValue<Option<String>>,
    pub slots: RwSignal<Vec<BookingSlot>>,
    pub is_loading: RwSignal<bool>,
    load: LoadTracker,
}

impl SlotBoardViewModel {
    pub fn new(gateway: Gateway, effects: BrowserEffects, date: Option<String>) -> Self {
        let load = LoadTracker::new();
        Self {
            gateway,
            effects,
            selected_item: RwSignal::new(None),
            date: StoredValue::new(date),
            slots: RwSignal::new(Vec::new()),
            is_loading: load.is_loading,
            load,
        }
    }

    pub fn select_item(&self, item_id: String) {
        self.selected_item.set(Some(item_id.clone()));
        self.load_command(item_id);
    }

    /// Reload the item's slots; ignored once another item is selected.
    pub fn load_command(&self, item_id: String) {
        if self.selected_item.get_untracked().as_deref() != Some(item_id.as_str()) {
            return;
        }
        let query = SlotQuery {
            date: self.date.get_value(),
            item_id,
        };
        let this = self.clone();
        let ticket = self.load.begin();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_available_slots(&this.gateway, &query).await;
            if !this.load.finish(ticket) {
                return;
            }
            match result {
                Ok(list) => this.slots.set(list.slots),
                Err(e) => {
                    this.slots.set(Vec::new());
                    this.effects
                        .notify(&format!("Failed to load slots: {}", e), NotificationKind::Error);
                }
            }
        });
    }

    /// Book and then re-render the slots of the item the slot belongs to.
    pub fn book_command(&self, item_id: String, slot_id: String) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome =
                api::apply_transition(&this.gateway, &this.effects, &slot_id, SlotTransition::Book).await;
            if outcome.is_completed() {
                this.load_command(item_id);
            }
        });
    }
}
