use crate::shared::crud::{AfterChange, EntityConfig};

pub static ITEMS: EntityConfig = EntityConfig {
    entity: "booking item",
    collection_path: "/api/booking-items",
    item_path: "/api/booking-items",
    confirm_delete: "Are you sure you want to delete this item? All its slots will be removed.",
    created: "Item created",
    deleted: "Item deleted",
    create_failed: "Failed to create item",
    delete_failed: "Failed to delete item",
    duplicate_message: None,
    after_change: AfterChange::Reload,
};
