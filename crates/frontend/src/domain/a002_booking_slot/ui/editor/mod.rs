//! Manager's slot editor
//!
//! - view_model.rs: selection, draft inputs and commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::SlotEditor;
pub use view_model::SlotEditorViewModel;
