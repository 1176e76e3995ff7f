mod view;
mod view_model;

pub use view::SlotBoard;
pub use view_model::SlotBoardViewModel;
