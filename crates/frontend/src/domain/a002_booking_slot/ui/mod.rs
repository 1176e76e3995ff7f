pub mod board;
pub mod editor;
