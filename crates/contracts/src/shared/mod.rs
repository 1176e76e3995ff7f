pub mod page_data;
pub mod settings;
pub mod validation;
