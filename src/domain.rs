pub mod entities;
pub mod list_edit;
pub mod search;
pub mod use_cases;
