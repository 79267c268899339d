pub mod check;
pub mod expand_stored;
pub mod list;
pub mod list_next;
mod rule;
pub mod types;
