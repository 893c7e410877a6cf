//! UI Components
//!
//! Reusable Leptos components.

pub mod dashboard;
pub mod goals;
pub mod layout;
mod delete_confirm_button;
mod task_item;

pub use delete_confirm_button::DeleteConfirmButton;
pub use task_item::TaskItem;
