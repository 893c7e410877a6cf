//! Page shell components

mod app_layout;
mod sidebar;

pub use app_layout::AppLayout;
pub use sidebar::Sidebar;
