//! Pages, one per route

mod dashboard_page;
mod goal_setting_page;
mod login_page;
mod settings_page;
mod tasks_page;

pub use dashboard_page::DashboardPage;
pub use goal_setting_page::GoalSettingPage;
pub use login_page::LoginPage;
pub use settings_page::SettingsPage;
pub use tasks_page::TasksPage;
