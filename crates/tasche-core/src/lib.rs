//! Tasche Core
//!
//! Platform-independent half of the Tasche client: API payloads, the goal
//! wizard state machine, dashboard aggregation and response decoding.

pub mod config;
pub mod dashboard;
pub mod day;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod session;
pub mod targets;
pub mod unit;
pub mod wizard;

pub use config::ApiConfig;
pub use day::DayOfWeek;
pub use endpoint::{Endpoint, Method};
pub use envelope::decode_envelope;
pub use error::{ApiError, WizardError};
pub use models::*;
pub use session::{Provider, Session, User};
pub use targets::DailyTargets;
pub use unit::UnitDuration;
pub use wizard::{GoalTask, StepStatus, TaskRef, TempId, WizardState, WizardStep};
