//! Goal Wizard Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The wizard state
//! machine itself lives in `tasche_core::wizard`; this store owns it for the
//! lifetime of the goal setting page.

use leptos::prelude::*;
use reactive_stores::Store;
use tasche_core::WizardState;

/// Initial load progress of the wizard page
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Nothing to select; the wizard is replaced by this message
    Failed(String),
}

#[derive(Clone, Debug, Default, Store)]
pub struct GoalPageState {
    pub load: LoadState,
    pub wizard: WizardState,
    /// Task id whose rename/delete request is in flight
    pub pending_task_action: Option<String>,
}

/// Type alias for the store
pub type GoalStore = Store<GoalPageState>;

/// Get the goal page store from context
pub fn use_goal_store() -> GoalStore {
    expect_context::<GoalStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the wizard with a freshly seeded one and mark the page ready
pub fn store_seed_wizard(store: &GoalStore, wizard: WizardState) {
    *store.wizard().write() = wizard;
    store.load().set(LoadState::Ready);
}

pub fn store_load_failed(store: &GoalStore, message: String) {
    store.load().set(LoadState::Failed(message));
}

/// Run one mutation of the wizard state machine
pub fn store_update_wizard<R>(store: &GoalStore, f: impl FnOnce(&mut WizardState) -> R) -> R {
    f(&mut store.wizard().write())
}

/// Move forward if the current step allows it
pub fn store_advance(store: &GoalStore) {
    if let Err(e) = store_update_wizard(store, |wizard| wizard.advance()) {
        log::debug!("[WIZARD] cannot advance: {}", e);
    }
}

pub fn store_back(store: &GoalStore) {
    store_update_wizard(store, |wizard| wizard.back());
}

/// Release the row-action lock once a rename/delete request settles
pub fn store_finish_task_action(store: &GoalStore) {
    store.pending_task_action().set(None);
}
