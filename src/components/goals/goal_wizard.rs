//! Goal Wizard Component
//!
//! Loads tasks and current goals, then hosts the four wizard steps.

use futures::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tasche_core::error::GENERIC_FETCH_MESSAGE;
use tasche_core::reconcile::seed_wizard;
use tasche_core::WizardStep;

use crate::components::goals::{
    Step1UnitDuration, Step2TaskSelection, Step3WeeklyTargets, Step4Confirmation, StepIndicator,
};
use crate::context::{use_api, MountGuard};
use crate::store::{store_load_failed, store_seed_wizard, use_goal_store, GoalPageState, GoalPageStateStoreFields, LoadState};

#[component]
pub fn GoalWizard() -> impl IntoView {
    let store = Store::new(GoalPageState::default());
    provide_context(store);

    let api = use_api();
    // Shared by the steps: async results stay valid across step changes
    let guard = MountGuard::new();
    provide_context(guard.clone());

    spawn_local(async move {
        let (tasks, goals) = join(api.list_tasks(), api.current_goals()).await;
        if !guard.is_mounted() {
            return;
        }
        match seed_wizard(tasks, goals) {
            Ok(wizard) => {
                log::info!("[WIZARD] loaded {} tasks, {} preselected", wizard.tasks().len(), wizard.selected().len());
                store_seed_wizard(&store, wizard);
            }
            Err(e) => {
                log::error!("[WIZARD] initial load failed: {}", e);
                store_load_failed(&store, e.user_message(GENERIC_FETCH_MESSAGE));
            }
        }
    });

    view! {
        {move || match store.load().get() {
            LoadState::Loading => view! {
                <div class="wizard-loading">
                    <p class="muted">"読み込み中..."</p>
                </div>
            }.into_any(),
            LoadState::Failed(message) => view! {
                <div class="wizard-error">{message}</div>
            }.into_any(),
            LoadState::Ready => view! { <WizardSteps /> }.into_any(),
        }}
    }
}

#[component]
fn WizardSteps() -> impl IntoView {
    let store = use_goal_store();
    let step = Memo::new(move |_| store.wizard().with(|wizard| wizard.step()));

    view! {
        <div class="wizard">
            <StepIndicator current=step />
            <div class="wizard-card">
                {move || match step.get() {
                    WizardStep::UnitDuration => view! { <Step1UnitDuration /> }.into_any(),
                    WizardStep::TaskSelection => view! { <Step2TaskSelection /> }.into_any(),
                    WizardStep::WeeklyTargets => view! { <Step3WeeklyTargets /> }.into_any(),
                    WizardStep::Confirmation => view! { <Step4Confirmation /> }.into_any(),
                }}
            </div>
        </div>
    }
}
