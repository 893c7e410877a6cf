//! Step Indicator Component

use leptos::prelude::*;
use tasche_core::{StepStatus, WizardStep};

/// Row of step pills; finished steps get a check mark
#[component]
pub fn StepIndicator(current: Memo<WizardStep>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {WizardStep::ALL.iter().map(|step| {
                let step = *step;
                let status = move || step.status(current.get());
                view! {
                    <div class=move || match status() {
                        StepStatus::Active => "step-pill active",
                        StepStatus::Completed => "step-pill completed",
                        StepStatus::Upcoming => "step-pill",
                    }>
                        <Show when=move || status() == StepStatus::Completed>
                            <span class="step-check">"✓"</span>
                        </Show>
                        <span>{step.label()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
