//! Task Item Component
//!
//! One task card with inline rename and delete. Selection is optional so the
//! same card serves the wizard and the task list.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;

#[component]
pub fn TaskItem(
    #[prop(into)] name: String,
    #[prop(optional)] is_new: bool,
    /// Present only where the card can be selected
    #[prop(into, optional)] selected: Option<Signal<bool>>,
    #[prop(optional)] on_toggle: Option<Callback<()>>,
    #[prop(into)] busy: Signal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(name.clone());
    let is_selected = move || selected.map(|s| s.get()).unwrap_or(false);

    let save = move || {
        let trimmed = draft.get().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        on_edit.run(trimmed);
        set_editing.set(false);
    };

    let label = name.clone();

    view! {
        <div class=move || if is_selected() { "task-item selected" } else { "task-item" }>
            <label class="task-main">
                {on_toggle.map(|toggle| view! {
                    <input
                        type="checkbox"
                        prop:checked=is_selected
                        on:change=move |_| toggle.run(())
                    />
                })}
                <span class="task-text">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! { <span class="task-name">{label.clone()}</span> }
                    >
                        <input
                            type="text"
                            class="task-name-input"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev| if ev.key() == "Enter" { save() }
                        />
                    </Show>
                    {is_new.then(|| view! { <span class="badge-new">"new"</span> })}
                </span>
            </label>

            <div class="task-actions">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <button
                            class="icon-btn"
                            title="名前を変更"
                            disabled=move || busy.get()
                            on:click=move |_| set_editing.set(true)
                        >
                            "✎"
                        </button>
                        <DeleteConfirmButton disabled=busy on_confirm=on_delete />
                    }
                >
                    <button class="icon-btn" on:click=move |_| save()>"✓"</button>
                    <button
                        class="icon-btn"
                        on:click={
                            let name = name.clone();
                            move |_| {
                                set_draft.set(name.clone());
                                set_editing.set(false);
                            }
                        }
                    >
                        "✗"
                    </button>
                </Show>
            </div>
        </div>
    }
}
