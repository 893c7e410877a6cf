//! Weekly Matrix
//!
//! Task x weekday grid of completion rates with a totals row.

use leptos::prelude::*;
use tasche_core::dashboard::{column_totals, format_rate, CompletionBand, ProgressTier};
use tasche_core::{DayOfWeek, WeeklyMatrixItem};

#[component]
fn RateCell(rate: Option<u32>, is_today: bool) -> impl IntoView {
    let band = CompletionBand::classify(rate);
    let mut class = format!("matrix-cell {}", band.css_class());
    if is_today {
        class.push_str(" today");
    }

    view! {
        <td class=class.trim_end().to_string()>
            {rate.map(|rate| {
                let offset = ProgressTier::from_rate(rate).sprite_offset();
                view! {
                    <span
                        class="progress-icon"
                        style=format!("background-position: -{}px 0", offset)
                    ></span>
                }
            })}
            <span class="rate">{format_rate(rate)}</span>
        </td>
    }
}

#[component]
pub fn WeeklyMatrix(
    #[prop(into)] matrix: Signal<Vec<WeeklyMatrixItem>>,
    #[prop(into)] today: Signal<DayOfWeek>,
) -> impl IntoView {
    let totals = Memo::new(move |_| matrix.with(|matrix| column_totals(matrix)));

    view! {
        <section class="card weekly-matrix">
            <h3 class="card-title">"今週の達成率"</h3>
            <table class="matrix">
                <thead>
                    <tr>
                        <th class="task-col">"タスク"</th>
                        {DayOfWeek::ALL.iter().map(|day| {
                            let day = *day;
                            view! {
                                <th class=move || if today.get() == day { "today" } else { "" }>{day.label()}</th>
                            }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || matrix.get().into_iter().map(|item| {
                        let current = today.get();
                        view! {
                            <tr>
                                <th class="task-col">{item.task_name.clone()}</th>
                                {DayOfWeek::ALL.iter().map(|day| {
                                    let rate = item.daily_data.get(day).and_then(|cell| cell.completion_rate);
                                    view! { <RateCell rate=rate is_today={*day == current} /> }
                                }).collect_view()}
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <th class="task-col">"合計"</th>
                        {move || {
                            let current = today.get();
                            DayOfWeek::ALL.iter().map(|day| {
                                let rate = totals.get()[day.index()];
                                view! { <RateCell rate=rate is_today={*day == current} /> }
                            }).collect_view()
                        }}
                    </tr>
                </tfoot>
            </table>
        </section>
    }
}
