use leptos::prelude::*;

use crate::bindings::Bindings;
use crate::render::{ProgressPanel, ProgressRow};
use crate::view::View;

#[component]
pub fn ProgressPage() -> impl IntoView {
    let bindings = expect_context::<Bindings>();

    view! {
        <section
            id="progress-view"
            class="view"
            class:active=move || bindings.view.get() == View::Progress
        >
            <div id="progress-content">
                {move || match bindings.progress.get() {
                    ProgressPanel::Idle => ().into_any(),
                    ProgressPanel::Loading => {
                        view! { <p class="text-muted">"Loading progress data..."</p> }.into_any()
                    }
                    ProgressPanel::Empty => {
                        view! { <p class="text-muted">"No progress recorded yet"</p> }.into_any()
                    }
                    ProgressPanel::Rows(rows) => progress_table(rows).into_any(),
                }}
            </div>
        </section>
    }
}

fn progress_table(rows: Vec<ProgressRow>) -> impl IntoView {
    view! {
        <table class="progress-table">
            <thead>
                <tr>
                    <th>"Profile"</th>
                    <th>"Field"</th>
                    <th>"Activities"</th>
                    <th>"Milestones"</th>
                    <th>"Completion"</th>
                    <th>"Last Activity"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let rate = format!("{}%", row.completion_rate());
                        view! {
                            <tr>
                                <td>{row.name}</td>
                                <td>{row.career_field}</td>
                                <td>{row.activities}</td>
                                <td>{row.completed}</td>
                                <td>{rate}</td>
                                <td>{row.last_activity.unwrap_or_else(|| "-".to_string())}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
