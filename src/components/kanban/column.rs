use leptos::prelude::*;

use crate::components::kanban::TaskCard;
use crate::models::{Task, TaskStatus};

/// One status column. The cards arrive already filtered and ordered by the
/// board plan; the column only displays them.
#[component]
pub fn KanbanColumn(#[prop(into)] status: TaskStatus, tasks: Vec<Task>) -> impl IntoView {
    let count = tasks.len();
    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div class="column-content" id=format!("column-{}", status.column_key())>
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
