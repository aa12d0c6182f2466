use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let priority_label = task.priority.as_str();
    let priority_class = format!("task-priority priority-{}", priority_label.to_lowercase());
    let due_label = task.due_date.map(|d| format!("Due {}", d.format("%Y-%m-%d")));
    let assignee_label = task.assignee.clone();

    view! {
        <div class="task-card">
            <div class="task-content">
                <h4>{task.title.clone()}</h4>
                <p>{task.description.clone()}</p>
            </div>
            <div class="task-meta">
                <span class=priority_class>{priority_label}</span>
                {due_label.map(|label| view! { <span class="task-due-date">{label}</span> })}
                {assignee_label.map(|name| view! { <span class="task-assignee">{name}</span> })}
            </div>
        </div>
    }
}
