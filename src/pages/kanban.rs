use leptos::html::Dialog;
use leptos::prelude::*;
use std::rc::Rc;

use crate::components::kanban::{KanbanColumn, KanbanHeader};
use crate::components::TaskModal;
use crate::core::services::{
    refresh, seed_tasks, PriorityFilter, Selection, SortKey, StatusFilter,
};
use crate::models::{Task, TaskStatus};

#[component]
pub fn Kanban() -> impl IntoView {
    // The three dropdown selections; the plan reads them fresh on every change
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (priority_filter, set_priority_filter) = signal(PriorityFilter::All);
    let (sort_key, set_sort_key) = signal(SortKey::Unsorted);

    // The full task set. Filtering never removes tasks from here, so cards
    // hidden by one selection come back when the selection widens again.
    let (tasks, set_tasks) = signal(seed_tasks());

    // One refresh cycle per selection or task change: filter, stable sort,
    // redistribute. Re-rendering the new plan is what clears and refills the
    // column containers.
    let plan = Memo::new(move |_| {
        let selection = Selection {
            status: status_filter.get(),
            priority: priority_filter.get(),
            sort: sort_key.get(),
        };
        let columns: Vec<String> = TaskStatus::all().iter().map(|s| s.column_key()).collect();
        tasks.with(|tasks| refresh(tasks, &selection, &columns))
    });

    // Tasks with no matching column silently vanish from the board; at least
    // leave a trace in the console.
    Effect::new(move |_| {
        plan.with(|plan| {
            if !plan.skipped.is_empty() {
                web_sys::console::warn_1(
                    &format!(
                        "{} task(s) have no matching column and are not displayed: {}",
                        plan.skipped.len(),
                        plan.skipped.join(", ")
                    )
                    .into(),
                );
            }
        });
    });

    // Reference to the create-task dialog so we can open it programmatically
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let open_modal = Rc::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    }) as Rc<dyn Fn() + 'static>;

    // Callback for TaskModal: pushing into the signal reflows the board plan
    let create_task = Box::new(move |task: Task| {
        set_tasks.update(|tasks| {
            tasks.push(task);
        });
    }) as Box<dyn Fn(Task) + 'static>;

    view! {
        <div class="kanban-page">
            <KanbanHeader
                status_filter=status_filter
                set_status_filter=set_status_filter
                priority_filter=priority_filter
                set_priority_filter=set_priority_filter
                sort_key=sort_key
                set_sort_key=set_sort_key
                on_open_modal=open_modal
            />

            <div class="kanban-board">
                {move || {
                    TaskStatus::all()
                        .into_iter()
                        .map(|status| {
                            let cards = plan.with(|p| p.column(&status.column_key()).to_vec());
                            view! { <KanbanColumn status=status tasks=cards /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <TaskModal on_create=create_task dialog_ref=dialog_ref />
        </div>
    }
}
