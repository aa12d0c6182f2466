use leptos::prelude::*;
use std::rc::Rc;

use crate::core::services::{PriorityFilter, SortKey, StatusFilter};
use crate::models::{Priority, TaskStatus};

#[component]
pub fn KanbanHeader(
    #[prop(into)] status_filter: ReadSignal<StatusFilter>,
    #[prop(into)] set_status_filter: WriteSignal<StatusFilter>,
    #[prop(into)] priority_filter: ReadSignal<PriorityFilter>,
    #[prop(into)] set_priority_filter: WriteSignal<PriorityFilter>,
    #[prop(into)] sort_key: ReadSignal<SortKey>,
    #[prop(into)] set_sort_key: WriteSignal<SortKey>,
    on_open_modal: Rc<dyn Fn() + 'static>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <h1>"Project Board"</h1>
            <div class="kanban-filters">
                <div class="filter-group">
                    <label for="status-filter">"Status"</label>
                    <select
                        id="status-filter"
                        on:change=move |ev| {
                            set_status_filter.set(StatusFilter::from_value(&event_target_value(&ev)));
                        }
                        prop:value=move || status_filter.get().value()
                    >
                        <option value="All">"All"</option>
                        {TaskStatus::all()
                            .into_iter()
                            .map(|status| {
                                view! { <option value=status.as_str()>{status.as_str()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="filter-group">
                    <label for="priority-filter">"Priority"</label>
                    <select
                        id="priority-filter"
                        on:change=move |ev| {
                            set_priority_filter.set(PriorityFilter::from_value(&event_target_value(&ev)));
                        }
                        prop:value=move || priority_filter.get().value()
                    >
                        <option value="All">"All"</option>
                        {Priority::all()
                            .into_iter()
                            .map(|priority| {
                                view! { <option value=priority.as_str()>{priority.as_str()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="filter-group">
                    <label for="sort-by">"Sort by"</label>
                    <select
                        id="sort-by"
                        on:change=move |ev| {
                            set_sort_key.set(SortKey::from_value(&event_target_value(&ev)));
                        }
                        prop:value=move || sort_key.get().value()
                    >
                        {SortKey::all()
                            .into_iter()
                            .map(|key| {
                                view! { <option value=key.value()>{key.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </div>
            <div class="kanban-actions">
                <button class="btn-primary" on:click={
                    let cb = on_open_modal.clone();
                    move |_| (cb.as_ref())()
                }>"+ Add Task"</button>
            </div>
        </header>
    }
}
