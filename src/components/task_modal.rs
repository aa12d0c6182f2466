use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{Priority, Task, TaskStatus};

#[component]
pub fn TaskModal(
    #[prop(into)] on_create: Box<dyn Fn(Task) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::ToDo);
    let (priority, set_priority) = signal(Priority::Medium);
    let (due_date, set_due_date) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        // Empty or malformed due dates simply mean "no due date"
        let parsed_due = NaiveDate::parse_from_str(due_date.get_untracked().trim(), "%Y-%m-%d").ok();

        let task = Task::new(
            title.get_untracked(),
            description.get_untracked(),
            status.get_untracked(),
            priority.get_untracked(),
            parsed_due,
        );

        // Hand the task to the page; the board plan picks it up reactively
        on_create(task);

        // Reset form fields to empty state after successful submission
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TaskStatus::ToDo);
        set_priority.set(Priority::Medium);
        set_due_date.set(String::new());

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Handler for closing the modal without submitting (cancel button or close X)
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <select
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_status.set(TaskStatus::from_label(&value).unwrap_or(TaskStatus::ToDo));
                            }
                            prop:value=move || status.get().as_str()
                        >
                            {TaskStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"PRIORITY"</label>
                        <select
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_priority.set(Priority::from_label(&value).unwrap_or(Priority::Medium));
                            }
                            prop:value=move || priority.get().as_str()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"DUE DATE"</label>
                        <input
                            type="date"
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            prop:value=move || due_date.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
