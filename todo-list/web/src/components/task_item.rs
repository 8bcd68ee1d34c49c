use dioxus::prelude::*;
use todo_list_core::{Task, TaskId};

/// One row: completion checkbox, description and a delete button
#[component]
pub fn TaskItem(
    task: Task,
    on_toggle_complete: EventHandler<(TaskId, bool)>,
    on_delete_task: EventHandler<TaskId>,
) -> Element {
    let id = task.id;
    let is_completed = task.is_completed;
    let description_id = format!("task-description-{}", id);
    let description_class = if is_completed { "completed" } else { "" };

    rsx! {
        li { class: "task-item",
            input {
                r#type: "checkbox",
                checked: is_completed,
                onchange: move |_| on_toggle_complete.call((id, !is_completed)),
                "aria-labelledby": "{description_id}",
            }
            span { id: "{description_id}", class: "{description_class}", "{task.description}" }
            button {
                onclick: move |_| on_delete_task.call(id),
                "aria-label": "Delete task: {task.description}",
                "Delete"
            }
        }
    }
}
