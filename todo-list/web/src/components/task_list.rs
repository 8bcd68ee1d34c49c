use crate::components::TaskItem;
use dioxus::prelude::*;
use todo_list_core::{Task, TaskId};

/// Renders every task in order, or a hint when there are none
#[component]
pub fn TaskList(
    tasks: Vec<Task>,
    on_toggle_complete: EventHandler<(TaskId, bool)>,
    on_delete_task: EventHandler<TaskId>,
) -> Element {
    if tasks.is_empty() {
        return rsx! {
            p { class: "message", "No tasks yet. Add one above!" }
        };
    }

    rsx! {
        ul { class: "task-list",
            {tasks.iter().map(|task| rsx! {
                TaskItem {
                    key: "{task.id}",
                    task: task.clone(),
                    on_toggle_complete,
                    on_delete_task,
                }
            })}
        }
    }
}
