use todo_list_core::{Task, TodoState};

pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one with `todo-cli add <description>`.";
pub const LOADING_MESSAGE: &str = "Loading tasks...";

/// Formats a single task as `[x] 5  Buy milk`.
pub fn render_task(task: &Task) -> String {
    let mark = if task.is_completed { 'x' } else { ' ' };
    format!("[{}] {}  {}", mark, task.id, task.description)
}

/// Renders the task list the way the terminal shows it, one task per line.
///
/// Nothing but the loading message is shown while the initial fetch is outstanding.
pub fn render(state: &TodoState) -> String {
    let lines: Vec<String> = match state.visible_tasks() {
        None => vec![LOADING_MESSAGE.to_string()],
        Some([]) => vec![EMPTY_MESSAGE.to_string()],
        Some(tasks) => tasks.iter().map(render_task).collect(),
    };
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
