use dioxus::prelude::*;
use todo_list_core::{execute, ClientConfig, Command, HttpTaskStore, TaskId, TodoState};

mod components;
mod state;

use components::{AddTaskForm, ErrorMessage, LoadingSpinner, TaskList};
use state::SignalState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Address of the task API, fixed when the bundle is built.
fn api_base_url() -> &'static str {
    option_env!("TODO_API_BASE_URL").unwrap_or(todo_list_core::DEFAULT_API_BASE_URL)
}

fn main() {
    dioxus::launch(App);
}

/// Runs one command against the store, writing results into `state`.
async fn run(state: Signal<TodoState>, store: HttpTaskStore, command: Command) {
    let mut holder = SignalState::new(state);
    if let Err(e) = execute(&mut holder, &store, command).await {
        tracing::debug!("Command finished with error: {}", e);
    }
}

#[component]
fn App() -> Element {
    let state = use_signal(TodoState::default);
    let store = use_signal(|| HttpTaskStore::new(&ClientConfig::new(api_base_url())));

    // Fetch the list exactly once on mount; failures are not retried
    use_hook(move || {
        tracing::info!("Task API base URL: {}", api_base_url());
        spawn(run(state, store.peek().clone(), Command::Load));
    });

    let dispatch = move |command: Command| {
        spawn(run(state, store.peek().clone(), command));
    };

    let TodoState {
        tasks,
        loading,
        error,
    } = state();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "container",
            h1 { "My To-Do List" }
            AddTaskForm { on_add_task: move |description: String| dispatch(Command::Add { description }) }

            if loading {
                LoadingSpinner { message: "Loading tasks...".to_string() }
            }

            if let Some(message) = error {
                ErrorMessage { message }
            }

            if !loading {
                TaskList {
                    tasks,
                    on_toggle_complete: move |(id, is_completed): (TaskId, bool)| {
                        dispatch(Command::SetCompleted { id, is_completed })
                    },
                    on_delete_task: move |id: TaskId| dispatch(Command::Delete { id }),
                }
            }
        }
    }
}
