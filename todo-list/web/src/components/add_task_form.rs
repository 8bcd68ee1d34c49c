use dioxus::prelude::*;

/// Text input that forwards a non-blank description upward.
///
/// The input is cleared as soon as the description has been handed off; whether
/// the add later succeeds is not this form's concern.
#[component]
pub fn AddTaskForm(on_add_task: EventHandler<String>) -> Element {
    let mut description = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = description();
        if text.trim().is_empty() {
            return;
        }

        on_add_task.call(text);
        description.set(String::new());
    };

    rsx! {
        form { class: "add-task-form", onsubmit: handle_submit,
            input {
                r#type: "text",
                placeholder: "Add a new task...",
                value: "{description}",
                oninput: move |evt: FormEvent| description.set(evt.value()),
                "aria-label": "New task description",
            }
            button { r#type: "submit", "Add Task" }
        }
    }
}
