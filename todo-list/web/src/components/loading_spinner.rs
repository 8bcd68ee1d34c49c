use dioxus::prelude::*;

/// A loading spinner component with customizable message
#[component]
pub fn LoadingSpinner(message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            p { class: "message", "{message}" }
        }
    }
}
