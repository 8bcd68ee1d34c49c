use dioxus::prelude::*;

/// Shows the single current error
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        p { class: "message error", "{message}" }
    }
}
