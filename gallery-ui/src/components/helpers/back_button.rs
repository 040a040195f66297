//! Back button component

use crate::components::icons::ChevronLeftIcon;
use dioxus::prelude::*;

/// Back button with customizable text and callback
#[component]
pub fn BackButton(
    /// Text to display (default: "Back to Gallery")
    #[props(default = "Back to Gallery".to_string())]
    text: String,
    /// Callback when button is clicked
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "flex items-center text-gray-600 hover:text-gray-900 transition-colors",
            "data-testid": "back-button",
            onclick: move |_| on_click.call(()),
            ChevronLeftIcon { class: "w-6 h-6 mr-2" }
            "{text}"
        }
    }
}
