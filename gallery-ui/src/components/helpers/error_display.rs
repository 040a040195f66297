//! Error display components

use dioxus::prelude::*;

/// Inline error banner, shown above content that is still usable
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
            role: "alert",
            strong { "Error:" }
            " {message}"
        }
    }
}

/// Class for a full-page error's way out, usually a router link
pub const ERROR_ACTION_CLASS: &str = "inline-block bg-blue-500 text-white px-6 py-3 rounded-lg hover:bg-blue-600 transition-colors";

/// Full-page error state with a way back
///
/// `action` is rendered under the message. Pass a link so the target can be
/// opened like any other page.
#[component]
pub fn ErrorDisplay(message: String, action: Element) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center px-4",
            div { class: "text-center",
                div { class: "text-6xl mb-4", "❌" }
                h2 { class: "text-2xl font-bold text-gray-800 mb-2", "Error" }
                p { class: "text-gray-600 mb-6", "{message}" }
                {action}
            }
        }
    }
}
