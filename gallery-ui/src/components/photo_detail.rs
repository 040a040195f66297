//! Photo detail view - pure rendering with callbacks
//!
//! Title and description are synthesized from the photo's id and author;
//! the catalog has neither.

use crate::components::helpers::{BackButton, ErrorDisplay};
use crate::components::icons::{
    DownloadIcon, ExternalLinkIcon, FileTextIcon, GridIcon, InfoIcon, UserIcon,
};
use crate::display_types::PhotoDetail;
use dioxus::prelude::*;
use gallery_common::{photo_description, photo_title};

/// Full-screen placeholder while the photo metadata is in flight
#[component]
pub fn PhotoDetailLoadingView() -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center",
            div { class: "text-center",
                div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-500 mx-auto mb-4" }
                p { class: "text-gray-600", "Loading photo details..." }
            }
        }
    }
}

/// Replaces the whole detail view when the lookup failed
///
/// `back` is the link to the gallery; the router lives in the app crate.
#[component]
pub fn PhotoDetailErrorView(message: String, back: Element) -> Element {
    rsx! {
        ErrorDisplay { message, action: back }
    }
}

#[component]
pub fn PhotoDetailView(photo: PhotoDetail, on_back: EventHandler<()>) -> Element {
    let title = photo_title(&photo.id, &photo.author);
    let description = photo_description(&photo.author);
    let dimensions = photo.dimensions();

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            nav { class: "bg-white shadow-sm sticky top-0 z-10",
                div { class: "container mx-auto px-4 py-4",
                    BackButton { on_click: on_back }
                }
            }

            div { class: "container mx-auto px-4 py-8",
                div { class: "max-w-6xl mx-auto",
                    h1 {
                        class: "text-3xl md:text-4xl font-bold text-gray-800 mb-2",
                        "data-testid": "photo-title",
                        "{title}"
                    }
                    div { class: "flex items-center text-gray-600 mb-6",
                        UserIcon { class: "w-5 h-5 mr-2" }
                        span { class: "font-semibold", "Photographed by {photo.author}" }
                    }

                    div { class: "bg-white rounded-lg shadow-lg overflow-hidden mb-8",
                        img {
                            src: "{photo.full_size_url}",
                            alt: "Photo by {photo.author}",
                            class: "w-full h-auto max-h-[70vh] object-contain",
                        }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-8",
                        div { class: "bg-white rounded-lg shadow-md p-6",
                            h2 { class: "text-xl font-bold text-gray-800 mb-3 flex items-center",
                                FileTextIcon { class: "w-6 h-6 mr-2" }
                                "Description"
                            }
                            p { class: "text-gray-600 leading-relaxed", "{description}" }
                        }

                        div { class: "bg-white rounded-lg shadow-md p-6",
                            h2 { class: "text-xl font-bold text-gray-800 mb-3 flex items-center",
                                InfoIcon { class: "w-6 h-6 mr-2" }
                                "Technical Details"
                            }
                            div { class: "space-y-3",
                                DetailRow { label: "Photo ID:", value: photo.id.clone() }
                                DetailRow { label: "Dimensions:", value: dimensions }
                                DetailRow { label: "Author:", value: photo.author.clone() }
                                div { class: "flex justify-between items-center",
                                    span { class: "text-gray-600 font-medium", "URL:" }
                                    a {
                                        href: "{photo.source_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "text-blue-500 hover:text-blue-700 font-semibold flex items-center",
                                        "View Source"
                                        ExternalLinkIcon { class: "w-4 h-4 ml-1" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "flex flex-wrap gap-4 justify-center",
                        a {
                            href: "{photo.full_size_url}",
                            "download": "",
                            class: "bg-blue-500 text-white px-6 py-3 rounded-lg hover:bg-blue-600 transition-colors flex items-center",
                            DownloadIcon { class: "w-5 h-5 mr-2" }
                            "Download Full Size"
                        }
                        button {
                            class: "bg-gray-200 text-gray-700 px-6 py-3 rounded-lg hover:bg-gray-300 transition-colors flex items-center",
                            onclick: move |_| on_back.call(()),
                            GridIcon { class: "w-5 h-5 mr-2" }
                            "Browse More Photos"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center border-b pb-2",
            span { class: "text-gray-600 font-medium", "{label}" }
            span { class: "text-gray-800 font-semibold", "{value}" }
        }
    }
}
