//! Common helper UI components

mod back_button;
mod error_display;
mod loading_spinner;

pub use back_button::BackButton;
pub use error_display::{ErrorBanner, ErrorDisplay, ERROR_ACTION_CLASS};
pub use loading_spinner::LoadingSpinner;
