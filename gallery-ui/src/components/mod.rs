//! Shared UI components

pub mod gallery;
pub mod helpers;
pub mod icons;
pub mod photo_card;
pub mod photo_detail;
pub mod photo_grid;

pub use gallery::GalleryView;
pub use helpers::{BackButton, ErrorBanner, ErrorDisplay, LoadingSpinner, ERROR_ACTION_CLASS};
pub use icons::{
    ChevronLeftIcon, DownloadIcon, ExternalLinkIcon, FileTextIcon, GridIcon, InfoIcon, UserIcon,
};
pub use photo_card::PhotoCard;
pub use photo_detail::{PhotoDetailErrorView, PhotoDetailLoadingView, PhotoDetailView};
pub use photo_grid::PhotoGrid;
