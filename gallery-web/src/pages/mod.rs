mod gallery;
mod photo_detail;

pub use gallery::Gallery;
pub use photo_detail::PhotoDetail;
