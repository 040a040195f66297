//! gallery-ui - Display types and view components for the photo gallery
//!
//! Views here never fetch or navigate: they render what they are given and
//! report user intent through callbacks. The web crate owns state and I/O.

pub mod components;
pub mod display_types;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
