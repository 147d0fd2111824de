//! roselia-ui - View components and stores for the Roselia fan site
//!
//! Pure, props-based components plus the page store. Decisions (which song
//! plays, whether the lightbox closes) are made by `roselia-common`; the
//! components only render state and report clicks.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
