//! Terminal rendering.

pub mod dialogs;
mod render;
pub mod theme;
pub mod transcript;
pub mod utils;

pub use render::render;
