//! Framework-free model of skeleton placeholders: palettes, primitive specs
//! and their resolution into concrete blocks.

pub mod animation;
pub mod block;
pub mod circle;
pub mod config;
pub mod error;
pub mod length;
pub mod palette;
pub mod preset;
pub mod rect;
pub mod text;
pub mod wrapper;

pub use animation::*;
pub use block::*;
pub use circle::*;
pub use config::*;
pub use error::*;
pub use length::*;
pub use palette::*;
pub use preset::*;
pub use rect::*;
pub use text::*;
pub use wrapper::*;
