// Primitives
pub mod block;
pub mod circle;
pub mod rect;
pub mod text;

// Compositions
pub mod presets;
pub mod wrapper;

pub use block::*;
pub use circle::*;
pub use presets::*;
pub use rect::*;
pub use text::*;
pub use wrapper::*;
