//! Drawing abstraction and scene composition
//!
//! The core owns the frame: it decides what is drawn where, every tick,
//! and emits those decisions through [`DrawSurface`]. Hosts implement the
//! surface and sprite traits over whatever backend they render with.

pub mod scene;
pub mod sprites;
pub mod surface;

pub use scene::draw_frame;
pub use sprites::{PlainSprite, SpriteBank};
pub use surface::{Color, DrawSurface, Sprite, SpriteTransform, TextAlign, TextStyle};
