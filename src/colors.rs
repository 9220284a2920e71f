//! Color constants in ARGB8888 format.
//!
//! One color per primitive kind so clip results are easy to tell apart on
//! screen: points green, lines cyan, polygons magenta, all on black behind a
//! white viewport border.

pub const BACKGROUND: u32 = 0xFF000000;
pub const VIEWPORT_BORDER: u32 = 0xFFFFFFFF;
pub const POINT: u32 = 0xFF00FF00;
pub const LINE: u32 = 0xFF00FFFF;
pub const POLYGON: u32 = 0xFFFF00FF;
