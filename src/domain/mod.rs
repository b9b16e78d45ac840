//! Domain data: glyph outlines and the letter registry they load into.

pub mod glyphs;
pub mod outline;
