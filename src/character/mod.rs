pub(crate) mod builtin;
pub(crate) mod catalog;
pub(crate) mod glyph;
pub(crate) mod palette;
