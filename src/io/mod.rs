//! I/O layer: input discovery (`discover`), image decoding (`reader`) and
//! `writers` for the lossy WebP output.
pub mod discover;
pub use discover::resolve_inputs;

pub mod reader;
pub use reader::load_image;

pub mod writers;
