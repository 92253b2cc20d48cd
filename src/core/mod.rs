//! Core processing building blocks: crop geometry, pixel-format
//! normalization, Lanczos resize and the per-image pipeline. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
