pub mod crop;
pub mod pipeline;
pub mod pixel;
pub mod resize;
