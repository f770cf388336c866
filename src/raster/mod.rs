//! Full-color drawing surface, indexed palettes, and quantized frames.

pub mod frame;
pub mod palette;
pub mod quantize;
pub mod surface;
