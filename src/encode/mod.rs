//! Animation assembly and GIF container encoding.

pub mod gif;
