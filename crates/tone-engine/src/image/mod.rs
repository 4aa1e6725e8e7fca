//! Borrowed pixel-buffer views
//!
//! The engine never owns or mutates pixel data. [`RgbImage`] and
//! [`GrayImage`] are validated views over caller-owned, row-major byte
//! buffers; once constructed, every analysis over them is total.

mod buffer;
mod error;

pub use buffer::{rgb_to_grayscale, GrayImage, Region, RgbImage};
pub use error::ImageError;
