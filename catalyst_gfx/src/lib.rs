#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod types;
pub use types::*;

pub mod text;
pub use text::font as fonts;

pub mod framebuffer;
pub use framebuffer::{Framebuffer, PixelFormat};
