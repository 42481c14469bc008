use bytemuck::{Pod, Zeroable};

/// Largest width or height an image may have. PNG stores dimensions as 31-bit
/// integers.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Pixel bounds of the target image.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels, i.e. the length of an intensity buffer of this size.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
