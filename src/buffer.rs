use std::ops::{Deref, DerefMut};

use crate::screen;

/// A greyscale intensity buffer: one byte per pixel, row-major.
///
/// The length always equals `size.area()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intensities {
    size: screen::Size,
    data: Vec<u8>,
}

impl Intensities {
    /// An all-black buffer of `size`.
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            data: bytemuck::allocation::zeroed_vec(size.area()),
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    /// Mutable row slices, top to bottom. Rows never overlap.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        // `max(1)` keeps `chunks_mut` happy for zero-width buffers, which are empty anyway.
        self.data.chunks_mut((self.size.width as usize).max(1))
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for Intensities {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Intensities {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
