/*!
Escape-time rendering of the Mandelbrot set to greyscale images.

Each pixel is mapped onto the complex plane with
[`viewport::pixel_to_point`], evaluated with [`compute::is_member`] and
coloured with [`colour::intensity`]. [`render::render`] does this for every
pixel, and [`output::write_image`] encodes the result.
*/

pub mod buffer;
pub mod cli;
pub mod colour;
pub mod complex;
pub mod compute;
pub mod error;
pub mod output;
pub mod parse;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod viewport;

pub use crate::{
    buffer::Intensities,
    complex::Complex,
    compute::{is_member, ITERATION_LIMIT},
    error::{Error, Result},
    output::write_image,
    pixel::Pixel,
    render::render,
    screen::Size,
    viewport::{pixel_to_point, Viewport},
};
