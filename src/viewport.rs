use crate::{
    complex::Complex,
    error::{Error, Result},
    pixel::Pixel,
    screen,
};

/// The rectangle of the complex plane rendered into the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub upper_left: Complex,
    pub lower_right: Complex,
}

impl Viewport {
    /// Fails unless `upper_left` is strictly left of and above `lower_right`.
    pub fn new(upper_left: Complex, lower_right: Complex) -> Result<Self> {
        if upper_left.real < lower_right.real && upper_left.imaginary > lower_right.imaginary {
            Ok(Self {
                upper_left,
                lower_right,
            })
        } else {
            Err(Error::InvalidViewport {
                upper_left,
                lower_right,
            })
        }
    }
}

/**
Map `pixel` of an image with `bounds` onto the plane between `upper_left` and
`lower_right`.

Pixel `(0, 0)` lands exactly on `upper_left`. The mapping is half-open: the last
column and row stop one pixel short of `lower_right`.

The caller keeps `pixel` inside `bounds`.
*/
pub fn pixel_to_point(
    bounds: screen::Size,
    pixel: Pixel,
    upper_left: Complex,
    lower_right: Complex,
) -> Complex {
    let width = lower_right.real - upper_left.real;
    let height = upper_left.imaginary - lower_right.imaginary;

    Complex {
        real: upper_left.real + pixel.x as f64 * width / bounds.width as f64,
        // pixel.y grows downwards, the imaginary axis grows upwards.
        imaginary: upper_left.imaginary - pixel.y as f64 * height / bounds.height as f64,
    }
}
