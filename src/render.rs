use log::{debug, trace};

use crate::{
    buffer::Intensities,
    colour,
    complex::Complex,
    compute::{is_member, ITERATION_LIMIT},
    pixel::Pixel,
    screen,
    viewport::pixel_to_point,
};

/// Render the area of the plane between `upper_left` and `lower_right` into a
/// greyscale buffer of `bounds`.
pub fn render(bounds: screen::Size, upper_left: Complex, lower_right: Complex) -> Intensities {
    trace!("begin render");
    debug!(
        "rendering {}x{} from {} to {}",
        bounds.width, bounds.height, upper_left, lower_right
    );

    let mut buffer = Intensities::new(bounds);
    for (y, row) in buffer.rows_mut().enumerate() {
        render_row(row, y as u32, bounds, upper_left, lower_right);
    }

    trace!("end render");
    buffer
}

/// Render row `y` of the image into `row`, which holds exactly that row.
fn render_row(
    row: &mut [u8],
    y: u32,
    bounds: screen::Size,
    upper_left: Complex,
    lower_right: Complex,
) {
    debug_assert_eq!(row.len(), bounds.width as usize);

    for (x, value) in row.iter_mut().enumerate() {
        let point = pixel_to_point(bounds, Pixel::new(x as u32, y), upper_left, lower_right);
        *value = colour::intensity(is_member(point, ITERATION_LIMIT));
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::{
        colour,
        complex::Complex,
        compute::{is_member, ITERATION_LIMIT},
        pixel::Pixel,
        screen::Size,
        viewport::pixel_to_point,
    };

    const UPPER_LEFT: Complex = Complex {
        real: -1.0,
        imaginary: 1.0,
    };
    const LOWER_RIGHT: Complex = Complex {
        real: 1.0,
        imaginary: -1.0,
    };

    #[test]
    fn two_by_two() {
        // Pixels map to -1+i, 0+i, -1, 0. Only -1+i escapes, at iteration 2.
        let buffer = render(Size::new(2, 2), UPPER_LEFT, LOWER_RIGHT);
        assert_eq!(&*buffer, &[253, 0, 0, 0]);
    }

    #[test]
    fn length_matches_bounds() {
        for (width, height) in [(1, 1), (7, 3), (3, 7), (64, 48)] {
            let size = Size::new(width, height);
            let buffer = render(size, UPPER_LEFT, LOWER_RIGHT);
            assert_eq!(buffer.len(), width as usize * height as usize);
            assert_eq!(buffer.size(), size);
        }
    }

    #[test]
    fn every_pixel_matches_the_evaluator() {
        let size = Size::new(40, 30);
        let upper_left = Complex::new(-2.0, 1.2);
        let lower_right = Complex::new(1.0, -1.2);
        let buffer = render(size, upper_left, lower_right);

        for y in 0..size.height {
            for x in 0..size.width {
                let point = pixel_to_point(size, Pixel::new(x, y), upper_left, lower_right);
                let expected = colour::intensity(is_member(point, ITERATION_LIMIT));
                assert_eq!(buffer[(y * size.width + x) as usize], expected);
            }
        }
    }

    #[test]
    fn viewport_inside_the_set_is_black() {
        let buffer = render(
            Size::new(16, 16),
            Complex::new(-0.1, 0.1),
            Complex::new(0.1, -0.1),
        );
        assert!(buffer.iter().all(|&value| value == 0));
    }

    #[test]
    fn viewport_outside_the_set_is_white() {
        let buffer = render(
            Size::new(16, 16),
            Complex::new(10.0, 10.0),
            Complex::new(20.0, 5.0),
        );
        assert!(buffer.iter().all(|&value| value == 255));
    }

    #[test]
    fn idempotent() {
        let size = Size::new(50, 37);
        let upper_left = Complex::new(-1.2, 0.35);
        let lower_right = Complex::new(-1.0, 0.2);
        assert_eq!(
            render(size, upper_left, lower_right),
            render(size, upper_left, lower_right)
        );
    }
}
