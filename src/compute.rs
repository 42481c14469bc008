//! Escape-time evaluation.

use crate::complex::Complex;

/// Iteration limit used by the renderer. One iteration per greyscale level.
pub const ITERATION_LIMIT: u32 = 255;

/// Orbits whose squared magnitude exceeds this have diverged.
const ESCAPE_NORM_SQR: f64 = 4.0;

/**
Decide whether `c` is a member of the Mandelbrot set.

Iterates `z = z * z + c` from `z = 0` at most `limit` times. Returns
`Some(i)` with the 0-based index of the first iteration where `|z|² > 4`,
or `None` if that never happens and `c` is presumed to be in the set.
*/
pub fn is_member(c: Complex, limit: u32) -> Option<u32> {
    let mut z = Complex::ZERO;

    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return Some(i);
        }
    }

    None
}
