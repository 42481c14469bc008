//! Parsing of command line values.

use std::str::FromStr;

use crate::{
    complex::Complex,
    error::{Error, Result},
    screen,
};

/// Split `s` on the first `separator` and parse both halves, e.g. `"400x600"`
/// or `"1.0,0.5"`.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (left, right) = s.split_once(separator)?;
    match (T::from_str(left), T::from_str(right)) {
        (Ok(left), Ok(right)) => Some((left, right)),
        _ => None,
    }
}

/// Parse `WIDTHxHEIGHT`. Both dimensions must lie in `1..=MAX_DIMENSION` and the
/// pixel count must fit in an allocation.
pub fn parse_size(s: &str) -> Result<screen::Size> {
    let dimension = 1..=screen::MAX_DIMENSION;
    match parse_pair::<u32>(s.trim(), 'x') {
        Some((width, height))
            if dimension.contains(&width)
                && dimension.contains(&height)
                && (width as u64).saturating_mul(height as u64) <= isize::MAX as u64 =>
        {
            Ok(screen::Size::new(width, height))
        }
        _ => Err(Error::InvalidSize(s.to_string())),
    }
}

/**
Parse a point of the complex plane.

Accepted forms:

- `re,im`, e.g. `-1.2,0.35`
- a literal with an `i` or `j` suffix, e.g. `-1.2+0.35j`, `-1-0.2i`, `0.5j`, `1+j`
- a bare real, e.g. `-0.75`
*/
pub fn parse_complex(s: &str) -> Result<Complex> {
    let invalid = || Error::InvalidComplex(s.to_string());
    let trimmed = s.trim();

    if trimmed.contains(',') {
        return parse_pair::<f64>(trimmed, ',')
            .map(|(real, imaginary)| Complex::new(real, imaginary))
            .ok_or_else(invalid);
    }

    let Some(body) = trimmed
        .strip_suffix('j')
        .or_else(|| trimmed.strip_suffix('i'))
    else {
        return parse_real(trimmed)
            .map(|real| Complex::new(real, 0.0))
            .ok_or_else(invalid);
    };

    let (real, imaginary) = match imaginary_sign_index(body) {
        Some(index) => (parse_real(&body[..index]).ok_or_else(invalid)?, &body[index..]),
        None => (0.0, body),
    };
    let imaginary = match imaginary {
        "" | "+" => 1.0,
        "-" => -1.0,
        coefficient => parse_real(coefficient).ok_or_else(invalid)?,
    };

    Ok(Complex::new(real, imaginary))
}

/// Index of the sign that starts the imaginary part of `body`, if there is a
/// real part in front of it. Signs of exponents (`1e-3`) don't count.
fn imaginary_sign_index(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&index| {
            matches!(bytes[index], b'+' | b'-') && !matches!(bytes[index - 1], b'e' | b'E')
        })
}

/// `f64::from_str` without the spellings of infinity and NaN.
fn parse_real(s: &str) -> Option<f64> {
    f64::from_str(s).ok().filter(|value| value.is_finite())
}
