//! Colouring algorithms.

/// Greyscale colouring of an escape time.
///
/// Members of the set are black. Escaped points get `255 - escape_time`, so
/// fast-escaping points are near white and slow-escaping ones darker grey.
pub fn intensity(escape_time: Option<u32>) -> u8 {
    match escape_time {
        None => 0,
        Some(count) => 255u32.saturating_sub(count) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::intensity;

    #[test]
    fn members_are_black() {
        assert_eq!(intensity(None), 0);
    }

    #[test]
    fn escape_times_invert() {
        assert_eq!(intensity(Some(0)), 255);
        assert_eq!(intensity(Some(1)), 254);
        assert_eq!(intensity(Some(254)), 1);
    }

    #[test]
    fn escape_times_past_the_range_clamp_to_black() {
        assert_eq!(intensity(Some(255)), 0);
        assert_eq!(intensity(Some(10_000)), 0);
    }
}
