/// Pick the value for position `index` from a configuration slice.
///
/// Slices shorter than the run of positions they configure repeat
/// their last element, so a single-element slice applies one value
/// everywhere.
///
/// # Panics
///
/// Panics if `values` is empty. Callers validate emptiness up front
/// and report it as [`RenderError::EmptyBroadcast`](crate::RenderError::EmptyBroadcast).
#[must_use]
pub fn broadcast<T>(values: &[T], index: usize) -> &T {
    &values[index.min(values.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_indexes_directly() {
        let values = [10, 20, 30];
        assert_eq!(*broadcast(&values, 0), 10);
        assert_eq!(*broadcast(&values, 2), 30);
    }

    #[test]
    fn test_past_the_end_repeats_last() {
        let values = [10, 20];
        assert_eq!(*broadcast(&values, 2), 20);
        assert_eq!(*broadcast(&values, 99), 20);
    }

    #[test]
    fn test_single_element_applies_everywhere() {
        let values = ["only"];
        for index in 0..5 {
            assert_eq!(*broadcast(&values, index), "only");
        }
    }
}
