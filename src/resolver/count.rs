//! Argument counting.
//!
//! Counting is done without inspecting argument content: the argument
//! slots are concatenated with a fixed descending sequence and the count
//! is re-extracted from a fixed position of the combined sequence.
//! Inserting `k` argument slots in front of the sequence shifts every
//! entry left by `k` positions, so with a single leading placeholder slot
//! the value landing in the fixed position is exactly `k`, for any `k`
//! between 0 and [`MAX_ARITY`] inclusive. Past the maximum, the fixed
//! position lands on an argument slot rather than a sequence digit, which
//! is the overflow condition.

/// The largest argument count the counting sequence can recover.
pub const MAX_ARITY: usize = 9;

/// The fixed descending sequence appended after the argument slots.
pub const REVERSE_SEQUENCE: [u8; MAX_ARITY + 1] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

/// The fixed position the count is extracted from: the 11th slot of the
/// combined sequence.
const SELECT_SLOT: usize = MAX_ARITY + 1;

/// Recovers the argument count from the number of supplied slots.
///
/// Returns `None` when more than [`MAX_ARITY`] arguments were supplied;
/// callers must surface that as a hard diagnostic, never as a miscount.
pub fn argument_count(supplied: usize) -> Option<u8> {
    // One leading placeholder slot corrects the zero-argument case.
    let mut slots: Vec<Option<u8>> = Vec::with_capacity(supplied + REVERSE_SEQUENCE.len() + 1);
    slots.push(None);
    slots.resize(supplied + 1, None);
    slots.extend(REVERSE_SEQUENCE.iter().copied().map(Some));

    let count = slots.get(SELECT_SLOT).copied().flatten()?;
    debug_assert_eq!(usize::from(count), supplied);
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_zero_through_nine() {
        for supplied in 0..=MAX_ARITY {
            assert_eq!(argument_count(supplied), Some(supplied as u8));
        }
    }

    #[test]
    fn test_overflow_is_detected_not_miscounted() {
        for supplied in (MAX_ARITY + 1)..=(MAX_ARITY + 20) {
            assert_eq!(argument_count(supplied), None);
        }
    }

    #[test]
    fn test_sequence_is_descending() {
        for window in REVERSE_SEQUENCE.windows(2) {
            assert_eq!(window[0], window[1] + 1);
        }
    }
}
