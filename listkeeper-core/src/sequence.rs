//! Pure operations on ordered sequences
//!
//! Every function borrows its input and returns a fresh `Vec`. Indices that
//! fall outside the sequence panic, the same way slice indexing does.

use crate::error::Result;
use crate::position::Position;

/// Insert `value` so that it becomes element `index`.
///
/// `index == seq.len()` appends.
///
/// # Panics
///
/// Panics if `index > seq.len()`.
pub fn insert_at<T: Clone>(index: usize, value: T, seq: &[T]) -> Vec<T> {
    assert!(
        index <= seq.len(),
        "insert index {index} out of range (len {})",
        seq.len()
    );
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.extend_from_slice(&seq[..index]);
    out.push(value);
    out.extend_from_slice(&seq[index..]);
    out
}

/// Remove exactly the element at `index`.
///
/// # Panics
///
/// Panics if `index >= seq.len()`.
pub fn remove_at<T: Clone>(index: usize, seq: &[T]) -> Vec<T> {
    assert!(
        index < seq.len(),
        "remove index {index} out of range (len {})",
        seq.len()
    );
    let mut out = Vec::with_capacity(seq.len() - 1);
    out.extend_from_slice(&seq[..index]);
    out.extend_from_slice(&seq[index + 1..]);
    out
}

/// Replace the element at `old_index`, optionally relocating it.
///
/// With `new_index == None` the value is replaced in place. Otherwise the old
/// element is removed first and `value` is inserted at `new_index` of the
/// shortened sequence.
///
/// # Panics
///
/// Panics if `old_index` is out of range, or if `new_index` exceeds the
/// shortened length.
pub fn update_at<T: Clone>(
    value: T,
    seq: &[T],
    old_index: usize,
    new_index: Option<usize>,
) -> Vec<T> {
    match new_index {
        None => {
            assert!(
                old_index < seq.len(),
                "update index {old_index} out of range (len {})",
                seq.len()
            );
            let mut out = seq.to_vec();
            out[old_index] = value;
            out
        }
        Some(new_index) => insert_at(new_index, value, &remove_at(old_index, seq)),
    }
}

/// Replace the element at `old_index` and move it to a symbolic position.
///
/// # Errors
///
/// Returns [`crate::ListError::InvalidPosition`] when `position` cannot be
/// resolved to an index.
pub fn update_collection<T: Clone>(
    value: T,
    seq: &[T],
    old_index: usize,
    position: Position,
) -> Result<Vec<T>> {
    let rest = remove_at(old_index, seq);
    let new_index = position.resolve(Some(old_index), rest.len())?;
    Ok(insert_at(new_index, value, &rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;

    fn abcde() -> Vec<&'static str> {
        vec!["A", "B", "C", "D", "E"]
    }

    #[test]
    fn test_insert_at_bounds() {
        assert_eq!(insert_at(0, "X", &abcde()), ["X", "A", "B", "C", "D", "E"]);
        assert_eq!(insert_at(5, "X", &abcde()), ["A", "B", "C", "D", "E", "X"]);
        assert_eq!(insert_at(0, "X", &Vec::<&str>::new()), ["X"]);
    }

    #[test]
    fn test_insert_then_remove_is_identity() {
        let seq = abcde();
        for i in 0..=seq.len() {
            assert_eq!(remove_at(i, &insert_at(i, "Z", &seq)), seq);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let seq = abcde();
        let _ = remove_at(2, &seq);
        let _ = update_at("F", &seq, 1, Some(3));
        assert_eq!(seq, abcde());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range_panics() {
        remove_at(5, &abcde());
    }

    #[test]
    fn test_update_at_in_place() {
        assert_eq!(update_at("F", &abcde(), 2, None), ["A", "B", "F", "D", "E"]);
    }

    #[test]
    fn test_update_at_moves_against_shortened_sequence() {
        assert_eq!(
            update_at("B", &abcde(), 1, Some(3)),
            ["A", "C", "D", "B", "E"]
        );
        assert_eq!(
            update_at("F", &abcde(), 1, Some(3)),
            ["A", "C", "D", "F", "E"]
        );
    }

    #[test]
    fn test_update_collection_placements() {
        let s = abcde();
        assert_eq!(
            update_collection("A", &s, 0, Position::Bottom).unwrap(),
            ["B", "C", "D", "E", "A"]
        );
        assert_eq!(
            update_collection("E", &s, 4, Position::Top).unwrap(),
            ["E", "A", "B", "C", "D"]
        );
        assert_eq!(
            update_collection("C", &s, 2, Position::Top).unwrap(),
            ["C", "A", "B", "D", "E"]
        );
        assert_eq!(
            update_collection("F", &s, 2, Position::Current).unwrap(),
            ["A", "B", "F", "D", "E"]
        );
    }

    #[test]
    fn test_update_collection_invalid_position() {
        let err = "invalid"
            .parse::<Position>()
            .and_then(|position| update_collection("A", &abcde(), 0, position))
            .unwrap_err();
        assert_eq!(err, ListError::InvalidPosition("invalid".into()));

        let err = update_collection("A", &abcde(), 0, Position::Other).unwrap_err();
        assert_eq!(err, ListError::InvalidPosition("other".into()));
    }
}
