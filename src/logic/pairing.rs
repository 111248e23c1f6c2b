//! Pair generation: the head element against each later element.

/// All pairs formed by the first element with each subsequent element, in
/// tail order. This is deliberately not all-pairs: the matching enumerator
/// fixes the head's partner here and recurses for the rest, so every perfect
/// matching is produced exactly once.
///
/// Inputs of length 0 or 1 yield no pairs.
pub fn pairs<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    match items.split_first() {
        Some((head, tail)) => tail
            .iter()
            .map(|other| (head.clone(), other.clone()))
            .collect(),
        None => Vec::new(),
    }
}
