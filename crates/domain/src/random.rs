//! Injected randomness.
//!
//! The domain never owns a random number generator. Callers pass a closure
//! that, given a length `n`, returns an index in `[0, n)`. Tests drive it with
//! a seeded generator or a fixed sequence; the engine adapts its `RandomPort`.

/// Index source: `pick(len)` must return a value in `0..len`.
pub type Pick<'a> = &'a mut dyn FnMut(usize) -> usize;

/// Draw an index for a slice of `len` items.
///
/// The closure is not consulted when there is at most one choice, and
/// out-of-range answers are clamped to the last index.
pub fn pick_index(len: usize, pick: Pick<'_>) -> usize {
    if len <= 1 {
        return 0;
    }
    pick(len).min(len - 1)
}

/// Choose one element, or `None` for an empty slice.
pub fn choose<'s, T>(items: &'s [T], pick: Pick<'_>) -> Option<&'s T> {
    if items.is_empty() {
        return None;
    }
    items.get(pick_index(items.len(), pick))
}

/// Choose one static string, falling back to an empty string for an empty table.
pub fn choose_text(items: &[&'static str], pick: Pick<'_>) -> &'static str {
    choose(items, pick).copied().unwrap_or_default()
}

/// Draw `count` distinct indices from `0..len`, in draw order.
pub fn sample_indices(len: usize, count: usize, pick: Pick<'_>) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..len).collect();
    let mut drawn = Vec::with_capacity(count.min(len));
    while drawn.len() < count && !pool.is_empty() {
        let at = pick_index(pool.len(), pick);
        drawn.push(pool.remove(at));
    }
    drawn
}
