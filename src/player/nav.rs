use rand::Rng;
use rand::rngs::StdRng;

/// Index of the track after `current`. Shuffle draws uniformly over the whole
/// playlist and may land on the current track again; non-shuffle wraps.
///
/// Callers guard against an empty playlist before calling.
pub(super) fn next_index(current: usize, len: usize, shuffle: bool, rng: &mut StdRng) -> usize {
    debug_assert!(len > 0);
    if shuffle {
        rng.random_range(0..len)
    } else {
        (current + 1) % len
    }
}

/// Index of the track before `current`, mirroring `next_index`.
pub(super) fn prev_index(current: usize, len: usize, shuffle: bool, rng: &mut StdRng) -> usize {
    debug_assert!(len > 0);
    if shuffle {
        rng.random_range(0..len)
    } else {
        (current + len - 1) % len
    }
}
