use crate::core::models::quantum::{QuantumState, Spin};

/// Number of quantum states in a full shell at the given principal level (2n²).
pub const fn capacity(level: u32) -> usize {
    (2 * level * level) as usize
}

/// Enumerates the quantum states of one shell in canonical order.
///
/// Each call yields a fresh, independent iterator over exactly `2·level²`
/// states: angular momentum ascending from 0 to `level - 1`, magnetic number
/// ascending from `-l` to `+l`, spin down before spin up. Deterministic given
/// `level`; `level >= 1` is a precondition, not enforced.
pub fn enumerate(level: u32) -> impl Iterator<Item = QuantumState> {
    (0..level).flat_map(move |l| {
        (-(l as i32)..=l as i32).flat_map(move |m| {
            [Spin::Down, Spin::Up]
                .into_iter()
                .map(move |s| QuantumState::new(level, l, m, s))
        })
    })
}

/// Materializes one shell into an ordered sequence, preserving enumeration order.
pub fn build(level: u32) -> Vec<QuantumState> {
    enumerate(level).collect()
}
