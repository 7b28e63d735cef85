use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents the spin quantum number of a single electron.
///
/// The two possible orientations carry the integer values -1 and +1 (a
/// simplified convention; the physical values are ±1/2). Enumeration order is
/// `Down` before `Up`, which fixes the order in which paired electrons appear
/// within a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Spin {
    /// Spin-down orientation, value -1.
    Down = -1,
    /// Spin-up orientation, value +1.
    Up = 1,
}

impl Spin {
    /// Returns the integer value of this spin orientation (-1 or +1).
    pub const fn value(self) -> i32 {
        self as i32
    }
}

impl Serialize for Spin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(*self as i8)
    }
}

impl<'de> Deserialize<'de> for Spin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match i8::deserialize(deserializer)? {
            -1 => Ok(Spin::Down),
            1 => Ok(Spin::Up),
            other => Err(serde::de::Error::custom(format!(
                "spin must be -1 or +1, got {other}"
            ))),
        }
    }
}

/// Represents one electron's full set of quantum numbers.
///
/// A quantum state is the ordered quadruple `(n, l, m, s)`: principal energy
/// level, angular momentum, magnetic number, and spin. It is an immutable
/// value type; an electron configuration is an ordered sequence of these.
///
/// Invariants (documented, not runtime-enforced): `n >= 1`, `0 <= l < n`,
/// and `-l <= m <= +l`. The shell enumerator in [`crate::engine::shell`]
/// produces every distinct `(l, m, s)` combination for a given `n` exactly
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumState {
    /// The principal energy level (shell index), starting at 1.
    pub n: u32,
    /// The angular momentum quantum number, in `0..n`.
    pub l: u32,
    /// The magnetic quantum number, in `-l..=+l`.
    pub m: i32,
    /// The spin orientation.
    pub s: Spin,
}

impl QuantumState {
    /// Creates a new quantum state from its four quantum numbers.
    ///
    /// # Arguments
    ///
    /// * `n` - The principal energy level.
    /// * `l` - The angular momentum quantum number.
    /// * `m` - The magnetic quantum number.
    /// * `s` - The spin orientation.
    pub const fn new(n: u32, l: u32, m: i32, s: Spin) -> Self {
        Self { n, l, m, s }
    }
}
