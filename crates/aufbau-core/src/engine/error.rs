use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Rydberg formula invalid for a non hydrogen-like atom with {electrons} electrons")]
    NonHydrogenLike { electrons: usize },

    #[error("Photon wavelength must be non-zero")]
    ZeroWavelength,
}
