use super::error::TransitionError;
use crate::core::constants::PhysicalConstants;
use crate::core::models::atom::Atom;

/// Computes a photon's energy in joules from its wavelength in metres (E = h·c/λ).
///
/// # Errors
///
/// Returns [`TransitionError::ZeroWavelength`] if `wavelength` is zero.
pub fn photon_energy(
    wavelength: f64,
    constants: &PhysicalConstants,
) -> Result<f64, TransitionError> {
    if wavelength == 0.0 {
        return Err(TransitionError::ZeroWavelength);
    }
    Ok(constants.planck_constant * constants.speed_of_light / wavelength)
}

/// Computes the photon wavelength in metres for a level transition via the
/// Rydberg formula: `1/λ = R·Z²·(1/to² − 1/from²)`.
///
/// The result is signed and the sign must be preserved by callers: positive
/// for a downward transition (emission), negative for an upward one
/// (absorption). `from == to` is a precondition violation, not defended
/// against.
///
/// # Errors
///
/// Returns [`TransitionError::NonHydrogenLike`] before any computation if the
/// atom does not carry exactly one electron.
pub fn wavelength(
    atom: &Atom,
    from: u32,
    to: u32,
    constants: &PhysicalConstants,
) -> Result<f64, TransitionError> {
    let electrons = atom.electron_count();
    if electrons != 1 {
        return Err(TransitionError::NonHydrogenLike { electrons });
    }

    let z = atom.protons as f64;
    let level_term = 1.0 / (to as f64).powi(2) - 1.0 / (from as f64).powi(2);
    Ok(1.0 / (constants.rydberg_constant * z * z * level_term))
}
