use crate::core::constants::PhysicalConstants;
use crate::core::models::atom::Atom;
use crate::engine::error::TransitionError;
use crate::engine::{properties, shell, transition};

// Every transition threshold is computed against the ground state; making the
// lower level variable is a possible future extension.
const GROUND_LEVEL: u32 = 1;

/// The result of offering a photon to an atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsorptionOutcome {
    /// The atom after the interaction: unchanged if the photon was not
    /// absorbed, otherwise a hydrogen nucleus with its electron in the first
    /// state of the next shell up.
    pub atom: Atom,
    /// The photon energy in joules after the interaction. Returned unchanged
    /// in both outcomes: the energy consumed by an absorbed transition is not
    /// deducted.
    pub photon_energy: f64,
    /// Whether the photon was absorbed.
    pub absorbed: bool,
}

/// Decides whether an incoming photon excites the atom to the next principal
/// level up.
///
/// The target level is always one above the highest occupied level,
/// regardless of shell fullness. The minimum energy for the transition is the
/// photon energy of the Rydberg wavelength between the target level and the
/// ground state. Below that threshold the atom is returned unchanged together
/// with the full photon energy; at or above it, the atom transitions to a
/// single electron in the target shell's first enumerated state, with its
/// proton and neutron counts reset to bare hydrogen (this policy is only
/// valid for hydrogen-like, single-electron atoms).
///
/// # Errors
///
/// Propagates [`TransitionError::NonHydrogenLike`] for atoms whose electron
/// count is not exactly one.
pub fn absorb(
    atom: &Atom,
    photon_energy: f64,
    constants: &PhysicalConstants,
) -> Result<AbsorptionOutcome, TransitionError> {
    let excited_level = properties::highest_occupied_level(atom) + 1;
    let emission_wavelength = transition::wavelength(atom, excited_level, GROUND_LEVEL, constants)?;
    let threshold = transition::photon_energy(emission_wavelength, constants)?;

    if photon_energy < threshold {
        return Ok(AbsorptionOutcome {
            atom: atom.clone(),
            photon_energy,
            absorbed: false,
        });
    }

    let configuration: Vec<_> = shell::enumerate(excited_level).take(1).collect();
    Ok(AbsorptionOutcome {
        atom: Atom::with_configuration(1, 0, configuration),
        photon_energy,
        absorbed: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::quantum::{QuantumState, Spin};

    fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    #[test]
    fn photon_below_threshold_leaves_the_atom_unchanged() {
        let constants = PhysicalConstants::default();
        let atom = Atom::with_count(1, 0, 1);
        let photon = 10.1 * constants.electron_volt;

        let outcome = absorb(&atom, photon, &constants).unwrap();
        assert!(!outcome.absorbed);
        assert_eq!(outcome.atom, atom);
        assert_eq!(outcome.photon_energy, photon);
    }

    #[test]
    fn photon_at_threshold_excites_the_electron_one_level_up() {
        let constants = PhysicalConstants::default();
        let atom =
            Atom::with_configuration(1, 0, vec![QuantumState::new(1, 0, 0, Spin::Up)]);
        let photon = 10.2 * constants.electron_volt;

        let outcome = absorb(&atom, photon, &constants).unwrap();
        assert!(outcome.absorbed);
        assert_eq!(
            outcome.atom,
            Atom::with_configuration(1, 0, vec![QuantumState::new(2, 0, 0, Spin::Down)])
        );
        // Leftover energy is the untouched photon energy, which in joules
        // rounds to zero at one decimal.
        assert_eq!(outcome.photon_energy, photon);
        assert_eq!(round_to(outcome.photon_energy, 1), 0.0);
    }

    #[test]
    fn photon_above_threshold_is_returned_without_deduction() {
        let constants = PhysicalConstants::default();
        let atom =
            Atom::with_configuration(1, 0, vec![QuantumState::new(1, 0, 0, Spin::Down)]);
        let photon = 10.3 * constants.electron_volt;

        let outcome = absorb(&atom, photon, &constants).unwrap();
        assert!(outcome.absorbed);
        assert_eq!(
            outcome.atom,
            Atom::with_configuration(1, 0, vec![QuantumState::new(2, 0, 0, Spin::Down)])
        );
        assert!(outcome.photon_energy <= photon);
    }

    #[test]
    fn absorption_resets_the_nucleus_to_bare_hydrogen() {
        let constants = PhysicalConstants::default();
        let deuteron = Atom::with_count(1, 1, 1);
        let photon = 11.0 * constants.electron_volt;

        let outcome = absorb(&deuteron, photon, &constants).unwrap();
        assert!(outcome.absorbed);
        assert_eq!(outcome.atom.protons, 1);
        assert_eq!(outcome.atom.neutrons, 0);
    }

    #[test]
    fn already_excited_atoms_refill_from_the_count_and_target_level_two() {
        let constants = PhysicalConstants::default();
        // The highest occupied level is derived by re-running the assembler
        // over the electron count, so a single electron parked at level 2
        // still reads as ground-state occupancy and targets level 2 again.
        let atom =
            Atom::with_configuration(1, 0, vec![QuantumState::new(2, 0, 0, Spin::Down)]);

        let lambda = transition::wavelength(&atom, 2, 1, &constants).unwrap();
        let threshold = transition::photon_energy(lambda, &constants).unwrap();

        let outcome = absorb(&atom, threshold, &constants).unwrap();
        assert!(outcome.absorbed);
        assert_eq!(
            outcome.atom.configuration().unwrap(),
            &[QuantumState::new(2, 0, 0, Spin::Down)]
        );
    }

    #[test]
    fn multi_electron_atoms_are_rejected() {
        let constants = PhysicalConstants::default();
        let helium = Atom::with_count(2, 2, 2);
        let result = absorb(&helium, 10.2 * constants.electron_volt, &constants);
        assert_eq!(
            result,
            Err(TransitionError::NonHydrogenLike { electrons: 2 })
        );
    }
}
