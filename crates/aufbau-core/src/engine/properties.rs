use super::aufbau;
use crate::core::models::atom::{Atom, ElectronSpec, SpinInput};

// Cumulative electron counts at which all occupied shells are closed, under
// the simplified filling order used by the assembler: 1s², then through 2p,
// then through 3p.
const CLOSED_SHELL_TOTALS: [usize; 3] = [2, 10, 18];

/// Returns the net spin of a single electron or of a whole configuration.
///
/// A single quantum state contributes its own spin value; a configuration
/// contributes the sum over all of its states.
pub fn net_spin(input: SpinInput<'_>) -> i32 {
    match input {
        SpinInput::Single(state) => state.s.value(),
        SpinInput::Many(states) => states.iter().map(|state| state.s.value()).sum(),
    }
}

/// Returns the highest principal level occupied by the atom's electrons.
///
/// The atom is run through the assembler first, so either atomic form is
/// accepted. An atom with no electrons reports level 0.
pub fn highest_occupied_level(atom: &Atom) -> u32 {
    aufbau::configuration_for(atom.electron_count())
        .iter()
        .map(|state| state.n)
        .max()
        .unwrap_or(0)
}

/// Tests whether the electron count sits exactly on a closed-shell total.
///
/// The comparison set is the cumulative totals {2, 10, 18}; this is an
/// equality test, not a threshold. With `excluding_first_shell` the innermost
/// total (2) is removed, which answers whether the shells above the first are
/// closed.
pub fn is_shell_full(electrons: &ElectronSpec, excluding_first_shell: bool) -> bool {
    let totals = if excluding_first_shell {
        &CLOSED_SHELL_TOTALS[1..]
    } else {
        &CLOSED_SHELL_TOTALS[..]
    };
    totals.contains(&electrons.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::quantum::{QuantumState, Spin};

    fn helium_configuration() -> Vec<QuantumState> {
        vec![
            QuantumState::new(1, 0, 0, Spin::Up),
            QuantumState::new(1, 0, 0, Spin::Down),
        ]
    }

    fn lithium_configuration() -> Vec<QuantumState> {
        vec![
            QuantumState::new(1, 0, 0, Spin::Up),
            QuantumState::new(1, 0, 0, Spin::Down),
            QuantumState::new(2, 0, 0, Spin::Up),
        ]
    }

    #[test]
    fn net_spin_of_a_single_state_is_its_own_spin() {
        let state = QuantumState::new(1, 0, 0, Spin::Down);
        assert_eq!(net_spin(SpinInput::from(&state)), -1);
    }

    #[test]
    fn net_spin_of_a_paired_configuration_is_zero() {
        let configuration = helium_configuration();
        assert_eq!(net_spin(SpinInput::from(&configuration)), 0);
    }

    #[test]
    fn net_spin_of_an_unpaired_configuration_is_the_surplus() {
        let configuration = lithium_configuration();
        assert_eq!(net_spin(SpinInput::from(&configuration)), 1);
    }

    #[test]
    fn highest_occupied_level_tracks_shell_boundaries() {
        assert_eq!(highest_occupied_level(&Atom::with_count(1, 0, 1)), 1);
        assert_eq!(highest_occupied_level(&Atom::with_count(6, 6, 6)), 2);
        assert_eq!(highest_occupied_level(&Atom::with_count(10, 10, 10)), 2);
        assert_eq!(highest_occupied_level(&Atom::with_count(12, 12, 12)), 3);
    }

    #[test]
    fn highest_occupied_level_is_zero_without_electrons() {
        assert_eq!(highest_occupied_level(&Atom::with_count(0, 0, 0)), 0);
    }

    #[test]
    fn helium_configuration_is_a_full_shell() {
        let electrons = ElectronSpec::Configuration(helium_configuration());
        assert!(is_shell_full(&electrons, false));
    }

    #[test]
    fn lithium_configuration_is_not_a_full_shell() {
        let electrons = ElectronSpec::Configuration(lithium_configuration());
        assert!(!is_shell_full(&electrons, false));
    }

    #[test]
    fn shell_fullness_accepts_bare_counts() {
        assert!(is_shell_full(&ElectronSpec::Count(10), false));
        assert!(is_shell_full(&ElectronSpec::Count(18), false));
        assert!(!is_shell_full(&ElectronSpec::Count(11), false));
    }

    #[test]
    fn shell_fullness_is_an_equality_test_not_a_threshold() {
        assert!(!is_shell_full(&ElectronSpec::Count(3), false));
        assert!(!is_shell_full(&ElectronSpec::Count(17), false));
    }

    #[test]
    fn excluding_the_first_shell_drops_the_innermost_total() {
        assert!(!is_shell_full(&ElectronSpec::Count(2), true));
        assert!(is_shell_full(&ElectronSpec::Count(10), true));
        assert!(is_shell_full(&ElectronSpec::Count(18), true));
    }
}
