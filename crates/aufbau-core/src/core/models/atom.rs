use super::quantum::QuantumState;
use serde::{Deserialize, Serialize};

/// Specifies an atom's electrons in one of two interchangeable forms.
///
/// An atom may carry either a bare electron count (the "simple form", enough
/// for shell-filling and identity questions) or a fully enumerated electron
/// configuration (the "full form", required when individual quantum states
/// matter). Every inspector in the library accepts both forms through this
/// tagged variant instead of inspecting container shape at runtime.
///
/// Serialization is untagged, so a count round-trips as a bare integer and a
/// configuration as an array of quantum states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElectronSpec {
    /// A bare electron count.
    Count(usize),
    /// A fully enumerated electron configuration, in generation order
    /// (increasing `n`, then `l`, then `m`, then spin).
    Configuration(Vec<QuantumState>),
}

impl ElectronSpec {
    /// Returns the number of electrons this specification describes.
    ///
    /// For a configuration this is its length; for a count it is the stored
    /// scalar directly.
    pub fn count(&self) -> usize {
        match self {
            ElectronSpec::Count(count) => *count,
            ElectronSpec::Configuration(states) => states.len(),
        }
    }

    /// Returns the enumerated configuration, or `None` for the simple form.
    pub fn configuration(&self) -> Option<&[QuantumState]> {
        match self {
            ElectronSpec::Count(_) => None,
            ElectronSpec::Configuration(states) => Some(states),
        }
    }
}

/// Represents an atom: proton and neutron counts plus an electron
/// specification in either form.
///
/// This is an immutable value type. Operations that change an atom (such as
/// photon absorption) return a new `Atom` rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    /// The number of protons (atomic number).
    pub protons: u32,
    /// The number of neutrons.
    pub neutrons: u32,
    /// The electron specification (count or full configuration).
    pub electrons: ElectronSpec,
}

impl Atom {
    /// Creates an atom in simple form, carrying only an electron count.
    pub fn with_count(protons: u32, neutrons: u32, electrons: usize) -> Self {
        Self {
            protons,
            neutrons,
            electrons: ElectronSpec::Count(electrons),
        }
    }

    /// Creates an atom in full form, carrying an explicit configuration.
    pub fn with_configuration(
        protons: u32,
        neutrons: u32,
        configuration: Vec<QuantumState>,
    ) -> Self {
        Self {
            protons,
            neutrons,
            electrons: ElectronSpec::Configuration(configuration),
        }
    }

    /// Returns the number of electrons, regardless of which form the atom is in.
    pub fn electron_count(&self) -> usize {
        self.electrons.count()
    }

    /// Returns the enumerated configuration, or `None` for a simple-form atom.
    pub fn configuration(&self) -> Option<&[QuantumState]> {
        self.electrons.configuration()
    }
}

/// Discriminates the two shapes of input accepted by the spin inspector.
///
/// The net-spin computation applies to a single electron as well as to a whole
/// configuration; this variant makes the distinction explicit at the type
/// level.
#[derive(Debug, Clone, Copy)]
pub enum SpinInput<'a> {
    /// A single electron's quantum state.
    Single(&'a QuantumState),
    /// An electron configuration.
    Many(&'a [QuantumState]),
}

impl<'a> From<&'a QuantumState> for SpinInput<'a> {
    fn from(state: &'a QuantumState) -> Self {
        SpinInput::Single(state)
    }
}

impl<'a> From<&'a [QuantumState]> for SpinInput<'a> {
    fn from(states: &'a [QuantumState]) -> Self {
        SpinInput::Many(states)
    }
}

impl<'a> From<&'a Vec<QuantumState>> for SpinInput<'a> {
    fn from(states: &'a Vec<QuantumState>) -> Self {
        SpinInput::Many(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::quantum::Spin;

    #[test]
    fn count_form_reports_stored_scalar() {
        let atom = Atom::with_count(6, 6, 6);
        assert_eq!(atom.electron_count(), 6);
        assert!(atom.configuration().is_none());
    }

    #[test]
    fn configuration_form_reports_sequence_length() {
        let config = vec![
            QuantumState::new(1, 0, 0, Spin::Down),
            QuantumState::new(1, 0, 0, Spin::Up),
        ];
        let atom = Atom::with_configuration(2, 2, config);
        assert_eq!(atom.electron_count(), 2);
        assert_eq!(atom.configuration().unwrap().len(), 2);
    }

    #[test]
    fn electron_spec_serializes_untagged() {
        let count = ElectronSpec::Count(3);
        assert_eq!(serde_json::to_string(&count).unwrap(), "3");

        let config = ElectronSpec::Configuration(vec![QuantumState::new(1, 0, 0, Spin::Down)]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"[{"n":1,"l":0,"m":0,"s":-1}]"#);
    }

    #[test]
    fn electron_spec_deserializes_both_forms() {
        let count: ElectronSpec = serde_json::from_str("5").unwrap();
        assert_eq!(count, ElectronSpec::Count(5));

        let config: ElectronSpec = serde_json::from_str(r#"[{"n":1,"l":0,"m":0,"s":1}]"#).unwrap();
        assert_eq!(
            config,
            ElectronSpec::Configuration(vec![QuantumState::new(1, 0, 0, Spin::Up)])
        );
    }

    #[test]
    fn spin_input_converts_from_state_and_slice() {
        let state = QuantumState::new(1, 0, 0, Spin::Up);
        assert!(matches!(SpinInput::from(&state), SpinInput::Single(_)));

        let states = vec![state];
        assert!(matches!(SpinInput::from(&states), SpinInput::Many(_)));
        assert!(matches!(
            SpinInput::from(states.as_slice()),
            SpinInput::Many(_)
        ));
    }
}
