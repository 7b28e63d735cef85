use super::shell;
use crate::core::models::atom::Atom;
use crate::core::models::quantum::QuantumState;

/// Builds the electron configuration for the given electron count.
///
/// Shells are appended whole in increasing principal-level order, then the
/// accumulated sequence is truncated to exactly `count` states, which may
/// split the last shell mid-enumeration. Sub-shell energy ordering
/// (Madelung's rule) is not applied, so the result is physically meaningful
/// for atomic numbers up to 12 only. A count of zero yields an empty
/// configuration.
pub fn configuration_for(count: usize) -> Vec<QuantumState> {
    let mut configuration = Vec::new();
    let mut level = 1;
    while configuration.len() < count {
        configuration.extend(shell::enumerate(level));
        level += 1;
    }
    configuration.truncate(count);
    configuration
}

/// Fills an atom's shells by the Aufbau principle, yielding the atom in full form.
///
/// Accepts either atomic form; only the electron count of the input is read,
/// so re-running on a full-form atom reproduces the same configuration.
pub fn fill(atom: &Atom) -> Atom {
    let configuration = configuration_for(atom.electron_count());
    Atom::with_configuration(atom.protons, atom.neutrons, configuration)
}
