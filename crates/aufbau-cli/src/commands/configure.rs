use crate::cli::ConfigureArgs;
use crate::error::Result;
use aufbau::core::models::atom::Atom;
use aufbau::core::models::quantum::QuantumState;
use aufbau::engine::aufbau::fill;
use tracing::info;

const SUBSHELL_LETTERS: [char; 5] = ['s', 'p', 'd', 'f', 'g'];

pub fn run(args: &ConfigureArgs) -> Result<()> {
    let electrons = args.electrons.unwrap_or(args.protons as usize);
    let atom = Atom::with_count(args.protons, args.neutrons, electrons);

    info!(
        "Filling shells for Z={} with {} electrons.",
        args.protons, electrons
    );
    let filled = fill(&atom);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filled)?);
        return Ok(());
    }

    let configuration = filled.configuration().unwrap_or(&[]);
    println!(
        "Atom: Z={} N={} electrons={}",
        filled.protons, filled.neutrons, electrons
    );
    println!("Configuration: {}", subshell_summary(configuration));
    for state in configuration {
        println!(
            "  n={} l={} m={:>2} s={:>2}",
            state.n,
            state.l,
            state.m,
            state.s.value()
        );
    }

    Ok(())
}

/// Collapses a configuration into spectroscopic notation (e.g. "1s2 2s2 2p2").
fn subshell_summary(configuration: &[QuantumState]) -> String {
    let mut groups: Vec<(u32, u32, usize)> = Vec::new();
    for state in configuration {
        match groups.last_mut() {
            Some((n, l, count)) if *n == state.n && *l == state.l => *count += 1,
            _ => groups.push((state.n, state.l, 1)),
        }
    }

    let parts: Vec<String> = groups
        .iter()
        .map(|(n, l, count)| {
            let letter = SUBSHELL_LETTERS.get(*l as usize).copied().unwrap_or('?');
            format!("{n}{letter}{count}")
        })
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use aufbau::engine::aufbau::configuration_for;

    #[test]
    fn subshell_summary_collapses_carbon_into_three_groups() {
        let configuration = configuration_for(6);
        assert_eq!(subshell_summary(&configuration), "1s2 2s2 2p2");
    }

    #[test]
    fn subshell_summary_of_an_empty_configuration_is_empty() {
        assert_eq!(subshell_summary(&[]), "");
    }

    #[test]
    fn subshell_summary_handles_mid_subshell_truncation() {
        let configuration = configuration_for(3);
        assert_eq!(subshell_summary(&configuration), "1s2 2s1");
    }
}
