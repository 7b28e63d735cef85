use crate::cli::DescribeArgs;
use crate::error::{CliError, Result};
use aufbau::core::elements;
use aufbau::core::models::atom::SpinInput;
use aufbau::engine::aufbau::fill;
use aufbau::engine::properties;
use serde_json::json;
use tracing::info;

pub fn run(args: &DescribeArgs) -> Result<()> {
    let atom = elements::atom_by_name(&args.name).ok_or_else(|| {
        CliError::Argument(format!(
            "unknown element or nuclide name '{}' (supported: atomic numbers 1 through 12)",
            args.name
        ))
    })?;

    let name = elements::element_name(atom.protons, atom.neutrons).unwrap_or("Unknown");
    info!("Describing {} (Z={}, N={}).", name, atom.protons, atom.neutrons);

    let filled = fill(&atom);
    let configuration = filled.configuration().unwrap_or(&[]);
    let highest_level = properties::highest_occupied_level(&atom);
    let net_spin = properties::net_spin(SpinInput::from(configuration));
    let closed_shell = properties::is_shell_full(&filled.electrons, false);

    if args.json {
        let report = json!({
            "name": name,
            "protons": atom.protons,
            "neutrons": atom.neutrons,
            "electrons": atom.electron_count(),
            "highest_occupied_level": highest_level,
            "net_spin": net_spin,
            "closed_shell": closed_shell,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{name}");
    println!("  Protons:                {}", atom.protons);
    println!("  Neutrons:               {}", atom.neutrons);
    println!("  Electrons:              {}", atom.electron_count());
    println!("  Highest occupied level: {highest_level}");
    println!("  Net spin:               {net_spin}");
    println!("  Closed shell:           {closed_shell}");

    Ok(())
}
