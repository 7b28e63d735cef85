use crate::cli::AbsorbArgs;
use crate::error::Result;
use aufbau::core::constants::PhysicalConstants;
use aufbau::core::models::atom::Atom;
use aufbau::workflows::absorption;
use tracing::info;

pub fn run(args: &AbsorbArgs, constants: &PhysicalConstants) -> Result<()> {
    let atom = Atom::with_count(args.protons, args.neutrons, args.electrons);
    let photon_energy = args.energy_ev * constants.electron_volt;

    info!(
        "Offering a {:.3} eV photon to an atom with Z={} and {} electrons.",
        args.energy_ev, args.protons, args.electrons
    );
    let outcome = absorption::absorb(&atom, photon_energy, constants)?;

    if outcome.absorbed {
        let excited_level = outcome
            .atom
            .configuration()
            .and_then(|states| states.first())
            .map(|state| state.n)
            .unwrap_or(0);
        println!("✓ Photon absorbed; electron excited to level {excited_level}.");
    } else {
        println!("Photon passed through; atom unchanged.");
    }
    println!(
        "Photon energy after interaction: {:.6e} J ({:.2} eV)",
        outcome.photon_energy,
        outcome.photon_energy / constants.electron_volt
    );

    Ok(())
}
