use crate::cli::TransitionArgs;
use crate::error::Result;
use aufbau::core::constants::PhysicalConstants;
use aufbau::core::models::atom::Atom;
use aufbau::engine::transition;
use tracing::info;

pub fn run(args: &TransitionArgs, constants: &PhysicalConstants) -> Result<()> {
    let atom = Atom::with_count(args.protons, args.neutrons, 1);

    info!(
        "Computing Rydberg transition {} -> {} for Z={}.",
        args.from, args.to, args.protons
    );
    let wavelength = transition::wavelength(&atom, args.from, args.to, constants)?;
    let energy = transition::photon_energy(wavelength, constants)?;

    let direction = if wavelength >= 0.0 {
        "emission"
    } else {
        "absorption"
    };

    println!("Transition: {} -> {} ({direction})", args.from, args.to);
    println!("Wavelength: {wavelength:.6e} m");
    println!(
        "Photon energy: {energy:.6e} J ({:.2} eV)",
        energy / constants.electron_volt
    );

    Ok(())
}
