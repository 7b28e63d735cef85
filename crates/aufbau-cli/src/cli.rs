use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The Aufbau Contributors",
    version,
    about = "aufbau CLI - A command-line interface for modeling electron-shell structure and hydrogen-like photon transitions in light atoms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override the physical constants from a TOML file.
    /// Omitted fields keep their standard values.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub constants: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an atom's electron configuration by the Aufbau principle.
    Configure(ConfigureArgs),
    /// Look up an element or nuclide by name and report its atomic properties.
    Describe(DescribeArgs),
    /// Compute the Rydberg wavelength and photon energy for a level transition.
    Transition(TransitionArgs),
    /// Decide whether an incoming photon is absorbed by a hydrogen-like atom.
    Absorb(AbsorbArgs),
}

/// Arguments for the `configure` subcommand.
#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// Number of protons (atomic number; meaningful up to 12).
    #[arg(value_name = "PROTONS")]
    pub protons: u32,

    /// Number of neutrons.
    #[arg(value_name = "NEUTRONS")]
    pub neutrons: u32,

    /// Number of electrons. Defaults to the proton count (a neutral atom).
    #[arg(value_name = "ELECTRONS")]
    pub electrons: Option<usize>,

    /// Emit the configured atom as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Element or nuclide name (e.g. 'Carbon', 'Deuteron', 'Carbon-14').
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `transition` subcommand.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Principal level the electron transitions from.
    #[arg(value_name = "FROM")]
    pub from: u32,

    /// Principal level the electron transitions to.
    #[arg(value_name = "TO")]
    pub to: u32,

    /// Number of protons of the hydrogen-like atom.
    #[arg(short, long, default_value_t = 1, value_name = "INT")]
    pub protons: u32,

    /// Number of neutrons of the hydrogen-like atom.
    #[arg(short, long, default_value_t = 0, value_name = "INT")]
    pub neutrons: u32,
}

/// Arguments for the `absorb` subcommand.
#[derive(Args, Debug)]
pub struct AbsorbArgs {
    /// Incoming photon energy in electron-volts.
    #[arg(value_name = "ENERGY_EV")]
    pub energy_ev: f64,

    /// Number of protons of the target atom.
    #[arg(short, long, default_value_t = 1, value_name = "INT")]
    pub protons: u32,

    /// Number of neutrons of the target atom.
    #[arg(short, long, default_value_t = 0, value_name = "INT")]
    pub neutrons: u32,

    /// Number of electrons of the target atom (must be 1 for the policy to apply).
    #[arg(short, long, default_value_t = 1, value_name = "INT")]
    pub electrons: usize,
}
