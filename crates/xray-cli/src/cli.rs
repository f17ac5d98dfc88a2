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
    author = "Philippe T. Pinard",
    version,
    about = "xrayref - Look up X-ray transition energies, probabilities and notations from multiple literature references.",
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

    /// Configuration file (TOML) listing data files and the reference priority
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prefer this reference when several provide a value.
    /// Repeat to build a priority list; replaces the list from the config file.
    #[arg(long = "prefer", global = true, value_name = "BIBTEXKEY")]
    pub prefer: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one X-ray line or line group, e.g. `Fe Ka1`, `Fe K-L3` or `Fe Ka`.
    Line(LineArgs),
    /// List the X-ray lines of an element within an energy window.
    Lines(LinesArgs),
    /// Show the properties of an element.
    Element(ElementArgs),
    /// Convert a chemical formula into mass and atomic fractions.
    Composition(CompositionArgs),
}

#[derive(Args, Debug)]
pub struct LineArgs {
    /// Element symbol or name
    pub element: String,

    /// Siegbahn or IUPAC notation of the line or group
    pub notation: String,

    /// Read values from this reference only
    #[arg(short, long, value_name = "BIBTEXKEY")]
    pub reference: Option<String>,

    /// Encoding of the printed notations: ascii, utf16, html or latex
    #[arg(short, long, default_value = "utf16")]
    pub encoding: String,
}

#[derive(Args, Debug)]
pub struct LinesArgs {
    /// Element symbol or name
    pub element: String,

    /// Lower bound of the energy window, in eV
    #[arg(long, value_name = "EV", default_value_t = 0.0)]
    pub min_ev: f64,

    /// Upper bound of the energy window, in eV
    #[arg(long, value_name = "EV", default_value_t = 1e6)]
    pub max_ev: f64,

    /// Also list satellite lines
    #[arg(long)]
    pub satellites: bool,
}

#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Element symbol or name
    pub element: String,

    /// Read values from this reference only
    #[arg(short, long, value_name = "BIBTEXKEY")]
    pub reference: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompositionArgs {
    /// Chemical formula, e.g. `Al2O3` or `Al2 Na3 B12`
    pub formula: String,

    /// Largest atom count tried when writing the formula back
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub denominator: u32,
}
