use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use te_core::{TeError, Tolerances, ensure_positive, nearly_equal};
use te_eos::{EosError, EquationOfState, PerfectGas};
use te_specie::{KnownSpecie, Specie};
use tracing::{debug, info};

type Gas = PerfectGas<Specie>;

#[derive(Parser)]
#[command(name = "te-cli")]
#[command(about = "ThermoEOS CLI - Perfect-gas properties from specie entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate all properties at one pressure and temperature
    Props {
        /// Path to the specie YAML entry
        config_path: PathBuf,
        /// Absolute pressure in Pa
        #[arg(long, default_value_t = 101_325.0)]
        p: f64,
        /// Absolute temperature in K
        #[arg(long, default_value_t = 300.0)]
        t: f64,
    },
    /// Mix two entries and write the result
    Mix {
        /// First specie YAML entry
        first: PathBuf,
        /// Second specie YAML entry
        second: PathBuf,
        /// Name for the mixture entry
        #[arg(short, long)]
        name: Option<String>,
        /// Output YAML file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read, write and re-read an entry, checking the result is unchanged
    Check {
        /// Path to the specie YAML entry
        config_path: PathBuf,
    },
    /// List catalog gases as perfect-gas entries
    Catalog,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Eos(#[from] EosError),

    #[error("Invalid input: {0}")]
    Input(#[from] TeError),

    #[error("Failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Round trip changed entry '{name}'")]
    RoundTrip { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Props { config_path, p, t } => cmd_props(&config_path, p, t),
        Commands::Mix {
            first,
            second,
            name,
            output,
        } => cmd_mix(&first, &second, name.as_deref(), output.as_deref()),
        Commands::Check { config_path } => cmd_check(&config_path),
        Commands::Catalog => cmd_catalog(),
    }
}

fn load(path: &Path) -> CliResult<Gas> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let gas = Gas::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), name = gas.name(), "loaded entry");
    Ok(gas)
}

fn cmd_props(config_path: &Path, p: f64, t: f64) -> CliResult<()> {
    let p = ensure_positive(p, "pressure")?;
    let t = ensure_positive(t, "temperature")?;
    let gas = load(config_path)?;

    let pack = gas.property_pack(p, t);
    println!("{} [{}]", gas.name(), Gas::type_name());
    println!("  W      = {:.4} kg/kmol", gas.molar_mass());
    println!("  rho    = {:.6} kg/m³", pack.rho);
    println!("  psi    = {:.6e} s²/m²", pack.psi);
    println!("  Z      = {:.3}", pack.z);
    println!("  cTExp  = {:.6e} 1/K", pack.c_t_exp);
    println!("  s      = {:.4} J/(kg·K)", pack.s);
    println!("  cp-cv  = {:.4} J/(kg·K)", pack.cp_m_cv);
    Ok(())
}

fn cmd_mix(
    first: &Path,
    second: &Path,
    name: Option<&str>,
    output: Option<&Path>,
) -> CliResult<()> {
    let a = load(first)?;
    let b = load(second)?;
    let mut mix = &a + &b;
    if let Some(name) = name {
        mix = Gas::named(name, &mix);
    }
    info!(
        moles = mix.moles(),
        molar_mass = mix.molar_mass(),
        "mixed {} and {}",
        a.name(),
        b.name()
    );

    match output {
        Some(path) => {
            let file = File::create(path)?;
            mix.write(file)?;
            println!("✓ Wrote {}", path.display());
        }
        None => mix.write(io::stdout().lock())?,
    }
    Ok(())
}

fn cmd_check(config_path: &Path) -> CliResult<()> {
    let gas = load(config_path)?;
    let text = gas.to_yaml_string()?;
    let back = Gas::from_yaml_str(&text)?;
    if !same_entry(&back, &gas) {
        return Err(CliError::RoundTrip {
            name: gas.name().to_owned(),
        });
    }
    println!("✓ {} round-trips as {}", gas.name(), Gas::type_name());
    Ok(())
}

/// Equality of models plus agreement of the amount, which `==` ignores.
fn same_entry(a: &Gas, b: &Gas) -> bool {
    a == b && nearly_equal(a.moles(), b.moles(), Tolerances::default())
}

fn cmd_catalog() -> CliResult<()> {
    for known in KnownSpecie::ALL {
        Gas::new(known.specie(1.0)).write(io::stdout().lock())?;
    }
    Ok(())
}
