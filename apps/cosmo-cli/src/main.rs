use clap::{Parser, Subcommand, ValueEnum};
use cosmo_app::{
    AppResult, BatchFormat, DEFAULT_BATCH_OUTFILE, DEFAULT_TABLE_OUTFILE, ParameterOverrides,
    Prompter, parse_number, report, resolve_parameters, run_batch_file, run_table_file,
};
use cosmo_model::{Cosmology, CosmologyParameters, ParameterSet};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "cosmic")]
#[command(version)]
#[command(about = "Cosmological distance calculator", long_about = None)]
struct Cli {
    /// Hubble constant (km/s/Mpc)
    #[arg(long, global = true, value_parser = parse_flag, allow_negative_numbers = true)]
    h0: Option<f64>,
    /// Matter density parameter
    #[arg(long, global = true, value_parser = parse_flag, allow_negative_numbers = true)]
    omega_m: Option<f64>,
    /// Cosmological constant density parameter
    #[arg(long, global = true, value_parser = parse_flag, allow_negative_numbers = true)]
    omega_l: Option<f64>,
    /// YAML or JSON file with h0, omega_m and omega_l
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Suppress the version banner
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Do not ask for the cosmological parameters
    #[arg(long, global = true)]
    no_prompt: bool,
    /// Print reports as HTML
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full report for a single redshift
    Calc {
        /// Redshift
        #[arg(value_parser = parse_flag, allow_negative_numbers = true)]
        z: f64,
    },
    /// Ask for redshifts until end of input (default)
    Interactive,
    /// Evaluate a file of redshifts, one per line
    Batch {
        /// Input file with one redshift per line
        file: PathBuf,
        /// Output file
        #[arg(short, long, default_value = DEFAULT_BATCH_OUTFILE)]
        outfile: PathBuf,
        /// Output layout
        #[arg(short, long, value_enum, default_value_t = FormatArg::Tsv)]
        format: FormatArg,
    },
    /// Write a CSV distance table from a parameter and redshift file
    Table {
        /// Input file: H0 OmegaM OmegaL, a count N, then N redshifts
        file: PathBuf,
        /// Output CSV file
        #[arg(short, long, default_value = DEFAULT_TABLE_OUTFILE)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Tsv,
    Json,
}

impl From<FormatArg> for BatchFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tsv => BatchFormat::Tsv,
            FormatArg::Json => BatchFormat::JsonLines,
        }
    }
}

fn parse_flag(text: &str) -> Result<f64, String> {
    parse_number(text).map_err(|e| e.to_string())
}

fn main() -> AppResult<()> {
    // Initialize tracing; logs go to stderr, reports to stdout
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    if !cli.quiet {
        print_banner();
    }

    let overrides = ParameterOverrides {
        h0: cli.h0,
        omega_m: cli.omega_m,
        omega_l: cli.omega_l,
    };
    let base = resolve_parameters(cli.config.as_deref(), overrides)?;
    let prompt = !cli.no_prompt;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Calc { z } => cmd_calc(base, prompt, z, cli.html),
        Commands::Interactive => cmd_interactive(base, prompt, cli.html),
        Commands::Batch {
            file,
            outfile,
            format,
        } => cmd_batch(base, prompt, &file, &outfile, format.into()),
        Commands::Table { file, output } => cmd_table(&file, &output),
    }
}

fn cmd_calc(base: ParameterSet, prompt: bool, z: f64, html: bool) -> AppResult<()> {
    let mut cosmo = build_cosmology(base, prompt)?;
    cosmo.set_redshift(z)?;
    if html {
        print!("{}", report::html_report(&cosmo));
    } else {
        print!("{}", report::long_report(&cosmo));
    }
    Ok(())
}

fn cmd_interactive(base: ParameterSet, prompt: bool, html: bool) -> AppResult<()> {
    let mut cosmo = build_cosmology(base, prompt)?;
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout(), io::stderr());
    let evaluated = prompter.redshift_loop(&mut cosmo, html)?;
    debug!(evaluated, "interactive session finished");
    Ok(())
}

fn cmd_batch(
    base: ParameterSet,
    prompt: bool,
    file: &Path,
    outfile: &Path,
    format: BatchFormat,
) -> AppResult<()> {
    let mut cosmo = build_cosmology(base, prompt)?;
    println!(
        "Running in batch mode. Output will be in {}",
        outfile.display()
    );
    let rows = run_batch_file(&mut cosmo, file, outfile, format)?;
    println!("✓ {rows} redshifts written");
    Ok(())
}

fn cmd_table(file: &Path, output: &Path) -> AppResult<()> {
    let rows = run_table_file(file, output)?;
    println!("✓ {rows} rows written to {}", output.display());
    Ok(())
}

/// Apply interactive answers on top of `base` when asked to, then validate.
fn build_cosmology(base: ParameterSet, prompt: bool) -> AppResult<Cosmology> {
    let set = if prompt {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout(), io::stderr());
        prompter.cosmology(base)?
    } else {
        base
    };

    let params = CosmologyParameters::from_set(set)?;
    debug!(?set, omega_k = params.omega_k(), "cosmology ready");
    Ok(Cosmology::new(params))
}

fn print_banner() {
    println!(
        "cosmic version {}\n\
         cosmic comes with ABSOLUTELY NO WARRANTY. This is free software,\n\
         and you are welcome to redistribute it under the terms of the\n\
         GNU General Public License. Pass --quiet to suppress this message.\n",
        env!("CARGO_PKG_VERSION")
    );
}
