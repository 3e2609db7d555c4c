//! Binary Search Visualizer - Entry Point

use bsviz::config::{ResolvedConfig, MIN_AUTOPLAY_DELAY_MS};
use bsviz::input::{self, RandomArrayRequest};
use bsviz::view::StartupOptions;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Binary Search Visualizer - step through a binary search in the terminal
#[derive(Parser, Debug)]
#[command(name = "bsviz")]
#[command(version)]
#[command(about = "Step-by-step binary search visualizer for the terminal")]
pub struct Args {
    /// Comma-separated array values (sorted automatically)
    #[arg(short, long)]
    pub array: Option<String>,

    /// Value to search for
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<i64>,

    /// Generate a random array of this length instead of --array
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(..=10_000))]
    pub random: Option<u64>,

    /// Seed for --random, for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start auto-play after the initial search
    #[arg(long)]
    pub autoplay: bool,

    /// Auto-play delay between steps in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(MIN_AUTOPLAY_DELAY_MS..))]
    pub delay_ms: Option<u64>,

    /// Print the trace and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Print the trace as JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            array: self.array.clone(),
            target: self.target,
            random: self.random.is_some(),
            autoplay: self.autoplay,
            seed: self.seed,
            no_color: self.no_color,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = bsviz::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = bsviz::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = bsviz::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        bsviz::config::apply_cli_overrides(
            with_env,
            args.delay_ms,
            args.random.map(|len| len as usize),
        )
    };

    bsviz::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if args.print {
        return Ok(print_trace(&args, &config));
    }

    bsviz::view::run_with_options(&config, args.startup_options())?;

    Ok(ExitCode::SUCCESS)
}

/// Headless mode: print the trace to stdout, or the input error to stderr.
fn print_trace(args: &Args, config: &ResolvedConfig) -> ExitCode {
    let array_text = if args.random.is_some() {
        let request = match RandomArrayRequest::new(
            config.random_length,
            config.min_value_range,
            config.value_range_factor,
        ) {
            Ok(request) => request,
            Err(err) => return input_failure(err),
        };
        let values = request.generate(&mut args.startup_options().rng());
        input::format_array(&values)
    } else {
        args.array.clone().unwrap_or_default()
    };
    let target_text = args.target.map(|t| t.to_string()).unwrap_or_default();

    let prepared = match bsviz::integration::prepare_search(&array_text, &target_text) {
        Ok(prepared) => prepared,
        Err(err) => return input_failure(err),
    };

    if args.json {
        match bsviz::integration::render_trace_json(&prepared) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", bsviz::integration::render_trace_text(&prepared));
    }
    ExitCode::SUCCESS
}

fn input_failure(err: bsviz::model::InputError) -> ExitCode {
    warn!(error = %err, "headless search rejected");
    eprintln!("error: {err}");
    ExitCode::FAILURE
}
