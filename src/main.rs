//! perfprof CLI: performance profiles from per-solver data files.

use colored::Colorize;
use perfprof::cli::Cli;
use perfprof::error::{ProfileError, Result};
use perfprof::profile::PerformanceProfile;
use perfprof::render::{render_svg, summary_table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    cli.init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let builder = cli.matrix_builder()?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let profile = PerformanceProfile::from_builder(builder, &cli.profile_config(), &mut rng)?;

    println!("{}", "Performance Profile".bold());
    println!("{}", "===================".bold());
    print!("{}", summary_table(&profile));

    if !cli.no_plot {
        let svg = render_svg(&profile, &cli.render_config());
        std::fs::write(&cli.output, svg).map_err(|e| ProfileError::io(&cli.output, e))?;
        tracing::info!(path = %cli.output.display(), "wrote profile plot");
        println!("{} plot saved to {}", "✓".green(), cli.output.display());
    }

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&profile)?;
        std::fs::write(path, json).map_err(|e| ProfileError::io(path, e))?;
        tracing::info!(path = %path.display(), "wrote profile JSON");
        println!("{} profile exported to {}", "✓".green(), path.display());
    }

    Ok(())
}
