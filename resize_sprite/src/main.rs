use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use lib_sprite::config::root_from_executable;
use lib_sprite::{normalize_assets, plan_assets, validate_manifest, NormalizerConfig};
use log::{error, info, LevelFilter};

/// Resizes the game's fighter sprites and backgrounds in place.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding assets/sprites. Defaults to two levels above this executable.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Check that every asset exists before rewriting any of them
    #[arg(long)]
    preflight: bool,

    /// Print the size each asset would get without writing anything
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    lib_sprite::init_logging(log_level(args.verbose));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => executable_root()?,
    };
    let config = NormalizerConfig::new(root);

    if args.preflight {
        validate_manifest(&config)?;
    }

    if args.dry_run {
        for plan in plan_assets(&config)? {
            info!(
                "{}: {} -> {} (content {})",
                plan.entry, plan.source, plan.output, plan.scaled
            );
        }
        return Ok(());
    }

    normalize_assets(&config)?;
    Ok(())
}

fn executable_root() -> Result<PathBuf, Box<dyn Error>> {
    let exe = std::env::current_exe()?;
    let exe = fs::canonicalize(&exe).unwrap_or(exe);
    let root = root_from_executable(&exe)
        .ok_or_else(|| format!("cannot resolve project root from {}", exe.display()))?;
    Ok(root)
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
