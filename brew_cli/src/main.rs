//! # Brew Maths CLI
//!
//! Terminal front end for brew_core:
//!
//! - `brew summary recipe.json` - evaluate a recipe file
//! - `brew abv --og 1.045 --fg 1.010` - one-off ABV estimate
//! - `brew demo` - interactive walk-through with a reference recipe

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use brew_core::calculations::summary::calculate;
use brew_core::{AbvMethod, BrewError, BrewSettings, Fermentability, Grist, GristType, HopAddition, Recipe, RecipeSummary};

#[derive(Debug, Parser)]
#[command(name = "brew", version, about = "Brewing recipe calculations")]
struct CliArgs {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a recipe JSON file
    Summary {
        /// Recipe file (grists + hops)
        recipe: PathBuf,
        /// Optional settings file (volume, efficiency, ABV method, ...)
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate ABV from original and final gravity (full SG, e.g. 1.045)
    Abv {
        #[arg(long)]
        og: f64,
        #[arg(long)]
        fg: f64,
        #[arg(short, long, value_enum, default_value_t = MethodArg::Linear)]
        method: MethodArg,
        /// Reject tiered results outside the duty table's bounds
        #[arg(long)]
        sanity_check: bool,
    },
    /// Interactive demo with a reference recipe
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Linear,
    Ritchie,
    TieredUk,
}

impl From<MethodArg> for AbvMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Linear => AbvMethod::Linear,
            MethodArg::Ritchie => AbvMethod::Ritchie,
            MethodArg::TieredUk => AbvMethod::TieredUk,
        }
    }
}

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("BREW_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let outcome = match args.command.unwrap_or(Command::Demo) {
        Command::Summary { recipe, settings, json } => run_summary(&recipe, settings.as_deref(), json),
        Command::Abv { og, fg, method, sanity_check } => run_abv(og, fg, method.into(), sanity_check),
        Command::Demo => run_demo(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        if let Some(brew_err) = e.downcast_ref::<BrewError>() {
            if let Ok(json) = serde_json::to_string_pretty(brew_err) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}

fn load_recipe(path: &Path) -> Result<Recipe> {
    let json = fs::read_to_string(path).with_context(|| format!("reading recipe {}", path.display()))?;
    Ok(Recipe::from_json(&json)?)
}

fn load_settings(path: Option<&Path>) -> Result<BrewSettings> {
    let Some(path) = path else {
        return Ok(BrewSettings::default());
    };
    let json = fs::read_to_string(path).with_context(|| format!("reading settings {}", path.display()))?;
    Ok(BrewSettings::from_json(&json)?)
}

fn run_summary(recipe_path: &Path, settings_path: Option<&Path>, json: bool) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;
    let settings = load_settings(settings_path)?;
    debug!(?settings, "loaded settings");

    let summary = calculate(&recipe, &settings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&summary, &settings);
    }
    Ok(())
}

fn run_abv(og: f64, fg: f64, method: AbvMethod, sanity_check: bool) -> Result<()> {
    let abv = method.estimate(og, fg, sanity_check)?;
    println!("{:.2}% ABV ({})", abv, method);
    Ok(())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn run_demo() -> Result<()> {
    println!("Brew Maths - Recipe Calculator");
    println!("==============================");
    println!();

    let volume_l = prompt_f64("Enter target volume (L) [23.0]: ", 23.0);
    let efficiency = prompt_f64("Enter mash efficiency [0.75]: ", 0.75);

    let recipe = Recipe::new()
        .with_grist(
            Grist::of_type(GristType::SecondaryMalt, 60.0, 265.0, 3.0, Fermentability::UseAttenuation, 4500.0)
                .with_name("Amber Malt"),
        )
        .with_grist(
            Grist::of_type(GristType::CopperSugar, 50.0, 370.0, 30.0, Fermentability::Fixed(1.0), 400.0)
                .with_name("Sugar, Demerara"),
        )
        .with_hop(HopAddition::new(0.076, 40.0, 90.0).with_name("Challenger"));

    let settings = BrewSettings::default()
        .with_target_volume(volume_l)
        .with_efficiency(efficiency);

    println!();
    let summary = calculate(&recipe, &settings)?;
    print_report(&summary, &settings);

    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_report(summary: &RecipeSummary, settings: &BrewSettings) {
    println!("═══════════════════════════════════════");
    println!("  RECIPE SUMMARY");
    println!("═══════════════════════════════════════");
    println!();
    println!("Brew house:");
    println!("  Volume:     {:.1} L (boil {:.1} L)", settings.target_volume_l, settings.effective_boil_volume_l());
    println!("  Efficiency: {:.0}%", settings.efficiency * 100.0);
    println!();
    println!("Grist ({:.0} g):", summary.total_mass_g);
    for grist in &summary.grists {
        println!(
            "  {:<24} {:>7.0} g {:>5.1}%  {:>5.1}°  {:>5.1} EBC",
            grist.name.as_deref().unwrap_or("(unnamed)"),
            grist.mass_g,
            grist.mass_fraction * 100.0,
            grist.gravity_degrees,
            grist.color_ebc
        );
    }
    println!();
    println!("Hops:");
    for hop in &summary.hops {
        println!(
            "  {:<24} util {:>5.3}  {:>6.1} IBU",
            hop.name.as_deref().unwrap_or("(unnamed)"),
            hop.utilization,
            hop.ibu
        );
    }
    println!();
    println!("Results:");
    println!("  OG:          {:.3} ({:.1}°)", summary.original_gravity_sg, summary.original_gravity_degrees);
    println!("  FG:          {:.3} ({:.1}°)", summary.final_gravity_sg, summary.final_gravity_degrees);
    println!("  ABV:         {:.2}% ({})", summary.abv_percent, summary.abv_method);
    println!("  Bitterness:  {:.1} IBU", summary.total_ibu);
    println!(
        "  Colour:      {:.1} EBC / {:.1} SRM {}",
        summary.color_ebc,
        summary.color_srm,
        summary.color_rgb.to_hex()
    );
    println!("  Mash liquor: {:.1} L", summary.mash_liquor_l);
    println!("═══════════════════════════════════════");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_abv_command() {
        let args = CliArgs::try_parse_from(["brew", "abv", "--og", "1.045", "--fg", "1.010", "-m", "tiered-uk"]).unwrap();
        match args.command {
            Some(Command::Abv { og, fg, method, sanity_check }) => {
                assert_eq!(og, 1.045);
                assert_eq!(fg, 1.010);
                assert_eq!(method, MethodArg::TieredUk);
                assert!(!sanity_check);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_summary_command() {
        let args = CliArgs::try_parse_from(["brew", "-vv", "summary", "ale.json", "--settings", "house.json", "--json"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Some(Command::Summary { recipe, settings, json }) => {
                assert_eq!(recipe, PathBuf::from("ale.json"));
                assert_eq!(settings, Some(PathBuf::from("house.json")));
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let args = CliArgs::try_parse_from(["brew"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_method_arg_conversion() {
        assert_eq!(AbvMethod::from(MethodArg::Ritchie), AbvMethod::Ritchie);
        assert_eq!(AbvMethod::from(MethodArg::TieredUk), AbvMethod::TieredUk);
    }

    #[test]
    fn test_missing_settings_uses_defaults() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, BrewSettings::default());
    }

    #[test]
    fn test_missing_recipe_file_reports_path() {
        let err = load_recipe(Path::new("/nonexistent/recipe.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/recipe.json"));
    }
}
