//! Check command implementation
//!
//! Resolves and validates the settings without simulating.

use tracing::info;

use crate::config::Settings;
use crate::Result;

/// Run the check command
pub fn run(settings: &Settings) -> Result<()> {
    let params = settings.simulation.to_parameters()?;
    let output = &settings.output;

    info!("Settings are valid");

    println!("\n┌──────────────┬──────────────────────────────┐");
    println!("│ Setting      │ Value                        │");
    println!("├──────────────┼──────────────────────────────┤");
    println!("│ n_paths      │ {:<28} │", params.n_paths());
    println!("│ n_steps      │ {:<28} │", params.n_steps());
    println!("│ maturity     │ {:<28} │", params.maturity());
    println!("│ rate         │ {:<28} │", params.rate());
    println!("│ volatility   │ {:<28} │", params.volatility());
    println!("│ spot         │ {:<28} │", params.spot());
    println!("│ seed         │ {:<28} │", settings.simulation.seed);
    println!("│ dt           │ {:<28} │", params.dt());
    println!("│ output dir   │ {:<28} │", output.dir.display());
    println!("│ figure size  │ {:<28} │", format!("{}x{}", output.width, output.height));
    println!("│ bins         │ {:<28} │", output.bins);
    println!("└──────────────┴──────────────────────────────┘");

    Ok(())
}
