use aigc::*;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::AppPaths;
use human_panic::setup_panic;

fn main() -> Result<()> {
    setup_panic!();

    // reqwest is built with rustls-no-provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    let colored = ui::should_color();

    let result = AppPaths::discover().and_then(|paths| commands::run(&cli, &paths, colored));
    if let Err(e) = result {
        tracing::error!("{}", e);
        ui::error(&e.to_string(), colored);
        if let Some(suggestion) = e.suggestion() {
            println!();
            println!("{}", ui::info(suggestion, colored));
        }
        std::process::exit(1);
    }

    Ok(())
}
