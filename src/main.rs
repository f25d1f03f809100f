use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use smart_week_rs::cli::{Cli, Command, PlanArgs};
use smart_week_rs::config::resolve_source;
use smart_week_rs::data::{load_dataset, TableSource};
use smart_week_rs::error::Result;
use smart_week_rs::interface::{
    collect_preferences, display_dataset_report, display_shopping_list, display_weekly_plan,
};
use smart_week_rs::planner::generate_plan;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let source = resolve_source(cli.source.data_dir.as_deref(), &cli.source.config)?;

    match command {
        Command::Plan(args) => cmd_plan(source.as_ref(), &args).await,
        Command::Check => cmd_check(source.as_ref()).await,
    }
}

/// Load every table, then plan the week and price it.
async fn cmd_plan(source: &dyn TableSource, args: &PlanArgs) -> Result<()> {
    eprintln!("Loading recipes...");
    let dataset = load_dataset(source).await?;

    let prefs = if args.interactive {
        collect_preferences(&dataset.ingredient_names())?
    } else {
        args.preferences()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = generate_plan(&dataset, &prefs, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_weekly_plan(&report.plan);
        display_shopping_list(&report.shopping_list);
    }

    Ok(())
}

/// Load every table and report problems worth fixing in the sheet.
async fn cmd_check(source: &dyn TableSource) -> Result<()> {
    eprintln!("Loading recipes...");
    let dataset = load_dataset(source).await?;
    display_dataset_report(&dataset);
    Ok(())
}
