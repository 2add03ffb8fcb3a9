//! Flavornet CLI: offline access to the threshold/rescale transform and
//! the dashboard figures, without starting the server.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use flavornet::dashboard::validate_rescale_max;
use flavornet::{controls, filter_by_threshold, render, rescale, DashboardConfig, DataContext, Selection};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flavornet-cli", version, about = "Flavornet ingredient network CLI")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "FLAVORNET_CONFIG")]
    config: Option<PathBuf>,

    /// Edge table CSV
    #[arg(long, global = true, env = "FLAVORNET_EDGES")]
    edges: Option<PathBuf>,

    /// Per-cuisine occurrence CSV
    #[arg(long, global = true)]
    cuisines: Option<PathBuf>,

    /// Per-country occurrence CSV
    #[arg(long, global = true)]
    regions: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List edges above a threshold with their rescaled weights
    Edges {
        /// Keep edges whose weight exceeds this value
        #[arg(long, default_value_t = 0.0)]
        threshold: f64,

        /// Rescale target maximum (weights land in [0, k - 1])
        #[arg(long)]
        k: Option<f64>,
    },
    /// Render the dashboard figures as JSON
    Render {
        #[arg(long, default_value_t = 0.0)]
        threshold: f64,

        /// Ingredient to highlight
        #[arg(long)]
        ingredient: Option<String>,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List dropdown ingredients and slider marks
    Ingredients,
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(edges) = cli.edges {
        config.data.edges = edges;
    }
    if cli.cuisines.is_some() {
        config.data.cuisines = cli.cuisines;
    }
    if cli.regions.is_some() {
        config.data.regions = cli.regions;
    }

    let ctx = DataContext::load(&config.data)?;

    match cli.command {
        Commands::Edges { threshold, k } => {
            let k = validate_rescale_max(k.unwrap_or(config.render.rescale_max))?;
            run_edges(&ctx, threshold, k, &cli.format)
        }
        Commands::Render {
            threshold,
            ingredient,
            output,
        } => {
            config.render.validate()?;
            let selection = Selection::new(threshold, ingredient)?;
            let payload = render(&selection, &ctx, &config.render);
            let json = serde_json::to_string_pretty(&payload)?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{}", json),
            }
            Ok(())
        }
        Commands::Ingredients => run_ingredients(&ctx, &cli.format),
    }
}

fn run_edges(
    ctx: &DataContext,
    threshold: f64,
    k: f64,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = Selection::new(threshold, None)?;
    let filtered = filter_by_threshold(&ctx.edges, selection.threshold());
    let rescaled = rescale(&filtered, k);

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = filtered
                .iter()
                .zip(&rescaled)
                .map(|(e, r)| {
                    serde_json::json!({
                        "source": e.source,
                        "target": e.target,
                        "weight": e.weight,
                        "rescaled": r.weight,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["source", "target", "weight", "rescaled"])?;
            for (e, r) in filtered.iter().zip(&rescaled) {
                writer.write_record([
                    e.source.as_str(),
                    e.target.as_str(),
                    e.weight.to_string().as_str(),
                    r.weight.to_string().as_str(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if filtered.is_empty() {
                println!("(no edges above {})", threshold);
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["source", "target", "weight", "rescaled"]);
            for (e, r) in filtered.iter().zip(&rescaled) {
                table.add_row(vec![
                    e.source.clone(),
                    e.target.clone(),
                    e.weight.to_string(),
                    format!("{:.3}", r.weight),
                ]);
            }

            println!("{}", table);
            println!("{} edge(s) of {}", filtered.len(), ctx.edges.len());
        }
    }

    Ok(())
}

fn run_ingredients(ctx: &DataContext, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let controls = controls(ctx);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&controls)?);
        }
        _ => {
            for name in &controls.ingredients {
                println!("{}", name);
            }
            println!(
                "threshold marks: {}",
                controls
                    .threshold
                    .marks
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    Ok(())
}
