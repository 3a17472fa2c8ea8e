//! nurture-roi: lead nurturing ROI projections from the command line.
//!
//! Builds an input record (defaults, then an optional JSON file, a share
//! query, and a preset), runs the projection, and renders it.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use nurture_core::config::{AppConfig, OutputFormat};
use nurture_core::{CalculatorInputs, CalculatorResults};
use nurture_engine::{calculate, Preset, ScenarioBoard};
use nurture_integrations::format::currency;
use nurture_integrations::{
    calculate_lead_priority, contacts_endpoint, export_csv, inputs_from_query, mailto_link,
    share_url, ExportDocument, SendFoxContact, SlackMessage,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "nurture-roi")]
#[command(about = "Project the return on a lead nurturing program")]
#[command(version)]
struct Cli {
    /// JSON file with input fields (missing fields use defaults)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Share-link query string to overlay, e.g. "leads=800&lift=30"
    #[arg(long, global = true)]
    query: Option<String>,

    /// Scenario preset: best, realistic, worst
    #[arg(long, global = true)]
    preset: Option<Preset>,

    /// Emit logs as JSON
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the projection and print it (default)
    Calculate {
        /// Output format: summary, json, csv (overrides config)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Compare the best, realistic, and worst presets side by side
    Compare,

    /// Print a share link and a mail-to link for the inputs
    Share,

    /// Print the SendFox contact and Slack notification payloads for a lead
    Notify {
        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nurture_roi=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_inputs(cli: &Cli) -> anyhow::Result<CalculatorInputs> {
    let mut inputs = match &cli.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading input file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing input file {}", path.display()))?
        }
        None => CalculatorInputs::default(),
    };

    if let Some(query) = &cli.query {
        inputs = inputs_from_query(query, &inputs)?;
    }
    if let Some(preset) = cli.preset {
        info!(preset = preset.label(), "Applying preset");
        inputs = preset.apply(&inputs);
    }

    inputs.validate()?;
    Ok(inputs)
}

fn render_summary(results: &CalculatorResults) -> String {
    let mut out = String::new();
    out.push_str(&format!("Projected ROI:          {}%\n", results.roi));
    out.push_str(&format!(
        "Monthly revenue:        {} -> {} (+{})\n",
        currency(results.baseline_revenue),
        currency(results.nurtured_revenue),
        currency(results.revenue_surplus)
    ));
    out.push_str(&format!(
        "Total investment:       {}\n",
        currency(results.total_investment)
    ));
    out.push_str(&format!(
        "Sales velocity:         {}/day (baseline {}/day)\n",
        currency(results.sales_velocity),
        currency(results.sales_velocity_baseline)
    ));
    out.push_str(&format!(
        "Payback period:         {} months\n",
        results.payback_period_months
    ));
    out.push_str(&format!(
        "Break-even month:       {}\n",
        results.break_even_month
    ));
    out.push_str(&format!(
        "Lead quality / confidence: {}/100, {}%\n",
        results.lead_score, results.confidence_score
    ));
    out.push_str(&format!(
        "3-year projection:      {} (LTV {})\n",
        currency(results.three_year_projection),
        currency(results.lifetime_value)
    ));
    out.push_str("\nInsights:\n");
    for insight in &results.insights {
        out.push_str(&format!("  - {}\n", insight));
    }
    out
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let inputs = load_inputs(&cli)?;
    let command = cli.command.unwrap_or(Commands::Calculate { format: None });

    match command {
        Commands::Calculate { format } => {
            let results = calculate(&inputs);
            let format = format.unwrap_or(config.output.format);
            info!(?format, roi = results.roi, "Projection ready");

            let rendered = match format {
                OutputFormat::Summary => render_summary(&results),
                OutputFormat::Json => {
                    let document = ExportDocument::new(&inputs, &results, Utc::now());
                    if config.output.pretty {
                        serde_json::to_string_pretty(&document)?
                    } else {
                        serde_json::to_string(&document)?
                    }
                }
                OutputFormat::Csv => export_csv(&inputs, &results),
            };
            println!("{}", rendered);
        }

        Commands::Compare => {
            let mut board = ScenarioBoard::new(config.scenarios.max_saved.max(Preset::ALL.len()));
            for preset in Preset::ALL {
                board.load_preset(preset, &inputs)?;
            }

            println!(
                "{:<16} {:>10} {:>16} {:>10} {:>6}",
                "Scenario", "ROI", "Surplus/mo", "Payback", "Score"
            );
            for row in board.comparison() {
                println!(
                    "{:<16} {:>9}% {:>16} {:>10} {:>6}",
                    row.name,
                    row.roi,
                    currency(row.revenue_surplus),
                    row.payback_period_months,
                    row.lead_score
                );
            }
            if let Some(best) = board.best_by_roi() {
                println!("\nHighest ROI: {}", best.name);
            }
        }

        Commands::Share => {
            let results = calculate(&inputs);
            let url = share_url(&config.share.base_url, &inputs)?;
            println!("{}", url);
            println!("{}", mailto_link(&results, &url));
        }

        Commands::Notify {
            email,
            first_name,
            last_name,
        } => {
            let results = calculate(&inputs);
            let integrations = &config.integrations;
            if !integrations.sendfox_configured() {
                warn!("SendFox token not configured; printing payload only");
            }
            if !integrations.slack_configured() {
                warn!("Slack webhook not configured; printing payload only");
            }

            let contact = SendFoxContact::from_results(
                &email,
                first_name.as_deref(),
                last_name.as_deref(),
                &inputs,
                &results,
                &integrations.sendfox_list_ids,
            )?;
            let calculator_url = share_url(&config.share.base_url, &inputs)?;
            let message =
                SlackMessage::lead_notification(&email, &results, &inputs, &calculator_url);

            let priority = calculate_lead_priority(&results);
            let payloads = serde_json::json!({
                "priority": priority,
                "color": priority.color(),
                "autoNotify": integrations.enable_auto_notifications,
                "sendfox": {
                    "endpoint": contacts_endpoint(),
                    "contact": contact,
                },
                "slack": message,
            });
            println!("{}", serde_json::to_string_pretty(&payloads)?);
        }
    }

    Ok(())
}
