use clap::{Args, Parser, Subcommand};
use hf_analysis::{AnalysisConfig, ChannelInputs, analyze};
use hf_results::{AnalysisHistory, ExportDocument, render_report};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HydroFlow CLI - Open-channel hydraulics analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The five channel inputs, defaulting to the reference channel.
#[derive(Args)]
struct InputArgs {
    /// Discharge Q (m³/s)
    #[arg(long, default_value_t = 2.0)]
    q: f64,
    /// Channel width b (m)
    #[arg(long, default_value_t = 1.5)]
    b: f64,
    /// Bed slope S0
    #[arg(long, default_value_t = 0.001)]
    s0: f64,
    /// Manning roughness n
    #[arg(long, default_value_t = 0.025)]
    n: f64,
    /// Upstream depth y1 (m)
    #[arg(long, default_value_t = 0.2)]
    y1: f64,
}

impl InputArgs {
    fn to_inputs(&self) -> ChannelInputs {
        ChannelInputs::new(self.q, self.b, self.s0, self.n, self.y1)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run an analysis and print the text report
    Analyze {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the full result as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// Emit the JSON export document (inputs + history of this run)
    Export {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { inputs, json } => cmd_analyze(&inputs.to_inputs(), json),
        Commands::Export { inputs, output } => cmd_export(&inputs.to_inputs(), output.as_deref()),
    }
}

fn run(inputs: &ChannelInputs) -> Result<hf_analysis::AnalysisResult, Box<dyn std::error::Error>> {
    for warning in inputs.warnings() {
        tracing::warn!("{warning}");
    }
    Ok(analyze(inputs, &AnalysisConfig::default())?)
}

fn cmd_analyze(inputs: &ChannelInputs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = run(inputs)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

fn cmd_export(
    inputs: &ChannelInputs,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = run(inputs)?;

    let mut history = AnalysisHistory::new();
    history.record(&result);

    let document = ExportDocument::new(*inputs, &history);
    let json = document.to_json_pretty()?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
