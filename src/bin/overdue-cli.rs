use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "overdue-cli")]
#[command(about = "Client for the overdue speaker logger", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report a speaker's overdue time
    Log {
        #[arg(short, long)]
        name: String,

        /// Seconds over (positive) or under (negative) the allotted time
        #[arg(short, long, allow_negative_numbers = true)]
        overdue_time: f64,
    },
    /// Check that the logger is up
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Log { name, overdue_time } => {
            client
                .post(format!("{}/log_overdue_speaker", base))
                .json(&json!({ "name": name, "overdueTime": seconds(overdue_time) }))
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

/// Whole seconds go over the wire as JSON integers so they log without a
/// trailing `.0`.
fn seconds(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: logger returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
