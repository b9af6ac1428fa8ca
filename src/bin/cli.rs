//! Local front end: summarize a `.txt`/`.pdf` file or stdin from the terminal.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use summarizer::core::config::AppConfig;
use summarizer::core::models::SummaryResult;
use summarizer::features::{Summarizer, read_input_file};

#[derive(Parser)]
#[command(name = "summarizer-cli")]
#[command(version, about = "Summarize a text or PDF file with an AI completion service", long_about = None)]
struct Cli {
    /// File to summarize (`.txt` or `.pdf`); reads stdin when omitted or `-`
    file: Option<PathBuf>,
    /// Print the JSON response body instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let text = match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            read_input_file(path).map_err(|e| anyhow!(e.user_message()))?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let config = AppConfig::from_env().map_err(|e| anyhow!(e))?;
    let summarizer = Summarizer::from_config(config).map_err(|e| anyhow!(e.user_message()))?;

    let result = summarizer
        .summarize(&text)
        .await
        .map_err(|e| anyhow!(e.user_message()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &SummaryResult) {
    println!("Summary\n");
    println!("{}\n", result.summary);
    println!("Key Points\n");
    for (i, point) in result.key_points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}
