use anyhow::Result;
use clap::Parser;
use domain_rater::{config::LogFormat, logging, rate_url, web::dtos::RatingResponse};

/// Rate the quality of a single web page.
#[derive(Debug, Parser)]
#[command(name = "domain-rater", version, about)]
struct Cli {
    /// URL of the page to rate
    url: String,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    logging::init_tracing(log_format)?;

    let outcome = rate_url(cli.url.trim()).await;
    let response = RatingResponse::from(&outcome);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if let Some(notice) = &response.notice {
        eprintln!("{notice}");
    }
    println!("Domain Quality Rating: {}", response.label);
    println!("Metadata:");
    println!("{}", serde_json::to_string_pretty(&response.metadata)?);
    if !response.raw_content.is_empty() {
        println!();
        println!("Main Content:");
        println!("{}", response.raw_content);
    }

    Ok(())
}
