use anyhow::{Context, Result};
use extract::{IntelligenceExtractor, SiteRequest, prompt};
use tokio::fs;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("extract") if args.len() == 4 => run_extract(&args[2], &args[3]).await,
        Some("prompt") if args.len() == 4 => run_prompt(&args[2], &args[3]).await,
        _ => {
            eprintln!("Usage:");
            eprintln!("  siteintel extract <sites.json> <response.txt>");
            eprintln!("  siteintel prompt <sites.json> <system_prompt.txt>");
            std::process::exit(2)
        }
    }
}

async fn read_sites(path: &str) -> Result<Vec<SiteRequest>> {
    let raw = fs::read_to_string(path)
        .await
        .context(format!("Failed to read sites file: {path}"))?;
    serde_json::from_str(&raw).context("Sites file is not a valid JSON array of site requests")
}

/// Run the extraction pipeline over a saved model response and print the
/// structured records as JSON.
async fn run_extract(sites_path: &str, response_path: &str) -> Result<()> {
    let sites = read_sites(sites_path).await?;
    let raw = fs::read_to_string(response_path)
        .await
        .context(format!("Failed to read response file: {response_path}"))?;

    let records = IntelligenceExtractor::new().extract(&raw, &sites)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Print the rendered research prompt for a batch of sites.
async fn run_prompt(sites_path: &str, prompt_path: &str) -> Result<()> {
    let sites = read_sites(sites_path).await?;
    let system_prompt = fs::read_to_string(prompt_path)
        .await
        .context(format!("Failed to read prompt file: {prompt_path}"))?;

    println!(
        "{}",
        prompt::build_research_prompt(system_prompt.trim_end(), &sites)
    );
    Ok(())
}
