use crate::infra::build_scoring_service;
use clap::Args;
use lead_scoring::config::AppConfig;
use lead_scoring::error::AppError;
use lead_scoring::telemetry;
use lead_scoring::workflows::leads::{IntentLabel, Offer, ScoreResult};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Offer definition as JSON (name, value_props, ideal_use_cases)
    #[arg(long)]
    pub(crate) offer: PathBuf,
    /// Lead CSV export: header row, then name, role, company, industry, location, bio
    #[arg(long)]
    pub(crate) leads: PathBuf,
    /// Write the results CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Skip the external classifier; every lead receives the fallback score
    #[arg(long)]
    pub(crate) offline: bool,
    /// Override the number of leads sent to the classifier per request
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub(crate) batch_size: Option<u16>,
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        offer,
        leads,
        output,
        offline,
        batch_size,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(batch_size) = batch_size {
        config.classifier.batch_size = usize::from(batch_size);
    }
    telemetry::init(&config.telemetry)?;

    let offer = load_offer(&offer)?;
    let service = build_scoring_service(&config.classifier, offline)?;
    service.save_offer(offer)?;
    service.upload_leads(File::open(&leads)?)?;

    let results = service.score().await?;
    let csv = service.export_csv().await?;

    match output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            render_summary(&results);
            println!("\nResults written to {}", path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}

fn load_offer(path: &Path) -> Result<Offer, AppError> {
    let file = File::open(path)?;
    serde_json::from_reader(file)
        .map_err(|err| AppError::Input(format!("offer file {}: {err}", path.display())))
}

fn render_summary(results: &[ScoreResult]) {
    println!("Lead scoring summary ({} leads)", results.len());

    for label in [IntentLabel::High, IntentLabel::Medium, IntentLabel::Low] {
        let count = results.iter().filter(|result| result.intent == label).count();
        println!("- {}: {}", label.label(), count);
    }

    if let Some(top) = results.iter().max_by_key(|result| result.score) {
        println!(
            "Top lead: {} ({}, {}) score {} [{}]",
            top.name, top.role, top.company, top.score, top.reasoning
        );
    }
}
