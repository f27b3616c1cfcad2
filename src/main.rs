use std::fs;
use std::fs::File;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use copilot_readiness::assessment::{
    parse_answer_records, AssessmentCatalog, AssessmentService, AssessmentSnapshot,
    JsonFileStore, OrganizationInfo, Phase, RoiProjection,
};
use copilot_readiness::assessment::total_annual_value;
use copilot_readiness::config::AppConfig;
use copilot_readiness::error::AppError;
use copilot_readiness::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Copilot Readiness Assessment",
    about = "Score and plan Microsoft Copilot adoption for GxP-regulated organizations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record the organization profile used for ROI projections
    Setup(SetupArgs),
    /// List the assessment sections, questions, and answer options
    Questions,
    /// Record a single answer for a question
    Answer(AnswerArgs),
    /// Import answers from a CSV file (Question ID,Answer)
    ImportAnswers(ImportAnswersArgs),
    /// Rate a catalog risk factor for your organization
    RateRisk(RateRiskArgs),
    /// Show the readiness scorecard
    Score,
    /// Show ROI projections for the catalog use cases
    Roi,
    /// Show the phased implementation roadmap
    Roadmap,
    /// Show the regulatory compliance mapping
    Compliance,
    /// Export the full assessment as a JSON document
    Export(ExportArgs),
    /// Clear all stored assessment state
    Reset,
}

#[derive(Args, Debug)]
struct SetupArgs {
    /// Organization name
    #[arg(long)]
    name: String,
    /// Organization size, e.g. "500-1000 employees"
    #[arg(long)]
    size: String,
    /// Average fully-burdened hourly rate in dollars
    #[arg(long, default_value_t = 150.0)]
    hourly_rate: f64,
}

#[derive(Args, Debug)]
struct AnswerArgs {
    /// Question identifier, e.g. data_classification
    question_id: String,
    /// Chosen option value (1-4)
    value: u8,
}

#[derive(Args, Debug)]
struct ImportAnswersArgs {
    /// Path to the CSV file
    path: PathBuf,
}

#[derive(Args, Debug)]
struct RateRiskArgs {
    /// Risk identifier, e.g. hallucination
    risk_id: String,
    /// Likelihood rating (1-5)
    #[arg(long)]
    likelihood: u8,
    /// Impact rating (1-5)
    #[arg(long)]
    impact: u8,
    /// Mitigation notes specific to your organization
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Directory to write the document to (defaults to the data directory)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let store = JsonFileStore::open(&config.storage.data_dir)?;
    let service = AssessmentService::new(store);

    match cli.command {
        Command::Setup(args) => {
            service.set_organization(OrganizationInfo {
                name: args.name,
                size: args.size,
                hourly_rate: args.hourly_rate,
            })?;
            println!("Organization profile saved.");
        }
        Command::Questions => render_questions(service.catalog()),
        Command::Answer(args) => {
            service.record_answer(&args.question_id, args.value)?;
            let progress = service.snapshot()?.progress;
            println!(
                "Recorded. {} of {} questions answered ({}%).",
                progress.completed, progress.total, progress.percentage
            );
        }
        Command::ImportAnswers(args) => {
            let file = File::open(&args.path)?;
            let records = parse_answer_records(file)?;
            let applied = service.import_answers(&records)?;
            println!("Imported {applied} answer(s) from {}.", args.path.display());
        }
        Command::RateRisk(args) => {
            service.rate_risk(&args.risk_id, args.likelihood, args.impact, args.notes)?;
            println!("Risk rating saved.");
        }
        Command::Score => render_score(&service.snapshot()?),
        Command::Roi => render_roi(&service.roi_projections()?),
        Command::Roadmap => render_roadmap(&service.roadmap()?),
        Command::Compliance => render_compliance(service.catalog()),
        Command::Export(args) => {
            let (document, file_name) = service.export(Utc::now())?;
            let out_dir = args.out.unwrap_or_else(|| config.storage.data_dir.clone());
            fs::create_dir_all(&out_dir)?;
            let path = out_dir.join(file_name);
            let body = serde_json::to_string_pretty(&document)?;
            fs::write(&path, body)?;
            info!(path = %path.display(), "assessment exported");
            println!("Assessment exported to {}", path.display());
        }
        Command::Reset => {
            service.reset()?;
            println!("All assessment state cleared.");
        }
    }

    Ok(())
}

fn render_questions(catalog: &AssessmentCatalog) {
    for section in catalog.sections() {
        println!("{} [{}]", section.title, section.id);
        for question in &section.questions {
            println!("  {} — {}", question.id, question.prompt);
            for option in &question.options {
                println!("    {}. {}", option.value, option.label);
            }
        }
        println!();
    }

    println!("Risk factors");
    for risk in catalog.risks() {
        println!(
            "  {} — {} (severity {})",
            risk.id,
            risk.name,
            risk.severity.label()
        );
    }
}

fn render_score(snapshot: &AssessmentSnapshot) {
    println!("Readiness scorecard");
    println!(
        "Progress: {} of {} questions answered ({}%)",
        snapshot.progress.completed, snapshot.progress.total, snapshot.progress.percentage
    );
    println!(
        "Overall: {}% ({})",
        snapshot.overall_score, snapshot.readiness_label
    );

    println!("\nSections");
    for section in &snapshot.section_scores {
        println!(
            "- {}: {}% ({})",
            section.title, section.score, section.readiness_label
        );
    }

    println!("\nRisks");
    for risk in &snapshot.risk_evaluations {
        if risk.assessed {
            println!(
                "- {}: score {} ({}), inherent severity {}",
                risk.name, risk.score, risk.band_label, risk.severity_label
            );
        } else {
            println!(
                "- {}: not yet rated, inherent severity {}",
                risk.name, risk.severity_label
            );
        }
    }
}

fn render_roi(projections: &[RoiProjection]) {
    if projections.is_empty() {
        println!("No ROI projections: set a positive hourly rate with `setup` first.");
        return;
    }

    println!("ROI projections");
    for projection in projections {
        println!(
            "- {} ({} per year, {} risk)",
            projection.name,
            projection.frequency.label(),
            projection.risk_level.label()
        );
        println!(
            "  time saved {:.1}h, annual value ${:.0}, implementation ${:.0}, net ${:.0}, ROI {:.0}%",
            projection.time_saved_hours,
            projection.annual_value,
            projection.implementation_cost,
            projection.net_annual_value,
            projection.roi_percent
        );
    }

    println!(
        "\nTotal estimated annual value: ${:.0}",
        total_annual_value(projections)
    );
}

fn render_roadmap(phases: &[Phase]) {
    println!("Implementation roadmap");
    for phase in phases {
        println!("\nPhase {} — {} ({})", phase.number, phase.title, phase.duration);
        for activity in &phase.activities {
            println!("  - {activity}");
        }
    }
}

fn render_compliance(catalog: &AssessmentCatalog) {
    println!("Regulatory compliance mapping");
    for entry in catalog.compliance_map() {
        println!("- [{}] {}", entry.framework, entry.requirement);
        println!("  control: {}", entry.control);
        println!("  assessed by section: {}", entry.section_id);
    }
}
