use crate::infra::{parse_evidence_image, AppServices};
use chrono::Utc;
use clap::Args;
use jobcheck::config::AppConfig;
use jobcheck::error::AppError;
use jobcheck::workflows::dashboard::{
    collect_summary, DashboardBaseline, DashboardSummary, SeedActivity,
};
use jobcheck::workflows::reports::{AttachmentDescriptor, ReportSubmission};
use jobcheck::workflows::verification::{
    CheckResult, EvidenceImage, JobSubmission, VerificationOutcome,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct VerifyArgs {
    /// Company or organization named in the posting
    #[arg(long)]
    pub(crate) company: String,
    /// Job or internship link
    #[arg(long)]
    pub(crate) link: Option<String>,
    /// Recruiter e-mail address
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Job description text
    #[arg(long, conflicts_with = "description_file")]
    pub(crate) description: Option<String>,
    /// Read the job description from a file
    #[arg(long)]
    pub(crate) description_file: Option<PathBuf>,
    /// Evidence screenshot as NAME:SIZE_BYTES (repeatable)
    #[arg(long = "image", value_parser = parse_evidence_image)]
    pub(crate) images: Vec<EvidenceImage>,
    /// Seed for reproducible scoring (falls back to APP_SCORING_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Print the summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for reproducible scoring (falls back to APP_SCORING_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let VerifyArgs {
        company,
        link,
        email,
        description,
        description_file,
        images,
        seed,
        json,
    } = args;

    let config = AppConfig::load()?;
    let job_description = match description_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => description,
    };

    let services = AppServices::in_memory(seed.or(config.scoring.seed));
    let record = services.verifications.verify(JobSubmission {
        company_name: company,
        job_link: link,
        recruiter_email: email,
        job_description,
        images,
    })?;

    let outcome = record.outcome_view();
    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_outcome(&outcome);
    }
    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let services = AppServices::in_memory(None);
    let summary = dashboard_for(&services)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_dashboard(&summary);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let services = AppServices::in_memory(args.seed.or(config.scoring.seed));

    println!("Job verification demo");

    for submission in [legitimate_posting(), fee_scam_posting()] {
        let record = services.verifications.verify(submission)?;
        println!();
        render_outcome(&record.outcome_view());
    }

    let report = services.reports.submit(ReportSubmission {
        company_name: "QuickHire Tech".to_string(),
        job_link: Some("http://quickhire-jobs.xyz/apply".to_string()),
        description: "Asked for registration fees before the interview".to_string(),
        attachments: vec![AttachmentDescriptor {
            file_name: "payment-request.png".to_string(),
            size_bytes: 184_320,
        }],
        additional_info: Some("Recruiter only replied from a gmail address.".to_string()),
    })?;
    let receipt = report.receipt();
    println!(
        "\nReport {} filed for {} ({})",
        receipt.report_id.0, receipt.company_name, receipt.status_label
    );
    println!("{}", receipt.acknowledgement);
    println!(
        "Moderation queue: {} ticket(s) waiting",
        services.moderation.tickets().len()
    );

    println!();
    render_dashboard(&dashboard_for(&services)?);
    Ok(())
}

fn dashboard_for(services: &AppServices) -> Result<DashboardSummary, AppError> {
    Ok(collect_summary(
        services.verifications.as_ref(),
        services.reports.as_ref(),
        &DashboardBaseline::default(),
        &SeedActivity::default(),
        Utc::now(),
    )?)
}

fn legitimate_posting() -> JobSubmission {
    JobSubmission {
        company_name: "Infosys".to_string(),
        job_link: Some("https://www.linkedin.com/jobs/view/3812345".to_string()),
        recruiter_email: Some("campus.hiring@infosys.com".to_string()),
        job_description: Some(
            "Systems engineer trainee for the 2025 batch. Online assessment followed by a technical interview."
                .to_string(),
        ),
        images: Vec::new(),
    }
}

fn fee_scam_posting() -> JobSubmission {
    JobSubmission {
        company_name: "QuickHire Tech".to_string(),
        job_link: Some("http://quickhire-jobs.xyz/apply".to_string()),
        recruiter_email: Some("quickhire.hr@gmail.com".to_string()),
        job_description: Some(
            "Immediate hiring! Limited seats. Pay fees of Rs 1500 as registration fee.".to_string(),
        ),
        images: vec![EvidenceImage {
            file_name: "offer-letter.jpg".to_string(),
            size_bytes: 212_000,
        }],
    }
}

fn render_outcome(outcome: &VerificationOutcome) {
    println!(
        "{} | trust score {}/100 | {}",
        outcome.company_name, outcome.score, outcome.verdict_label
    );
    println!("{}", outcome.advisory);

    if let Some(website) = &outcome.website_checks {
        println!("Website checks:");
        render_check("secure connection", &website.is_secure);
        render_check("domain age", &website.is_established);
        render_check("suspicious patterns", &website.is_suspicious);
    }

    if let Some(email) = &outcome.email_checks {
        println!("Email checks:");
        render_check("provider", &email.is_free_email);
        render_check("company match", &email.matches_company);
    }

    if let Some(description) = &outcome.description_checks {
        println!(
            "Description: {} risk ({} red flag(s))",
            description.risk_level.label(),
            description.flags.len()
        );
        for flag in &description.flags {
            println!("  - \"{flag}\"");
        }
    }

    if let Some(analysis) = &outcome.image_analysis {
        println!(
            "Images: {} analyzed | {} | {}% confidence",
            outcome.images_analyzed,
            if analysis.suspicious_content {
                "suspicious content detected"
            } else {
                "no suspicious content"
            },
            analysis.confidence
        );
    }

    println!(
        "Model prediction: {} ({}% confidence)",
        outcome.model_prediction.prediction.label(),
        outcome.model_prediction.confidence
    );
}

fn render_check(name: &str, check: &CheckResult) {
    let marker = if check.passed { "ok" } else { "!!" };
    println!("  [{marker}] {name}: {}", check.message);
}

fn render_dashboard(summary: &DashboardSummary) {
    println!("Dashboard");
    for card in &summary.stats {
        println!(
            "- {}: {} ({} from last month)",
            card.label, card.display_value, card.change
        );
    }

    println!("\nRecent verifications");
    for view in &summary.recent_verifications {
        println!(
            "- {} | {} | {} | {}",
            view.company_name, view.score, view.verdict_label, view.age_label
        );
    }

    println!("\nRecently reported");
    for company in &summary.reported_companies {
        println!(
            "- {} ({} reports) | {} | {}",
            company.company_name, company.reports, company.reason, company.age_label
        );
    }

    println!("\nTips to stay safe");
    for tip in &summary.safety_tips {
        println!("- {tip}");
    }
}
