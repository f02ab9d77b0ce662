use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use truthweave::report::to_json_pretty;
use truthweave::{sessions_from_json, sessions_from_texts, ReconcileConfig, Reconciler, ReportWriter, SubjectId};

#[derive(Parser, Debug)]
#[command(name = "truthweave")]
#[command(about = "Reconcile testimony sessions into a profile plus deception evidence")]
struct Args {
    /// Subject identifier; generated when omitted
    #[arg(long)]
    subject: Option<String>,

    /// JSON configuration file; environment overrides apply otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for transcript and report files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON array of `{session_index, text}` objects
    #[arg(long, conflicts_with = "transcripts")]
    sessions: Option<PathBuf>,

    /// Transcript files, one session each, in order
    transcripts: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "truthweave=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ReconcileConfig::from_json_str(&raw)?
        }
        None => ReconcileConfig::from_env(),
    };

    let sessions = if let Some(path) = &args.sessions {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        sessions_from_json(&raw)?
    } else {
        let texts = args
            .transcripts
            .iter()
            .map(|path| fs::read_to_string(path).with_context(|| format!("reading {}", path.display())))
            .collect::<anyhow::Result<Vec<_>>>()?;
        sessions_from_texts(texts)
    };

    let subject = SubjectId::from_optional(args.subject.as_deref());
    tracing::info!(subject = %subject, sessions = sessions.len(), "Reconciling sessions...");

    let reconciler = Reconciler::new(config)?;
    let active = reconciler.config();
    tracing::debug!(
        anchor = %active.experience_anchor,
        claim_style = %active.claim_style,
        threshold = active.inflation_threshold,
        "Using configuration"
    );
    let result = reconciler.reconcile(subject, &sessions)?;

    if let Some(dir) = &args.output_dir {
        let writer = ReportWriter::new(dir);
        for session in &sessions {
            let path = writer.write_transcript(&result.subject_id, session)?;
            tracing::info!("Saved transcript: {}", path.display());
        }
        let path = writer.write_report(&result)?;
        tracing::info!(fingerprint = %result.fingerprint()?, "Saved report: {}", path.display());
    }

    println!("{}", to_json_pretty(&result)?);
    Ok(())
}
