use std::path::PathBuf;

use clap::Args;

use crate::agents::AgentKind;
use crate::cli::OutputFormat;
use crate::scan::{self, ScanReport, ScanRequest};

#[derive(Args)]
pub struct ScanArgs {
    /// Input file to scan
    #[arg(required = true)]
    pub input: PathBuf,

    /// Agent to scan with
    #[arg(short = 'a', long, value_enum, default_value = "tfidf")]
    pub agent: AgentKind,

    /// Similarity variant (tfidf: CosineSim, ScoreSim; Ngram: CosineSim,
    /// DiceSim, BigramCosineSim; ignored for the other agents)
    #[arg(short = 's', long)]
    pub similarity: Option<String>,

    /// Path to a custom license catalog file
    #[arg(short = 'l', long = "licenses")]
    pub licenses: Option<PathBuf>,

    /// Path to a custom n-gram keyword file (Ngram agent only)
    #[arg(short = 'j', long = "ngram-json")]
    pub ngram_json: Option<PathBuf>,
}

/// Execute scan subcommand
///
/// # Errors
///
/// Returns an error if selection parameters are invalid or the document or
/// catalog cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut request = ScanRequest::new(&args.input, args.agent).with_verbose(verbose);
    if let Some(similarity) = &args.similarity {
        request = request.with_similarity(similarity);
    }
    if let Some(licenses) = &args.licenses {
        request = request.with_catalog(licenses);
    }
    if let Some(ngram_json) = &args.ngram_json {
        request = request.with_ngram_index(ngram_json);
    }

    let report = scan::run(&request)?;

    match format {
        OutputFormat::Text => print_text_report(&report, args.agent),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

fn print_text_report(report: &ScanReport, agent: AgentKind) {
    println!("File: {}", report.file.display());
    println!("Agent: {agent}");

    if report.results.is_empty() {
        println!("\nNo matching licenses found.");
        return;
    }

    for (i, record) in report.results.iter().enumerate() {
        let shortname = if record.shortname.is_empty() {
            "(no match)"
        } else {
            record.shortname.as_str()
        };
        println!("\n#{} {}", i + 1, shortname);
        println!("   Score: {:.4} ({})", record.sim_score, record.sim_type);
        if !record.description.is_empty() {
            println!("   Note: {}", record.description);
        }
    }

    println!();
}
