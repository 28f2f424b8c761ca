//! Verify command - compare form values against an act body.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use acta_core::{
    generate_suggestions, DocumentNature, FieldSuggestion, FormValues, MatchState,
    SuggestionSummary,
};

/// Arguments for the verify command.
#[derive(Args)]
pub struct VerifyArgs {
    /// File containing the act body text
    #[arg(required = true)]
    body: PathBuf,

    /// Nature of the act
    #[arg(short, long, value_enum)]
    nature: NatureArg,

    /// File containing the form values as JSON
    #[arg(short, long)]
    form: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum NatureArg {
    Birth,
    Marriage,
    Death,
}

impl From<NatureArg> for DocumentNature {
    fn from(nature: NatureArg) -> Self {
        match nature {
            NatureArg::Birth => DocumentNature::Birth,
            NatureArg::Marriage => DocumentNature::Marriage,
            NatureArg::Death => DocumentNature::Death,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// Human-readable summary
    Text,
}

/// JSON report shape: suggestions sorted by field path for stable output.
#[derive(Serialize)]
struct VerifyReport {
    nature: DocumentNature,
    suggestions: BTreeMap<String, FieldSuggestion>,
    summary: SuggestionSummary,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let body = fs::read_to_string(&args.body)
        .with_context(|| format!("cannot read act body: {}", args.body.display()))?;
    let form_json = fs::read_to_string(&args.form)
        .with_context(|| format!("cannot read form values: {}", args.form.display()))?;
    let form = FormValues::from_json(&form_json)?;

    let nature = DocumentNature::from(args.nature);
    info!("verifying a {} act against {}", nature, args.body.display());

    let suggestions = generate_suggestions(Some(&body), nature, &form);
    let summary = SuggestionSummary::of(&suggestions);

    let rendered = match args.format {
        OutputFormat::Json => {
            let report = VerifyReport {
                nature,
                suggestions: suggestions.into_iter().collect(),
                summary,
            };
            serde_json::to_string_pretty(&report)?
        }
        OutputFormat::Text => render_text(&suggestions, &summary),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_text(
    suggestions: &acta_core::SuggestionMap,
    summary: &SuggestionSummary,
) -> String {
    let mut lines = Vec::new();

    let sorted: BTreeMap<&String, &FieldSuggestion> = suggestions.iter().collect();
    for (path, suggestion) in sorted {
        let marker = match suggestion.state {
            MatchState::Identical => style("✓ IDENTICAL").green(),
            MatchState::Different => style("⚠ DIFFERENT").yellow(),
            MatchState::NotFound => style("? NOT_FOUND").dim(),
        };
        let detail = if suggestion.value.is_empty() {
            String::new()
        } else {
            format!(" \"{}\" (score {})", suggestion.value, suggestion.score)
        };
        lines.push(format!("{marker}  {path}{detail}"));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} matching, {} to review, {} not found ({} fields)",
        style(summary.identical).green(),
        style(summary.different).yellow(),
        summary.not_found,
        summary.total
    ));

    lines.join("\n")
}
