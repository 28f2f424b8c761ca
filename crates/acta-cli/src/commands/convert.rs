//! Convert command - French text to numeric field value.

use clap::Args;

use acta_core::{classify_field, convert_french_text, FieldType};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Text to convert (e.g. "vingt-quatre")
    #[arg(required = true)]
    text: String,

    /// Infer the field type from a form field path (e.g. "evenement.date.mois")
    #[arg(short = 'p', long, conflicts_with = "kind")]
    field_path: Option<String>,

    /// Explicit field type
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    Month,
    Day,
    Year,
    Number,
    Text,
}

impl From<KindArg> for FieldType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Month => FieldType::Month,
            KindArg::Day => FieldType::Day,
            KindArg::Year => FieldType::Year,
            KindArg::Number => FieldType::Number,
            KindArg::Text => FieldType::Text,
        }
    }
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let field_type = match (&args.field_path, args.kind) {
        (Some(path), _) => classify_field(path),
        (None, Some(kind)) => kind.into(),
        (None, None) => FieldType::Text,
    };

    println!("{}", convert_french_text(&args.text, field_type));
    Ok(())
}
