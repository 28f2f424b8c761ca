//! Conversion of French-language text to numeric field values.
//!
//! Legacy acts spell dates out in full ("vingt-quatre octobre mil neuf cent
//! quatre-vingt-cinq") while the form wants numeric components. The converter
//! understands the fixed French month and numeral vocabularies and degrades
//! to passthrough for anything else.

/// Semantic type of a form field, inferred from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Month component of a date ("mois").
    Month,
    /// Day component of a date ("jour").
    Day,
    /// Year component of a date ("annee").
    Year,
    /// Other numeric field (a path mentioning "date" without a component).
    Number,
    /// Free text, delivered as-is.
    Text,
}

/// French month names mapped to two-digit codes.
///
/// Checked by containment, in order, so both accented and unaccented
/// spellings hit the same code.
const FRENCH_MONTHS: &[(&str, &str)] = &[
    ("janvier", "01"),
    ("fevrier", "02"),
    ("février", "02"),
    ("mars", "03"),
    ("avril", "04"),
    ("mai", "05"),
    ("juin", "06"),
    ("juillet", "07"),
    ("aout", "08"),
    ("août", "08"),
    ("septembre", "09"),
    ("octobre", "10"),
    ("novembre", "11"),
    ("decembre", "12"),
    ("décembre", "12"),
];

/// Value of a single French numeral word, if recognized.
///
/// Hyphens are replaced by spaces before tokenizing, so compounds like
/// "dix-sept" or "soixante-dix" arrive as separate words and compose by
/// addition.
fn numeral_word(word: &str) -> Option<u32> {
    let value = match word {
        "un" | "une" | "premier" => 1,
        "deux" => 2,
        "trois" => 3,
        "quatre" => 4,
        "cinq" => 5,
        "six" => 6,
        "sept" => 7,
        "huit" => 8,
        "neuf" => 9,
        "dix" => 10,
        "onze" => 11,
        "douze" => 12,
        "treize" => 13,
        "quatorze" => 14,
        "quinze" => 15,
        "seize" => 16,
        "vingt" => 20,
        "trente" => 30,
        "quarante" => 40,
        "cinquante" => 50,
        "soixante" => 60,
        "cent" | "cents" => 100,
        "mil" | "mille" => 1000,
        _ => return None,
    };
    Some(value)
}

/// Determine the semantic type of a field from its dot-delimited path.
///
/// Case-insensitive substring checks, first match wins. Priority matters: a
/// path like "evenement.date.mois" must classify as Month, while a plain
/// "titulaire.dateNaissance" falls through to Number.
pub fn classify_field(field_path: &str) -> FieldType {
    let name = field_path.to_lowercase();
    if name.contains("mois") {
        FieldType::Month
    } else if name.contains("jour") {
        FieldType::Day
    } else if name.contains("annee") || name.contains("année") {
        FieldType::Year
    } else if name.contains("date") {
        FieldType::Number
    } else {
        FieldType::Text
    }
}

/// Convert French text to the numeric value expected by a field.
///
/// Month fields are resolved against the month table, numeric input passes
/// through verbatim, and anything else is parsed with French numeral
/// composition rules ("cent"/"mille" multiply the accumulator, "quatre vingt"
/// composes to 80). Unparseable input returns the trimmed original; this is a
/// deliberate graceful degradation, not an error.
pub fn convert_french_text(text: &str, field_type: FieldType) -> String {
    let lowered = text.to_lowercase().replace('-', " ");
    let clean = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    if field_type == FieldType::Month {
        for (name, code) in FRENCH_MONTHS {
            if clean.contains(name) {
                return (*code).to_string();
            }
        }
        // Already a 1-2 digit numeral: keep it, zero-padded.
        if !clean.is_empty() && clean.len() <= 2 && clean.bytes().all(|b| b.is_ascii_digit()) {
            return format!("{:0>2}", clean);
        }
    }

    // Fast path for already-numeric input ("1985").
    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.to_string();
    }

    let mut total: u32 = 0;
    let mut accumulator: u32 = 0;
    for word in clean.split(' ') {
        let Some(value) = numeral_word(word) else {
            continue;
        };
        if value == 100 || value == 1000 {
            let base = if accumulator == 0 { 1 } else { accumulator };
            total += base * value;
            accumulator = 0;
        } else if word == "vingt" && accumulator == 4 {
            // "quatre vingt" -> 80
            accumulator = 80;
        } else {
            accumulator += value;
        }
    }
    total += accumulator;

    if total > 0 {
        if field_type == FieldType::Day && total < 10 {
            return format!("{total:02}");
        }
        return total.to_string();
    }

    // Fallback: no recognized words at all.
    trimmed.to_string()
}
