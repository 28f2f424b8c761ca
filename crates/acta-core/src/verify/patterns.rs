//! Extraction pattern tables for the three act natures.
//!
//! Every pattern runs against the NORMALIZED act body (lowercase, accents
//! stripped, punctuation collapsed to single spaces), so keyword variants
//! like "décédé"/"decede" collapse to one spelling and date separators become
//! spaces. Each datum gets 1-3 alternative phrasings anchored on the keywords
//! found in legacy acts, bounded by a following keyword or end of text.
//!
//! These tables are configuration, not algorithm: tune them freely, the
//! matching code does not depend on their contents. Extraction is
//! best-effort; when an act lacks a clear boundary keyword a pattern may
//! over-capture into the next field, which the scorer then usually classifies
//! as NOT_FOUND.

use lazy_static::lazy_static;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).expect("invalid extraction pattern")).collect()
}

lazy_static! {
    // ── Birth acts ────────────────────────────────────────────────────────

    pub static ref BIRTH_HOLDER_SURNAME: Vec<Regex> = compile(&[
        r"nom\s+([a-z\s]+?)(?:\s+prenom|$|naissance|sexe)",
        r"enfant\s+([a-z\s]+?)(?:\s+prenom|$|naissance)",
    ]);

    pub static ref BIRTH_HOLDER_GIVEN_NAMES: Vec<Regex> = compile(&[
        r"prenoms?\s+([a-z\s]+?)(?:\s+nom|$|naissance|sexe)",
        r"enfant\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|naissance)",
    ]);

    pub static ref BIRTH_DATE: Vec<Regex> = compile(&[
        r"nee?\s+le\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
        r"naissance\s+le\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
        r"date\s+naissance\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
    ]);

    pub static ref BIRTH_PLACE: Vec<Regex> = compile(&[
        r"nee?\s+(?:le\s+\d{1,2}\s\d{1,2}\s\d{2,4}\s+)?a\s+(.+?)$",
        r"naissance\s+(?:le\s+\d{1,2}\s\d{1,2}\s\d{2,4}\s+)?a\s+(.+?)$",
        r"lieu\s+naissance\s+(.+?)$",
    ]);

    pub static ref BIRTH_PARENT1_SURNAME: Vec<Regex> = compile(&[
        r"pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
    ]);

    pub static ref BIRTH_PARENT2_SURNAME: Vec<Regex> = compile(&[
        r"mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
    ]);

    // ── Marriage acts ─────────────────────────────────────────────────────

    pub static ref MARRIAGE_SPOUSE1_SURNAME: Vec<Regex> = compile(&[
        r"epoux\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
        // Fallback for acts that only name an "epouse".
        r"epouse\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
        r"(?:premier|1er)\s+epoux\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
    ]);

    pub static ref MARRIAGE_SPOUSE1_GIVEN_NAMES: Vec<Regex> = compile(&[
        r"(?:premier|1er)\s+epoux\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|ne|age)",
        r"epoux\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|ne|age)",
    ]);

    pub static ref MARRIAGE_SPOUSE2_SURNAME: Vec<Regex> = compile(&[
        r"(?:deuxieme|2e|second)\s+epoux\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
        r"epouse\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
    ]);

    pub static ref MARRIAGE_SPOUSE2_GIVEN_NAMES: Vec<Regex> = compile(&[
        r"(?:deuxieme|2e|second)\s+epoux\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|ne|age)",
        r"epouse\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|ne|age)",
    ]);

    pub static ref MARRIAGE_DATE: Vec<Regex> = compile(&[
        r"maries?\s+le\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
        r"mariage\s+le\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
        r"date\s+mariage\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
    ]);

    pub static ref MARRIAGE_PLACE: Vec<Regex> = compile(&[
        r"maries?\s+(?:le\s+\d{1,2}\s\d{1,2}\s\d{2,4}\s+)?a\s+(.+?)$",
        r"mariage\s+(?:le\s+\d{1,2}\s\d{1,2}\s\d{2,4}\s+)?a\s+(.+?)$",
        r"lieu\s+mariage\s+(.+?)$",
    ]);

    pub static ref MARRIAGE_SPOUSE1_FATHER_SURNAME: Vec<Regex> = compile(&[
        r"epoux\s+.+?pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
        r"(?:premier|1er)\s+epoux\s+.+?pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
    ]);

    pub static ref MARRIAGE_SPOUSE1_MOTHER_SURNAME: Vec<Regex> = compile(&[
        r"epoux\s+.+?mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
        r"(?:premier|1er)\s+epoux\s+.+?mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
    ]);

    pub static ref MARRIAGE_SPOUSE2_FATHER_SURNAME: Vec<Regex> = compile(&[
        r"(?:deuxieme|2e|second)\s+epoux\s+.+?pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
        r"epouse\s+.+?pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
    ]);

    pub static ref MARRIAGE_SPOUSE2_MOTHER_SURNAME: Vec<Regex> = compile(&[
        r"(?:deuxieme|2e|second)\s+epoux\s+.+?mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
        r"epouse\s+.+?mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
    ]);

    // ── Death acts ────────────────────────────────────────────────────────

    pub static ref DEATH_DECEDENT_SURNAME: Vec<Regex> = compile(&[
        r"defunte?\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
        r"decedee?\s+([a-z\s]+?)(?:\s+prenom|$|ne|age)",
    ]);

    pub static ref DEATH_DECEDENT_GIVEN_NAMES: Vec<Regex> = compile(&[
        r"defunte?\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|ne|age)",
        r"decedee?\s+.+?prenoms?\s+([a-z\s]+?)(?:\s+nom|$|ne|age)",
    ]);

    pub static ref DEATH_DATE: Vec<Regex> = compile(&[
        r"decedee?\s+le\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
        r"deces\s+le\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
        r"date\s+deces\s+(\d{1,2}\s\d{1,2}\s\d{2,4})",
    ]);

    pub static ref DEATH_PLACE: Vec<Regex> = compile(&[
        r"decedee?\s+(?:le\s+\d{1,2}\s\d{1,2}\s\d{2,4}\s+)?a\s+(.+?)$",
        r"deces\s+(?:le\s+\d{1,2}\s\d{1,2}\s\d{2,4}\s+)?a\s+(.+?)$",
        r"lieu\s+deces\s+(.+?)$",
    ]);

    pub static ref DEATH_FATHER_SURNAME: Vec<Regex> = compile(&[
        r"defunte?\s+.+?pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
        r"decedee?\s+.+?pere\s+([a-z\s]+?)(?:\s+prenom|$|mere|age)",
    ]);

    pub static ref DEATH_MOTHER_SURNAME: Vec<Regex> = compile(&[
        r"defunte?\s+.+?mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
        r"decedee?\s+.+?mere\s+([a-z\s]+?)(?:\s+prenom|$|age|profession)",
    ]);

    pub static ref DEATH_LAST_SPOUSE_SURNAME: Vec<Regex> = compile(&[
        r"(?:dernier|veuf|veuve)\s+(?:conjointe?|epoux|epouse)\s+([a-z\s]+?)(?:\s+prenom|$)",
    ]);
}
