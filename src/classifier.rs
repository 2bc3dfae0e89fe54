//! Classification of composite row labels.
//!
//! Rows of the population table carry a label such as `"Total. Madrid. Española. "`
//! whose segments are, in order, sex, municipality and nationality. All knowledge
//! of that layout lives here: [`split_label`] owns the delimiter and positions,
//! [`classify`] maps a label to a [`RowKind`].
//!
//! The nationality is read from the last non-empty segment. This matches the
//! labels observed so far but has not been checked against the live schema.

use crate::constants::{FOREIGN_MARKER, LABEL_DELIMITER, SPANISH_MARKER, TOTAL_MARKER};

/// Semantic category of a statistical row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Sex total, nationality total
    GrandTotal,
    /// Sex total, Spanish nationals
    Spanish,
    /// Sex total, foreign nationals
    Foreign,
    /// Sex total, one specific nationality
    Nationality(String),
    /// Anything else (per-sex rows, malformed labels)
    Unclassified,
}

/// Positional view over a composite label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSegments<'a> {
    pub sex: &'a str,
    pub municipality: Option<&'a str>,
    pub nationality: Option<&'a str>,
}

/// Splits a label into trimmed segments, ignoring trailing empty ones.
///
/// Returns `None` for a label with no content.
pub fn split_label(label: &str) -> Option<LabelSegments<'_>> {
    let mut segments: Vec<&str> = label.split(LABEL_DELIMITER).map(str::trim).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    let sex = *segments.first()?;
    let nationality = if segments.len() >= 3 {
        segments.last().copied()
    } else {
        None
    };
    let municipality = segments.get(1).copied();

    Some(LabelSegments {
        sex,
        municipality,
        nationality,
    })
}

/// The sex segment may carry extra text around the marker.
fn is_total_sex(segment: &str) -> bool {
    segment.contains(TOTAL_MARKER)
}

/// Aggregate nationalities such as "Total Europa" are not the grand total.
fn is_total_nationality(segment: &str) -> bool {
    segment == TOTAL_MARKER
}

/// Maps a composite label to its [`RowKind`].
pub fn classify(label: &str) -> RowKind {
    let Some(segments) = split_label(label) else {
        return RowKind::Unclassified;
    };

    if !is_total_sex(segments.sex) {
        return RowKind::Unclassified;
    }

    if label.contains(SPANISH_MARKER) {
        return RowKind::Spanish;
    }
    if label.contains(FOREIGN_MARKER) {
        return RowKind::Foreign;
    }

    match segments.nationality {
        Some(nat) if is_total_nationality(nat) => RowKind::GrandTotal,
        Some(nat) if !nat.is_empty() => RowKind::Nationality(nat.to_string()),
        _ => RowKind::Unclassified,
    }
}
