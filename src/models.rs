use serde::{Deserialize, Deserializer, Serialize};

/// A municipality that matched a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityCandidate {
    /// Opaque registry identifier used to filter table data
    pub id: String,
    /// Canonical display name
    pub name: String,
    /// ASCII alias; only present for entries from the static reference table
    pub source_slug: Option<String>,
}

/// One value of a table variable as served by `VALORES_VARIABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableValue {
    #[serde(rename = "Id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "Nombre", default)]
    pub name: String,
}

impl From<VariableValue> for MunicipalityCandidate {
    fn from(value: VariableValue) -> Self {
        Self {
            id: value.id,
            name: value.name,
            source_slug: None,
        }
    }
}

/// A single dated value inside a [`StatisticalRow`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    /// Sortable timestamp (INE serves epoch milliseconds)
    #[serde(rename = "Fecha", default)]
    pub date: i64,
    #[serde(rename = "Valor", default)]
    pub value: Option<f64>,
}

/// One series returned by `DATOS_TABLA`.
///
/// The composite label concatenates the variable values of the series
/// (sex, municipality, nationality) separated by `.`, e.g. `"Total. Madrid. Total. "`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticalRow {
    #[serde(rename = "Nombre", default)]
    pub composite_label: String,
    #[serde(rename = "Data", default)]
    pub observations: Vec<Observation>,
}

impl StatisticalRow {
    pub fn new(label: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            composite_label: label.into(),
            observations,
        }
    }

    /// Value of the most recent observation, or 0 when the row has none.
    ///
    /// Dates are assumed unique per row; on a tie the last maximum wins.
    /// Missing or negative values count as 0.
    pub fn latest_value(&self) -> u64 {
        self.observations
            .iter()
            .max_by_key(|obs| obs.date)
            .and_then(|obs| obs.value)
            .map(|v| v.max(0.0).round() as u64)
            .unwrap_or(0)
    }
}

/// Where a [`DemographicSummary`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource {
    Live,
    Mock,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalityCount {
    pub name: String,
    pub value: u64,
}

impl NationalityCount {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Population summary returned to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicSummary {
    #[serde(rename = "municipality")]
    pub municipality_name: String,
    pub population_total: u64,
    pub population_spanish: u64,
    pub population_foreign: u64,
    pub nationality_breakdown: Vec<NationalityCount>,
    #[serde(skip)]
    pub source: SummarySource,
}

impl DemographicSummary {
    /// A zero-valued summary signalling that no data could be obtained.
    pub fn unavailable(municipality_name: &str) -> Self {
        Self {
            municipality_name: municipality_name.to_string(),
            population_total: 0,
            population_spanish: 0,
            population_foreign: 0,
            nationality_breakdown: Vec::new(),
            source: SummarySource::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.source != SummarySource::Unavailable
    }
}

/// Entry of the embedded municipality table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticReferenceEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
}

impl From<&StaticReferenceEntry> for MunicipalityCandidate {
    fn from(entry: &StaticReferenceEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            source_slug: Some(entry.slug.to_string()),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}
