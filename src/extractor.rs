use crate::classifier::{classify, RowKind};
use crate::constants::BREAKDOWN_LIMIT;
use crate::gateway::{StatisticsGateway, TableQuery};
use crate::models::{DemographicSummary, NationalityCount, StatisticalRow, SummarySource};
use crate::reference::mock_summary;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Strategies tried in order; the first one producing a summary wins.
/// `Unavailable` always produces one.
pub const EXTRACTION_ORDER: &[SummarySource] = &[
    SummarySource::Live,
    SummarySource::Mock,
    SummarySource::Unavailable,
];

/// Fetches and aggregates population-by-nationality rows for a municipality.
pub struct DemographicExtractor {
    gateway: Arc<dyn StatisticsGateway>,
    table_id: String,
    municipality_variable_id: String,
    target_date: Option<String>,
}

impl DemographicExtractor {
    pub fn new(
        gateway: Arc<dyn StatisticsGateway>,
        table_id: impl Into<String>,
        municipality_variable_id: impl Into<String>,
        target_date: Option<&str>,
    ) -> Self {
        Self {
            gateway,
            table_id: table_id.into(),
            municipality_variable_id: municipality_variable_id.into(),
            target_date: target_date.map(str::to_string),
        }
    }

    /// Builds the demographic summary for `municipality_id`.
    ///
    /// Makes a single gateway request. If it fails or returns no rows, the mock
    /// table is consulted, and failing that a zero summary with
    /// [`SummarySource::Unavailable`] is returned. Never fails.
    ///
    /// # Arguments
    ///
    /// * `municipality_id` - Registry id used to filter the table server-side
    /// * `municipality_name` - Canonical name copied verbatim into a live summary
    pub async fn extract(
        &self,
        municipality_id: &str,
        municipality_name: &str,
    ) -> DemographicSummary {
        for &source in EXTRACTION_ORDER {
            if let Some(summary) = self
                .try_source(source, municipality_id, municipality_name)
                .await
            {
                info!(
                    municipality_id = municipality_id,
                    source = ?source,
                    population_total = summary.population_total,
                    "Demographic summary ready"
                );
                return summary;
            }
        }
        DemographicSummary::unavailable(municipality_name)
    }

    async fn try_source(
        &self,
        source: SummarySource,
        municipality_id: &str,
        municipality_name: &str,
    ) -> Option<DemographicSummary> {
        match source {
            SummarySource::Live => self.fetch_live(municipality_id, municipality_name).await,
            SummarySource::Mock => {
                let mock = mock_summary(municipality_id);
                if mock.is_some() {
                    warn!(municipality_id = municipality_id, "Serving simulated data");
                }
                mock
            }
            SummarySource::Unavailable => {
                warn!(municipality_id = municipality_id, "No demographic data available");
                Some(DemographicSummary::unavailable(municipality_name))
            }
        }
    }

    async fn fetch_live(
        &self,
        municipality_id: &str,
        municipality_name: &str,
    ) -> Option<DemographicSummary> {
        let query = TableQuery::new()
            .filter(self.municipality_variable_id.as_str(), municipality_id)
            .date(self.target_date.as_deref());

        let rows = match self.gateway.fetch_table_data(&self.table_id, &query).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    municipality_id = municipality_id,
                    error = %e,
                    "Table data fetch failed"
                );
                return None;
            }
        };

        if rows.is_empty() {
            warn!(municipality_id = municipality_id, "Table data fetch returned no rows");
            return None;
        }

        debug!(municipality_id = municipality_id, rows = rows.len(), "Aggregating rows");
        Some(summarize_rows(municipality_name, &rows))
    }
}

/// Aggregates classified rows into a live summary.
///
/// Fields whose row is missing stay at 0; Spanish and foreign counts are not
/// reconciled against the total. The breakdown keeps positive counts only,
/// sorted descending (ties keep row order) and truncated to the top entries.
pub fn summarize_rows(municipality_name: &str, rows: &[StatisticalRow]) -> DemographicSummary {
    let mut summary = DemographicSummary {
        municipality_name: municipality_name.to_string(),
        population_total: 0,
        population_spanish: 0,
        population_foreign: 0,
        nationality_breakdown: Vec::new(),
        source: SummarySource::Live,
    };

    let mut grand_total_seen = false;
    for row in rows {
        let value = row.latest_value();
        match classify(&row.composite_label) {
            RowKind::GrandTotal if grand_total_seen => {
                debug!(label = %row.composite_label, "Ignoring repeated grand total row");
            }
            RowKind::GrandTotal => {
                summary.population_total = value;
                grand_total_seen = true;
            }
            RowKind::Spanish => summary.population_spanish = value,
            RowKind::Foreign => summary.population_foreign = value,
            RowKind::Nationality(name) if value > 0 => {
                summary
                    .nationality_breakdown
                    .push(NationalityCount::new(name, value));
            }
            RowKind::Nationality(_) => {}
            RowKind::Unclassified => {
                debug!(label = %row.composite_label, "Skipping unclassified row");
            }
        }
    }

    summary
        .nationality_breakdown
        .sort_by(|a, b| b.value.cmp(&a.value));
    summary.nationality_breakdown.truncate(BREAKDOWN_LIMIT);
    summary
}
