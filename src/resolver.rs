use crate::errors::{AppError, AppResult};
use crate::gateway::StatisticsGateway;
use crate::models::MunicipalityCandidate;
use crate::reference::search_static;
use crate::utils::normalize_query;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A place municipality candidates can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// The registry's value catalog for the municipality variable
    Remote,
    /// The embedded reference table
    Static,
}

impl CatalogSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Remote => "remote catalog",
            Self::Static => "static table",
        }
    }
}

/// Sources tried in order; the first one with any match wins.
pub const RESOLUTION_ORDER: &[CatalogSource] = &[CatalogSource::Remote, CatalogSource::Static];

/// Matches free-text queries against the municipality catalog.
pub struct CatalogResolver {
    gateway: Arc<dyn StatisticsGateway>,
    table_id: String,
    municipality_variable_id: String,
}

impl CatalogResolver {
    pub fn new(
        gateway: Arc<dyn StatisticsGateway>,
        table_id: impl Into<String>,
        municipality_variable_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            table_id: table_id.into(),
            municipality_variable_id: municipality_variable_id.into(),
        }
    }

    /// Returns candidates for `query`, shortest name first.
    ///
    /// The remote catalog is consulted first; when it is unreachable, empty, or has
    /// no substring match, the static table is searched instead. An empty list
    /// means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if `query` is empty after trimming. Gateway
    /// failures are never returned.
    pub async fn resolve(&self, query: &str) -> AppResult<Vec<MunicipalityCandidate>> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Err(AppError::MissingParameter);
        }

        for &source in RESOLUTION_ORDER {
            let mut candidates = self.lookup(source, &normalized).await;
            if candidates.is_empty() {
                debug!(source = source.display_name(), query = %normalized, "No match");
                continue;
            }

            rank_candidates(&mut candidates);
            info!(
                source = source.display_name(),
                query = %normalized,
                matches = candidates.len(),
                best = %candidates[0].name,
                "Municipality resolved"
            );
            return Ok(candidates);
        }

        info!(query = %normalized, "No municipality matched");
        Ok(Vec::new())
    }

    async fn lookup(&self, source: CatalogSource, normalized: &str) -> Vec<MunicipalityCandidate> {
        match source {
            CatalogSource::Remote => self.search_remote(normalized).await,
            CatalogSource::Static => search_static(normalized),
        }
    }

    async fn search_remote(&self, normalized: &str) -> Vec<MunicipalityCandidate> {
        let catalog = match self
            .gateway
            .fetch_variable_values(&self.table_id, &self.municipality_variable_id)
            .await
        {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "Municipality catalog unavailable, treating as empty");
                Vec::new()
            }
        };

        catalog
            .into_iter()
            .filter(|value| value.name.to_lowercase().contains(normalized))
            .map(MunicipalityCandidate::from)
            .collect()
    }
}

/// Stable sort by name length in characters, so "Valencia" ranks above
/// "Valencia de Don Juan".
pub fn rank_candidates(candidates: &mut [MunicipalityCandidate]) {
    candidates.sort_by_key(|candidate| candidate.name.chars().count());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str) -> MunicipalityCandidate {
        MunicipalityCandidate {
            id: id.to_string(),
            name: name.to_string(),
            source_slug: None,
        }
    }

    #[test]
    fn rank_prefers_shorter_names() {
        let mut candidates = vec![
            candidate("24199", "Valencia de Don Juan"),
            candidate("46250", "Valencia"),
            candidate("06149", "Valencia del Ventoso"),
        ];
        rank_candidates(&mut candidates);
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Valencia", "Valencia de Don Juan", "Valencia del Ventoso"]
        );
    }

    #[test]
    fn rank_counts_characters_not_bytes() {
        let mut candidates = vec![candidate("1", "Ábcde"), candidate("2", "Abcdef")];
        rank_candidates(&mut candidates);
        assert_eq!(candidates[0].id, "1");
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let mut candidates = vec![candidate("1", "Lugo"), candidate("2", "Gata")];
        rank_candidates(&mut candidates);
        assert_eq!(candidates[0].id, "1");
        assert_eq!(candidates[1].id, "2");
    }
}
