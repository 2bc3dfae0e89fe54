use crate::config::AppConfig;
use crate::errors::AppError;
use crate::extractor::DemographicExtractor;
use crate::gateway::StatisticsGateway;
use crate::models::DemographicSummary;
use crate::resolver::CatalogResolver;
use crate::utils::format_millis;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Body of every demographics response: a summary or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DemographicsResponse {
    Summary(DemographicSummary),
    Error { error: String },
}

impl DemographicsResponse {
    pub fn error(err: &AppError) -> Self {
        Self::Error {
            error: err.to_string(),
        }
    }
}

/// Resolve-then-extract pipeline behind the HTTP endpoint and the CLI lookup.
pub struct DemographicsService {
    resolver: CatalogResolver,
    extractor: DemographicExtractor,
}

impl DemographicsService {
    pub fn new(gateway: Arc<dyn StatisticsGateway>, config: &AppConfig) -> Self {
        Self {
            resolver: CatalogResolver::new(
                Arc::clone(&gateway),
                config.table_id.as_str(),
                config.municipality_variable_id.as_str(),
            ),
            extractor: DemographicExtractor::new(
                gateway,
                config.table_id.as_str(),
                config.municipality_variable_id.as_str(),
                config.date_hint(),
            ),
        }
    }

    /// Answers a demographics query. Every outcome is a response, never an error.
    ///
    /// - blank or missing query: "Missing 'municipality' parameter"
    /// - nothing matched: "No municipality found for '<query>'"
    /// - no live data and no mock: "Demographic data unavailable for '<name>'"
    pub async fn lookup(&self, query: Option<&str>) -> DemographicsResponse {
        let started = Instant::now();
        let query = query.map(str::trim).unwrap_or_default();

        let candidates = match self.resolver.resolve(query).await {
            Ok(candidates) => candidates,
            Err(e) => return DemographicsResponse::error(&e),
        };

        let Some(best) = candidates.into_iter().next() else {
            let err = AppError::MunicipalityNotFound(query.to_string());
            return DemographicsResponse::error(&err);
        };

        let summary = self.extractor.extract(&best.id, &best.name).await;
        info!(
            query = query,
            municipality_id = %best.id,
            elapsed = %format_millis(started.elapsed()),
            "Lookup finished"
        );

        if summary.is_available() {
            DemographicsResponse::Summary(summary)
        } else {
            DemographicsResponse::error(&AppError::DataUnavailable(best.name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NationalityCount, SummarySource};

    #[test]
    fn error_response_serializes_as_error_object() {
        let response = DemographicsResponse::error(&AppError::MissingParameter);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"Missing 'municipality' parameter"}"#);
        assert!(matches!(response, DemographicsResponse::Error { .. }));
    }

    #[test]
    fn summary_response_serializes_flat() {
        let response = DemographicsResponse::Summary(DemographicSummary {
            municipality_name: "Burjassot".to_string(),
            population_total: 3,
            population_spanish: 2,
            population_foreign: 1,
            nationality_breakdown: vec![NationalityCount::new("Italia", 1)],
            source: SummarySource::Live,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["municipality"], "Burjassot");
        assert_eq!(json["nationalityBreakdown"][0]["value"], 1);
        assert!(json.get("error").is_none());
    }
}
