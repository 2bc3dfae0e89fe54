use super::retry::{with_retry, RetryConfig};
use super::{StatisticsGateway, TableQuery};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{StatisticalRow, VariableValue};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

const VARIABLE_VALUES_ENDPOINT: &str = "VALORES_VARIABLE";
const TABLE_DATA_ENDPOINT: &str = "DATOS_TABLA";

/// HTTP client for the INE Tempus JSON API.
///
/// Holds a single `reqwest::Client`, which pools connections and can be shared
/// across concurrent requests.
#[derive(Debug, Clone)]
pub struct IneClient {
    client: reqwest::Client,
    base_url: Url,
    catalog_timeout: Duration,
    data_timeout: Duration,
    retry: RetryConfig,
}

impl IneClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            catalog_timeout: config.catalog_timeout(),
            data_timeout: config.data_timeout(),
            retry: RetryConfig::from(config),
        })
    }

    /// `{base}/VALORES_VARIABLE/{table}/{variable}`
    pub fn variable_values_url(&self, table_id: &str, variable_id: &str) -> AppResult<Url> {
        self.endpoint_url(&[VARIABLE_VALUES_ENDPOINT, table_id, variable_id])
    }

    /// `{base}/DATOS_TABLA/{table}?tv={var}:{value}&date={date}`
    pub fn table_data_url(&self, table_id: &str, query: &TableQuery) -> AppResult<Url> {
        let mut url = self.endpoint_url(&[TABLE_DATA_ENDPOINT, table_id])?;
        if !query.filters.is_empty() || query.date.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (variable_id, value_id) in &query.filters {
                pairs.append_pair("tv", &format!("{variable_id}:{value_id}"));
            }
            if let Some(date) = &query.date {
                pairs.append_pair("date", date);
            }
        }
        Ok(url)
    }

    fn endpoint_url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::UrlError(format!("Cannot be a base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, url: &Url, timeout: Duration) -> AppResult<String> {
        let response = self
            .client
            .get(url.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch {url}: {e}")))?;

        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            let status_code = status.as_u16();
            AppError::NetworkError(format!("HTTP {status_code}: Failed to fetch {url}: {e}"))
        })?;

        Ok(response.text().await?)
    }
}

#[async_trait]
impl StatisticsGateway for IneClient {
    async fn fetch_variable_values(
        &self,
        table_id: &str,
        variable_id: &str,
    ) -> AppResult<Vec<VariableValue>> {
        let url = self.variable_values_url(table_id, variable_id)?;
        debug!(url = %url, "Fetching variable values");
        let body = with_retry(&self.retry, VARIABLE_VALUES_ENDPOINT, || {
            self.get_text(&url, self.catalog_timeout)
        })
        .await?;
        let values = parse_variable_values(&body)?;
        debug!(
            table_id = table_id,
            variable_id = variable_id,
            values = values.len(),
            "Variable values fetched"
        );
        Ok(values)
    }

    async fn fetch_table_data(
        &self,
        table_id: &str,
        query: &TableQuery,
    ) -> AppResult<Vec<StatisticalRow>> {
        let url = self.table_data_url(table_id, query)?;
        debug!(url = %url, "Fetching table data");
        let body = with_retry(&self.retry, TABLE_DATA_ENDPOINT, || {
            self.get_text(&url, self.data_timeout)
        })
        .await?;
        let rows = parse_table_rows(&body)?;
        debug!(table_id = table_id, rows = rows.len(), "Table data fetched");
        Ok(rows)
    }
}

/// Decodes a `VALORES_VARIABLE` response body.
pub fn parse_variable_values(body: &str) -> AppResult<Vec<VariableValue>> {
    serde_json::from_str(body)
        .map_err(|e| AppError::ParseError(format!("Invalid variable values payload: {e}")))
}

/// Decodes a `DATOS_TABLA` response body.
pub fn parse_table_rows(body: &str) -> AppResult<Vec<StatisticalRow>> {
    serde_json::from_str(body)
        .map_err(|e| AppError::ParseError(format!("Invalid table data payload: {e}")))
}
