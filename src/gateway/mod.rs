//! Access to the tabular statistics service.
//!
//! [`StatisticsGateway`] is the seam between the core pipeline and the network.
//! [`IneClient`] is the production implementation; tests substitute their own.

mod ine_client;
mod retry;

use crate::errors::AppResult;
use crate::models::{StatisticalRow, VariableValue};
use async_trait::async_trait;
use std::collections::BTreeMap;

pub use ine_client::{parse_table_rows, parse_variable_values, IneClient};
pub use retry::RetryConfig;

/// Server-side filters for a table data request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    /// Variable id -> value id
    pub filters: BTreeMap<String, String>,
    /// Reference date (`YYYYMMDD`)
    pub date: Option<String>,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, variable_id: impl Into<String>, value_id: impl Into<String>) -> Self {
        self.filters.insert(variable_id.into(), value_id.into());
        self
    }

    pub fn date(mut self, date: Option<&str>) -> Self {
        self.date = date.map(str::to_string);
        self
    }
}

/// Remote operations the resolver and extractor depend on.
///
/// Both operations may fail independently; callers are expected to tolerate it.
#[async_trait]
pub trait StatisticsGateway: Send + Sync {
    /// All values of `variable_id` within `table_id` (e.g. every municipality).
    async fn fetch_variable_values(
        &self,
        table_id: &str,
        variable_id: &str,
    ) -> AppResult<Vec<VariableValue>>;

    /// Series of `table_id` matching `query`.
    async fn fetch_table_data(
        &self,
        table_id: &str,
        query: &TableQuery,
    ) -> AppResult<Vec<StatisticalRow>>;
}
