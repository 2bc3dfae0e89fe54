//! Common test utilities for integration tests

use async_trait::async_trait;
use ine_demographics::config::AppConfig;
use ine_demographics::errors::{AppError, AppResult};
use ine_demographics::gateway::{StatisticsGateway, TableQuery};
use ine_demographics::models::{Observation, StatisticalRow, VariableValue};
use ine_demographics::service::DemographicsService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory gateway with scripted responses.
///
/// `None` for either response simulates a failure; the table data error
/// defaults to a 503 and can be replaced with [`FakeGateway::with_data_error`].
#[allow(dead_code)]
pub struct FakeGateway {
    catalog: Option<Vec<VariableValue>>,
    rows: Option<Vec<StatisticalRow>>,
    data_error: fn() -> AppError,
    catalog_calls: AtomicUsize,
    data_calls: AtomicUsize,
    pub last_query: Mutex<Option<(String, TableQuery)>>,
}

#[allow(dead_code)]
impl FakeGateway {
    pub fn new(catalog: Option<Vec<VariableValue>>, rows: Option<Vec<StatisticalRow>>) -> Self {
        Self {
            catalog,
            rows,
            data_error: service_unavailable,
            catalog_calls: AtomicUsize::new(0),
            data_calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Both operations fail.
    pub fn offline() -> Self {
        Self::new(None, None)
    }

    /// Table data requests fail with the error built by `error`.
    pub fn with_data_error(mut self, error: fn() -> AppError) -> Self {
        self.rows = None;
        self.data_error = error;
        self
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub fn data_calls(&self) -> usize {
        self.data_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatisticsGateway for FakeGateway {
    async fn fetch_variable_values(
        &self,
        _table_id: &str,
        _variable_id: &str,
    ) -> AppResult<Vec<VariableValue>> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog
            .clone()
            .ok_or_else(|| AppError::NetworkError("connection refused".to_string()))
    }

    async fn fetch_table_data(
        &self,
        table_id: &str,
        query: &TableQuery,
    ) -> AppResult<Vec<StatisticalRow>> {
        self.data_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some((table_id.to_string(), query.clone()));
        self.rows.clone().ok_or_else(self.data_error)
    }
}

fn service_unavailable() -> AppError {
    AppError::NetworkError("HTTP 503: Service Unavailable".to_string())
}

/// Catalog entry as served by `VALORES_VARIABLE`
#[allow(dead_code)]
pub fn catalog_value(id: &str, name: &str) -> VariableValue {
    VariableValue {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Row with a single observation
#[allow(dead_code)]
pub fn row(label: &str, date: i64, value: f64) -> StatisticalRow {
    StatisticalRow::new(
        label,
        vec![Observation {
            date,
            value: Some(value),
        }],
    )
}

/// The three aggregate rows for Burjassot
#[allow(dead_code)]
pub fn burjassot_rows() -> Vec<StatisticalRow> {
    vec![
        row("Total.Burjassot.Española.", 20230101, 34040.0),
        row("Total.Burjassot.Extranjera.", 20230101, 6594.0),
        row("Total.Burjassot.Total.", 20230101, 40634.0),
    ]
}

#[allow(dead_code)]
pub fn service_with(gateway: Arc<FakeGateway>) -> DemographicsService {
    DemographicsService::new(gateway, &AppConfig::default())
}
