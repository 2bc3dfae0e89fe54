//! ine-demographics library
//!
//! This crate provides the core functionality for the `ine-demographics` binary:
//! resolving a free-text municipality name against the INE registry and turning
//! the population-by-nationality table into a fixed-shape summary.
//!
//! ## Overview
//!
//! - [`gateway`] - Access to the INE Tempus JSON API behind the [`gateway::StatisticsGateway`] trait
//! - [`resolver`] - Matches a query against the remote catalog, falling back to [`reference`]
//! - [`classifier`] - Maps composite row labels to semantic row kinds
//! - [`extractor`] - Aggregates classified rows, falling back to mock data
//! - [`service`] - Resolve-then-extract pipeline answering every query with JSON
//! - [`server`] - axum router exposing the service
//! - [`cli`] - Command-line entry point (`serve`, `lookup`)
//!
//! ## Example Usage
//!
//! ```no_run
//! use ine_demographics::config::AppConfig;
//! use ine_demographics::gateway::{IneClient, StatisticsGateway};
//! use ine_demographics::service::DemographicsService;
//! use std::sync::Arc;
//!
//! # async fn example() -> ine_demographics::errors::AppResult<()> {
//! let config = AppConfig::default();
//! let gateway: Arc<dyn StatisticsGateway> = Arc::new(IneClient::new(&config)?);
//! let service = DemographicsService::new(gateway, &config);
//!
//! let response = service.lookup(Some("Madrid")).await;
//! println!("{}", serde_json::to_string(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod extractor;
pub mod gateway;
pub mod models;
pub mod reference;
pub mod resolver;
pub mod server;
pub mod service;
pub mod utils;
