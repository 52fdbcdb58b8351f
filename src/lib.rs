//! Process Cost Calculator Lead API Library
//!
//! This library provides the core functionality for the process cost
//! calculator lead pipeline: the pure cost estimator, the lead payload
//! builder and submission client, and the relay that forwards captured
//! leads to GoHighLevel (GHL).
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `estimator`: Pure process cost estimation.
//! - `ghl_client`: GHL API client.
//! - `models`: Lead record and GHL wire models.
//! - `relay`: HTTP relay handler and router.
//! - `submitter`: Lead payload builder and submission client.

pub mod config;
pub mod errors;
pub mod estimator;
pub mod ghl_client;
pub mod models;
pub mod relay;
pub mod submitter;
