//! Thin client for the UK Companies House public REST API.
//!
//! This crate defines:
//! - Configuration & credentials handling (environment or explicit struct)
//! - A stateless [`CompaniesHouse`] client exposing one method per endpoint
//! - An error taxonomy separating configuration, transport and API failures
//!
//! Responses are passed through unmodified as [`serde_json::Value`]; the
//! shape of each record is defined entirely by the remote API.
//!
//! ```no_run
//! use companies_house::CompaniesHouse;
//!
//! #[tokio::main]
//! async fn main() -> companies_house::Result<()> {
//!     // Reads COMPANIES_HOUSE_APIKEY and COMPANIES_HOUSE_HOST.
//!     let ch = CompaniesHouse::from_env()?;
//!     let profile = ch.company_profile("11799251").await?;
//!     println!("{}", profile["company_name"]);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod paths;

pub use client::{
    AdvancedSearchFilters, AlphabeticalSearchOptions, CompaniesHouse, DissolvedSearchOptions,
    FilingHistoryOptions, OfficerListOptions, PageOptions, PscListOptions, SearchCompaniesOptions,
};
pub use config::ClientConfig;
pub use error::{Error, Result};
