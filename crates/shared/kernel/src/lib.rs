//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it only owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use fhub_kernel::config::load_config;
//! use fhub_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("fhub.toml")).unwrap_or_default();
//! ```
pub mod config;

pub use fhub_domain as domain;
