//! HTTP client module.
//!
//! This module provides the [`HttpExecutor`] seam, the signing
//! [`ReqwestExecutor`], and [`BaseApi`], the pipeline every resource API is
//! built on.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use paxstore_openapi::{ClientConfig, MerchantApi};
//!
//! let config = ClientConfig::from_env()?;
//! let merchants = MerchantApi::new(&config)?;
//!
//! let result = merchants.get_merchant(42).await?;
//! ```

mod base;
mod executor;

pub use base::BaseApi;
pub use executor::{HttpExecutor, ReqwestExecutor};
