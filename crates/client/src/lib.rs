//! HubSpot CRM objects REST client.
//!
//! This crate provides a typed client for the CRM v3 objects API, limited to
//! listing and creating records of one custom object type, plus the
//! [`RecordRepository`] seam the web front end depends on.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod repository;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::CrmClient;
pub use client::builder::CrmClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    CreateObjectRequest, CrmObject, HubSpotError, ObjectListResponse, Paging, PagingNext,
};
pub use repository::{CrmRecordRepository, RecordRepository, RecordRow};
