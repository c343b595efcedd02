//! Data models for HubSpot CRM API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod error;
pub mod objects;

pub use error::HubSpotError;
pub use objects::{CreateObjectRequest, CrmObject, ObjectListResponse, Paging, PagingNext};
