//! Web front end for one HubSpot custom object type.
//!
//! Serves a table of existing records at `/` and a creation form at
//! `/update-cobj`. Handlers talk to the CRM through a
//! [`cobj_client::RecordRepository`], so tests can swap in an in-memory store.

pub mod app;
pub mod assets;
pub mod handlers;
pub mod views;

pub use app::{AppState, router};
