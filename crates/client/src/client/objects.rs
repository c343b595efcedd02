//! Object API methods for [`CrmClient`].
//!
//! # What this module does NOT handle:
//! - Low-level object endpoint HTTP calls (in [`crate::endpoints`])

use secrecy::ExposeSecret;

use crate::client::CrmClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateObjectRequest, CrmObject, ObjectListResponse};

impl CrmClient {
    /// List the default page of non-archived records, requesting only `properties`.
    pub async fn list_objects(
        &self,
        object_type: &str,
        properties: &[&str],
    ) -> Result<ObjectListResponse> {
        endpoints::list_objects(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            object_type,
            properties,
        )
        .await
    }

    /// Create a record and return it as echoed by the API, if the reply parses.
    pub async fn create_object(
        &self,
        object_type: &str,
        request: &CreateObjectRequest,
    ) -> Result<Option<CrmObject>> {
        endpoints::create_object(
            &self.http,
            &self.base_url,
            self.access_token.expose_secret(),
            object_type,
            request,
        )
        .await
    }
}
