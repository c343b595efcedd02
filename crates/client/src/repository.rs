//! Record repository: the read/create mapping between CRM objects and rows.
//!
//! Responsibilities:
//! - Define the [`RecordRepository`] seam the web handlers depend on.
//! - Map CRM objects to [`RecordRow`]s for the three configured properties.
//! - Build the create payload from three submitted values.
//!
//! Invariants:
//! - Row order equals the order of the API results.
//! - Missing, null and empty property values all become `""`.

use async_trait::async_trait;
use cobj_config::ObjectConfig;

use crate::client::CrmClient;
use crate::error::Result;
use crate::models::{CreateObjectRequest, CrmObject};

/// One displayed record: id plus the three configured property values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: String,
    pub values: [String; 3],
}

impl RecordRow {
    /// Project a CRM object onto the given property keys.
    pub fn from_object(object: &CrmObject, keys: [&str; 3]) -> Self {
        Self {
            id: object.id.clone(),
            values: keys.map(|k| object.property(k).to_string()),
        }
    }
}

/// Store of records for one configured object type.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetch the default page of records as rows.
    async fn list(&self) -> Result<Vec<RecordRow>>;

    /// Create a record from the three submitted values, in property order.
    async fn create(&self, values: [String; 3]) -> Result<()>;
}

/// [`RecordRepository`] backed by the CRM objects API.
#[derive(Debug, Clone)]
pub struct CrmRecordRepository {
    client: CrmClient,
    object: ObjectConfig,
}

impl CrmRecordRepository {
    pub fn new(client: CrmClient, object: ObjectConfig) -> Self {
        Self { client, object }
    }

    /// Payload mapping each configured key to its submitted value.
    pub fn create_request(&self, values: [String; 3]) -> CreateObjectRequest {
        CreateObjectRequest::from_pairs(self.object.keys().into_iter().zip(values))
    }
}

#[async_trait]
impl RecordRepository for CrmRecordRepository {
    async fn list(&self) -> Result<Vec<RecordRow>> {
        let keys = self.object.keys();
        let response = self
            .client
            .list_objects(&self.object.object_type, &keys)
            .await?;

        Ok(response
            .results
            .iter()
            .map(|obj| RecordRow::from_object(obj, keys))
            .collect())
    }

    async fn create(&self, values: [String; 3]) -> Result<()> {
        let request = self.create_request(values);
        let created = self
            .client
            .create_object(&self.object.object_type, &request)
            .await?;
        match created {
            Some(object) => tracing::debug!(id = %object.id, "Created record"),
            None => tracing::debug!("Created record"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobj_config::PropertyField;
    use secrecy::SecretString;

    fn repository() -> CrmRecordRepository {
        let client = CrmClient::builder()
            .base_url("https://api.hubapi.com".to_string())
            .access_token(SecretString::new("t".to_string().into()))
            .build()
            .unwrap();
        let object = ObjectConfig {
            object_type: "p_projects".to_string(),
            properties: [
                PropertyField::new("project_name", None),
                PropertyField::new("budget", None),
                PropertyField::new("owner", None),
            ],
        };
        CrmRecordRepository::new(client, object)
    }

    #[test]
    fn test_row_from_object_defaults_to_empty() {
        let obj: CrmObject = serde_json::from_str(
            r#"{"id": "9", "properties": {"project_name": "Apollo", "budget": null}}"#,
        )
        .unwrap();

        let row = RecordRow::from_object(&obj, ["project_name", "budget", "owner"]);

        assert_eq!(row.id, "9");
        assert_eq!(row.values, ["Apollo".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn test_row_ignores_unrequested_properties() {
        let obj: CrmObject = serde_json::from_str(
            r#"{"id": "9", "properties": {"hs_object_id": "9", "owner": "Ada"}}"#,
        )
        .unwrap();

        let row = RecordRow::from_object(&obj, ["project_name", "budget", "owner"]);

        assert_eq!(row.values[2], "Ada");
        assert_eq!(row.values[0], "");
    }

    #[test]
    fn test_create_request_maps_keys_in_order() {
        let request = repository().create_request([
            "Apollo".to_string(),
            String::new(),
            "Ada".to_string(),
        ]);

        assert_eq!(request.properties.len(), 3);
        assert_eq!(request.properties["project_name"], "Apollo");
        assert_eq!(request.properties["budget"], "");
        assert_eq!(request.properties["owner"], "Ada");
    }
}
