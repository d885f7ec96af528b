//! Blocking REST client for the ChickTrack backend.
//!
//! All endpoint knowledge lives in explicit configuration handed to the
//! client; nothing here is a process-wide global. Mutations return plain
//! results so callers decide when to refetch.

use crate::entities::Entity;
use crate::pages::{FetchError, Page, PageSource};
use crate::record::{self, Record};
use serde_json::Value;
use std::time::Duration;

/// Backend the production deployment talks to.
pub const DEFAULT_BASE_URL: &str = "https://chicktrack.runasp.net/api";

/// Remote fetch page size used by the listing pages.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applied to every request. Absent in the original client; a hung
    /// backend would hang the caller with it.
    pub timeout: Duration,
    /// Remote page size handed to accumulators built from this client.
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone)]
pub struct Client {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Client { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Page source for an entity's collection endpoint.
    pub fn collection(&self, entity: Entity) -> RestSource {
        self.collection_with_query(entity, Vec::new())
    }

    /// Page source with extra server-side filter parameters, appended to
    /// the request as `key=value` pairs.
    pub fn collection_with_query(
        &self,
        entity: Entity,
        query: Vec<(String, String)>,
    ) -> RestSource {
        RestSource {
            agent: self.agent.clone(),
            url: self.url(entity.path()),
            content_path: entity.content_path().to_string(),
            query,
        }
    }

    /// POST a new record to the entity's create endpoint.
    pub fn create(&self, entity: Entity, record: &Record) -> Result<(), FetchError> {
        let url = match entity {
            Entity::User => self.url("BaseUser/create"),
            _ => self.url(entity.path()),
        };
        self.agent
            .post(&url)
            .send_json(record)
            .map_err(fetch_error)?;
        Ok(())
    }

    /// DELETE a record by identifier.
    pub fn delete(&self, entity: Entity, id: &str) -> Result<(), FetchError> {
        match entity {
            Entity::User => {
                let url = self.url(&format!("BaseUser/delete/{id}"));
                self.agent.delete(&url).call().map_err(fetch_error)?;
            }
            _ => {
                self.agent
                    .delete(&self.url(entity.path()))
                    .query("id", id)
                    .call()
                    .map_err(fetch_error)?;
            }
        }
        Ok(())
    }
}

/// [`PageSource`] over one REST collection endpoint.
#[derive(Clone)]
pub struct RestSource {
    agent: ureq::Agent,
    url: String,
    content_path: String,
    query: Vec<(String, String)>,
}

impl PageSource for RestSource {
    fn fetch_page(&self, page: u32, page_size: usize) -> Result<Page, FetchError> {
        let mut request = self
            .agent
            .get(&self.url)
            .query("page", &page.to_string())
            .query("pageSize", &page_size.to_string());
        for (key, value) in &self.query {
            request = request.query(key, value);
        }

        let body: Value = request.call().map_err(fetch_error)?.into_json()?;
        let records = decode_content(&body, &self.content_path)?;
        let has_more = records.len() == page_size;
        Ok(Page { records, has_more })
    }
}

fn fetch_error(err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Status(status, _) => FetchError::Status { status },
        ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
    }
}

/// Pull the record array out of a response body at the configured path.
/// Non-object elements are logged and dropped rather than failing the page.
fn decode_content(body: &Value, path: &str) -> Result<Vec<Record>, FetchError> {
    let content = record::resolve_path(body, path).ok_or_else(|| FetchError::Shape {
        path: path.to_string(),
    })?;
    let items = content.as_array().ok_or_else(|| FetchError::Shape {
        path: path.to_string(),
    })?;

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match Record::from_value(item.clone()) {
            Some(record) => records.push(record),
            None => log::warn!("dropping non-object record in '{path}': {item}"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_content_resolves_flat_path() {
        let body = json!({"content": [{"id": 1}, {"id": 2}]});
        let records = decode_content(&body, "content").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn decode_content_resolves_nested_path() {
        let body = json!({"content": {"data": [{"id": "u-1"}]}});
        let records = decode_content(&body, "content.data").unwrap();
        assert_eq!(records[0].id().as_deref(), Some("u-1"));
    }

    #[test]
    fn decode_content_missing_path_is_shape_error() {
        let body = json!({"items": []});
        let err = decode_content(&body, "content").unwrap_err();
        assert!(matches!(err, FetchError::Shape { .. }));
    }

    #[test]
    fn decode_content_non_array_is_shape_error() {
        let body = json!({"content": {"total": 5}});
        let err = decode_content(&body, "content").unwrap_err();
        assert!(matches!(err, FetchError::Shape { .. }));
    }

    #[test]
    fn decode_content_drops_non_object_elements() {
        let body = json!({"content": [{"id": 1}, 42, "stray"]});
        let records = decode_content(&body, "content").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = Client::new(ClientConfig {
            base_url: "https://farm.example/api/".to_string(),
            ..ClientConfig::default()
        });
        assert_eq!(
            client.url(Entity::SaleRecord.path()),
            "https://farm.example/api/SaleRecord"
        );
    }
}
