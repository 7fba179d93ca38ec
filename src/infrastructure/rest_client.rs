//! reqwest implementation of [`EntityGateway`] for one backend deployment
//!
//! Reads go through `GET /api/GetEntityFieldsWithFilters`; writes use
//! `POST /api/<Entity>`, `PUT /api/<Entity>/<id>` and
//! `DELETE /api/<Entity>/<id>`. Reads, updates and deletes run under the
//! client's [`RetryPolicy`]; a create is sent once.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::domain::{Backend, DomainError, EntityGateway, EntityId, ListQuery, Page};
use crate::infrastructure::retry::RetryPolicy;

const LIST_PATH: &str = "GetEntityFieldsWithFilters";

#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: Url,
    backend: Backend,
    retry: RetryPolicy,
}

impl RestClient {
    pub fn new(
        base_url: &str,
        backend: Backend,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portops-backoffice/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build client: {}", e)))?;

        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::Transport(format!("Invalid base URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Transport(format!(
                "Invalid base URL {}: cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            backend,
            retry,
        })
    }

    /// `{base}/api/<segments...>`, each segment percent-encoded
    fn api_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    fn entity_url(&self, entity_name: &str, id: Option<&EntityId>) -> Url {
        match id {
            Some(id) => self.api_url(&[entity_name, &id.to_string()]),
            None => self.api_url(&[entity_name]),
        }
    }

    async fn ensure_success(resp: Response) -> Result<Response, DomainError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(DomainError::Upstream {
            status: status.as_u16(),
            body,
        })
    }

    async fn send_write(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> Result<String, DomainError> {
        let mut request = self.http.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = Self::ensure_success(request.send().await?).await?;
        Ok(resp.text().await?)
    }
}

/// Trim every string in a JSON body, recursively.
pub fn trim_strings(value: &mut Value) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(trim_strings),
        Value::Object(map) => map.values_mut().for_each(trim_strings),
        _ => {}
    }
}

#[async_trait]
impl EntityGateway for RestClient {
    async fn list(&self, query: &ListQuery) -> Result<Page<Value>, DomainError> {
        let url = self.api_url(&[LIST_PATH]);
        let pairs = query.to_query_pairs();
        tracing::debug!(
            "GET {} ({:?}) entity={} page={} filters={:?}",
            url,
            self.backend,
            query.entity_name,
            query.page,
            query.filter_param()
        );

        self.retry
            .run(&format!("list {}", query.entity_name), || async {
                let resp = self.http.get(url.clone()).query(&pairs).send().await?;
                let resp = Self::ensure_success(resp).await?;
                Ok::<_, DomainError>(resp.json::<Page<Value>>().await?)
            })
            .await
    }

    async fn create(&self, entity_name: &str, body: &Value) -> Result<Option<Value>, DomainError> {
        let url = self.entity_url(entity_name, None);
        let mut body = body.clone();
        trim_strings(&mut body);
        tracing::info!("POST {} ({:?})", url, self.backend);

        // not idempotent: a 5xx may come back after the insert committed
        let text = self.send_write(Method::POST, &url, Some(&body)).await?;

        if text.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::debug!("Create {} returned a non-JSON body: {}", entity_name, e);
                Ok(None)
            }
        }
    }

    async fn update(
        &self,
        entity_name: &str,
        id: &EntityId,
        body: &Value,
    ) -> Result<(), DomainError> {
        let url = self.entity_url(entity_name, Some(id));
        let mut body = body.clone();
        trim_strings(&mut body);
        tracing::info!("PUT {} ({:?})", url, self.backend);

        self.retry
            .run(&format!("update {} {}", entity_name, id), || {
                self.send_write(Method::PUT, &url, Some(&body))
            })
            .await
            .map(|_| ())
    }

    async fn delete(&self, entity_name: &str, id: &EntityId) -> Result<(), DomainError> {
        let url = self.entity_url(entity_name, Some(id));
        tracing::info!("DELETE {} ({:?})", url, self.backend);

        self.retry
            .run(&format!("delete {} {}", entity_name, id), || {
                self.send_write(Method::DELETE, &url, None)
            })
            .await
            .map(|_| ())
    }
}
