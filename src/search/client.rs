use super::{IndexStatus, RefreshPolicy, SearchEngine, SearchResponse, WriteResponse};
use crate::utils::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Long-lived handle to an Elasticsearch-compatible engine over its REST API.
///
/// Built once at startup and shared by every request; reqwest pools the
/// underlying connections.
pub struct ElasticsearchClient {
    http: reqwest::Client,
    base_url: String,
    index: String,
    refresh: RefreshPolicy,
}

impl ElasticsearchClient {
    pub fn new(base_url: &str, index: &str, refresh: RefreshPolicy) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            index: index.to_string(),
            refresh,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn index_url(&self) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(&self.index))
    }

    /// `{base}/{index}/{endpoint}/{id}` with the id percent-encoded.
    fn document_url(&self, endpoint: &str, id: &str) -> String {
        format!("{}/{}/{}", self.index_url(), endpoint, urlencoding::encode(id))
    }
}

/// Turns any non-2xx answer into `AppError::Engine`, keeping the body for the logs.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::debug!("Could not read error body (status {}): {}", status, e);
            String::new()
        }
    };
    Err(AppError::Engine {
        status: status.as_u16(),
        body,
    })
}

async fn decode_write(response: reqwest::Response) -> Result<WriteResponse, AppError> {
    ensure_success(response)
        .await?
        .json::<WriteResponse>()
        .await
        .map_err(|e| AppError::MalformedResponse(format!("write response: {}", e)))
}

#[async_trait]
impl SearchEngine for ElasticsearchClient {
    fn index_name(&self) -> &str {
        &self.index
    }

    async fn index_exists(&self) -> Result<IndexStatus, AppError> {
        let response = self.http.head(self.index_url()).send().await?;

        match response.status() {
            status if status.is_success() => Ok(IndexStatus::Exists),
            reqwest::StatusCode::NOT_FOUND => Ok(IndexStatus::Absent),
            status => Err(AppError::Engine {
                status: status.as_u16(),
                body: String::new(),
            }),
        }
    }

    async fn create_index(&self) -> Result<(), AppError> {
        let response = self.http.put(self.index_url()).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn index_document(&self, document: &Value) -> Result<WriteResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/_doc", self.index_url()))
            .query(&[("refresh", self.refresh.as_param())])
            .json(document)
            .send()
            .await?;

        decode_write(response).await
    }

    async fn update_document(&self, id: &str, envelope: &Value) -> Result<WriteResponse, AppError> {
        let response = self
            .http
            .post(self.document_url("_update", id))
            .query(&[("refresh", self.refresh.as_param())])
            .json(envelope)
            .send()
            .await?;

        decode_write(response).await
    }

    async fn delete_document(&self, id: &str) -> Result<WriteResponse, AppError> {
        let response = self
            .http
            .delete(self.document_url("_doc", id))
            .query(&[("refresh", self.refresh.as_param())])
            .send()
            .await?;

        decode_write(response).await
    }

    async fn search(&self, query: &Value) -> Result<SearchResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/_search", self.index_url()))
            .json(query)
            .send()
            .await?;

        ensure_success(response)
            .await?
            .json::<SearchResponse>()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("search response: {}", e)))
    }

    async fn info(&self) -> Result<Vec<u8>, AppError> {
        let response = self.http.get(&self.base_url).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
