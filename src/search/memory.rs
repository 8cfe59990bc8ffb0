// In-memory stand-in for the search engine, used by unit and handler tests.

use super::{HitsContainer, IndexStatus, SearchEngine, SearchResponse, WriteResponse};
use crate::utils::AppError;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    exists: bool,
    documents: Vec<(String, Map<String, Value>)>,
    create_error: Option<AppError>,
    raw_hits: Option<Vec<Value>>,
}

pub struct MemoryEngine {
    state: Mutex<State>,
    reachable: bool,
    create_calls: AtomicUsize,
    calls: AtomicUsize,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                exists: true,
                ..Default::default()
            }),
            reachable: true,
            create_calls: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn without_index() -> Self {
        let engine = Self::new();
        engine.state.lock().unwrap().exists = false;
        engine
    }

    /// Every call fails with a transport error.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new()
        }
    }

    pub fn with_create_error(self, error: AppError) -> Self {
        self.state.lock().unwrap().create_error = Some(error);
        self
    }

    /// Search answers with these hits verbatim instead of the stored documents.
    pub fn with_raw_hits(self, hits: Vec<Value>) -> Self {
        self.state.lock().unwrap().raw_hits = Some(hits);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of document and search calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }

    fn begin(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reachable_or_fail()
    }

    fn reachable_or_fail(&self) -> Result<(), AppError> {
        if self.reachable {
            Ok(())
        } else {
            Err(AppError::Transport("connection refused".to_string()))
        }
    }
}

fn matches(source: &Map<String, Value>, query: &Value) -> bool {
    let Some(multi_match) = query.pointer("/query/multi_match") else {
        return true;
    };

    let text = multi_match["query"].as_str().unwrap_or_default().to_lowercase();
    let terms: Vec<&str> = text.split_whitespace().collect();
    let fields = multi_match["fields"].as_array().cloned().unwrap_or_default();

    fields.iter().filter_map(|f| f.as_str()).any(|field| {
        source
            .get(field)
            .and_then(|v| v.as_str())
            .map(|v| {
                let value = v.to_lowercase();
                terms.iter().any(|term| value.contains(term))
            })
            .unwrap_or(false)
    })
}

fn not_found(id: &str) -> AppError {
    AppError::Engine {
        status: 404,
        body: json!({ "_id": id, "result": "not_found" }).to_string(),
    }
}

#[async_trait]
impl SearchEngine for MemoryEngine {
    fn index_name(&self) -> &str {
        "user"
    }

    async fn index_exists(&self) -> Result<IndexStatus, AppError> {
        self.reachable_or_fail()?;
        if self.state.lock().unwrap().exists {
            Ok(IndexStatus::Exists)
        } else {
            Ok(IndexStatus::Absent)
        }
    }

    async fn create_index(&self) -> Result<(), AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.reachable_or_fail()?;
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.create_error.take() {
            return Err(error);
        }
        state.exists = true;
        Ok(())
    }

    async fn index_document(&self, document: &Value) -> Result<WriteResponse, AppError> {
        self.begin()?;
        let source = document.as_object().cloned().unwrap_or_default();
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.state.lock().unwrap().documents.push((id.clone(), source));
        Ok(WriteResponse {
            id,
            result: "created".to_string(),
        })
    }

    async fn update_document(&self, id: &str, envelope: &Value) -> Result<WriteResponse, AppError> {
        self.begin()?;
        let Some(partial) = envelope.get("doc").and_then(|d| d.as_object()) else {
            return Err(AppError::Engine {
                status: 400,
                body: "Validation Failed: 1: script or doc is missing".to_string(),
            });
        };

        let mut state = self.state.lock().unwrap();
        let (_, source) = state
            .documents
            .iter_mut()
            .find(|(doc_id, _)| doc_id == id)
            .ok_or_else(|| not_found(id))?;

        for (key, value) in partial {
            source.insert(key.clone(), value.clone());
        }

        Ok(WriteResponse {
            id: id.to_string(),
            result: "updated".to_string(),
        })
    }

    async fn delete_document(&self, id: &str) -> Result<WriteResponse, AppError> {
        self.begin()?;
        let mut state = self.state.lock().unwrap();
        let position = state
            .documents
            .iter()
            .position(|(doc_id, _)| doc_id == id)
            .ok_or_else(|| not_found(id))?;
        state.documents.remove(position);

        Ok(WriteResponse {
            id: id.to_string(),
            result: "deleted".to_string(),
        })
    }

    async fn search(&self, query: &Value) -> Result<SearchResponse, AppError> {
        self.begin()?;
        let state = self.state.lock().unwrap();

        let hits = match &state.raw_hits {
            Some(raw) => raw.clone(),
            None => state
                .documents
                .iter()
                .filter(|(_, source)| matches(source, query))
                .map(|(id, source)| json!({ "_index": "user", "_id": id, "_score": 1.0, "_source": source }))
                .collect(),
        };

        Ok(SearchResponse {
            hits: HitsContainer { hits },
        })
    }

    async fn info(&self) -> Result<Vec<u8>, AppError> {
        self.begin()?;
        let info = json!({
            "name": "memory-node",
            "cluster_name": "memory",
            "version": { "number": "7.17.0" },
            "tagline": "You Know, for Search"
        });
        Ok(info.to_string().into_bytes())
    }
}
