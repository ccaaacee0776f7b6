//! Common test utilities for BioGateway server integration tests
//!
//! Router tests run against a seeded [`MemoryStore`]; store tests spin up a
//! PostgreSQL container with `testcontainers` and load the same fixtures.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{get, test_app};
//!
//! #[tokio::test]
//! async fn test_connection() {
//!     let response = get(&test_app(), "/test").await;
//!     assert_eq!(response.status, axum::http::StatusCode::OK);
//! }
//! ```

#![allow(dead_code)]

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use bgw_common::Document;
use bgw_server::{
    api,
    config::Config,
    features::FeatureState,
    query::Limits,
    store::{DocumentStore, Filter, FindOptions, MemoryStore, PgDocumentStore, StoreError, StoreResult},
};
use serde_json::{json, Value};
use sqlx::types::Json;
use std::sync::Arc;
use testcontainers::{core::IntoContainerPort, runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::ServiceExt;
use tracing::info;

pub const TP53_HUMAN: &str = "http://rdf.biogateway.eu/prot/P04637";
pub const TP53_MOUSE: &str = "http://rdf.biogateway.eu/prot/P02340";
pub const BRCA1_HUMAN: &str = "http://rdf.biogateway.eu/prot/P38398";
pub const TP53_GENE: &str = "http://rdf.biogateway.eu/gene/9606/TP53";
pub const APOPTOSIS: &str = "http://purl.obolibrary.org/obo/GO_0006915";
pub const HUMAN_TAXON: &str = "http://purl.obolibrary.org/obo/NCBITaxon_9606";
pub const TP53_BRCA1_EDGE: &str = "http://rdf.biogateway.eu/prot-prot/P04637--P38398";

// ============================================================================
// Fixtures
// ============================================================================

/// Node and edge collections, keyed by storage name
pub fn graph_fixtures() -> Value {
    json!({
        "prot": [
            {
                "_id": TP53_HUMAN,
                "prefLabel": "P53_HUMAN",
                "lcLabel": "p53_human",
                "synonyms": ["TP53", "p53"],
                "lcSynonyms": ["tp53", "p53"],
                "definition": "Cellular tumor antigen p53",
                "instances": ["P04637"],
                "taxon": "9606",
                "refScore": 50
            },
            {
                "_id": TP53_MOUSE,
                "prefLabel": "P53_MOUSE",
                "lcLabel": "p53_mouse",
                "synonyms": ["Trp53", "p53"],
                "lcSynonyms": ["trp53", "p53"],
                "definition": "Cellular tumor antigen p53",
                "instances": ["P02340"],
                "taxon": "10090",
                "refScore": 20
            },
            {
                "_id": BRCA1_HUMAN,
                "prefLabel": "BRCA1_HUMAN",
                "lcLabel": "brca1_human",
                "synonyms": ["BRCA1"],
                "lcSynonyms": ["brca1"],
                "definition": "Breast cancer type 1 susceptibility protein",
                "instances": ["P38398"],
                "taxon": "9606",
                "refScore": 40
            },
            {
                "_id": "http://rdf.biogateway.eu/prot/Q00001",
                "prefLabel": "ABRCA1_HUMAN",
                "lcLabel": "abrca1_human",
                "definition": "Decoy\twith a tab",
                "taxon": "9606",
                "refScore": 90
            }
        ],
        "gene": [
            {
                "_id": TP53_GENE,
                "prefLabel": "TP53",
                "lcLabel": "tp53",
                "definition": "tumor protein p53",
                "encodes": TP53_HUMAN,
                "reviewed": true,
                "taxon": "9606",
                "refScore": 10
            }
        ],
        "goall": [
            {
                "_id": APOPTOSIS,
                "prefLabel": "apoptotic process",
                "lcLabel": "apoptotic process",
                "definition": "A programmed cell death process",
                "refScore": 5
            }
        ],
        "taxon": [
            {"_id": HUMAN_TAXON, "prefLabel": "Homo sapiens", "lcLabel": "homo sapiens"}
        ],
        "prot2prot": [
            {"_id": TP53_BRCA1_EDGE, "subject": TP53_HUMAN, "object": BRCA1_HUMAN}
        ]
    })
}

/// Literature evidence sentences
pub fn evidence_fixtures() -> Value {
    json!({
        "sentences": [
            {"_id": "s1", "pubmedId": "100", "TF": "TP53", "TG": "MDM2"},
            {"_id": "s2", "pubmedId": "100", "TF": "MYC", "TG": "CDK4"},
            {"_id": "s3", "pubmedId": "200", "TF": "TP53", "TG": "MDM2"}
        ]
    })
}

pub fn graph_store() -> MemoryStore {
    MemoryStore::from_json(graph_fixtures()).expect("valid graph fixtures")
}

pub fn evidence_store() -> MemoryStore {
    MemoryStore::from_json(evidence_fixtures()).expect("valid evidence fixtures")
}

/// A store that fails every lookup for one URI and delegates the rest
pub struct FailingStore {
    inner: MemoryStore,
    poisoned: String,
}

impl FailingStore {
    pub fn new(inner: MemoryStore, poisoned: impl Into<String>) -> Self {
        Self {
            inner,
            poisoned: poisoned.into(),
        }
    }

    fn check(&self, filter: &Filter) -> StoreResult<()> {
        match filter {
            Filter::Eq { value, .. } if value.as_str() == Some(self.poisoned.as_str()) => {
                Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
            },
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        self.check(filter)?;
        self.inner.find_one(collection, filter).await
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StoreResult<Vec<Document>> {
        self.check(filter)?;
        self.inner.find(collection, filter, options).await
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        self.inner.count(collection).await
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Sqlx(sqlx::Error::PoolClosed))
    }
}

// ============================================================================
// Application
// ============================================================================

pub fn test_state() -> FeatureState {
    FeatureState {
        store: Arc::new(graph_store()),
        evidence: Arc::new(evidence_store()),
        limits: Limits::default(),
        fetch_timeout: None,
    }
}

/// Router over the memory fixtures with default configuration
pub fn test_app() -> Router {
    api::create_router(test_state(), &Config::default())
}

pub fn test_app_with(state: FeatureState, config: &Config) -> Router {
    api::create_router(state, config)
}

// ============================================================================
// Requests
// ============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<String>) -> TestResponse {
    send(
        app,
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap(),
    )
    .await
}

/// Percent-encode a query parameter value
pub fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => (b as char).to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

// ============================================================================
// PostgreSQL Test Container
// ============================================================================

/// PostgreSQL container with migrations applied and fixtures loaded
pub struct TestPostgres {
    _container: ContainerAsync<Postgres>,
    store: PgDocumentStore,
}

impl TestPostgres {
    pub async fn start() -> Result<Self> {
        info!("Starting PostgreSQL test container...");

        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .context("Failed to start PostgreSQL container")?;

        let host = container
            .get_host()
            .await
            .context("Failed to get container host")?;
        let port = container
            .get_host_port_ipv4(5432.tcp())
            .await
            .context("Failed to get container port")?;

        let url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);
        let store = PgDocumentStore::connect(&url, &Config::default().database)
            .await
            .context("Failed to connect to PostgreSQL")?;
        store.migrate().await.context("Failed to run migrations")?;

        let pg = Self {
            _container: container,
            store,
        };
        pg.seed(graph_fixtures()).await?;
        pg.seed(evidence_fixtures()).await?;

        Ok(pg)
    }

    /// Insert every document of a `{collection: [documents]}` object, in order
    pub async fn seed(&self, fixtures: Value) -> Result<()> {
        let Value::Object(collections) = fixtures else {
            anyhow::bail!("fixtures must be an object of collections");
        };

        for (collection, docs) in collections {
            for doc in docs.as_array().into_iter().flatten() {
                let id = doc["_id"].as_str().context("fixture without _id")?;
                sqlx::query("INSERT INTO documents (collection, id, doc) VALUES ($1, $2, $3)")
                    .bind(&collection)
                    .bind(id)
                    .bind(Json(doc))
                    .execute(self.store.pool())
                    .await
                    .with_context(|| format!("Failed to insert {id} into {collection}"))?;
            }
        }

        Ok(())
    }

    pub fn store(&self) -> &PgDocumentStore {
        &self.store
    }
}

/// Initialize test tracing, honouring `RUST_LOG` when set
pub fn init_test_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,bgw_server=debug,sqlx=warn,testcontainers=info")
        }))
        .with_test_writer()
        .try_init();
}
