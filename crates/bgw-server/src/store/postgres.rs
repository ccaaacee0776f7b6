//! PostgreSQL document store
//!
//! All collections share one `documents` table holding a JSONB payload per
//! `(collection, id)`. Filters compile to SQL with every field name and value
//! bound as a parameter, so request data never reaches the query text.
//!
//! Sorting uses JSONB ordering, which agrees with the in-memory backend for
//! values of the same type. Documents without the sort field come last when
//! descending and first when ascending; ties fall back to insertion order.

use super::{DocumentStore, Filter, FindOptions, StoreResult};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use bgw_common::{Document, ID_FIELD};
use serde_json::Value;
use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    types::Json,
    Postgres, QueryBuilder,
};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool using the shared pool settings
    pub async fn connect(url: &str, config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connection pool created"
        );

        Ok(Self::new(pool))
    }

    /// Create the `documents` table and its lookup indexes
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    #[tracing::instrument(skip(self, filter))]
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let mut query = select(collection, filter);
        query.push(" ORDER BY seq LIMIT 1");

        let doc = query
            .build_query_scalar::<Json<Document>>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(doc.map(|Json(doc)| doc))
    }

    #[tracing::instrument(skip(self, filter, options))]
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StoreResult<Vec<Document>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        match options.projection {
            Some(ref fields) => {
                query
                    .push("jsonb_build_object('_id', id) || COALESCE((SELECT jsonb_object_agg(key, value) FROM jsonb_each(doc) WHERE key = ANY(")
                    .push_bind(fields.clone())
                    .push(")), '{}'::jsonb)");
            },
            None => {
                query.push("doc");
            },
        }
        query.push(" FROM documents WHERE collection = ");
        query.push_bind(collection.to_string());
        query.push(" AND ");
        push_filter(&mut query, filter);

        query.push(" ORDER BY ");
        if let Some(ref sort) = options.sort {
            query.push("doc -> ").push_bind(sort.field.clone());
            query.push(" DESC NULLS LAST, ");
        }
        query.push("seq");

        if let Some(limit) = options.limit {
            query.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let docs = query
            .build_query_scalar::<Json<Document>>()
            .fetch_all(&self.pool)
            .await?;

        Ok(docs.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn select<'args>(collection: &str, filter: &Filter) -> QueryBuilder<'args, Postgres> {
    let mut query = QueryBuilder::new("SELECT doc FROM documents WHERE collection = ");
    query.push_bind(collection.to_string());
    query.push(" AND ");
    push_filter(&mut query, filter);
    query
}

/// Append the SQL rendering of `filter` as a self-contained predicate
fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    match filter {
        Filter::All => {
            query.push("TRUE");
        },
        Filter::Eq { field, value } if field == ID_FIELD => match value.as_str() {
            Some(id) => {
                query.push("id = ").push_bind(id.to_string());
            },
            None => {
                query.push("FALSE");
            },
        },
        Filter::Eq { field, value: Value::Null } => {
            query.push("(doc -> ").push_bind(field.clone());
            query.push(" IS NULL OR doc -> ").push_bind(field.clone());
            query.push(" = 'null'::jsonb)");
        },
        Filter::Eq { field, value } => {
            query.push("(doc -> ").push_bind(field.clone());
            query.push(" = ").push_bind(value.clone());
            query.push(" OR (jsonb_typeof(doc -> ").push_bind(field.clone());
            query.push(") = 'array' AND doc -> ").push_bind(field.clone());
            query.push(" @> jsonb_build_array(").push_bind(value.clone());
            query.push(")))");
        },
        Filter::In { field, values } if field == ID_FIELD => {
            let ids: Vec<String> = values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            query.push("id = ANY(").push_bind(ids).push(")");
        },
        Filter::In { field, values } => {
            query.push("EXISTS (SELECT 1 FROM jsonb_array_elements(");
            query.push_bind(Value::Array(values.clone()));
            query.push(") AS candidate(value) WHERE doc -> ").push_bind(field.clone());
            query.push(" = candidate.value OR (jsonb_typeof(doc -> ").push_bind(field.clone());
            query.push(") = 'array' AND doc -> ").push_bind(field.clone());
            query.push(" @> jsonb_build_array(candidate.value)) OR (candidate.value = 'null'::jsonb AND doc -> ");
            query.push_bind(field.clone());
            query.push(" IS NULL))");
        },
        Filter::Regex { field, pattern } => {
            let operator = if pattern.is_case_insensitive() { " ~* " } else { " ~ " };
            if field == ID_FIELD {
                query.push("id").push(operator).push_bind(pattern.source().to_string());
                return;
            }

            query.push("(CASE jsonb_typeof(doc -> ").push_bind(field.clone());
            query.push(") WHEN 'string' THEN doc ->> ").push_bind(field.clone());
            query.push(operator).push_bind(pattern.source().to_string());
            query.push(" WHEN 'array' THEN EXISTS (SELECT 1 FROM jsonb_array_elements_text(doc -> ");
            query.push_bind(field.clone());
            query.push(") AS element(value) WHERE element.value");
            query.push(operator).push_bind(pattern.source().to_string());
            query.push(") ELSE FALSE END)");
        },
        Filter::And(filters) => push_group(query, filters, " AND ", "TRUE"),
        Filter::Or(filters) => push_group(query, filters, " OR ", "FALSE"),
    }
}

fn push_group(query: &mut QueryBuilder<'_, Postgres>, filters: &[Filter], joiner: &str, empty: &str) {
    if filters.is_empty() {
        query.push(empty);
        return;
    }

    query.push("(");
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            query.push(joiner);
        }
        push_filter(query, filter);
    }
    query.push(")");
}
