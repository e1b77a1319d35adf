//! SQLite backed persistent store for static game-data documents.
//!
//! This crate defines the [`SharedStaticCache`] type: a thread-safe
//! key-value table holding raw JSON documents keyed `{category}_{language}`
//! with a stored write timestamp. Reads older than the caller-supplied TTL
//! are misses; the only invalidation is the wholesale [`clear`] used by the
//! static-data clients.
//!
//! [`clear`]: riftview_shared::traits::StaticDocumentStore::clear

use std::{
    path::Path,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;
use riftview_shared::traits::{SourceError, StaticDocumentStore};
use rusqlite::{Connection, OptionalExtension, params};
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info};

/// Thread-safe wrapper around a SQLite connection used across async tasks.
#[derive(Debug, Clone)]
pub struct SharedStaticCache {
    conn: Arc<Mutex<Connection>>,
    init_once: Arc<OnceCell<()>>,
}

impl SharedStaticCache {
    /// Open (or create) the cache database at the given path.
    pub fn new(path: impl AsRef<Path>) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an existing connection. Schema creation is deferred to
    /// [`init`](Self::init).
    pub fn from_connection(conn: Connection) -> Self {
        info!("opening SQLite static-data cache");
        Self {
            conn: Arc::new(Mutex::new(conn)),
            init_once: Arc::new(OnceCell::new()),
        }
    }

    /// In-memory cache, used by tests and as a no-persistence fallback.
    pub fn new_in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    /// Initialize the schema. Safe to call more than once.
    pub async fn init(&self) {
        let _ = self
            .init_once
            .get_or_init(|| async {
                debug!("initializing static cache schema");

                let db = self.conn.lock().await;
                db.execute(
                    "CREATE TABLE IF NOT EXISTS static_documents (
                        cache_key TEXT PRIMARY KEY,
                        payload TEXT NOT NULL,
                        cached_at INTEGER NOT NULL
                    )",
                    [],
                )
                .expect("static cache schema creation failed");

                info!("static cache ready");
            })
            .await;
    }
}

fn cache_key(category: &str, language: &str) -> String {
    format!("{}_{}", category, language)
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

#[async_trait]
impl StaticDocumentStore for SharedStaticCache {
    async fn get_document(
        &self,
        category: &str,
        language: &str,
        max_age: Duration,
    ) -> Result<Option<String>, SourceError> {
        let key = cache_key(category, language);

        let db = self.conn.lock().await;

        let row: Option<(String, u64)> = db
            .query_row(
                "SELECT payload, cached_at FROM static_documents WHERE cache_key = ?1",
                [&key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((payload, cached_at)) = row else {
            return Ok(None);
        };

        // Stale rows stay in place until overwritten; a read just misses.
        let age = now_unix_secs().saturating_sub(cached_at);
        if age > max_age.as_secs() {
            debug!("cache entry {} expired ({}s old)", key, age);
            return Ok(None);
        }

        Ok(Some(payload))
    }

    async fn put_document(
        &self,
        category: &str,
        language: &str,
        payload: &str,
    ) -> Result<(), SourceError> {
        let key = cache_key(category, language);

        let db = self.conn.lock().await;
        db.execute(
            "INSERT OR REPLACE INTO static_documents (cache_key, payload, cached_at)
            VALUES (?1, ?2, ?3)",
            params![key, payload, now_unix_secs()],
        )?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SourceError> {
        let db = self.conn.lock().await;
        db.execute("DELETE FROM static_documents", [])?;
        info!("static cache cleared");
        Ok(())
    }
}
