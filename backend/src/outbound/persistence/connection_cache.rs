//! Process-wide, lazily established database handle.
//!
//! The first caller to need the database triggers the connection attempt.
//! Callers arriving while that attempt is in flight wait for it instead of
//! dialling again. A failed attempt leaves the cache empty, so the next call
//! retries.

use async_trait::async_trait;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::bb8::PooledConnection;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::pool::{DbPool, PoolConfig, PoolError};

/// Something that can open the shared database handle.
#[async_trait]
pub trait Connect: Send + Sync {
    /// Handle shared by every caller once established.
    type Handle: Send + Sync;

    /// Open a new handle.
    async fn connect(&self) -> Result<Self::Handle, PoolError>;
}

#[async_trait]
impl Connect for PoolConfig {
    type Handle = DbPool;

    async fn connect(&self) -> Result<DbPool, PoolError> {
        DbPool::new(self.clone()).await
    }
}

/// Memoised handle with single-flight initialisation.
///
/// # Examples
/// ```no_run
/// use event_rsvp::outbound::persistence::{PgConnectionCache, PoolConfig};
///
/// # async fn demo() -> Result<(), event_rsvp::outbound::persistence::PoolError> {
/// let cache = PgConnectionCache::new(PoolConfig::new("postgres://localhost/events"));
/// let pool = cache.get().await?;
/// let _conn = pool.get().await?;
/// # Ok(())
/// # }
/// ```
pub struct ConnectionCache<C: Connect> {
    connector: C,
    handle: OnceCell<C::Handle>,
}

/// Connection cache producing the PostgreSQL pool.
pub type PgConnectionCache = ConnectionCache<PoolConfig>;

impl<C: Connect> ConnectionCache<C> {
    /// Create an empty cache. Nothing is dialled until [`Self::get`].
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            handle: OnceCell::new(),
        }
    }

    /// Return the shared handle, establishing it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the connector's error. The failure is not cached.
    pub async fn get(&self) -> Result<&C::Handle, PoolError> {
        self.handle
            .get_or_try_init(|| async {
                info!("establishing database connection");
                self.connector.connect().await.inspect_err(|error| {
                    warn!(%error, "database connection attempt failed");
                })
            })
            .await
    }

    /// Return `true` once a handle has been established.
    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }
}

impl ConnectionCache<PoolConfig> {
    /// Check a pooled connection out, establishing the pool if needed.
    pub async fn checkout(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.get().await?.get().await
    }
}
