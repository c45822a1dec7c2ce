//! Portfolio service: cache check, fetch-all, assembly, cache write.

use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_cache::{CachePolicy, Clock, KeyValueStore, SystemClock, TimedCache};
use folio_connectors::{fetch_all, HttpSheetFetcher, SheetFetcher};
use folio_core::config::{DEFAULT_CACHE_KEY, DEFAULT_CACHE_TTL, DEFAULT_FETCH_TIMEOUT};
use folio_core::{ContentModel, Defaults, FolioConfig, IdStrategy, Result, SheetSources};
use folio_ingest::{assemble, Assembly};
use parking_lot::RwLock;
use serde::de::IgnoredAny;
use tracing::{debug, info, warn};

use crate::types::*;

/// Serves the portfolio content model.
///
/// Every load either returns the fresh cached model or runs one ingestion:
/// all sheets fetched concurrently, assembled over the defaults, written back
/// to the cache. Loads never fail; unavailable sheets degrade to defaults.
pub struct PortfolioService {
    fetcher: Arc<dyn SheetFetcher>,
    cache: TimedCache,
    clock: Arc<dyn Clock>,
    sources: SheetSources,
    defaults: Defaults,
    policy: CachePolicy,
    id_strategy: IdStrategy,
    fetch_timeout: Duration,
    last_report: RwLock<Option<IngestReport>>,
    /// Serializes ingestion runs so concurrent misses share one fetch.
    run_lock: tokio::sync::Mutex<()>,
}

impl PortfolioService {
    /// Create a service with built-in defaults and no sheets configured.
    pub fn new(
        fetcher: Arc<dyn SheetFetcher>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            fetcher,
            cache: TimedCache::new(store),
            clock,
            sources: SheetSources::default(),
            defaults: Defaults::builtin(),
            policy: CachePolicy::new(DEFAULT_CACHE_KEY, DEFAULT_CACHE_TTL),
            id_strategy: IdStrategy::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            last_report: RwLock::new(None),
            run_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Wire the HTTP fetcher, the given store and the system clock from configuration.
    pub fn from_config(config: &FolioConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let fetcher = HttpSheetFetcher::new(config.fetch_timeout)?;
        let defaults = config.load_defaults()?;

        info!(
            "PortfolioService: {} of 6 sheets configured, cache ttl {:?}",
            config.sources.configured().len(),
            config.cache_ttl
        );

        Ok(Self::new(Arc::new(fetcher), store, Arc::new(SystemClock))
            .with_sources(config.sources.clone())
            .with_defaults(defaults)
            .with_policy(CachePolicy::new(config.cache_key.clone(), config.cache_ttl))
            .with_id_strategy(config.id_strategy)
            .with_fetch_timeout(config.fetch_timeout))
    }

    pub fn with_sources(mut self, sources: SheetSources) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn sources(&self) -> &SheetSources {
        &self.sources
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    // ---------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------

    /// The content model: the fresh cached one unless `ignore_cache`,
    /// otherwise the result of a new ingestion run.
    pub async fn load(&self, ignore_cache: bool) -> ContentModel {
        if !ignore_cache {
            if let Some(content) = self.fresh_cached() {
                return content;
            }
        }

        let _guard = self.run_lock.lock().await;
        if !ignore_cache {
            // A concurrent run may have refilled the cache while we waited.
            if let Some(content) = self.fresh_cached() {
                return content;
            }
        }
        self.ingest().await
    }

    /// Ingest regardless of the cache.
    pub async fn refresh(&self) -> ContentModel {
        self.load(true).await
    }

    /// The cached model even when expired, for showing something while a
    /// refresh runs.
    pub fn cached_snapshot(&self) -> Option<CachedSnapshot> {
        let (data, timestamp) = self.cache.get::<ContentModel>(&self.policy.key)?;
        Some(CachedSnapshot {
            data,
            timestamp,
            fresh: self.policy.is_fresh(timestamp, self.clock.now_millis()),
        })
    }

    pub fn cache_status(&self) -> CacheStatus {
        let now = self.clock.now_millis();
        let timestamp = self
            .cache
            .get::<IgnoredAny>(&self.policy.key)
            .map(|(_, ts)| ts);

        CacheStatus {
            key: self.policy.key.clone(),
            ttl_secs: self.policy.ttl.as_secs(),
            present: timestamp.is_some(),
            timestamp,
            age_ms: timestamp.map(|ts| now.saturating_sub(ts)),
            fresh: timestamp.is_some_and(|ts| self.policy.is_fresh(ts, now)),
        }
    }

    /// Report of the most recent ingestion run, if any ran in this process.
    pub fn last_report(&self) -> Option<IngestReport> {
        self.last_report.read().clone()
    }

    fn fresh_cached(&self) -> Option<ContentModel> {
        let (content, timestamp) = self.cache.get::<ContentModel>(&self.policy.key)?;
        let now = self.clock.now_millis();
        if self.policy.is_fresh(timestamp, now) {
            debug!(
                "Cache hit: {} (age {}ms)",
                self.policy.key,
                now.saturating_sub(timestamp)
            );
            Some(content)
        } else {
            debug!(
                "Cache expired: {} (age {}ms)",
                self.policy.key,
                now.saturating_sub(timestamp)
            );
            None
        }
    }

    async fn ingest(&self) -> ContentModel {
        let started_at = self.clock.now_millis();
        let timer = Instant::now();

        let sheets = fetch_all(self.fetcher.as_ref(), &self.sources, self.fetch_timeout).await;
        let Assembly { content, origins } = assemble(&sheets, &self.defaults, self.id_strategy);

        let cached = match self
            .cache
            .set(&self.policy.key, &content, self.clock.now_millis())
        {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write cache entry {}: {}", self.policy.key, e);
                false
            }
        };

        let report = IngestReport {
            started_at,
            duration_ms: timer.elapsed().as_millis() as i64,
            unavailable: sheets.unavailable.clone(),
            origins,
            counts: ContentCounts::of(&content),
            cached,
        };
        info!(
            "Ingestion finished in {}ms: {} projects, {} skills, {} unavailable sheets",
            report.duration_ms,
            report.counts.projects,
            report.counts.skills,
            report.unavailable.len()
        );
        *self.last_report.write() = Some(report);

        content
    }
}
