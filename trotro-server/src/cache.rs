//! Caching layer for computed plans.
//!
//! Path searches are pure functions of the graph, so their results stay
//! valid until the next merge. The cache is keyed by the resolved
//! (start, end) pair and invalidated wholesale whenever contributed routes
//! are merged; the TTL bounds staleness if an invalidation is ever missed.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StopId;
use crate::planner::PathResult;

/// Cache key: resolved (start, end) stop ids.
type PlanKey = (StopId, StopId);

/// Cached search outcome. `None` records a "no route" answer, which is as
/// cacheable as a found path.
type PlanEntry = Arc<Option<PathResult>>;

/// Configuration for the plan cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache of shortest-path results.
pub struct PlanCache {
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl PlanCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Get a cached plan for a (start, end) pair.
    pub async fn get(&self, start: &StopId, end: &StopId) -> Option<PlanEntry> {
        self.plans.get(&(start.clone(), end.clone())).await
    }

    /// Insert a plan outcome.
    pub async fn insert(&self, start: StopId, end: StopId, outcome: Option<PathResult>) {
        self.plans.insert((start, end), Arc::new(outcome)).await;
    }

    /// Drop every cached entry. Called after each merge, since any cached
    /// plan may have been undercut by a newly contributed edge.
    pub fn invalidate_all(&self) {
        self.plans.invalidate_all();
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StopId {
        StopId::new(s)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = PlanCache::new(&CacheConfig::default());

        assert!(cache.get(&id("a"), &id("b")).await.is_none());

        cache
            .insert(id("a"), id("b"), Some(PathResult::empty()))
            .await;

        let entry = cache.get(&id("a"), &id("b")).await.unwrap();
        assert!(entry.as_ref().is_some());

        // direction matters
        assert!(cache.get(&id("b"), &id("a")).await.is_none());
    }

    #[tokio::test]
    async fn caches_not_found_outcomes() {
        let cache = PlanCache::new(&CacheConfig::default());
        cache.insert(id("a"), id("b"), None).await;

        let entry = cache.get(&id("a"), &id("b")).await.unwrap();
        assert!(entry.as_ref().is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_entries() {
        let cache = PlanCache::new(&CacheConfig::default());
        cache.insert(id("a"), id("b"), None).await;

        cache.invalidate_all();
        // moka applies invalidation lazily; a get must miss regardless
        assert!(cache.get(&id("a"), &id("b")).await.is_none());
    }
}
