use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::{Result, RummageError};
use crate::index::{Allocation, IndexRegistry, IndexStore};
use crate::metrics::ServiceMetrics;
use crate::models::*;
use crate::query::{rank, recall, Collation, CompiledQuery, Page, PageLimits};

/// Multi-tenant in-memory keyword search service.
///
/// Owns the index registry and every index's document store. Construct it
/// once and share it by reference or `Arc`; every operation is synchronous
/// and either completes or blocks on a lock.
pub struct SearchService {
    registry: IndexRegistry,
    collation: Box<dyn Collation>,
    page_limits: PageLimits,
    metrics: ServiceMetrics,
    config: ServiceConfig,
}

impl SearchService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let metrics =
            ServiceMetrics::new().map_err(|e| RummageError::Internal(e.to_string()))?;
        Self::with_metrics(config, metrics)
    }

    /// Create a service reporting into the given metrics
    pub fn with_metrics(config: ServiceConfig, metrics: ServiceMetrics) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: IndexRegistry::new(config.index_capacity),
            collation: config.collation.create(&config.locale)?,
            page_limits: PageLimits::from(&config),
            metrics,
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    /// Allocated index names, sorted
    pub fn index_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Register `name`. Succeeds without allocating if it already exists.
    pub fn create_index(&self, name: &str) -> Result<()> {
        self.allocate(name).map(|_| ())
    }

    fn allocate(&self, name: &str) -> Result<&IndexStore> {
        if name.is_empty() {
            return Err(RummageError::InvalidRequest(
                "index name must not be empty".to_string(),
            ));
        }

        let allocation = match self.registry.create(name) {
            Ok(allocation) => allocation,
            Err(e) => {
                if matches!(e, RummageError::CapacityExceeded { .. }) {
                    warn!(index = name, capacity = self.registry.capacity(), "index capacity exceeded");
                    self.metrics.record_capacity_error();
                }
                return Err(e);
            }
        };

        if let Allocation::Allocated(slot) = allocation {
            info!(index = name, slot, "index allocated");
            self.metrics.record_index_created(self.registry.allocated());
        }

        self.registry
            .store(allocation.slot())
            .ok_or_else(|| RummageError::Internal(format!("slot {} out of range", allocation.slot())))
    }

    /// Store a document, creating the index on first write.
    ///
    /// The document fully replaces any previous document with the same id.
    pub fn put(
        &self,
        index: &str,
        id: &str,
        keywords: Keywords,
        source: Option<Source>,
    ) -> Result<()> {
        if id.is_empty() {
            return Err(RummageError::InvalidRequest(
                "document id must not be empty".to_string(),
            ));
        }

        let store = match self.registry.resolve(index) {
            Some(store) => store,
            None => self.allocate(index)?,
        };

        // Fully built before the write lock is taken
        let doc = Document::new(index, id, keywords, source);
        let replaced = store.put(doc);
        self.metrics.record_put();
        debug!(index, id, replaced, "document stored");
        Ok(())
    }

    /// Store a document from a wire request
    pub fn put_request(&self, index: &str, request: PutRequest) -> Result<()> {
        self.put(index, &request.id, request.keywords, request.source)
    }

    /// Fetch a single document by id
    pub fn get(&self, index: &str, id: &str) -> Option<Document> {
        self.registry.resolve(index)?.get(id)
    }

    /// Compile and run a query request. Fails only on invalid patterns.
    pub fn search(&self, index: &str, request: &QueryRequest) -> Result<SearchResponse> {
        let query = CompiledQuery::compile(&request.query)?;
        Ok(self.query(index, &query, request.from, request.size))
    }

    /// Run a compiled query against `index`.
    ///
    /// An unknown index yields an empty response. The index's shared lock is
    /// held from the first evaluated document until the page is copied out.
    pub fn query(&self, index: &str, query: &CompiledQuery, from: i64, size: i64) -> SearchResponse {
        let start = Instant::now();

        let Some(store) = self.registry.resolve(index) else {
            debug!(index, "query against unknown index");
            return SearchResponse::default();
        };

        let (page, total, hits) = store.scan(|docs| {
            let mut recalls = recall(query, docs.values());
            rank(&mut recalls, &query.sort, self.collation.as_ref());

            let total = recalls.len();
            let page = Page::clamp(total, from, size, self.page_limits);
            let hits: Vec<Document> = page.slice(&recalls).iter().map(|&doc| doc.clone()).collect();
            (page, total, hits)
        });

        let elapsed = start.elapsed();
        self.metrics.record_query(elapsed.as_secs_f64(), total);
        debug!(
            index,
            total,
            from = page.from,
            size = page.size,
            took_us = elapsed.as_micros() as u64,
            "query executed"
        );

        SearchResponse {
            took_ms: elapsed.as_millis() as u64,
            hits: SearchHits {
                from: page.from,
                size: page.size,
                total,
                hits,
            },
        }
    }

    /// Drop every document in `index`
    pub fn reset(&self, index: &str) -> ResetStatus {
        let Some(store) = self.registry.resolve(index) else {
            return ResetStatus::NotFound;
        };

        let dropped = store.reset();
        self.metrics.record_reset();
        info!(index, dropped, "index reset");
        ResetStatus::Ok
    }

    /// Report whether `index` exists and how many documents it holds
    pub fn inspect(&self, index: &str) -> IndexStatus {
        let Some(slot) = self.registry.resolve_slot(index) else {
            return IndexStatus::missing(index);
        };
        let initialized = self.registry.is_initialized(slot);
        let document_count = self.registry.store(slot).map(IndexStore::len).unwrap_or(0);

        IndexStatus {
            index: index.to_string(),
            exists: true,
            initialized,
            document_count,
        }
    }
}
