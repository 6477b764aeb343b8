use prometheus::{Counter, Gauge, Histogram, HistogramOpts, Opts, Registry};
use std::sync::Arc;

/// Prometheus metrics for the search service
#[derive(Clone)]
pub struct ServiceMetrics {
    // Counters
    pub indices_created: Counter,
    pub documents_put: Counter,
    pub resets: Counter,
    pub queries_total: Counter,
    pub capacity_errors: Counter,

    // Gauges
    pub indices_allocated: Gauge,

    // Histograms
    pub query_latency: Histogram,
    pub query_recalls: Histogram,

    registry: Arc<Registry>,
}

impl ServiceMetrics {
    /// Create a new ServiceMetrics instance
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let indices_created = Counter::with_opts(Opts::new(
            "rummage_indices_created_total",
            "Total number of index slots allocated",
        ))?;
        registry.register(Box::new(indices_created.clone()))?;

        let documents_put = Counter::with_opts(Opts::new(
            "rummage_documents_put_total",
            "Total number of documents written",
        ))?;
        registry.register(Box::new(documents_put.clone()))?;

        let resets = Counter::with_opts(Opts::new(
            "rummage_resets_total",
            "Total number of index resets",
        ))?;
        registry.register(Box::new(resets.clone()))?;

        let queries_total = Counter::with_opts(Opts::new(
            "rummage_queries_total",
            "Total number of queries executed",
        ))?;
        registry.register(Box::new(queries_total.clone()))?;

        let capacity_errors = Counter::with_opts(Opts::new(
            "rummage_capacity_errors_total",
            "Index creations rejected because every slot was taken",
        ))?;
        registry.register(Box::new(capacity_errors.clone()))?;

        let indices_allocated = Gauge::with_opts(Opts::new(
            "rummage_indices_allocated",
            "Number of index slots currently allocated",
        ))?;
        registry.register(Box::new(indices_allocated.clone()))?;

        let query_latency = Histogram::with_opts(
            HistogramOpts::new("rummage_query_latency_seconds", "Query latency")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        )?;
        registry.register(Box::new(query_latency.clone()))?;

        let query_recalls = Histogram::with_opts(
            HistogramOpts::new(
                "rummage_query_recalls",
                "Number of documents recalled per query",
            )
            .buckets(vec![0.0, 1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0]),
        )?;
        registry.register(Box::new(query_recalls.clone()))?;

        Ok(Self {
            indices_created,
            documents_put,
            resets,
            queries_total,
            capacity_errors,
            indices_allocated,
            query_latency,
            query_recalls,
            registry: Arc::new(registry),
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Record a newly allocated index
    pub fn record_index_created(&self, allocated: usize) {
        self.indices_created.inc();
        self.indices_allocated.set(allocated as f64);
    }

    pub fn record_capacity_error(&self) {
        self.capacity_errors.inc();
    }

    pub fn record_put(&self) {
        self.documents_put.inc();
    }

    pub fn record_reset(&self) {
        self.resets.inc();
    }

    /// Record a query with its recall count
    pub fn record_query(&self, duration_secs: f64, recalls: usize) {
        self.queries_total.inc();
        self.query_latency.observe(duration_secs);
        self.query_recalls.observe(recalls as f64);
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
