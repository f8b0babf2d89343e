//! Prometheus metrics for the task queue.
//!
//! All metrics follow the naming convention: `tq_<component>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., tasks_admitted_total)
//! - **Gauge**: Value that can go up or down (e.g., tasks_pending)
//! - **Histogram**: Distribution of values (e.g., task_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // QUEUE METRICS
    // =========================================================================

    /// Submissions admitted through intake, one per requested provider.
    /// Prerequisites added by expansion are not counted.
    pub static ref TASKS_ADMITTED: Counter = Counter::new(
        "tq_queue_tasks_admitted_total",
        "Requested providers admitted through intake, prerequisites excluded"
    ).expect("metric creation failed");

    /// Tasks popped, by work type
    pub static ref TASKS_DISPATCHED: CounterVec = CounterVec::new(
        Opts::new("tq_queue_tasks_dispatched_total", "Total tasks dispatched to the worker"),
        &["work_type"]
    ).expect("metric creation failed");

    /// Pending task count after the last queue operation
    pub static ref TASKS_PENDING: Gauge = Gauge::new(
        "tq_queue_tasks_pending",
        "Number of tasks waiting in the queue"
    ).expect("metric creation failed");

    /// Span between newest and oldest pending timestamps
    pub static ref QUEUE_AGE: Gauge = Gauge::new(
        "tq_queue_age_seconds",
        "Seconds between the newest and oldest pending task"
    ).expect("metric creation failed");

    // =========================================================================
    // INTAKE / WORKER METRICS
    // =========================================================================

    /// Requested providers unknown to the registry
    pub static ref PROVIDERS_SKIPPED: Counter = Counter::new(
        "tq_intake_providers_skipped_total",
        "Requested providers skipped because they are not registered"
    ).expect("metric creation failed");

    /// Time the worker spends on one dispatch
    pub static ref TASK_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "tq_worker_task_duration_seconds",
            "Time spent handling one dispatched task"
        ).buckets(exponential_buckets(0.01, 2.0, 12).expect("valid bucket layout"))
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Queue
        Box::new(TASKS_ADMITTED.clone()),
        Box::new(TASKS_DISPATCHED.clone()),
        Box::new(TASKS_PENDING.clone()),
        Box::new(QUEUE_AGE.clone()),
        // Intake / worker
        Box::new(PROVIDERS_SKIPPED.clone()),
        Box::new(TASK_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Records the queue gauges.
pub fn observe_queue(pending: usize, age_secs: u64) {
    TASKS_PENDING.set(pending as f64);
    QUEUE_AGE.set(age_secs as f64);
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
