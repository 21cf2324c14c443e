use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref FEED_REQUESTS: Counter = Counter::new(
        "feed_requests_total",
        "Total number of upstream feed requests"
    ).unwrap();

    pub static ref FEED_ERRORS: Counter = Counter::new(
        "feed_errors_total",
        "Total number of failed upstream feed requests"
    ).unwrap();

    pub static ref TOOL_CALLS: Counter = Counter::new(
        "tool_calls_total",
        "Total number of tool invocations"
    ).unwrap();

    pub static ref TOOL_ERRORS: Counter = Counter::new(
        "tool_errors_total",
        "Total number of failed tool invocations"
    ).unwrap();

    pub static ref FEED_LATENCY: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "feed_latency_seconds",
            "Upstream feed request latency in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0])
    ).unwrap();
}

pub fn init() -> Result<(), prometheus::Error> {
    REGISTRY.register(Box::new(FEED_REQUESTS.clone()))?;
    REGISTRY.register(Box::new(FEED_ERRORS.clone()))?;
    REGISTRY.register(Box::new(TOOL_CALLS.clone()))?;
    REGISTRY.register(Box::new(TOOL_ERRORS.clone()))?;
    REGISTRY.register(Box::new(FEED_LATENCY.clone()))?;
    Ok(())
}
