//! Prometheus metrics collection.
//!
//! Provides application metrics in Prometheus format.

use prometheus_client::encoding::{EncodeLabelSet, text::encode};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;

/// Path label used for requests that matched no route.
pub const UNMATCHED_PATH: &str = "{unmatched}";

/// HTTP request labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    pub method: String,
    pub path: String,
    pub status: u16,
}

/// Lookup miss labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct MissLabels {
    pub code: String,
}

/// Application metrics.
///
/// Counters are registered without the `_total` suffix; the encoder adds it.
pub struct Metrics {
    registry: Registry,

    /// HTTP request counter by method/path/status.
    pub http_requests: Family<HttpLabels, Counter>,

    /// HTTP request duration histogram.
    pub http_duration_seconds: Family<HttpLabels, Histogram>,

    /// Error responses by error code.
    pub lookup_misses: Family<MissLabels, Counter>,
}

impl Metrics {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<HttpLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total HTTP requests",
            http_requests.clone(),
        );

        let http_duration_seconds = Family::<HttpLabels, Histogram>::new_with_constructor(|| {
            Histogram::new(exponential_buckets(0.0001, 2.0, 14))
        });
        registry.register(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
            http_duration_seconds.clone(),
        );

        let lookup_misses = Family::<MissLabels, Counter>::default();
        registry.register(
            "menu_lookup_misses",
            "Error responses by error code",
            lookup_misses.clone(),
        );

        Self {
            registry,
            http_requests,
            http_duration_seconds,
            lookup_misses,
        }
    }

    /// Record an HTTP request.
    pub fn record_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        let labels = HttpLabels {
            method: method.to_string(),
            path: normalize_path(path),
            status,
        };

        self.http_requests.get_or_create(&labels).inc();
        self.http_duration_seconds
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    /// Record an error response.
    pub fn record_miss(&self, code: &str) {
        self.lookup_misses
            .get_or_create(&MissLabels {
                code: code.to_string(),
            })
            .inc();
    }

    /// Encode metrics in Prometheus text format.
    ///
    /// # Panics
    ///
    /// Panics if Prometheus metric encoding to a `String` buffer fails.
    /// The `fmt::Write` impl for `String` is infallible, and all metric
    /// labels use derived `EncodeLabelSet` impls that do not produce
    /// `fmt::Error`.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        // Prometheus encoding to String buffer is infallible
        #[allow(clippy::expect_used)]
        encode(&mut buffer, &self.registry).expect("encoding metrics");
        buffer
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish()
    }
}

/// Normalize a path for metrics labels.
///
/// Numeric ids become `{id}` and the segment after `locations` becomes
/// `{location}` to limit cardinality.
fn normalize_path(path: &str) -> String {
    if path == UNMATCHED_PATH {
        return path.to_string();
    }

    let mut previous = "";
    let normalized: Vec<&str> = path
        .split('/')
        .map(|segment| {
            let label = if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
                "{id}"
            } else if previous == "locations" && !segment.is_empty() {
                "{location}"
            } else {
                segment
            };
            previous = segment;
            label
        })
        .collect();
    normalized.join("/")
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path("/wp-json/wp-rest-menu/v1/menus/12"),
            "/wp-json/wp-rest-menu/v1/menus/{id}"
        );
        assert_eq!(
            normalize_path("/wp-json/wp-rest-menu/v1/locations/primary"),
            "/wp-json/wp-rest-menu/v1/locations/{location}"
        );
        assert_eq!(
            normalize_path("/wp-json/wp-rest-menu/v1/locations"),
            "/wp-json/wp-rest-menu/v1/locations"
        );
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(UNMATCHED_PATH), UNMATCHED_PATH);
    }

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        let output = metrics.encode();
        assert!(output.contains("http_requests"));
        assert!(output.contains("menu_lookup_misses"));
    }

    #[test]
    fn test_record_request_and_miss() {
        let metrics = Metrics::new();
        metrics.record_request("GET", "/wp-json/wp-rest-menu/v1/menus/7", 404, 0.001);
        metrics.record_miss("not_found");

        let output = metrics.encode();
        assert!(output.contains(r#"path="/wp-json/wp-rest-menu/v1/menus/{id}""#));
        assert!(output.contains(r#"code="not_found""#));
    }
}
