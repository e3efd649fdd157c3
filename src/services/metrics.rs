use axum::http::StatusCode;
use prometheus::{
    Encoder, HistogramOpts, HistogramTimer, HistogramVec, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

pub struct MetricsService {
    registry: Registry,
    http_requests: IntCounterVec,
    request_duration: HistogramVec,
    model_calls: IntCounterVec,
    quota_rejections: IntCounter,
}

impl MetricsService {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by route and status"),
            &["method", "path", "status"],
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency"),
            &["path"],
        )?;
        let model_calls = IntCounterVec::new(
            Opts::new("model_calls_total", "Calls to the text model"),
            &["operation", "outcome"],
        )?;
        let quota_rejections = IntCounter::new(
            "quota_rejections_total",
            "Requests refused by the daily quota",
        )?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;
        registry.register(Box::new(model_calls.clone()))?;
        registry.register(Box::new(quota_rejections.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            request_duration,
            model_calls,
            quota_rejections,
        })
    }

    pub fn record_request(&self, method: &str, path: &str, status: StatusCode) {
        self.http_requests
            .with_label_values(&[method, path, status.as_str()])
            .inc();
    }

    /// Observes the elapsed time into the latency histogram when dropped.
    pub fn start_timer(&self, path: &str) -> HistogramTimer {
        self.request_duration.with_label_values(&[path]).start_timer()
    }

    pub fn record_model_call(&self, operation: &str, success: bool) {
        let outcome = if success { "success" } else { "error" };
        self.model_calls
            .with_label_values(&[operation, outcome])
            .inc();
    }

    pub fn record_quota_rejection(&self) {
        self.quota_rejections.inc();
    }

    /// Prometheus text exposition of every registered metric.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_recorded_series() {
        let metrics = MetricsService::new().unwrap();
        metrics.record_request("POST", "/api/refine", StatusCode::OK);
        metrics.record_model_call("refine", false);
        metrics.record_quota_rejection();

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"http_requests_total{method="POST",path="/api/refine",status="200"} 1"#));
        assert!(text.contains(r#"model_calls_total{operation="refine",outcome="error"} 1"#));
        assert!(text.contains("quota_rejections_total 1"));
    }
}
