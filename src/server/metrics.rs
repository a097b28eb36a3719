//! In-process metrics registry rendered in the Prometheus text exposition format.
//!
//! Plain counters are atomics. Labelled families (`http_requests_total`,
//! `http_request_duration_seconds`) are kept in mutex-guarded ordered maps so the
//! rendered output is stable between scrapes.

use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, AtomicU64, Ordering},
    time::Duration,
};

/// Content type of the Prometheus text format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Upper bounds of the request duration histogram, in seconds.
const DURATION_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Label set of `http_requests_total`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RequestKey {
    method: String,
    path: String,
    status: u16,
}

/// Label set of `http_request_duration_seconds`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RouteKey {
    method: String,
    path: String,
}

#[derive(Debug, Clone, Default)]
struct Histogram {
    /// Non-cumulative observation count per bucket, `+Inf` excluded.
    buckets: [u64; DURATION_BUCKETS.len()],
    count: u64,
    sum: f64,
}

impl Histogram {
    fn observe(&mut self, seconds: f64) {
        if let Some(index) = DURATION_BUCKETS.iter().position(|bound| seconds <= *bound) {
            self.buckets[index] += 1;
        }
        self.count += 1;
        self.sum += seconds;
    }
}

/// Application metrics shared through `AppState`.
#[derive(Debug, Default)]
pub struct Metrics {
    http_requests: Mutex<BTreeMap<RequestKey, u64>>,
    http_durations: Mutex<BTreeMap<RouteKey, Histogram>>,
    teachers_created: AtomicU64,
    teachers_total: AtomicI64,
    attendance_created: AtomicU64,
    attendance_checkin: AtomicU64,
    attendance_checkout: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed HTTP request.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `path` - Matched route template (e.g. `/api/v1/teachers/{id}`), never the raw URI
    /// - `status` - Response status code
    /// - `elapsed` - Time from receiving the request to producing the response
    pub fn record_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        *self
            .http_requests
            .lock()
            .entry(RequestKey {
                method: method.to_string(),
                path: path.to_string(),
                status,
            })
            .or_default() += 1;

        self.http_durations
            .lock()
            .entry(RouteKey {
                method: method.to_string(),
                path: path.to_string(),
            })
            .or_default()
            .observe(elapsed.as_secs_f64());
    }

    /// Counts newly created teachers and raises the teacher gauge accordingly.
    pub fn record_teachers_created(&self, count: u64) {
        self.teachers_created.fetch_add(count, Ordering::Relaxed);
        self.teachers_total
            .fetch_add(i64::try_from(count).unwrap_or(i64::MAX), Ordering::Relaxed);
    }

    /// Sets the teacher gauge, used once at startup from the stored count.
    pub fn set_teachers_total(&self, total: u64) {
        self.teachers_total
            .store(i64::try_from(total).unwrap_or(i64::MAX), Ordering::Relaxed);
    }

    /// A check-in created a new attendance record.
    pub fn record_check_in(&self) {
        self.attendance_created.fetch_add(1, Ordering::Relaxed);
        self.attendance_checkin.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_check_out(&self) {
        self.attendance_checkout.fetch_add(1, Ordering::Relaxed);
    }

    /// Renders every metric family in the Prometheus text format.
    ///
    /// # Arguments
    /// - `checked_in_today` - Current value of the `attendance_today_checked_in` gauge,
    ///   computed by the caller at scrape time
    pub fn render(&self, checked_in_today: u64) -> String {
        let mut out = String::new();

        family(
            &mut out,
            "http_requests_total",
            "counter",
            "Total number of HTTP requests",
        );
        for (key, value) in self.http_requests.lock().iter() {
            out.push_str(&format!(
                "http_requests_total{{method=\"{}\",path=\"{}\",status=\"{}\"}} {}\n",
                escape(&key.method),
                escape(&key.path),
                key.status,
                value
            ));
        }

        family(
            &mut out,
            "http_request_duration_seconds",
            "histogram",
            "Duration of HTTP requests in seconds",
        );
        for (key, histogram) in self.http_durations.lock().iter() {
            let labels = format!(
                "method=\"{}\",path=\"{}\"",
                escape(&key.method),
                escape(&key.path)
            );
            let mut cumulative = 0;
            for (bound, count) in DURATION_BUCKETS.iter().zip(histogram.buckets.iter()) {
                cumulative += count;
                out.push_str(&format!(
                    "http_request_duration_seconds_bucket{{{},le=\"{}\"}} {}\n",
                    labels, bound, cumulative
                ));
            }
            out.push_str(&format!(
                "http_request_duration_seconds_bucket{{{},le=\"+Inf\"}} {}\n",
                labels, histogram.count
            ));
            out.push_str(&format!(
                "http_request_duration_seconds_sum{{{}}} {}\n",
                labels, histogram.sum
            ));
            out.push_str(&format!(
                "http_request_duration_seconds_count{{{}}} {}\n",
                labels, histogram.count
            ));
        }

        scalar(
            &mut out,
            "teachers_created_total",
            "counter",
            "Total number of teachers created",
            self.teachers_created.load(Ordering::Relaxed),
        );
        scalar(
            &mut out,
            "teachers_total",
            "gauge",
            "Current number of teachers",
            self.teachers_total.load(Ordering::Relaxed),
        );
        scalar(
            &mut out,
            "attendance_created_total",
            "counter",
            "Total number of attendance records created",
            self.attendance_created.load(Ordering::Relaxed),
        );
        scalar(
            &mut out,
            "attendance_checkin_total",
            "counter",
            "Total number of check-ins",
            self.attendance_checkin.load(Ordering::Relaxed),
        );
        scalar(
            &mut out,
            "attendance_checkout_total",
            "counter",
            "Total number of check-outs",
            self.attendance_checkout.load(Ordering::Relaxed),
        );
        scalar(
            &mut out,
            "attendance_today_checked_in",
            "gauge",
            "Number of teachers checked in today",
            checked_in_today,
        );

        out
    }
}

fn family(out: &mut String, name: &str, kind: &str, help: &str) {
    out.push_str(&format!("# HELP {} {}\n# TYPE {} {}\n", name, help, name, kind));
}

fn scalar(out: &mut String, name: &str, kind: &str, help: &str, value: impl std::fmt::Display) {
    family(out, name, kind, help);
    out.push_str(&format!("{} {}\n", name, value));
}

/// Escapes a label value per the exposition format.
fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
