//! Request middleware.
//!
//! - `metrics` - Records request counts and latencies per matched route

pub mod metrics;
