//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics and rendered by the `/admin/metrics`
//! handler in Prometheus text format.

pub mod metrics;

pub use metrics::{CounterVec, GatewayMetrics};
