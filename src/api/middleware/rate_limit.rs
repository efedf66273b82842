//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Milliseconds between token refills for a sustained rate of
/// `per_second` requests per second.
///
/// `GovernorConfigBuilder::per_second` takes a refill interval, not a rate,
/// so the rate is converted here.
pub fn replenish_interval_ms(per_second: u64) -> u64 {
    (1000 / per_second.max(1)).max(1)
}

/// Creates a per-client-IP rate limiter.
///
/// Each client may send `burst` requests at once, refilled at `per_second`
/// requests per second. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>`.
///
/// # Panics
///
/// Panics if `burst` is zero; [`crate::config::Config::validate`] rejects it.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(per_second))
            .burst_size(burst)
            .finish()
            .expect("rate limit burst must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
