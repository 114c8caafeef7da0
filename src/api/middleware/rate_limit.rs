//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-client-IP rate limiter.
///
/// # Limits
///
/// - **Rate**: `per_second` requests replenished each second (`RATE_LIMIT_PER_SECOND`)
/// - **Burst**: `burst` requests (`RATE_LIMIT_BURST`)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the socket peer
/// address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Panics
///
/// Panics if either limit is zero; [`crate::config::Config::validate`] rejects that.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    GovernorLayer::new(Arc::new(governor_config(per_second, burst)))
}

/// Builds the quota: one request refills every `1000 / per_second` ms.
///
/// The governor builder takes the refill interval, not a rate, so the rate is
/// converted here. Rates above 1000/s are capped at one request per millisecond.
fn governor_config(
    per_second: u64,
    burst: u32,
) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>> {
    let refill_ms = (1000 / per_second.max(1)).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(refill_ms)
        .burst_size(burst)
        .finish()
        .expect("rate limits are validated to be non-zero")
}
