//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

/// Creates a rate limiter for the public site and API.
///
/// # Limits
///
/// - **Rate**: one request replenished every 100 ms (10 per second)
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Pass `PeerIpKeyExtractor` to key on the socket peer address, or
/// `SmartIpKeyExtractor` when running behind a trusted reverse proxy that sets
/// `X-Forwarded-For` / `X-Real-IP`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/categories", get(categories_page_handler))
///     .layer(rate_limit::layer(PeerIpKeyExtractor));
/// ```
pub fn layer<K>(key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_millisecond(100)
            .burst_size(50)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
