// Rate limiting middleware using tower-governor
//
// Configuration:
// - 10 requests per second per IP with bursts of 20
// - Every dashboard render reads the whole collection, so this also bounds store reads
//
// Applied in app.rs when RATE_LIMIT_ENABLED is on

use std::sync::Arc;

use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

/// Wrap the router in a per-IP limiter keyed on X-Forwarded-For / X-Real-IP,
/// falling back to the peer address.
///
/// The peer fallback needs the router served with `into_make_service_with_connect_info`.
pub fn with_rate_limit(router: Router) -> Router {
    let Some(config) = GovernorConfigBuilder::default()
        .per_second(10) // Base rate: 10 requests per second
        .burst_size(20) // Allow bursts up to 20
        .use_headers() // Extract IP from X-Forwarded-For header
        .finish()
    else {
        tracing::warn!("Invalid rate limit configuration, serving without a limiter");
        return router;
    };

    router.layer(GovernorLayer {
        config: Arc::new(config),
    })
}
