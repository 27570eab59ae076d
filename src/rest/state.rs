//! API state management for the REST server.

use std::sync::Arc;

use crate::config::Config;
use crate::features::FeatureFlags;
use crate::journey;
use crate::navigation::NavigationResolver;

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Journey navigation, immutable once built
    pub resolver: NavigationResolver,
    /// Application configuration
    pub config: Arc<Config>,
}

impl ApiState {
    /// Create new API state from config
    pub fn new(config: Config) -> Self {
        let flags = FeatureFlags::from_config(&config.features);
        Self::with_resolver(config, journey::build_resolver(flags))
    }

    pub fn with_resolver(config: Config, resolver: NavigationResolver) -> Self {
        Self {
            resolver,
            config: Arc::new(config),
        }
    }
}
