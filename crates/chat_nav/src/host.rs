//! Endpoints-configuration sources injected into [`crate::ChatNavProvider`].

use endpoint_catalog::{CatalogError, EndpointsConfig};
use futures::future::LocalBoxFuture;

/// Fetches the endpoints configuration for the navigation store.
pub trait EndpointsSource {
    /// Loads the configuration served at `path`.
    fn fetch_endpoints<'a>(
        &'a self,
        path: &'a str,
    ) -> LocalBoxFuture<'a, Result<EndpointsConfig, CatalogError>>;
}

#[derive(Debug, Clone, Default)]
/// Source that always answers with a fixed configuration. Used by previews and tests.
pub struct StaticEndpointsSource {
    config: EndpointsConfig,
}

impl StaticEndpointsSource {
    /// Source answering with `config`.
    pub fn new(config: EndpointsConfig) -> Self {
        Self { config }
    }
}

impl EndpointsSource for StaticEndpointsSource {
    fn fetch_endpoints<'a>(
        &'a self,
        _path: &'a str,
    ) -> LocalBoxFuture<'a, Result<EndpointsConfig, CatalogError>> {
        Box::pin(async move { Ok(self.config.clone()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Source for hosts without a backend; every fetch fails.
pub struct UnavailableEndpointsSource;

impl EndpointsSource for UnavailableEndpointsSource {
    fn fetch_endpoints<'a>(
        &'a self,
        _path: &'a str,
    ) -> LocalBoxFuture<'a, Result<EndpointsConfig, CatalogError>> {
        Box::pin(async { Err(CatalogError::Unsupported("no endpoints source configured")) })
    }
}

#[cfg(test)]
mod tests {
    use endpoint_catalog::EndpointConfig;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn static_source_ignores_path() {
        let config = EndpointsConfig::default().with("openAI", EndpointConfig::default());
        let source = StaticEndpointsSource::new(config.clone());

        let fetched = block_on(source.fetch_endpoints("/anything")).expect("fetch");

        assert_eq!(fetched, config);
    }

    #[test]
    fn unavailable_source_reports_unsupported() {
        let err = block_on(UnavailableEndpointsSource.fetch_endpoints("/api/endpoints"))
            .expect_err("no backend");
        assert!(matches!(err, CatalogError::Unsupported(_)));
    }
}
