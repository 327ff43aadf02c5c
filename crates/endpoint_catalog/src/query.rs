use crate::config::EndpointsConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Latest state of the asynchronous endpoints-configuration fetch.
pub enum EndpointsQuery {
    /// No response yet.
    #[default]
    Loading,
    /// The server answered with a configuration.
    Ready(EndpointsConfig),
    /// The fetch failed; the message is kept for diagnostics.
    Failed(String),
}

impl EndpointsQuery {
    /// The configuration when ready. Loading and failed queries read as absent.
    pub fn config(&self) -> Option<&EndpointsConfig> {
        match self {
            Self::Ready(config) => Some(config),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Returns whether the fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<E: std::fmt::Display> From<Result<EndpointsConfig, E>> for EndpointsQuery {
    fn from(result: Result<EndpointsConfig, E>) -> Self {
        match result {
            Ok(config) => Self::Ready(config),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;

    #[test]
    fn only_ready_exposes_config() {
        assert!(EndpointsQuery::Loading.config().is_none());
        assert!(EndpointsQuery::Failed("offline".into()).config().is_none());
        assert!(EndpointsQuery::Ready(EndpointsConfig::default())
            .config()
            .is_some());
    }

    #[test]
    fn only_the_default_query_is_loading() {
        assert!(EndpointsQuery::default().is_loading());
        assert!(!EndpointsQuery::Failed("offline".into()).is_loading());
        assert!(!EndpointsQuery::Ready(EndpointsConfig::default()).is_loading());
    }

    #[test]
    fn fetch_errors_become_failed_queries() {
        let query = EndpointsQuery::from(Err::<EndpointsConfig, _>(CatalogError::Fetch(
            "503".into(),
        )));
        assert_eq!(
            query,
            EndpointsQuery::Failed("endpoints config fetch failed: 503".into())
        );
    }
}
