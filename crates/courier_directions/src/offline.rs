use crate::{
    provider::{DirectionsProvider, DirectionsRequest, OptimizeRouteRequest, ProviderError},
    response::DirectionsResponse,
};

/// A provider that is never reachable. Every optimization runs the local heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

const OFFLINE_REASON: &str = "no directions provider configured";

impl DirectionsProvider for OfflineProvider {
    async fn optimize_route(
        &self,
        _request: &OptimizeRouteRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        Err(ProviderError::Unavailable(OFFLINE_REASON.to_string()))
    }

    async fn directions(
        &self,
        _request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        Err(ProviderError::Unavailable(OFFLINE_REASON.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_provider_is_unavailable() {
        let result = OfflineProvider
            .optimize_route(&OptimizeRouteRequest::default())
            .await;

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }
}
