use courier_directions::provider::ProviderError;
use thiserror::Error;

/// Precondition failures of an optimization run. Provider failures never show up
/// here: they are recovered by the fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    #[error("no deliveries to optimize")]
    NoDeliveries,

    #[error("invalid start location")]
    InvalidStartLocation,

    #[error("no active deliveries to optimize")]
    NoActiveDeliveries,

    #[error("no deliveries with valid coordinates")]
    NoValidCoordinates,
}

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("invalid origin or destination")]
    InvalidEndpoints,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
