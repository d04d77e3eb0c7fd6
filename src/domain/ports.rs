use crate::domain::model::Observation;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-side port for observation rows. Implementations own the connection
/// strategy; callers see exactly one insert per call.
#[async_trait]
pub trait ObservationSink: Send + Sync {
    async fn insert(&self, observation: &Observation) -> Result<()>;
}
