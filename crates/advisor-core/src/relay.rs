//! Outbound intake delivery.

use async_trait::async_trait;

use crate::error::Result;
use crate::intake::IntakeRecord;

/// Delivers a validated intake record to an external collaborator
/// (a third-party form relay in production).
#[async_trait]
pub trait IntakeRelay: Send + Sync {
    /// One-shot delivery. No retries; the caller decides what a failure means.
    async fn deliver(&self, record: &IntakeRecord) -> Result<()>;
}
