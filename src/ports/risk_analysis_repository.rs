//! RiskAnalysisRepository port for storing and retrieving analyses.

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, UserId},
    risk::RiskAnalysis,
};

/// Most analyses kept per user. Older entries are dropped on save, and no
/// history page may be larger than this.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Storage for completed risk analyses, keyed by user.
///
/// The engine never calls this itself; application handlers do.
#[async_trait]
pub trait RiskAnalysisRepository: Send + Sync {
    /// Store a completed analysis, evicting the user's oldest entries beyond
    /// [`MAX_HISTORY_LIMIT`].
    async fn save(&self, analysis: &RiskAnalysis) -> Result<(), DomainError>;

    /// Most recent analysis for the user, or `None` if they have never run one.
    async fn find_latest(&self, user_id: &UserId) -> Result<Option<RiskAnalysis>, DomainError>;

    /// Analyses for the user, newest first, at most `limit` entries.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<RiskAnalysis>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_trait_is_object_safe_and_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RiskAnalysisRepository>();
    }
}
