//! In-Memory Risk Analysis Repository
//!
//! Keeps the most recent analyses per user in memory, up to
//! `MAX_HISTORY_LIMIT` each. Nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::risk::RiskAnalysis;
use crate::ports::{RiskAnalysisRepository, MAX_HISTORY_LIMIT};

/// In-memory storage for risk analyses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRiskAnalysisRepository {
    analyses: Arc<RwLock<HashMap<UserId, Vec<RiskAnalysis>>>>,
}

impl InMemoryRiskAnalysisRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored analyses across all users
    pub async fn analysis_count(&self) -> usize {
        self.analyses.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl RiskAnalysisRepository for InMemoryRiskAnalysisRepository {
    async fn save(&self, analysis: &RiskAnalysis) -> Result<(), DomainError> {
        let mut analyses = self.analyses.write().await;
        let history = analyses.entry(analysis.user_id.clone()).or_default();
        // Keep each history sorted oldest-to-newest; ties keep insertion order.
        let position = history.partition_point(|a| a.created_at <= analysis.created_at);
        history.insert(position, analysis.clone());
        if history.len() > MAX_HISTORY_LIMIT {
            let excess = history.len() - MAX_HISTORY_LIMIT;
            history.drain(..excess);
        }
        Ok(())
    }

    async fn find_latest(&self, user_id: &UserId) -> Result<Option<RiskAnalysis>, DomainError> {
        let analyses = self.analyses.read().await;
        Ok(analyses.get(user_id).and_then(|h| h.last()).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<RiskAnalysis>, DomainError> {
        let analyses = self.analyses.read().await;
        Ok(analyses
            .get(user_id)
            .map(|h| h.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::risk::{RiskAnalyzer, RiskProfileInput};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn analysis_at(user_id: &UserId, tolerance: f64, secs: i64) -> RiskAnalysis {
        let input = RiskProfileInput::new(40.0, 10.0, tolerance, 6.0, 60.0).unwrap();
        let result = RiskAnalyzer::default().analyze(&input).unwrap();
        RiskAnalysis::record_at(
            user_id.clone(),
            input,
            result,
            Timestamp::from_unix_secs(secs).unwrap(),
        )
    }

    #[tokio::test]
    async fn find_latest_returns_none_for_unknown_user() {
        let repo = InMemoryRiskAnalysisRepository::new();
        assert!(repo.find_latest(&user("nobody")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_latest_returns_most_recent() {
        let repo = InMemoryRiskAnalysisRepository::new();
        let alice = user("alice");

        repo.save(&analysis_at(&alice, 10.0, 1_000)).await.unwrap();
        let newest = analysis_at(&alice, 90.0, 3_000);
        repo.save(&newest).await.unwrap();
        repo.save(&analysis_at(&alice, 50.0, 2_000)).await.unwrap();

        let latest = repo.find_latest(&alice).await.unwrap().unwrap();
        assert_eq!(latest.id, newest.id);
    }

    #[tokio::test]
    async fn same_timestamp_prefers_last_saved() {
        let repo = InMemoryRiskAnalysisRepository::new();
        let alice = user("alice");

        repo.save(&analysis_at(&alice, 10.0, 1_000)).await.unwrap();
        let second = analysis_at(&alice, 90.0, 1_000);
        repo.save(&second).await.unwrap();

        assert_eq!(repo.find_latest(&alice).await.unwrap().unwrap().id, second.id);
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let repo = InMemoryRiskAnalysisRepository::new();
        repo.save(&analysis_at(&user("alice"), 10.0, 1_000)).await.unwrap();

        assert!(repo.find_latest(&user("bob")).await.unwrap().is_none());
        assert_eq!(repo.analysis_count().await, 1);
    }

    #[tokio::test]
    async fn list_for_user_is_newest_first_and_limited() {
        let repo = InMemoryRiskAnalysisRepository::new();
        let alice = user("alice");
        for (i, secs) in [1_000, 2_000, 3_000].into_iter().enumerate() {
            repo.save(&analysis_at(&alice, 10.0 * (i as f64 + 1.0), secs))
                .await
                .unwrap();
        }

        let listed = repo.list_for_user(&alice, 2).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].created_at.as_unix_secs(), 3_000);
        assert_eq!(listed[1].created_at.as_unix_secs(), 2_000);

        assert!(repo.list_for_user(&user("bob"), 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_is_capped_per_user_keeping_newest() {
        let repo = InMemoryRiskAnalysisRepository::new();
        let alice = user("alice");
        let total = MAX_HISTORY_LIMIT as i64 * 5;
        for secs in 0..total {
            repo.save(&analysis_at(&alice, 50.0, 1_000 + secs)).await.unwrap();
        }
        repo.save(&analysis_at(&user("bob"), 50.0, 1_000)).await.unwrap();

        assert_eq!(repo.analysis_count().await, MAX_HISTORY_LIMIT + 1);

        let listed = repo.list_for_user(&alice, usize::MAX).await.unwrap();
        assert_eq!(listed.len(), MAX_HISTORY_LIMIT);
        assert_eq!(listed[0].created_at.as_unix_secs(), 1_000 + total - 1);
        assert_eq!(
            listed[MAX_HISTORY_LIMIT - 1].created_at.as_unix_secs(),
            1_000 + total - MAX_HISTORY_LIMIT as i64
        );
    }

    #[tokio::test]
    async fn late_arrival_older_than_retained_window_is_dropped() {
        let repo = InMemoryRiskAnalysisRepository::new();
        let alice = user("alice");
        for secs in 0..MAX_HISTORY_LIMIT as i64 {
            repo.save(&analysis_at(&alice, 50.0, 10_000 + secs)).await.unwrap();
        }

        let stale = analysis_at(&alice, 50.0, 1_000);
        repo.save(&stale).await.unwrap();

        let listed = repo.list_for_user(&alice, usize::MAX).await.unwrap();
        assert_eq!(listed.len(), MAX_HISTORY_LIMIT);
        assert!(listed.iter().all(|a| a.id != stale.id));
    }
}
