//! Bounded-concurrency enrichment pass
//!
//! Every commit of a freshly fetched batch goes through a [`CommitEnricher`]
//! before it reaches the commit list. At most `limit` enrichments run at the
//! same time and the output keeps the input order, whatever order the
//! individual operations finish in.

use async_trait::async_trait;
use docify_client::Commit;
use futures::future::try_join_all;
use tokio::sync::Semaphore;

/// A per-commit transformation applied after fetching
#[async_trait]
pub trait CommitEnricher: Send + Sync {
    async fn enrich(&self, commit: Commit) -> anyhow::Result<Commit>;
}

/// Returns every commit unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEnricher;

#[async_trait]
impl CommitEnricher for IdentityEnricher {
    async fn enrich(&self, commit: Commit) -> anyhow::Result<Commit> {
        Ok(commit)
    }
}

/// Enrich all commits with at most `limit` operations in flight
///
/// Results are returned in input order. The first failure fails the whole
/// pass and the remaining operations are dropped.
pub async fn enrich_all<E>(
    commits: Vec<Commit>,
    enricher: &E,
    limit: usize,
) -> anyhow::Result<Vec<Commit>>
where
    E: CommitEnricher + ?Sized,
{
    let semaphore = Semaphore::new(limit.max(1));
    let semaphore = &semaphore;

    let slots = commits.into_iter().map(|commit| async move {
        let _permit = semaphore.acquire().await?;
        enricher.enrich(commit).await
    });

    try_join_all(slots).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn commits(n: usize) -> Vec<Commit> {
        (0..n)
            .map(|i| Commit {
                sha: format!("{:07}", i),
                ..Default::default()
            })
            .collect()
    }

    /// Sleeps a scrambled amount per commit and records the peak concurrency
    #[derive(Default)]
    struct SlowEnricher {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl CommitEnricher for SlowEnricher {
        async fn enrich(&self, mut commit: Commit) -> anyhow::Result<Commit> {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(current, Ordering::SeqCst);

            let index: u64 = commit.sha.parse()?;
            tokio::time::sleep(Duration::from_millis((index * 7919) % 13)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            commit.summary = format!("enriched {}", index);
            Ok(commit)
        }
    }

    struct FailingEnricher;

    #[async_trait]
    impl CommitEnricher for FailingEnricher {
        async fn enrich(&self, commit: Commit) -> anyhow::Result<Commit> {
            if commit.sha == "0000003" {
                anyhow::bail!("cannot enrich {}", commit.sha);
            }
            Ok(commit)
        }
    }

    #[tokio::test]
    async fn test_identity_keeps_commits() {
        let input = commits(3);
        let output = enrich_all(input.clone(), &IdentityEnricher, 5).await.unwrap();
        assert_eq!(output, input);
    }

    #[tokio::test]
    async fn test_order_preserved_and_limit_respected() {
        let enricher = SlowEnricher::default();
        let output = enrich_all(commits(23), &enricher, 5).await.unwrap();

        let shas: Vec<_> = output.iter().map(|c| c.sha.clone()).collect();
        let expected: Vec<_> = commits(23).into_iter().map(|c| c.sha).collect();
        assert_eq!(shas, expected);
        assert_eq!(output[7].summary, "enriched 7");

        let peak = enricher.peak.load(Ordering::SeqCst);
        assert!(peak <= 5, "peak concurrency was {}", peak);
        assert!(peak > 1, "enrichment did not run concurrently");
    }

    #[tokio::test]
    async fn test_first_failure_fails_pass() {
        let result = enrich_all(commits(6), &FailingEnricher, 5).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let output = enrich_all(Vec::new(), &IdentityEnricher, 5).await.unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_zero_limit_still_progresses() {
        let output = enrich_all(commits(3), &IdentityEnricher, 0).await.unwrap();
        assert_eq!(output.len(), 3);
    }
}
