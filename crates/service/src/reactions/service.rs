use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{ReactionStats, ReactionWithProduct, ReactionWithUser};
use super::repository::ReactionRepository;
use crate::errors::ServiceError;
use models::reaction::{self, ReactionKind};

/// Reaction ledger service.
///
/// Recording is an upsert keyed on (user, product): a repeat reaction
/// overwrites the kind of the existing row instead of inserting. The
/// lookup-then-write pair is deliberately not wrapped in a transaction;
/// the store's unique index is the backstop, and a lost race surfaces as
/// `Conflict` from the insert.
pub struct ReactionsService<R: ReactionRepository> {
    repo: Arc<R>,
}

impl<R: ReactionRepository> ReactionsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Record or replace the acting user's reaction on a product.
    #[instrument(skip(self), fields(product_id = %product_id, user_id = %user_id))]
    pub async fn react(
        &self,
        product_id: Uuid,
        kind: ReactionKind,
        user_id: Uuid,
    ) -> Result<reaction::Model, ServiceError> {
        if let Some(existing) = self.repo.find_by_user_and_product(user_id, product_id).await? {
            let updated = self.repo.update_kind(existing.id, kind).await?;
            info!(reaction_id = %updated.id, kind = %updated.kind, "reaction_replaced");
            return Ok(updated);
        }

        let created = self.repo.insert(user_id, product_id, kind).await?;
        info!(reaction_id = %created.id, kind = %created.kind, "reaction_recorded");
        Ok(created)
    }

    /// A product's reactions, newest first, each with its user embedded.
    pub async fn find_by_product(&self, product_id: Uuid) -> Result<Vec<ReactionWithUser>, ServiceError> {
        let rows = self.repo.find_by_product_with_user(product_id).await?;
        Ok(rows
            .into_iter()
            .map(|(reaction, user)| ReactionWithUser { reaction, user })
            .collect())
    }

    /// A user's reactions, newest first, each with its product embedded.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<ReactionWithProduct>, ServiceError> {
        let rows = self.repo.find_by_user_with_product(user_id).await?;
        Ok(rows
            .into_iter()
            .map(|(reaction, product)| ReactionWithProduct { reaction, product })
            .collect())
    }

    /// Lookup one (user, product) reaction; absence is a valid outcome.
    pub async fn find_one(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<reaction::Model>, ServiceError> {
        self.repo.find_by_user_and_product(user_id, product_id).await
    }

    /// Remove the user's reaction on a product.
    #[instrument(skip(self), fields(product_id = %product_id, user_id = %user_id))]
    pub async fn remove(&self, user_id: Uuid, product_id: Uuid) -> Result<(), ServiceError> {
        let reaction = self
            .repo
            .find_by_user_and_product(user_id, product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("reaction"))?;
        self.repo.delete(reaction.id).await?;
        info!(reaction_id = %reaction.id, "reaction_removed");
        Ok(())
    }

    /// Aggregate counts by kind; all zeros for an unreacted product.
    pub async fn stats(&self, product_id: Uuid) -> Result<ReactionStats, ServiceError> {
        let reactions = self.repo.find_by_product(product_id).await?;
        let mut stats = ReactionStats { total: reactions.len() as u64, ..Default::default() };
        for r in &reactions {
            match ReactionKind::parse(&r.kind) {
                Some(ReactionKind::Like) => stats.likes += 1,
                Some(ReactionKind::Love) => stats.loves += 1,
                Some(ReactionKind::Dislike) => stats.dislikes += 1,
                None => {}
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactions::repository::mock::MockReactionRepository;

    fn svc() -> ReactionsService<MockReactionRepository> {
        ReactionsService::new(Arc::new(MockReactionRepository::default()))
    }

    #[tokio::test]
    async fn repeat_reaction_overwrites_instead_of_accumulating() {
        let svc = svc();
        let user = Uuid::new_v4();
        let product = Uuid::new_v4();

        let first = svc.react(product, ReactionKind::Like, user).await.unwrap();
        let second = svc.react(product, ReactionKind::Love, user).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.kind, "love");
        let all = svc.find_by_product(product).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].reaction.kind, "love");
    }

    #[tokio::test]
    async fn lost_insert_race_surfaces_as_conflict() {
        let repo = Arc::new(MockReactionRepository::default());
        let user = Uuid::new_v4();
        let product = Uuid::new_v4();

        // Two inserts for the same pair, as if both requests passed the
        // optimistic lookup before either wrote.
        repo.insert(user, product, ReactionKind::Like).await.unwrap();
        let err = repo.insert(user, product, ReactionKind::Love).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn stats_count_by_kind() {
        let svc = svc();
        let product = Uuid::new_v4();

        for kind in [ReactionKind::Like, ReactionKind::Like, ReactionKind::Love, ReactionKind::Dislike] {
            svc.react(product, kind, Uuid::new_v4()).await.unwrap();
        }

        let stats = svc.stats(product).await.unwrap();
        assert_eq!(stats, ReactionStats { total: 4, likes: 2, loves: 1, dislikes: 1 });
    }

    #[tokio::test]
    async fn stats_for_unreacted_product_are_zero() {
        let svc = svc();
        let stats = svc.stats(Uuid::new_v4()).await.unwrap();
        assert_eq!(stats, ReactionStats::default());
    }

    #[tokio::test]
    async fn find_one_absence_is_ok_none() {
        let svc = svc();
        let found = svc.find_one(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn remove_missing_reaction_is_not_found() {
        let svc = svc();
        let err = svc.remove(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_then_lookup_is_none() {
        let svc = svc();
        let user = Uuid::new_v4();
        let product = Uuid::new_v4();
        svc.react(product, ReactionKind::Dislike, user).await.unwrap();
        svc.remove(user, product).await.unwrap();
        assert!(svc.find_one(user, product).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listings_are_scoped_per_user_and_product() {
        let svc = svc();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        let product_x = Uuid::new_v4();
        let product_y = Uuid::new_v4();

        svc.react(product_x, ReactionKind::Like, user_a).await.unwrap();
        svc.react(product_x, ReactionKind::Love, user_b).await.unwrap();
        svc.react(product_y, ReactionKind::Like, user_a).await.unwrap();

        assert_eq!(svc.find_by_product(product_x).await.unwrap().len(), 2);
        assert_eq!(svc.find_by_user(user_a).await.unwrap().len(), 2);
        assert_eq!(svc.find_by_user(user_b).await.unwrap().len(), 1);
    }
}
