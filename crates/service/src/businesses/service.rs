use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{BusinessPatch, BusinessWithOwner, NewBusiness};
use super::repository::BusinessRepository;
use crate::access;
use crate::errors::ServiceError;
use models::business;

/// Business registry service.
///
/// Mutations resolve the row first, then compare its owner against the
/// acting identity before touching the store.
pub struct BusinessesService<R: BusinessRepository> {
    repo: Arc<R>,
}

impl<R: BusinessRepository> BusinessesService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a business for the acting owner. The caller's token is
    /// already verified; no existence check on the owner id.
    #[instrument(skip(self, input), fields(owner_id = %owner_id))]
    pub async fn create(&self, input: NewBusiness, owner_id: Uuid) -> Result<business::Model, ServiceError> {
        business::validate_name(&input.name)?;
        business::validate_address(&input.address)?;
        business::validate_whatsapp_number(&input.whatsapp_number)?;
        let created = self.repo.insert(input, owner_id).await?;
        info!(business_id = %created.id, owner_id = %created.owner_id, "business_created");
        Ok(created)
    }

    /// All businesses, newest first, each with its owner embedded.
    pub async fn find_all(&self) -> Result<Vec<BusinessWithOwner>, ServiceError> {
        let rows = self.repo.find_all_with_owner().await?;
        Ok(rows
            .into_iter()
            .map(|(business, owner)| BusinessWithOwner { business, owner })
            .collect())
    }

    pub async fn find_one(&self, id: Uuid) -> Result<business::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("business"))
    }

    /// Merge the provided attributes; only the owner may update.
    #[instrument(skip(self, patch), fields(business_id = %id, acting_user_id = %acting_user_id))]
    pub async fn update(
        &self,
        id: Uuid,
        patch: BusinessPatch,
        acting_user_id: Uuid,
    ) -> Result<business::Model, ServiceError> {
        let business = self.find_one(id).await?;
        access::ensure_owner(business.owner_id, acting_user_id)?;
        if let Some(name) = &patch.name {
            business::validate_name(name)?;
        }
        if let Some(address) = &patch.address {
            business::validate_address(address)?;
        }
        if let Some(number) = &patch.whatsapp_number {
            business::validate_whatsapp_number(number)?;
        }
        let updated = self.repo.update(id, patch).await?;
        info!(business_id = %updated.id, "business_updated");
        Ok(updated)
    }

    /// Delete a business; only the owner may delete. Products and their
    /// reactions cascade away with it.
    #[instrument(skip(self), fields(business_id = %id, acting_user_id = %acting_user_id))]
    pub async fn remove(&self, id: Uuid, acting_user_id: Uuid) -> Result<(), ServiceError> {
        let business = self.find_one(id).await?;
        access::ensure_owner(business.owner_id, acting_user_id)?;
        self.repo.delete(id).await?;
        info!(business_id = %id, "business_removed");
        Ok(())
    }

    /// Businesses of one owner, newest first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<business::Model>, ServiceError> {
        self.repo.find_by_owner(owner_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::businesses::repository::mock::MockBusinessRepository;

    fn svc() -> BusinessesService<MockBusinessRepository> {
        BusinessesService::new(Arc::new(MockBusinessRepository::default()))
    }

    fn new_business(name: &str) -> NewBusiness {
        NewBusiness {
            name: name.into(),
            description: None,
            address: "Calle 1 #23".into(),
            whatsapp_number: "555-0102".into(),
            opening_hours: None,
        }
    }

    #[tokio::test]
    async fn owner_can_update_and_remove() {
        let svc = svc();
        let owner = Uuid::new_v4();
        let created = svc.create(new_business("Cafe Luna"), owner).await.unwrap();

        let patch = BusinessPatch { name: Some("Cafe Luna Norte".into()), ..Default::default() };
        let updated = svc.update(created.id, patch, owner).await.unwrap();
        assert_eq!(updated.name, "Cafe Luna Norte");
        // Untouched fields survive the merge
        assert_eq!(updated.address, "Calle 1 #23");

        svc.remove(created.id, owner).await.unwrap();
        assert!(matches!(svc.find_one(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let svc = svc();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let created = svc.create(new_business("Cafe Luna"), owner).await.unwrap();

        let patch = BusinessPatch { name: Some("hijacked".into()), ..Default::default() };
        assert!(matches!(
            svc.update(created.id, patch, stranger).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            svc.remove(created.id, stranger).await,
            Err(ServiceError::Forbidden(_))
        ));
        // Still intact
        assert_eq!(svc.find_one(created.id).await.unwrap().name, "Cafe Luna");
    }

    #[tokio::test]
    async fn missing_business_is_not_found() {
        let svc = svc();
        assert!(matches!(svc.find_one(Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn find_by_owner_filters_and_orders() {
        let svc = svc();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        svc.create(new_business("First"), owner).await.unwrap();
        svc.create(new_business("Other's"), other).await.unwrap();
        svc.create(new_business("Second"), owner).await.unwrap();

        let mine = svc.find_by_owner(owner).await.unwrap();
        let names: Vec<_> = mine.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }
}
