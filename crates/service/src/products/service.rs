use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{NewProduct, ProductPatch, ProductWithBusiness};
use super::repository::ProductRepository;
use crate::access;
use crate::businesses::repository::BusinessRepository;
use crate::businesses::BusinessesService;
use crate::errors::ServiceError;
use models::product;

/// Product catalog service.
///
/// Authorization is always two-hop: the owning chain is resolved through
/// the business registry (product -> business -> owner) before any write.
pub struct ProductsService<R: ProductRepository, B: BusinessRepository> {
    repo: Arc<R>,
    businesses: Arc<BusinessesService<B>>,
}

impl<R: ProductRepository, B: BusinessRepository> ProductsService<R, B> {
    pub fn new(repo: Arc<R>, businesses: Arc<BusinessesService<B>>) -> Self {
        Self { repo, businesses }
    }

    /// Create a product under a business the acting user owns.
    #[instrument(skip(self, input), fields(business_id = %business_id, acting_user_id = %acting_user_id))]
    pub async fn create(
        &self,
        input: NewProduct,
        business_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<product::Model, ServiceError> {
        let business = self.businesses.find_one(business_id).await?;
        access::ensure_owner(business.owner_id, acting_user_id)?;
        validate_new(&input)?;
        let created = self.repo.insert(input, business_id).await?;
        info!(product_id = %created.id, business_id = %business_id, "product_created");
        Ok(created)
    }

    /// All products (optionally one business's), newest first, each with
    /// its business embedded.
    pub async fn find_all(&self, business_id: Option<Uuid>) -> Result<Vec<ProductWithBusiness>, ServiceError> {
        let rows = self.repo.find_all_with_business(business_id).await?;
        Ok(rows
            .into_iter()
            .map(|(product, business)| ProductWithBusiness { product, business })
            .collect())
    }

    pub async fn find_one(&self, id: Uuid) -> Result<product::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))
    }

    /// Merge the provided attributes; only the owning business's owner may
    /// update.
    #[instrument(skip(self, patch), fields(product_id = %id, acting_user_id = %acting_user_id))]
    pub async fn update(
        &self,
        id: Uuid,
        patch: ProductPatch,
        acting_user_id: Uuid,
    ) -> Result<product::Model, ServiceError> {
        let product = self.find_one(id).await?;
        let business = self.businesses.find_one(product.business_id).await?;
        access::ensure_owner(business.owner_id, acting_user_id)?;
        validate_patch(&patch)?;
        let updated = self.repo.update(id, patch).await?;
        info!(product_id = %updated.id, "product_updated");
        Ok(updated)
    }

    /// Delete a product; same authorization path as `update`.
    #[instrument(skip(self), fields(product_id = %id, acting_user_id = %acting_user_id))]
    pub async fn remove(&self, id: Uuid, acting_user_id: Uuid) -> Result<(), ServiceError> {
        let product = self.find_one(id).await?;
        let business = self.businesses.find_one(product.business_id).await?;
        access::ensure_owner(business.owner_id, acting_user_id)?;
        self.repo.delete(id).await?;
        info!(product_id = %id, "product_removed");
        Ok(())
    }

    /// One business's products, newest first, without the relation join.
    pub async fn find_by_business(&self, business_id: Uuid) -> Result<Vec<product::Model>, ServiceError> {
        self.repo.find_by_business(business_id).await
    }
}

fn validate_new(input: &NewProduct) -> Result<(), ServiceError> {
    product::validate_name(&input.name)?;
    if let Some(description) = &input.description {
        product::validate_description(description)?;
    }
    if let Some(weight) = input.weight_grams {
        product::validate_weight_grams(weight)?;
    }
    if let Some(quantity) = input.quantity_units {
        product::validate_quantity_units(quantity)?;
    }
    product::validate_price(input.price)?;
    if let Some(url) = &input.image_url {
        product::validate_image_url(url)?;
    }
    Ok(())
}

fn validate_patch(patch: &ProductPatch) -> Result<(), ServiceError> {
    if let Some(name) = &patch.name {
        product::validate_name(name)?;
    }
    if let Some(description) = &patch.description {
        product::validate_description(description)?;
    }
    if let Some(weight) = patch.weight_grams {
        product::validate_weight_grams(weight)?;
    }
    if let Some(quantity) = patch.quantity_units {
        product::validate_quantity_units(quantity)?;
    }
    if let Some(price) = patch.price {
        product::validate_price(price)?;
    }
    if let Some(url) = &patch.image_url {
        product::validate_image_url(url)?;
    }
    Ok(())
}
