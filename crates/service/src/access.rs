//! Shared authorization decisions.
//!
//! Every mutating operation funnels through these checks before touching
//! the store: resolve the owning chain, compare against the acting
//! identity, abort with `Forbidden` on mismatch.

use uuid::Uuid;

use crate::errors::ServiceError;
use models::user::UserKind;

/// The acting identity must be the resource owner.
pub fn ensure_owner(resource_owner: Uuid, acting_user: Uuid) -> Result<(), ServiceError> {
    if resource_owner != acting_user {
        return Err(ServiceError::Forbidden(
            "you do not have permission to modify this resource".into(),
        ));
    }
    Ok(())
}

/// Owner-only surfaces require a business account.
pub fn ensure_business_account(kind: &str) -> Result<(), ServiceError> {
    match UserKind::parse(kind) {
        Some(UserKind::Business) => Ok(()),
        _ => Err(ServiceError::Forbidden(
            "only business accounts can perform this action".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_check_matches_exactly() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(ensure_owner(a, a).is_ok());
        assert!(matches!(ensure_owner(a, b), Err(ServiceError::Forbidden(_))));
    }

    #[test]
    fn business_account_required() {
        assert!(ensure_business_account("business").is_ok());
        assert!(ensure_business_account("customer").is_err());
        assert!(ensure_business_account("").is_err());
    }
}
