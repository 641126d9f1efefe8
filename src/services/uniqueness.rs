//! Email and phone uniqueness checks.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::repositories::ContactTransaction;

/// Make sure no other contact already uses `email` or the canonical `phone`.
///
/// `exclude` names the contact being updated so it does not conflict with
/// itself. The email is checked first; when both are taken only the email
/// conflict is reported.
pub async fn ensure_unique(
    tx: &mut dyn ContactTransaction,
    email: &str,
    phone: &str,
    exclude: Option<ContactId>,
) -> ContactResult<()> {
    let email_taken = match exclude {
        Some(id) => tx.exists_by_email_excluding(email, id).await?,
        None => tx.exists_by_email(email).await?,
    };
    if email_taken {
        return Err(ContactError::Conflict { field: "email" });
    }

    let phone_taken = match exclude {
        Some(id) => tx.exists_by_phone_excluding(phone, id).await?,
        None => tx.exists_by_phone(phone).await?,
    };
    if phone_taken {
        return Err(ContactError::Conflict { field: "phone" });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewContact;
    use crate::repositories::{ContactRepository, InMemoryContactStore};
    use chrono::NaiveDate;

    async fn store_with_ana() -> (InMemoryContactStore, ContactId) {
        let store = InMemoryContactStore::new();
        let mut tx = store.begin().await.unwrap();
        let ana = tx
            .insert(NewContact {
                name: "Ana Lima".to_string(),
                email: "ana@example.com".to_string(),
                phone: "1187654321".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                profile_picture: None,
            })
            .await
            .unwrap();
        tx.commit().await.unwrap();
        (store, ana.id)
    }

    #[tokio::test]
    async fn test_free_values_pass() {
        let (store, _) = store_with_ana().await;
        let mut tx = store.begin().await.unwrap();
        assert!(ensure_unique(tx.as_mut(), "bia@example.com", "1100000000", None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_email_conflict_reported_first() {
        let (store, _) = store_with_ana().await;
        let mut tx = store.begin().await.unwrap();
        let err = ensure_unique(tx.as_mut(), "ana@example.com", "1187654321", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Conflict { field: "email" }));
    }

    #[tokio::test]
    async fn test_phone_conflict() {
        let (store, _) = store_with_ana().await;
        let mut tx = store.begin().await.unwrap();
        let err = ensure_unique(tx.as_mut(), "bia@example.com", "1187654321", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Conflict { field: "phone" }));
    }

    #[tokio::test]
    async fn test_own_record_excluded() {
        let (store, ana) = store_with_ana().await;
        let mut tx = store.begin().await.unwrap();
        assert!(
            ensure_unique(tx.as_mut(), "ana@example.com", "1187654321", Some(ana))
                .await
                .is_ok()
        );
    }
}
