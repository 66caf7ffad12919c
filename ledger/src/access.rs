//! Administrator authorization.

use crate::error::LedgerError;
use decree_types::AccountId;
use serde::{Deserialize, Serialize};

/// Holds the single administrator identity.
///
/// Exactly one identity is privileged at any time, fixed at ledger
/// construction and transferable only by the current holder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessGuard {
    administrator: AccountId,
}

impl AccessGuard {
    pub fn new(administrator: AccountId) -> Self {
        Self { administrator }
    }

    /// Fail with `Unauthorized` unless the caller is the administrator.
    pub fn authorize(&self, caller: &AccountId) -> Result<(), LedgerError> {
        if caller == &self.administrator {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    pub fn is_administrator(&self, id: &AccountId) -> bool {
        id == &self.administrator
    }

    pub fn administrator(&self) -> &AccountId {
        &self.administrator
    }

    /// Hand the administrator role to another identity.
    ///
    /// Returns `(previous, new)` on success so the caller can emit the
    /// transfer notification.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        new_admin: AccountId,
    ) -> Result<(AccountId, AccountId), LedgerError> {
        self.authorize(caller)?;
        if !new_admin.is_valid() {
            return Err(LedgerError::InvalidArgument(
                "administrator identity must be non-empty".into(),
            ));
        }
        let previous = std::mem::replace(&mut self.administrator, new_admin.clone());
        Ok((previous, new_admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str) -> AccountId {
        AccountId::new(name)
    }

    #[test]
    fn test_authorize_admin() {
        let guard = AccessGuard::new(account("admin"));
        assert!(guard.authorize(&account("admin")).is_ok());
        assert_eq!(
            guard.authorize(&account("mallory")),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn test_transfer_by_admin() {
        let mut guard = AccessGuard::new(account("admin"));
        let (prev, new) = guard.transfer(&account("admin"), account("successor")).unwrap();
        assert_eq!(prev, account("admin"));
        assert_eq!(new, account("successor"));
        assert!(guard.is_administrator(&account("successor")));
        assert!(!guard.is_administrator(&account("admin")));
    }

    #[test]
    fn test_transfer_by_non_admin_rejected() {
        let mut guard = AccessGuard::new(account("admin"));
        assert_eq!(
            guard.transfer(&account("mallory"), account("mallory")),
            Err(LedgerError::Unauthorized)
        );
        assert!(guard.is_administrator(&account("admin")));
    }

    #[test]
    fn test_transfer_to_empty_identity_rejected() {
        let mut guard = AccessGuard::new(account("admin"));
        let err = guard.transfer(&account("admin"), account("")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidArgument(_)));
        assert!(guard.is_administrator(&account("admin")));
    }
}
