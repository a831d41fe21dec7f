//! Access rules for the admin surface.
//!
//! Callers pass the acting [`Principal`] explicitly; nothing here looks up
//! a current user on its own.

use crate::types::DbId;

/// The account performing an admin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: DbId,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Staff may browse the admin issue list, statistics and single issues.
/// Superusers carry every staff privilege.
pub fn can_view_issues(principal: &Principal) -> bool {
    principal.is_staff || principal.is_superuser
}

/// Staff may file new issues through the admin surface.
pub fn can_create_issues(principal: &Principal) -> bool {
    can_view_issues(principal)
}

/// Only superusers may edit an existing issue.
pub fn can_change_issues(principal: &Principal) -> bool {
    principal.is_superuser
}

/// Only superusers may delete an issue.
pub fn can_delete_issues(principal: &Principal) -> bool {
    principal.is_superuser
}

/// Categories, users and other reference data are superuser-only to change.
pub fn can_manage_reference_data(principal: &Principal) -> bool {
    principal.is_superuser
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(is_staff: bool, is_superuser: bool) -> Principal {
        Principal {
            user_id: 1,
            is_staff,
            is_superuser,
        }
    }

    #[test]
    fn test_plain_user_has_no_admin_access() {
        let p = principal(false, false);
        assert!(!can_view_issues(&p));
        assert!(!can_create_issues(&p));
        assert!(!can_change_issues(&p));
        assert!(!can_delete_issues(&p));
    }

    #[test]
    fn test_staff_can_view_and_create_only() {
        let p = principal(true, false);
        assert!(can_view_issues(&p));
        assert!(can_create_issues(&p));
        assert!(!can_change_issues(&p));
        assert!(!can_delete_issues(&p));
        assert!(!can_manage_reference_data(&p));
    }

    #[test]
    fn test_superuser_can_do_everything() {
        for p in [principal(true, true), principal(false, true)] {
            assert!(can_view_issues(&p));
            assert!(can_create_issues(&p));
            assert!(can_change_issues(&p));
            assert!(can_delete_issues(&p));
            assert!(can_manage_reference_data(&p));
        }
    }
}
