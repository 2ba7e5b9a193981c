//! Ownership Guard
//!
//! Author-only mutation check. Pure comparison, no I/O; the caller turns
//! a `false` into a 403 and must not run the mutation.

use kernel::id::UserId;

use crate::domain::entity::user::Identity;

/// True when the authenticated identity is the resource's author.
#[inline]
pub fn check_ownership(author: &UserId, identity: &Identity) -> bool {
    *author == identity.user_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{display_name::DisplayName, email::Email};

    fn identity(user_id: UserId) -> Identity {
        Identity {
            user_id,
            email: Email::new("ann@example.com").unwrap(),
            name: DisplayName::new("Ann").unwrap(),
        }
    }

    #[test]
    fn test_author_is_owner() {
        let id = UserId::new();
        assert!(check_ownership(&id, &identity(id)));
    }

    #[test]
    fn test_other_user_is_not_owner() {
        let author = UserId::new();
        let other = UserId::new();
        assert!(!check_ownership(&author, &identity(other)));
    }
}
