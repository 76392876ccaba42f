//! Ownership Rules
//!
//! Pure domain logic for the owner check applied to post mutations.

use crate::error::{BlogError, BlogResult};

/// Normalize an owner/actor id for comparison
///
/// Ids are compared as strings; trimming and ASCII-lowercasing makes
/// uuid hex case variants and padded values compare stably. Non-ASCII
/// content passes through untouched.
pub fn normalize_owner_id(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Check whether the actor owns the resource
pub fn is_owner(owner_id: &str, actor_id: &str) -> bool {
    normalize_owner_id(owner_id) == normalize_owner_id(actor_id)
}

/// Gate a mutation on ownership
///
/// `action` is the attempted verb ("update"/"delete") and ends up in
/// the error message. Callers check existence first; this function only
/// answers the "is it yours" question.
pub fn authorize_mutation(
    owner_id: &str,
    actor_id: &str,
    action: &'static str,
) -> BlogResult<()> {
    if is_owner(owner_id, actor_id) {
        Ok(())
    } else {
        Err(BlogError::NotOwner(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_owner_id() {
        assert_eq!(normalize_owner_id("  ABC-123  "), "abc-123");
        assert_eq!(normalize_owner_id("abc"), "abc");
        assert_eq!(normalize_owner_id("42"), "42");
    }

    #[test]
    fn test_is_owner_uuid_case_variants() {
        let lower = "8f14e45f-ceea-467f-a0e7-6b53e2d3f5a1";
        let upper = "8F14E45F-CEEA-467F-A0E7-6B53E2D3F5A1";
        assert!(is_owner(lower, upper));
        assert!(is_owner(upper, lower));
    }

    #[test]
    fn test_is_owner_trims_padding() {
        assert!(is_owner(" 42", "42 "));
    }

    #[test]
    fn test_is_owner_rejects_different_ids() {
        assert!(!is_owner("42", "43"));
        assert!(!is_owner("abc", "abd"));
    }

    #[test]
    fn test_authorize_mutation() {
        assert!(authorize_mutation("42", "42", "update").is_ok());

        let err = authorize_mutation("42", "43", "update").unwrap_err();
        assert_eq!(err.to_string(), "Not authorized to update this post");

        let err = authorize_mutation("42", "43", "delete").unwrap_err();
        assert_eq!(err.to_string(), "Not authorized to delete this post");
    }
}
