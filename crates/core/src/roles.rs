//! Well-known role names carried in access-token claims.

pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Roles granted to a principal.
///
/// Every authenticated user holds `ROLE_USER`; administrators additionally
/// hold `ROLE_ADMIN`.
pub fn roles_for(is_admin: bool) -> Vec<String> {
    let mut roles = vec![ROLE_USER.to_string()];
    if is_admin {
        roles.push(ROLE_ADMIN.to_string());
    }
    roles
}

/// Returns `true` when `granted` contains at least one of `required`.
pub fn has_any_role<S: AsRef<str>>(granted: &[S], required: &[&str]) -> bool {
    granted
        .iter()
        .any(|role| required.contains(&role.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_user_only_has_user_role() {
        assert_eq!(roles_for(false), vec![ROLE_USER.to_string()]);
    }

    #[test]
    fn admin_holds_both_roles() {
        let roles = roles_for(true);
        assert!(has_any_role(&roles, &[ROLE_USER]));
        assert!(has_any_role(&roles, &[ROLE_ADMIN]));
    }

    #[test]
    fn missing_role_is_rejected() {
        let roles = roles_for(false);
        assert!(!has_any_role(&roles, &[ROLE_ADMIN]));
        assert!(!has_any_role::<String>(&[], &[ROLE_USER, ROLE_ADMIN]));
    }
}
