use serde::{Deserialize, Serialize};

/// Where unauthenticated (or unauthorized) navigation lands.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Role identifier used for portal authorization.
///
/// The set is closed: anything outside it is rejected at the boundary
/// (token decode, guard evaluation), never silently accepted or defaulted.
/// There is no hierarchy between roles; authorization is plain membership.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    SchoolAdmin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::SchoolAdmin,
        Role::Teacher,
        Role::Student,
        Role::Parent,
    ];

    /// Case-normalized parse; `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Role> {
        match value.to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "SCHOOL_ADMIN" => Some(Role::SchoolAdmin),
            "TEACHER" => Some(Role::Teacher),
            "STUDENT" => Some(Role::Student),
            "PARENT" => Some(Role::Parent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::SchoolAdmin => "SCHOOL_ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
            Role::Parent => "PARENT",
        }
    }

    /// Dashboard path for this role.
    ///
    /// Total over the closed set; the static table is never mutated at
    /// runtime. String-keyed lookups go through [`dashboard_for`].
    pub fn dashboard(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "/super-admin/dashboard",
            Role::SchoolAdmin => "/admin/dashboard",
            Role::Teacher => "/teacher/dashboard",
            Role::Student => "/student/dashboard",
            Role::Parent => "/parent/dashboard",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True iff the case-normalized value is a member of the fixed role set.
pub fn is_valid_role(value: &str) -> bool {
    Role::parse(value).is_some()
}

/// Set membership check over a raw role string.
///
/// Validates first, then plain inclusion in `allowed`. No hierarchy, no
/// implicit superuser bypass: `SuperAdmin` passes only when explicitly
/// listed. Invalid input is `false`, never an error.
pub fn has_role(value: &str, allowed: &[Role]) -> bool {
    match Role::parse(value) {
        Some(role) => allowed.contains(&role),
        None => false,
    }
}

/// Dashboard lookup for a raw role string.
///
/// `None` when the role is invalid; callers fall back to [`LOGIN_ROUTE`].
pub fn dashboard_for(value: &str) -> Option<&'static str> {
    Role::parse(value).map(|role| role.dashboard())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_are_never_valid() {
        for value in ["", "ADMIN", "superadmin", "TEACHER ", "root", "*"] {
            assert!(!is_valid_role(value), "{value:?} should be invalid");
            assert!(!has_role(value, &Role::ALL), "{value:?} should match nothing");
            assert_eq!(dashboard_for(value), None);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
        assert_eq!(Role::parse("Super_Admin"), Some(Role::SuperAdmin));
        assert!(is_valid_role("teacher"));
    }

    #[test]
    fn has_role_is_plain_membership() {
        assert!(has_role("teacher", &[Role::Teacher, Role::SchoolAdmin]));
        assert!(!has_role("teacher", &[Role::Parent]));
        // No implicit bypass for the most privileged role.
        assert!(!has_role("SUPER_ADMIN", &[Role::Teacher]));
        for role in Role::ALL {
            assert_eq!(has_role(role.as_str(), &[role]), true);
            assert_eq!(has_role(role.as_str(), &[]), false);
        }
    }

    #[test]
    fn dashboards_are_fixed_per_role() {
        assert_eq!(dashboard_for("TEACHER"), Some("/teacher/dashboard"));
        assert_eq!(dashboard_for("SCHOOL_ADMIN"), Some("/admin/dashboard"));
        assert_eq!(Role::SuperAdmin.dashboard(), "/super-admin/dashboard");
        assert_eq!(Role::Student.dashboard(), "/student/dashboard");
        assert_eq!(Role::Parent.dashboard(), "/parent/dashboard");
    }

    #[test]
    fn wire_form_is_screaming_snake() {
        let json = serde_json::to_string(&Role::SchoolAdmin).unwrap();
        assert_eq!(json, "\"SCHOOL_ADMIN\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::SchoolAdmin);
        assert!(serde_json::from_str::<Role>("\"JANITOR\"").is_err());
    }
}
