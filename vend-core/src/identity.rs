use serde::{Deserialize, Serialize};

/// Shopper roles. Closed set: nothing in the system extends it at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Guest,
    Admin,
}

impl Role {
    /// Admin unlocks restock and export in the console driver.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn guest(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Role::Guest,
        }
    }

    pub fn admin(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_gating() {
        let alice = User::guest("Alice", "alice@example.com");
        assert!(!alice.role.is_admin());
        assert_eq!(alice.role.label(), "Guest");

        let root = User::admin("Root", "root@example.com");
        assert!(root.role.is_admin());
    }
}
