use std::fmt::{Debug, Display};

use crate::domain::{ports::repository::Identifiable, user::role::Role};

impl Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// An account record. `password` holds the transformed credential once the
/// user has gone through a flow; the raw secret never reaches the store.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: Option<i64>,
    pub username: String,
    pub role: Role,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, role: Role, password: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            role,
            password: password.into(),
        }
    }

    /// Rebuilds a persisted user; only row mapping should need this.
    pub(crate) fn with_id(
        id: i64,
        username: impl Into<String>,
        role: Role,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(username, role, password)
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Identifiable for User {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}
