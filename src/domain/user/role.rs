use std::fmt::Display;
use std::str::FromStr;

use crate::error::{AppError, ErrData};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    User,
    Admin,
}

pub fn role_to_string(role: Role) -> &'static str {
    match role {
        Role::User => "User",
        Role::Admin => "Admin",
    }
}

/// Exact, case-sensitive inverse of [`role_to_string`].
pub fn string_to_role(raw: &str) -> Result<Role, AppError> {
    match raw {
        "User" => Ok(Role::User),
        "Admin" => Ok(Role::Admin),
        other => Err(AppError::Data(ErrData::InvalidRole(other.to_string()))),
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(role_to_string(*self))
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        string_to_role(s)
    }
}
