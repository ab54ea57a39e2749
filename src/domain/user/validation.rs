use crate::{
    domain::{ports::repository::Repository, user::entities::User},
    error::{AuthErr, AuthResult},
};

pub const MAX_USERNAME_LEN: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 20;
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:\",<.>/?";

/// Checks that `name` is usable as a new username in `store`.
///
/// A lookup failure is read as "no such user"; the store does not tell a
/// missing row apart from a failed query.
pub fn validate_username<R: Repository<User>>(name: &str, store: &R) -> AuthResult<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_USERNAME_LEN {
        return Err(AuthErr::InvalidNameLength);
    }

    if store.find_by_unique_column(name).is_ok() {
        return Err(AuthErr::AlreadyExistingName);
    }

    Ok(())
}

/// Applies the password policy, reporting only the first rule that fails.
pub fn validate_password(password: &str) -> AuthResult<()> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(AuthErr::InvalidPasswordLength);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AuthErr::MissingUpperCase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AuthErr::MissingLowerCase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AuthErr::MissingNumber);
    }

    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(AuthErr::MissingSpecialCharacter);
    }

    Ok(())
}
