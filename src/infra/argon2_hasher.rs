use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand_core::OsRng;

use crate::{
    domain::ports::hasher::CredentialHasher,
    error::{AppError, ErrArgon2},
};

/// Argon2id with a fresh salt per credential, stored as a PHC string.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: argon2::Params) -> Self {
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AppError::Argon2(ErrArgon2::PasswordHashError(e)))?
            .to_string();
        Ok(hash)
    }

    fn verify(&self, plain: &str, stored: &str) -> Result<bool, AppError> {
        let parsed_hash =
            PasswordHash::new(stored).map_err(|_| AppError::Argon2(ErrArgon2::InvalidStoredHash))?;
        match self.argon2.verify_password(plain.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AppError::Argon2(ErrArgon2::UnableToVerifyPassword)),
        }
    }
}
