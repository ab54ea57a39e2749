use crate::error::AppError;

/// One-way transform applied to credentials before they are stored or compared.
pub trait CredentialHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError>;
    /// `Ok(false)` means a plain mismatch; `Err` means the stored value is unusable.
    fn verify(&self, plain: &str, stored: &str) -> Result<bool, AppError>;
}
