use inquire::InquireError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;
pub type AuthResult<T> = Result<T, AuthErr>;

/// Outcome of a flow: the outer layer carries infrastructure failures, the
/// inner one the expected, recoverable rejections.
pub type FlowResult<T> = Result<AuthResult<T>, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Input error: {0}")]
    Inquire(#[from] ErrInquire),
    #[error("Argon2 error: {0}")]
    Argon2(#[from] ErrArgon2),
    #[error("Configuration error: {0}")]
    Config(#[from] ErrConfig),
    #[error("Data error: {0}")]
    Data(#[from] ErrData),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ErrInquire {
    #[error("{0}")]
    InquireError(InquireError),
    #[error("No more input available")]
    InputExhausted,
}

#[derive(Debug, Error)]
pub enum ErrArgon2 {
    #[error("Unable to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    #[error("Stored credential is not a valid hash")]
    InvalidStoredHash,
    #[error("Unable to verify password")]
    UnableToVerifyPassword,
}

#[derive(Debug, Error)]
pub enum ErrConfig {
    #[error("max_attempts must be a positive integer, got {0:?}")]
    InvalidMaxAttempts(String),
    #[error("Unable to read configuration file")]
    ReadError,
    #[error("Directory not found")]
    DirectoryNotFound,
    #[error("Unable to create directory")]
    DirectoryCreationFailed,
}

#[derive(Debug, Error)]
pub enum ErrData {
    #[error("Invalid role value {0:?}")]
    InvalidRole(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unable to read from the store")]
    SelectFailure,
    #[error("Unable to insert into the store")]
    InsertFailure,
    #[error("Unable to update the store")]
    UpdateFailure,
    #[error("Unable to delete from the store")]
    DeleteFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthErr {
    #[error("Username must be between 1 and 20 characters")]
    InvalidNameLength,
    #[error("This username is already taken")]
    AlreadyExistingName,
    #[error("Password must be between 8 and 20 characters")]
    InvalidPasswordLength,
    #[error("Password must contain an uppercase letter")]
    MissingUpperCase,
    #[error("Password must contain a lowercase letter")]
    MissingLowerCase,
    #[error("Password must contain a digit")]
    MissingNumber,
    #[error("Password must contain a special character")]
    MissingSpecialCharacter,
    #[error("User not found")]
    UserNotFound,
    #[error("All password attempts exhausted")]
    AllTriesExhausted,
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl From<InquireError> for AppError {
    fn from(value: InquireError) -> Self {
        AppError::Inquire(ErrInquire::InquireError(value))
    }
}
