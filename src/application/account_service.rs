use tracing::info;
use zeroize::Zeroize;

use crate::{
    domain::{
        ports::{hasher::CredentialHasher, repository::Repository},
        user::{
            entities::User,
            role::Role,
            validation::{validate_password, validate_username},
        },
    },
    error::{AppError, AuthResult},
};

/// Maintenance of accounts that already exist in the store.
pub struct AccountService<'a, R, H> {
    repository: &'a R,
    hasher: &'a H,
}

impl<'a, R, H> AccountService<'a, R, H>
where
    R: Repository<User>,
    H: CredentialHasher,
{
    pub fn new(repository: &'a R, hasher: &'a H) -> Self {
        Self { repository, hasher }
    }

    pub fn list_users(&self) -> AuthResult<Vec<User>> {
        Ok(self.repository.get_all()?)
    }

    pub fn change_username(&self, user: &mut User, new_name: &str) -> AuthResult<()> {
        let new_name = new_name.trim();
        if new_name == user.username {
            return Ok(());
        }
        validate_username(new_name, self.repository)?;

        let mut updated = user.clone();
        updated.username = new_name.to_string();
        self.repository.update(&updated)?;

        info!("user {:?} renamed to {}", user.id(), new_name);
        *user = updated;
        Ok(())
    }

    /// The raw password is wiped before returning, whatever the outcome.
    pub fn change_password(
        &self,
        user: &mut User,
        raw_pw: &mut str,
    ) -> Result<AuthResult<()>, AppError> {
        if let Err(e) = validate_password(raw_pw) {
            raw_pw.zeroize();
            return Ok(Err(e));
        }

        let hashed = self.hasher.hash(raw_pw);
        raw_pw.zeroize();

        let mut updated = user.clone();
        updated.password = hashed?;
        if let Err(e) = self.repository.update(&updated) {
            return Ok(Err(e.into()));
        }

        info!("password changed for {}", user.username);
        *user = updated;
        Ok(Ok(()))
    }

    pub fn set_role(&self, user: &mut User, role: Role) -> AuthResult<()> {
        let mut updated = user.clone();
        updated.role = role;
        self.repository.update(&updated)?;
        *user = updated;
        Ok(())
    }

    pub fn delete_account(&self, user: &User) -> AuthResult<()> {
        self.repository.delete_entity(user)?;
        info!("deleted account {}", user.username);
        Ok(())
    }
}
