use tracing::{info, warn};
use zeroize::Zeroize;

use crate::{
    domain::{
        ports::{
            hasher::CredentialHasher,
            io::{InputProvider, OutputSink},
            repository::Repository,
        },
        user::{
            entities::User,
            role::Role,
            validation::{validate_password, validate_username},
        },
    },
    error::{AuthErr, AuthResult, FlowResult},
};

pub struct RegisterService<'a, R, I, O, H> {
    repository: &'a R,
    input: &'a I,
    output: &'a O,
    hasher: &'a H,
}

impl<'a, R, I, O, H> RegisterService<'a, R, I, O, H>
where
    R: Repository<User>,
    I: InputProvider,
    O: OutputSink,
    H: CredentialHasher,
{
    pub fn new(repository: &'a R, input: &'a I, output: &'a O, hasher: &'a H) -> Self {
        Self {
            repository,
            input,
            output,
            hasher,
        }
    }

    pub fn signup(&self) -> FlowResult<User> {
        self.signup_as(Role::User)
    }

    /// Signup that makes the first account an administrator: the role is
    /// `Admin` for as long as the store holds no account, `User` afterwards.
    pub fn signup_seeding_admin(&self) -> FlowResult<User> {
        let role = if self.repository.is_empty() {
            Role::Admin
        } else {
            Role::User
        };
        self.signup_as(role)
    }

    /// Runs the signup flow once; a rejected username or password is reported
    /// and ends the flow without retrying.
    pub fn signup_as(&self, role: Role) -> FlowResult<User> {
        let raw_username = self.input.read_line("Username:")?;
        let username = raw_username.trim();
        if let Err(e) = self.username_validation(username) {
            return Ok(self.reject(e));
        }

        let mut raw_pw = self.input.read_secret("Password:")?;
        if let Err(e) = self.password_validation(&raw_pw) {
            raw_pw.zeroize();
            return Ok(self.reject(e));
        }

        let hashed = self.hasher.hash(&raw_pw);
        raw_pw.zeroize();

        let mut user = User::new(username, role, hashed?);
        if let Err(e) = self.repository.add(&mut user) {
            return Ok(self.reject(AuthErr::StoreError(e)));
        }

        info!("registered {} with id {:?}", user.username, user.id());
        Ok(Ok(user))
    }

    pub fn username_validation(&self, username: &str) -> AuthResult<()> {
        validate_username(username, self.repository)
    }

    pub fn password_validation(&self, password: &str) -> AuthResult<()> {
        validate_password(password)
    }

    fn reject(&self, err: AuthErr) -> AuthResult<User> {
        warn!("signup rejected: {err:?}");
        self.output.print_error(&err.to_string());
        Err(err)
    }
}
