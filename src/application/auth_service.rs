use tracing::{info, warn};
use zeroize::Zeroize;

use crate::{
    domain::{
        ports::{
            hasher::CredentialHasher,
            io::{InputProvider, OutputSink},
            repository::Repository,
        },
        user::entities::User,
    },
    error::{AppError, AuthErr, AuthResult, FlowResult},
};

pub struct AuthService<'a, R, I, O, H> {
    repository: &'a R,
    input: &'a I,
    output: &'a O,
    hasher: &'a H,
    max_attempts: u32,
}

impl<'a, R, I, O, H> AuthService<'a, R, I, O, H>
where
    R: Repository<User>,
    I: InputProvider,
    O: OutputSink,
    H: CredentialHasher,
{
    /// A `max_attempts` of zero is treated as one.
    pub fn new(
        repository: &'a R,
        input: &'a I,
        output: &'a O,
        hasher: &'a H,
        max_attempts: u32,
    ) -> Self {
        Self {
            repository,
            input,
            output,
            hasher,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn login(&self) -> FlowResult<User> {
        let raw_username = self.input.read_line("Username:")?;
        let user = match self.auth_username(raw_username.trim()) {
            Ok(user) => user,
            Err(e) => return Ok(self.reject(e)),
        };

        for attempt in 1..=self.max_attempts {
            let mut raw_pw = self.input.read_secret("Password:")?;
            let matched = self.auth_password(&user, &raw_pw);
            raw_pw.zeroize();

            if matched? {
                info!("{} logged in", user.username);
                return Ok(Ok(user));
            }

            let remaining = self.max_attempts - attempt;
            warn!("wrong password for {} ({remaining} left)", user.username);
            if remaining > 0 {
                self.output
                    .print_error(&format!("Wrong password, {remaining} attempt(s) left"));
            }
        }

        Ok(self.reject(AuthErr::AllTriesExhausted))
    }

    pub fn auth_username(&self, username: &str) -> AuthResult<User> {
        self.repository
            .find_by_unique_column(username)
            .map_err(|_| AuthErr::UserNotFound)
    }

    pub fn auth_password(&self, user: &User, plain: &str) -> Result<bool, AppError> {
        self.hasher.verify(plain, &user.password)
    }

    fn reject(&self, err: AuthErr) -> AuthResult<User> {
        warn!("login rejected: {err:?}");
        self.output.print_error(&err.to_string());
        Err(err)
    }
}
