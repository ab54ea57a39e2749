use std::cell::RefCell;
use std::collections::VecDeque;

use crate::{
    domain::ports::{
        hasher::CredentialHasher,
        io::{InputProvider, OutputSink},
        repository::Repository,
    },
    domain::user::{entities::User, role::Role},
    error::{AppError, ErrInquire},
    infra::user_store::UserStore,
};

/// Replays prepared answers; lines and secrets are consumed separately.
#[derive(Default)]
pub struct ScriptedInput {
    lines: RefCell<VecDeque<String>>,
    secrets: RefCell<VecDeque<String>>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str], secrets: &[&str]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|s| s.to_string()).collect()),
            secrets: RefCell::new(secrets.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn remaining_secrets(&self) -> usize {
        self.secrets.borrow().len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&self, _prompt: &str) -> Result<String, AppError> {
        self.lines
            .borrow_mut()
            .pop_front()
            .ok_or(AppError::Inquire(ErrInquire::InputExhausted))
    }

    fn read_secret(&self, _prompt: &str) -> Result<String, AppError> {
        self.secrets
            .borrow_mut()
            .pop_front()
            .ok_or(AppError::Inquire(ErrInquire::InputExhausted))
    }
}

#[derive(Default)]
pub struct RecordingOutput {
    pub messages: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl OutputSink for RecordingOutput {
    fn print(&self, msg: &str) {
        self.messages.borrow_mut().push(msg.to_string());
    }

    fn print_error(&self, err: &str) {
        self.errors.borrow_mut().push(err.to_string());
    }
}

/// Cheap, deterministic stand-in for argon2.
pub struct ReversingHasher;

impl CredentialHasher for ReversingHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        Ok(format!("rev${}", plain.chars().rev().collect::<String>()))
    }

    fn verify(&self, plain: &str, stored: &str) -> Result<bool, AppError> {
        Ok(self.hash(plain)? == stored)
    }
}

pub fn memory_store() -> UserStore {
    UserStore::in_memory().expect("in-memory store")
}

/// Persists a user whose stored credential is the transformed `password`.
pub fn seed_user(store: &UserStore, username: &str, password: &str) -> User {
    let hashed = ReversingHasher.hash(password).expect("hash");
    let mut user = User::new(username, Role::User, hashed);
    store.add(&mut user).expect("seed user");
    user
}
