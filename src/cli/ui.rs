use inquire::{Confirm, Select};

use crate::error::AppError;

pub const SIGN_UP: &str = "Sign up";
pub const LOG_IN: &str = "Log in";
pub const QUIT: &str = "Quit";

pub const CHANGE_USERNAME: &str = "Change username";
pub const CHANGE_PASSWORD: &str = "Change password";
pub const LIST_ACCOUNTS: &str = "List accounts";
pub const DELETE_ACCOUNT: &str = "Delete my account";
pub const LOG_OUT: &str = "Log out";

pub fn main_menu() -> Result<&'static str, AppError> {
    Ok(Select::new("Choose an option:", vec![SIGN_UP, LOG_IN, QUIT]).prompt()?)
}

pub fn session_menu() -> Result<&'static str, AppError> {
    let options = vec![
        CHANGE_USERNAME,
        CHANGE_PASSWORD,
        LIST_ACCOUNTS,
        DELETE_ACCOUNT,
        LOG_OUT,
    ];

    Ok(Select::new("What do you want to do?", options).prompt()?)
}

pub fn confirm_action(message: &str) -> Result<bool, AppError> {
    Ok(Confirm::new(message).with_default(false).prompt()?)
}
