use log::info;
use zeroize::Zeroize;

use crate::{
    application::{
        account_service::AccountService, auth_service::AuthService,
        register_service::RegisterService,
    },
    cli::ui,
    domain::{
        ports::{
            config::AppConfig,
            io::{InputProvider, OutputSink},
            repository::Repository,
        },
        user::{entities::User, role::Role},
    },
    error::AppError,
    infra::{
        argon2_hasher::Argon2Hasher,
        console::{ConsoleInput, ConsoleOutput},
        user_store::UserStore,
    },
};

pub struct KeeperCli {
    store: UserStore,
    input: ConsoleInput,
    output: ConsoleOutput,
    hasher: Argon2Hasher,
    config: AppConfig,
}

impl KeeperCli {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let store = UserStore::open(&config.database_path)?;

        Ok(Self {
            store,
            input: ConsoleInput,
            output: ConsoleOutput,
            hasher: Argon2Hasher::new(),
            config,
        })
    }

    pub fn run(&self) -> Result<(), AppError> {
        self.output.print("=== Keeper ===");

        if self.store.is_empty() {
            self.bootstrap_admin()?;
        }

        loop {
            match ui::main_menu()? {
                ui::SIGN_UP => self.register()?,
                ui::LOG_IN => self.login()?,
                _ => {
                    self.output.print("Goodbye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn register_service(
        &self,
    ) -> RegisterService<'_, UserStore, ConsoleInput, ConsoleOutput, Argon2Hasher> {
        RegisterService::new(&self.store, &self.input, &self.output, &self.hasher)
    }

    fn bootstrap_admin(&self) -> Result<(), AppError> {
        self.output
            .print("No account exists yet, create the administrator account.");
        if let Ok(user) = self.register_service().signup_seeding_admin()? {
            info!("administrator {} created", user.username);
            self.output.print(&format!("Administrator {} created", user.username));
        }
        Ok(())
    }

    fn register(&self) -> Result<(), AppError> {
        self.output.print("\n=== Sign up ===");
        if let Ok(user) = self.register_service().signup_seeding_admin()? {
            if user.role == Role::Admin {
                info!("administrator {} created", user.username);
            }
            self.output.print(&format!("Welcome, {user}!"));
        }
        Ok(())
    }

    fn login(&self) -> Result<(), AppError> {
        self.output.print("\n=== Log in ===");
        let auth = AuthService::new(
            &self.store,
            &self.input,
            &self.output,
            &self.hasher,
            self.config.max_attempts,
        );

        if let Ok(user) = auth.login()? {
            self.output.print(&format!("Logged in as {user}"));
            self.session(user)?;
        }
        Ok(())
    }

    fn session(&self, mut user: User) -> Result<(), AppError> {
        let accounts = AccountService::new(&self.store, &self.hasher);

        loop {
            match ui::session_menu()? {
                ui::CHANGE_USERNAME => {
                    let new_name = self.input.read_line("New username:")?;
                    match accounts.change_username(&mut user, &new_name) {
                        Ok(()) => self
                            .output
                            .print(&format!("Username changed to {}", user.username)),
                        Err(e) => self.output.print_error(&e.to_string()),
                    }
                }
                ui::CHANGE_PASSWORD => {
                    let mut new_pw = self.input.read_secret("New password:")?;
                    let outcome = accounts.change_password(&mut user, &mut new_pw);
                    new_pw.zeroize();
                    match outcome? {
                        Ok(()) => self.output.print("Password changed"),
                        Err(e) => self.output.print_error(&e.to_string()),
                    }
                }
                ui::LIST_ACCOUNTS => match accounts.list_users() {
                    Ok(users) => {
                        let lines: Vec<String> = users.iter().map(User::to_string).collect();
                        let options: Vec<&str> = lines.iter().map(String::as_str).collect();
                        self.output.print_menu("Accounts:", &options);
                    }
                    Err(e) => self.output.print_error(&e.to_string()),
                },
                ui::DELETE_ACCOUNT => {
                    if ui::confirm_action("Delete your account permanently?")? {
                        match accounts.delete_account(&user) {
                            Ok(()) => {
                                self.output.print("Account deleted");
                                return Ok(());
                            }
                            Err(e) => self.output.print_error(&e.to_string()),
                        }
                    }
                }
                _ => {
                    self.output.print("Logged out");
                    return Ok(());
                }
            }
        }
    }
}
