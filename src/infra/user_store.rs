use rusqlite::{Row, types::Value};

use crate::{
    domain::user::{
        entities::User,
        role::{role_to_string, string_to_role},
    },
    infra::sqlite_store::{SqlEntity, SqliteStore},
};

pub type UserStore = SqliteStore<User>;

impl SqlEntity for User {
    const TABLE: &'static str = "users";
    const ID_COLUMN: &'static str = "user_id";
    const UNIQUE_COLUMN: &'static str = "username";
    const COLUMNS: &'static [&'static str] = &["username", "role", "password"];
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            username VARCHAR(20) NOT NULL,
            role VARCHAR(5) NOT NULL,
            password VARCHAR(255) NOT NULL
        );";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw_role: String = row.get(2)?;
        // Every write goes through role_to_string, so anything else means the
        // file was corrupted outside of this program.
        let role = match string_to_role(&raw_role) {
            Ok(role) => role,
            Err(e) => panic!("corrupted users table: {e}"),
        };

        Ok(User::with_id(row.get(0)?, row.get::<_, String>(1)?, role, row.get::<_, String>(3)?))
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.username.clone()),
            Value::Text(role_to_string(self.role).to_string()),
            Value::Text(self.password.clone()),
        ]
    }

    fn assign_id(&mut self, id: i64) {
        self.set_id(id);
    }
}
