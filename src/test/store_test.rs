#[cfg(test)]
mod tests {
    use rusqlite::{Connection, Row, types::Value};

    use crate::{
        domain::{
            ports::repository::{Identifiable, Repository},
            user::{entities::User, role::Role},
        },
        error::StoreError,
        infra::{
            sqlite_store::{SqlEntity, SqliteStore},
            user_store::UserStore,
        },
        test::support::memory_store,
    };

    fn bob() -> User {
        User::new("bob", Role::User, "x")
    }

    #[test]
    fn add_assigns_id_and_round_trips() {
        let store = memory_store();
        let mut user = bob();
        assert!(!user.is_persisted());

        store.add(&mut user).expect("add");
        let id = user.id().expect("id assigned");

        let loaded = store.get_by_id(id).expect("get_by_id");
        assert_eq!(loaded, user);
        assert_eq!(loaded.username, "bob");
        assert_eq!(loaded.role, Role::User);
        assert_eq!(loaded.password, "x");
    }

    #[test]
    fn ids_are_distinct_per_insert() {
        let store = memory_store();
        let mut first = bob();
        let mut second = User::new("carol", Role::Admin, "y");
        store.add(&mut first).expect("add");
        store.add(&mut second).expect("add");

        assert_ne!(first.id(), second.id());
        assert_eq!(store.get_by_id(second.id().unwrap()).unwrap().role, Role::Admin);
    }

    #[test]
    fn get_by_unknown_id_is_select_failure() {
        let store = memory_store();
        assert_eq!(store.get_by_id(42), Err(StoreError::SelectFailure));
    }

    #[test]
    fn get_all_on_empty_table_is_empty_vec() {
        let store = memory_store();
        assert_eq!(store.get_all(), Ok(Vec::new()));
    }

    #[test]
    fn get_all_returns_every_row() {
        let store = memory_store();
        for name in ["ann", "ben", "cid"] {
            let mut user = User::new(name, Role::User, "pw");
            store.add(&mut user).expect("add");
        }

        let names: Vec<String> = store
            .get_all()
            .expect("get_all")
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names.len(), 3);
        for name in ["ann", "ben", "cid"] {
            assert!(names.iter().any(|n| n == name));
        }
    }

    #[test]
    fn update_overwrites_mutable_fields() {
        let store = memory_store();
        let mut user = bob();
        store.add(&mut user).expect("add");

        user.username = "robert".to_string();
        user.role = Role::Admin;
        user.password = "z".to_string();
        store.update(&user).expect("update");

        let loaded = store.get_by_id(user.id().unwrap()).expect("get");
        assert_eq!(loaded, user);
    }

    #[test]
    fn update_without_id_fails() {
        let store = memory_store();
        assert_eq!(store.update(&bob()), Err(StoreError::UpdateFailure));
    }

    #[test]
    fn update_of_missing_row_is_reported_as_success() {
        let store = memory_store();
        let mut user = bob();
        store.add(&mut user).expect("add");
        store.delete_entity(&user).expect("delete");

        assert_eq!(store.update(&user), Ok(()));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_then_get_is_select_failure() {
        let store = memory_store();
        let mut user = bob();
        store.add(&mut user).expect("add");
        let id = user.id().unwrap();

        store.delete(id).expect("delete");
        assert_eq!(store.get_by_id(id), Err(StoreError::SelectFailure));
        assert_eq!(store.delete(id), Ok(()));
    }

    #[test]
    fn delete_entity_without_id_fails() {
        let store = memory_store();
        assert_eq!(store.delete_entity(&bob()), Err(StoreError::DeleteFailure));
    }

    #[test]
    fn find_by_unique_column_matches_username() {
        let store = memory_store();
        let mut user = bob();
        store.add(&mut user).expect("add");

        assert_eq!(store.find_by_unique_column("bob"), Ok(user));
        assert_eq!(
            store.find_by_unique_column("alice"),
            Err(StoreError::SelectFailure)
        );
    }

    #[test]
    fn is_empty_tracks_inserts() {
        let store = memory_store();
        assert!(store.is_empty());

        let mut user = bob();
        store.add(&mut user).expect("add");
        assert!(!store.is_empty());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nested").join("keeper.db");

        let id = {
            let store = UserStore::open(&path).expect("open");
            let mut user = bob();
            store.add(&mut user).expect("add");
            user.id().unwrap()
        };

        let reopened = UserStore::open(&path).expect("reopen");
        assert!(!reopened.is_empty());
        assert_eq!(reopened.get_by_id(id).expect("get").username, "bob");
    }

    #[test]
    fn store_can_be_moved() {
        let store = memory_store();
        let mut user = bob();
        store.add(&mut user).expect("add");

        let moved = store;
        assert!(moved.get_by_id(user.id().unwrap()).is_ok());
    }

    /// Rows go through a view whose INSTEAD OF trigger writes the real table,
    /// so the id of an inserted row can never be read back.
    struct Entry {
        id: Option<i64>,
        label: String,
    }

    impl Identifiable for Entry {
        fn id(&self) -> Option<i64> {
            self.id
        }
    }

    impl SqlEntity for Entry {
        const TABLE: &'static str = "entries";
        const ID_COLUMN: &'static str = "entry_id";
        const UNIQUE_COLUMN: &'static str = "label";
        const COLUMNS: &'static [&'static str] = &["label"];
        const SCHEMA: &'static str = "
            CREATE TABLE IF NOT EXISTS entries_data (
                entry_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                label TEXT NOT NULL
            );
            CREATE VIEW IF NOT EXISTS entries AS
                SELECT entry_id, label FROM entries_data;
            CREATE TRIGGER IF NOT EXISTS entries_insert INSTEAD OF INSERT ON entries
            BEGIN
                INSERT INTO entries_data (label) VALUES (NEW.label);
            END;";

        fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
            Ok(Entry {
                id: Some(row.get(0)?),
                label: row.get(1)?,
            })
        }

        fn to_values(&self) -> Vec<Value> {
            vec![Value::Text(self.label.clone())]
        }

        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }
    }

    #[test]
    fn failed_id_fetch_rolls_back_the_insert() {
        let store = SqliteStore::<Entry>::in_memory().expect("store");
        let mut entry = Entry {
            id: None,
            label: "groceries".to_string(),
        };

        assert_eq!(store.add(&mut entry), Err(StoreError::SelectFailure));
        assert_eq!(entry.id, None);
        assert!(store.is_empty());
        assert!(store.get_all().expect("get_all").is_empty());
        assert!(store.find_by_unique_column("groceries").is_err());
    }

    #[test]
    #[should_panic(expected = "corrupted users table")]
    fn corrupted_role_is_fatal() {
        let conn = Connection::open_in_memory().expect("conn");
        conn.execute_batch(
            "CREATE TABLE users (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                username VARCHAR(20) NOT NULL,
                role VARCHAR(5) NOT NULL,
                password VARCHAR(255) NOT NULL
            );
            INSERT INTO users (username, role, password) VALUES ('eve', 'Root', 'x');",
        )
        .expect("seed");

        let store = UserStore::from_connection(conn).expect("store");
        let _ = store.find_by_unique_column("eve");
    }
}
