#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            ports::repository::Repository,
            user::{
                entities::User,
                role::Role,
                validation::{validate_password, validate_username},
            },
        },
        error::AuthErr,
        test::support::memory_store,
    };

    // USERNAME

    #[test]
    fn empty_username_is_rejected() {
        let store = memory_store();
        assert_eq!(validate_username("", &store), Err(AuthErr::InvalidNameLength));
    }

    #[test]
    fn overlong_username_is_rejected() {
        let store = memory_store();
        let name = "a".repeat(21);
        assert_eq!(validate_username(&name, &store), Err(AuthErr::InvalidNameLength));
        assert_eq!(validate_username(&"a".repeat(20), &store), Ok(()));
    }

    #[test]
    fn existing_username_is_rejected() {
        let store = memory_store();
        assert_eq!(validate_username("alice", &store), Ok(()));

        let mut alice = User::new("alice", Role::User, "hash");
        store.add(&mut alice).expect("add");

        assert_eq!(
            validate_username("alice", &store),
            Err(AuthErr::AlreadyExistingName)
        );
        assert_eq!(validate_username("alicia", &store), Ok(()));
    }

    // PASSWORD

    #[test]
    fn password_policy_reports_first_failing_rule() {
        let cases = [
            ("short1!", Err(AuthErr::InvalidPasswordLength)),
            ("alllowercase1!", Err(AuthErr::MissingUpperCase)),
            ("ALLUPPERCASE1!", Err(AuthErr::MissingLowerCase)),
            ("NoDigitsHere!", Err(AuthErr::MissingNumber)),
            ("NoSpecial123", Err(AuthErr::MissingSpecialCharacter)),
            ("Valid123!", Ok(())),
        ];

        for (password, expected) in cases {
            assert_eq!(validate_password(password), expected, "{password:?}");
        }
    }

    #[test]
    fn password_length_bounds_are_inclusive() {
        assert_eq!(validate_password("Abcdef1!"), Ok(()));
        assert_eq!(validate_password("Abcdefghijklmnopq1!x"), Ok(()));
        assert_eq!(
            validate_password("Abcdefghijklmnopq1!xy"),
            Err(AuthErr::InvalidPasswordLength)
        );
    }

    #[test]
    fn length_is_checked_before_character_classes() {
        assert_eq!(validate_password("abc"), Err(AuthErr::InvalidPasswordLength));
        assert_eq!(validate_password(""), Err(AuthErr::InvalidPasswordLength));
    }

    #[test]
    fn characters_outside_the_special_set_do_not_count() {
        assert_eq!(
            validate_password("Password123~"),
            Err(AuthErr::MissingSpecialCharacter)
        );
        assert_eq!(validate_password("Password123?"), Ok(()));
    }
}
