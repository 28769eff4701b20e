use super::*;

/// Tests registration stores a hashed password and returns a valid token.
///
/// Verifies the email is normalized, the password is not stored in plain text and
/// the issued token identifies the new user.
///
/// Expected: Ok(AuthSession)
#[tokio::test]
async fn registers_user_with_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let params = RegisterUserParams::from_dto(register_dto("  Mara@Example.COM "))?;
    let session = AuthService::new(db, &tokens).register(params).await?;

    assert_eq!(session.user.email, "mara@example.com");
    assert_eq!(session.user.role, Role::Host);
    assert_ne!(session.user.password_hash, "correct-horse");
    assert!(session.user.password_hash.starts_with("$argon2id$"));

    let stored = PasswordHash::new(&session.user.password_hash).unwrap();
    assert!(Argon2::default()
        .verify_password(b"correct-horse", &stored)
        .is_ok());

    let claims = tokens.verify(&session.token, Utc::now()).unwrap();
    assert_eq!(claims.user_id, session.user.id);

    Ok(())
}

/// Tests a second registration with the same email is rejected.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_existing_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let params = RegisterUserParams::from_dto(register_dto("Taken@example.com"))?;
    let result = AuthService::new(db, &tokens).register(params).await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg == "User already exists."));

    Ok(())
}

/// Tests avatars outside "1" to "5" are rejected.
///
/// Expected: Err(AppError::Validation) naming the allowed avatars
#[test]
fn rejects_unknown_avatar() {
    for avatar in ["0", "6", "", "one"] {
        let mut dto = register_dto("a@example.com");
        dto.avatar = avatar.to_string();

        match RegisterUserParams::from_dto(dto) {
            Err(AppError::Validation(msg)) => assert_eq!(
                msg,
                "Invalid avatar value. It must be one of '1', '2', '3', '4', or '5'."
            ),
            other => panic!("Expected Validation for avatar {:?}, got: {:?}", avatar, other),
        }
    }
}

/// Tests roles other than host and guest are rejected.
///
/// Expected: Err(AppError::Validation) naming the allowed roles
#[test]
fn rejects_unknown_role() {
    for role in ["admin", "Host", ""] {
        let mut dto = register_dto("a@example.com");
        dto.role = role.to_string();

        match RegisterUserParams::from_dto(dto) {
            Err(AppError::Validation(msg)) => assert_eq!(
                msg,
                "Invalid role value. It must be either 'host' or 'guest'."
            ),
            other => panic!("Expected Validation for role {:?}, got: {:?}", role, other),
        }
    }
}

/// Tests field validation: name, email format and password length.
///
/// Expected: Err(AppError::Validation) with the generic message
#[test]
fn rejects_invalid_fields() {
    let mut short_password = register_dto("a@example.com");
    short_password.password = "1234567".to_string();

    let mut bad_email = register_dto("not-an-email");
    bad_email.email = "not-an-email".to_string();

    let mut blank_name = register_dto("a@example.com");
    blank_name.name = "   ".to_string();

    for dto in [short_password, bad_email, blank_name] {
        assert!(matches!(
            RegisterUserParams::from_dto(dto),
            Err(AppError::Validation(msg)) if msg == "Invalid inputs passed, please check your data."
        ));
    }
}
