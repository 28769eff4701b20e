use super::*;

/// Tests login with correct credentials.
///
/// Expected: Ok(AuthSession) for the stored user, email matched case-insensitively
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::UserFactory::new(db)
        .email("lee@example.com")
        .password("s3cret-pass")
        .build()
        .await?;

    let session = AuthService::new(db, &tokens)
        .login(LoginParams {
            email: "LEE@example.com".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await?;

    assert_eq!(session.user.id, user.id);
    assert_eq!(tokens.verify(&session.token, Utc::now()).unwrap().user_id, user.id);

    Ok(())
}

/// Tests login with the wrong password.
///
/// Expected: Err(AuthError::PasswordMismatch)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::UserFactory::new(db)
        .email("lee@example.com")
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(LoginParams {
            email: "lee@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasswordMismatch(id))) if id == user.id
    ));

    Ok(())
}

/// Tests login with an unknown email.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let result = AuthService::new(db, &tokens)
        .login(LoginParams {
            email: "nobody@example.com".to_string(),
            password: factory::user::DEFAULT_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found."));

    Ok(())
}
