use super::*;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "John Doe".to_string(),
        email: email.to_string(),
        role: Role::Publisher,
        password_hash: "hash".to_string(),
    }
}

/// Tests creating a new account.
///
/// Verifies that the repository stores the role as text and reads it back as a
/// `Role`, with no reset token set.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(new_user("john@gmail.com")).await?;

    assert_eq!(user.name, "John Doe");
    assert_eq!(user.role, Role::Publisher);
    assert_eq!(user.reset_password_token, None);

    let found = repo.find_by_email("john@gmail.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("john@gmail.com")).await?;
    let result = repo.create(new_user("john@gmail.com")).await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(ref err))
            if matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
