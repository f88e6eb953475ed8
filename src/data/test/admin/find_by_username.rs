use super::*;

/// Tests fetching an admin account by username.
///
/// Expected: Ok(Some) with the matching account
#[tokio::test]
async fn finds_admin_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = AdminFactory::new(db).username("kitchen_admin").build().await?;

    let repo = AdminRepository::new(db);
    let found = repo.find_by_username("kitchen_admin").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, admin.id);

    Ok(())
}

/// Tests fetching an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AdminFactory::new(db).username("kitchen_admin").build().await?;

    let repo = AdminRepository::new(db);
    let found = repo.find_by_username("someone_else").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that username matching is exact, not case-insensitive.
///
/// Expected: Ok(None) for a differently cased username
#[tokio::test]
async fn matches_username_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AdminFactory::new(db).username("kitchen_admin").build().await?;

    let repo = AdminRepository::new(db);
    let found = repo.find_by_username("Kitchen_Admin").await?;

    assert!(found.is_none());

    Ok(())
}
