use super::*;
use serde_json::json;

/// Tests upserting a menu for a date with none stored.
///
/// Verifies that a new row is created carrying the three meal payloads and
/// the created flag is set.
///
/// Expected: Ok with created = true
#[tokio::test]
async fn creates_new_menu_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuDay)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = MenuDayRepository::new(db);

    let (menu, created) = repo
        .upsert(
            date,
            Some(json!({"bread": "Rolls"}).to_string()),
            Some(json!({"protein_1": "Grilled Chicken"}).to_string()),
            None,
        )
        .await?;

    assert!(created);
    assert_eq!(menu.date, date);
    assert_eq!(menu.breakfast, Some(json!({"bread": "Rolls"}).to_string()));
    assert!(menu.dinner.is_none());

    let count = entity::prelude::MenuDay::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting over an already published date.
///
/// Verifies whole-day replacement: every meal column takes the new payload
/// and meals omitted from the new publication are cleared, not merged.
///
/// Expected: Ok with created = false and all columns replaced
#[tokio::test]
async fn replaces_all_meal_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuDay)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    factory::create_menu_day(db, date).await?;

    let repo = MenuDayRepository::new(db);
    let (menu, created) = repo
        .upsert(
            date,
            None,
            Some(json!({"protein_1": "Feijoada"}).to_string()),
            None,
        )
        .await?;

    assert!(!created);
    assert!(menu.breakfast.is_none());
    assert_eq!(menu.lunch, Some(json!({"protein_1": "Feijoada"}).to_string()));
    assert!(menu.dinner.is_none());

    // Still a single row for the date
    let count = entity::prelude::MenuDay::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting one date leaves other dates untouched.
///
/// Expected: Ok with the neighbouring date's payload unchanged
#[tokio::test]
async fn leaves_other_dates_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuDay)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let existing = factory::create_menu_day(db, tuesday).await?;

    let repo = MenuDayRepository::new(db);
    repo.upsert(monday, None, Some(json!({"protein_1": "Lasagna"}).to_string()), None)
        .await?;

    let untouched = repo.find_by_date(tuesday).await?.unwrap();
    assert_eq!(untouched.lunch, existing.lunch);
    assert_eq!(untouched.dinner, existing.dinner);

    Ok(())
}
