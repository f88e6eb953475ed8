use super::*;

/// Tests fetching menus inside a date range.
///
/// Verifies inclusive bounds and ascending date order.
///
/// Expected: Ok with the in-range menus, earliest first
#[tokio::test]
async fn returns_menus_ordered_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuDay)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let wednesday = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
    let friday = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

    // Insert out of order
    factory::create_menu_day(db, friday).await?;
    factory::create_menu_day(db, monday).await?;
    factory::create_menu_day(db, wednesday).await?;
    factory::create_menu_day(db, saturday).await?;

    let repo = MenuDayRepository::new(db);
    let menus = repo.find_in_range(monday, friday).await?;

    assert_eq!(menus.len(), 3);
    assert_eq!(menus[0].date, monday);
    assert_eq!(menus[1].date, wednesday);
    assert_eq!(menus[2].date, friday);

    Ok(())
}

/// Tests a range with no published menus.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unpublished_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuDay)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuDayRepository::new(db);
    let menus = repo
        .find_in_range(
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        )
        .await?;

    assert!(menus.is_empty());

    Ok(())
}
