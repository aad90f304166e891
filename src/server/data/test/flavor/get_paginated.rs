use super::*;

/// Tests that flavors are listed by name.
///
/// Expected: Ok with flavors in alphabetical order and the full count
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["m1.medium", "m1.large", "m1.small"] {
        factory::flavor::FlavorFactory::new(db).name(name).build().await?;
    }

    let repo = FlavorRepository::new(db);
    let (flavors, total) = repo.get_paginated(Pagination::default()).await?;

    let names: Vec<_> = flavors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["m1.large", "m1.medium", "m1.small"]);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests limiting and offsetting the flavor list.
///
/// Expected: Ok with the second flavor only and the full count
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["a", "b", "c"] {
        factory::flavor::FlavorFactory::new(db).name(name).build().await?;
    }

    let repo = FlavorRepository::new(db);
    let (flavors, total) = repo
        .get_paginated(Pagination { limit: 1, offset: 1 })
        .await?;

    assert_eq!(flavors.len(), 1);
    assert_eq!(flavors[0].name, "b");
    assert_eq!(total, 3);

    Ok(())
}
