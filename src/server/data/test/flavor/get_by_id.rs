use super::*;

/// Tests getting a flavor by ID.
///
/// Expected: Ok(Some) with all hardware fields
#[tokio::test]
async fn returns_flavor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flavor = factory::flavor::FlavorFactory::new(db)
        .name("m1.test")
        .vcpus(4)
        .build()
        .await?;

    let repo = FlavorRepository::new(db);
    let found = repo.get_by_id(&flavor.id).await?.unwrap();

    assert_eq!(found.name, "m1.test");
    assert_eq!(found.vcpus, 4);
    assert_eq!(found.ram_mb, flavor.ram_mb);
    assert_eq!(found.disk_gb, flavor.disk_gb);

    Ok(())
}

/// Tests getting a flavor that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flavor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlavorRepository::new(db);
    let result = repo.get_by_id("missing").await?;

    assert!(result.is_none());

    Ok(())
}
