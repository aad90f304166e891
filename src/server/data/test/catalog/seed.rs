use super::*;

/// Tests seeding an empty catalog.
///
/// Expected: every well-known flavor and image inserted with its fixed ID
#[tokio::test]
async fn seeds_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);
    let report = repo.seed().await?;

    assert_eq!(report.flavors_inserted, 5);
    assert_eq!(report.images_inserted, 4);
    assert_eq!(entity::prelude::Flavor::find().count(db).await?, 5);
    assert_eq!(entity::prelude::Image::find().count(db).await?, 4);

    let small = entity::prelude::Flavor::find_by_id("11111111-0000-0000-0000-000000000002")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(small.name, "m1.small");
    assert_eq!((small.vcpus, small.ram_mb, small.disk_gb), (1, 2048, 20));

    let ubuntu = entity::prelude::Image::find_by_id("22222222-0000-0000-0000-000000000001")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(ubuntu.name, "Ubuntu 22.04 LTS");
    assert_eq!(ubuntu.size_bytes, 2_361_393_152);
    assert_eq!(ubuntu.status, "active");

    Ok(())
}

/// Tests running the seed twice.
///
/// Expected: second run inserts nothing and row counts are unchanged
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);
    repo.seed().await?;
    let report = repo.seed().await?;

    assert_eq!(report.flavors_inserted, 0);
    assert_eq!(report.images_inserted, 0);
    assert_eq!(
        entity::prelude::Flavor::find().count(db).await?,
        SEED_FLAVORS.len() as u64
    );
    assert_eq!(
        entity::prelude::Image::find().count(db).await?,
        SEED_IMAGES.len() as u64
    );

    Ok(())
}

/// Tests that seeding leaves an existing row with a well-known ID untouched.
///
/// Expected: the pre-existing row keeps its values, the others are inserted
#[tokio::test]
async fn never_overwrites_existing_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::flavor::FlavorFactory::new(db)
        .id(SEED_FLAVORS[0].id)
        .name("custom-tiny")
        .vcpus(3)
        .build()
        .await?;

    let repo = CatalogRepository::new(db);
    let report = repo.seed().await?;

    assert_eq!(report.flavors_inserted, 4);
    let tiny = entity::prelude::Flavor::find_by_id(SEED_FLAVORS[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(tiny.name, "custom-tiny");
    assert_eq!(tiny.vcpus, 3);

    Ok(())
}
