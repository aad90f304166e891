use super::*;

/// Tests deleting a server.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    let deleted = repo.delete(&server.id).await?;

    assert!(deleted);
    let check = entity::prelude::Server::find_by_id(server.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting the same server twice.
///
/// Expected: second delete returns Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    assert!(repo.delete(&server.id).await?);
    assert!(!repo.delete(&server.id).await?);

    Ok(())
}

/// Tests that deleting a server leaves its catalog entries in place.
///
/// Expected: flavor and image still exist
#[tokio::test]
async fn keeps_catalog_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flavor, image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    repo.delete(&server.id).await?;

    assert!(entity::prelude::Flavor::find_by_id(flavor.id).one(db).await?.is_some());
    assert!(entity::prelude::Image::find_by_id(image.id).one(db).await?.is_some());

    Ok(())
}
