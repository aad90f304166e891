use super::*;

/// Tests creating a server against the seeded catalog.
///
/// Verifies that a new server starts `ACTIVE` with a generated ID and an address in
/// the 10.0.0.0/8 range, and that reading it back returns an equal record.
///
/// Expected: Ok with an ACTIVE server
#[tokio::test]
async fn creates_active_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    CatalogRepository::new(db).seed().await?;

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let service = ServerService::new(infra.as_ref(), &ctx);

    let server = service.create(create_params("web-01", SMALL, UBUNTU)).await?;

    assert_eq!(server.name, "web-01");
    assert_eq!(server.status, ServerStatus::Active);
    assert_eq!(server.flavor_id, SMALL);
    assert_eq!(server.image_id, UBUNTU);
    assert!(uuid::Uuid::parse_str(&server.id).is_ok());
    assert!(server.ip_address.starts_with("10."));
    assert_eq!(server.created_at, server.updated_at);

    let fetched = service.get(&server.id).await?;
    assert_eq!(fetched, server);

    Ok(())
}

/// Tests creating a server with a flavor that does not exist.
///
/// Expected: Err(FlavorNotFound) and no server row
#[tokio::test]
async fn fails_for_missing_flavor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    CatalogRepository::new(db).seed().await?;

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let result = ServerService::new(infra.as_ref(), &ctx)
        .create(create_params("web-01", "no-such-flavor", UBUNTU))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::FlavorNotFound(id))) if id == "no-such-flavor"
    ));
    assert_eq!(entity::prelude::Server::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a server with an image that does not exist.
///
/// Expected: Err(ImageNotFound) and no server row
#[tokio::test]
async fn fails_for_missing_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    CatalogRepository::new(db).seed().await?;

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let result = ServerService::new(infra.as_ref(), &ctx)
        .create(create_params("web-01", SMALL, "no-such-image"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::ImageNotFound(_)))
    ));
    assert_eq!(entity::prelude::Server::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the flavor is checked before the image.
///
/// Expected: Err(FlavorNotFound) when both references are missing
#[tokio::test]
async fn checks_flavor_before_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let result = ServerService::new(infra.as_ref(), &ctx)
        .create(create_params("web-01", "missing", "missing"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::FlavorNotFound(_)))
    ));

    Ok(())
}
