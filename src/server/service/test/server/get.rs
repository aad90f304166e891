use super::*;

/// Tests getting an existing server.
///
/// Expected: Ok with the stored server
#[tokio::test]
async fn returns_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let found = ServerService::new(infra.as_ref(), &ctx).get(&server.id).await?;

    assert_eq!(found.id, server.id);
    assert_eq!(found.ip_address, server.ip_address);

    Ok(())
}

/// Tests getting a server that does not exist.
///
/// Expected: Err(ServerNotFound)
#[tokio::test]
async fn fails_for_missing_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let result = ServerService::new(infra.as_ref(), &ctx).get("missing").await;

    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::ServerNotFound(id))) if id == "missing"
    ));

    Ok(())
}
