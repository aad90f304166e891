use super::*;

/// Tests deleting servers in every status.
///
/// Verifies that deletion is unconditional, including the system-managed statuses.
///
/// Expected: Ok for each server and no rows left
#[tokio::test]
async fn deletes_regardless_of_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flavor = factory::create_flavor(db).await?;
    let image = factory::create_image(db).await?;
    let mut ids = Vec::new();
    for status in ServerStatus::ALL {
        let server = factory::server::ServerFactory::new(db, &flavor.id, &image.id)
            .status(status.as_str())
            .build()
            .await?;
        ids.push(server.id);
    }

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let service = ServerService::new(infra.as_ref(), &ctx);
    for id in &ids {
        service.delete(id).await?;
    }

    assert_eq!(entity::prelude::Server::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting the same server twice and reading it afterwards.
///
/// Expected: second delete and get both fail with ServerNotFound
#[tokio::test]
async fn reports_missing_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let service = ServerService::new(infra.as_ref(), &ctx);

    service.delete(&server.id).await?;

    assert!(matches!(
        service.delete(&server.id).await,
        Err(AppError::LifecycleErr(LifecycleError::ServerNotFound(_)))
    ));
    assert!(matches!(
        service.get(&server.id).await,
        Err(AppError::LifecycleErr(LifecycleError::ServerNotFound(_)))
    ));

    Ok(())
}
