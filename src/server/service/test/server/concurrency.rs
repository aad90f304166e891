use super::*;
use crate::server::data::unit_of_work::UnitOfWork;
use sea_orm::DatabaseConnection;

/// Stops a server inside its own unit of work, committing only on success.
async fn stop_in_unit_of_work(db: &DatabaseConnection, id: &str) -> Result<ServerStatus, AppError> {
    let ctx = RequestContext::generate();

    let uow = UnitOfWork::begin(db).await?;
    let server = {
        let infra = InfraBackend::Simulated.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx)
            .perform_action(id, action(ServerAction::Stop))
            .await?
    };
    uow.commit().await?;

    Ok(server.status)
}

/// Tests two concurrent stop requests against the same server.
///
/// Each request runs in its own unit of work; the store serializes them so the second
/// observes the first one's committed state.
///
/// Expected: exactly one succeeds, the other fails with InvalidStateTransition
#[tokio::test]
async fn concurrent_stops_serialize() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let (first, second) = tokio::join!(
        stop_in_unit_of_work(db, &server.id),
        stop_in_unit_of_work(db, &server.id)
    );

    let results = [first, second];
    let succeeded = results
        .iter()
        .filter(|r| matches!(r, Ok(ServerStatus::Shutoff)))
        .count();
    let rejected = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(AppError::LifecycleErr(LifecycleError::InvalidStateTransition {
                    current: ServerStatus::Shutoff,
                    action: ServerAction::Stop,
                }))
            )
        })
        .count();

    assert_eq!(succeeded, 1);
    assert_eq!(rejected, 1);

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let stored = ServerService::new(infra.as_ref(), &ctx).get(&server.id).await?;
    assert_eq!(stored.status, ServerStatus::Shutoff);

    Ok(())
}

/// Tests that a failed action leaves no partial writes behind.
///
/// Expected: unit of work dropped on error, server unchanged
#[tokio::test]
async fn failed_action_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flavor = factory::create_flavor(db).await?;
    let image = factory::create_image(db).await?;
    let server = factory::server::ServerFactory::new(db, &flavor.id, &image.id)
        .status("BUILD")
        .build()
        .await?;

    let result = stop_in_unit_of_work(db, &server.id).await;
    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::InvalidStateTransition {
            current: ServerStatus::Build,
            ..
        }))
    ));

    let stored = entity::prelude::Server::find_by_id(server.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "BUILD");
    assert_eq!(stored.updated_at, server.updated_at);

    Ok(())
}
