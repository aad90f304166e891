use super::*;

/// Tests applying a transition from the expected status.
///
/// Expected: Ok(true) and the stored status changed
#[tokio::test]
async fn applies_transition_from_expected_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    let applied = repo
        .transition(
            &server.id,
            ServerStatus::Active,
            ServerStatus::Shutoff,
            None,
            Utc::now(),
        )
        .await?;

    assert!(applied);
    let stored = repo.get_by_id(&server.id).await?.unwrap();
    assert_eq!(stored.status, ServerStatus::Shutoff);
    assert_eq!(stored.flavor_id, server.flavor_id);

    Ok(())
}

/// Tests that a stale expected status does not overwrite the stored one.
///
/// Expected: Ok(false) and the stored status unchanged
#[tokio::test]
async fn skips_when_status_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flavor = factory::create_flavor(db).await?;
    let image = factory::create_image(db).await?;
    let server = factory::server::ServerFactory::new(db, &flavor.id, &image.id)
        .status("SHUTOFF")
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let applied = repo
        .transition(
            &server.id,
            ServerStatus::Active,
            ServerStatus::Shutoff,
            None,
            Utc::now(),
        )
        .await?;

    assert!(!applied);
    let stored = repo.get_by_id(&server.id).await?.unwrap();
    assert_eq!(stored.status, ServerStatus::Shutoff);
    assert_eq!(stored.updated_at, server.updated_at);

    Ok(())
}

/// Tests replacing the flavor as part of a transition.
///
/// Expected: Ok(true) with the new flavor stored
#[tokio::test]
async fn replaces_flavor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_flavor, _image, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let larger = factory::flavor::FlavorFactory::new(db).vcpus(8).build().await?;

    let repo = ServerRepository::new(db);
    let applied = repo
        .transition(
            &server.id,
            ServerStatus::Active,
            ServerStatus::Active,
            Some(&larger.id),
            Utc::now(),
        )
        .await?;

    assert!(applied);
    let stored = repo.get_by_id(&server.id).await?.unwrap();
    assert_eq!(stored.flavor_id, larger.id);

    Ok(())
}

/// Tests transitioning a server that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_missing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let applied = repo
        .transition(
            "missing",
            ServerStatus::Shutoff,
            ServerStatus::Active,
            None,
            Utc::now(),
        )
        .await?;

    assert!(!applied);

    Ok(())
}
