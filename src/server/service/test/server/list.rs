use super::*;

/// Tests listing servers with a limit smaller than the collection.
///
/// Expected: `limit` items, full total and a `next_offset`
#[tokio::test]
async fn lists_first_page() -> Result<(), AppError> {
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
    for i in 0..3 {
        service
            .create(create_params(&format!("web-{}", i), SMALL, UBUNTU))
            .await?;
    }

    let page = service
        .get_paginated(Pagination { limit: 2, offset: 0 })
        .await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 0);
    assert_eq!(page.next_offset(), Some(2));

    let last = service
        .get_paginated(Pagination { limit: 2, offset: 2 })
        .await?;
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.next_offset(), None);

    Ok(())
}

/// Tests listing when no servers exist.
///
/// Expected: empty page with total 0
#[tokio::test]
async fn lists_empty_collection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ctx = ctx();
    let infra = InfraBackend::Simulated.connect(db);
    let page = ServerService::new(infra.as_ref(), &ctx)
        .get_paginated(Pagination::default())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.next_offset(), None);

    Ok(())
}
