use super::*;

/// Tests that images are listed by name with the full count.
///
/// Expected: Ok with images in alphabetical order
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Ubuntu", "Debian", "Fedora"] {
        factory::image::ImageFactory::new(db).name(name).build().await?;
    }

    let repo = ImageRepository::new(db);
    let (images, total) = repo
        .get_paginated(Pagination { limit: 2, offset: 0 })
        .await?;

    let names: Vec<_> = images.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Debian", "Fedora"]);
    assert_eq!(total, 3);

    Ok(())
}
