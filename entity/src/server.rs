use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// Lifecycle status, stored as its upper-case wire name (e.g. `ACTIVE`).
    pub status: String,
    pub flavor_id: String,
    pub image_id: String,
    pub ip_address: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flavor::Entity",
        from = "Column::FlavorId",
        to = "super::flavor::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Flavor,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Image,
}

impl Related<super::flavor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flavor.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
