pub use super::flavor::Entity as Flavor;
pub use super::image::Entity as Image;
pub use super::server::Entity as Server;
