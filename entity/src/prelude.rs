pub use super::question::Entity as Question;
pub use super::user::Entity as User;
