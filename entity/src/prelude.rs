pub use super::field::Entity as Field;
pub use super::mark::Entity as Mark;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
pub use super::user::Entity as User;
