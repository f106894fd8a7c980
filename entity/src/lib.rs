pub mod prelude;

pub mod field;
pub mod mark;
pub mod student;
pub mod subject;
pub mod user;
