//! API data transfer objects.
//!
//! These types define the JSON wire format of the HTTP API. Keys are camelCase to stay
//! compatible with the dashboard frontend.

pub mod api;
pub mod field;
pub mod mark;
pub mod report;
pub mod student;
pub mod subject;
pub mod user;
