//! Request middleware: session wrappers, access policy enforcement and CORS.

pub mod auth;
pub mod cors;
pub mod session;

#[cfg(test)]
mod test;
