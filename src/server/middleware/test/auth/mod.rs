use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AccessPolicy, AuthGuard},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod policy;
