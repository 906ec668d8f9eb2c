use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(username: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        password_hash: "salt$digest".to_string(),
    }
}
