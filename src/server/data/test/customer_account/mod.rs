use crate::server::{data::customer_account::CustomerAccountRepository, model::customer_account::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_paginated;
mod update_credentials;
mod username_taken;
