use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParam, UpdateProductParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_ids;
mod get_paginated;
mod update;
