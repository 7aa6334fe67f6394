use crate::server::data::price_history::PriceHistoryRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated_by_career;
mod latest_as_of;
mod record;
