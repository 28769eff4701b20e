use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::booking::BookingRepository, model::booking::CreateBookingParams};
