//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the in-memory database coming from
//! `review-test-utils`.

mod category;
mod owner;
mod pokemon;
mod review;
mod reviewer;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use pokemon_review::server::controller::util::payload::Payload;
use review_test_utils::prelude::*;

use crate::util::{read_json, TestContextExt};
