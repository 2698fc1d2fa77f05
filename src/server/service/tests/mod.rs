use review_test_utils::prelude::*;

use crate::server::error::{resource::ResourceError, Error};
