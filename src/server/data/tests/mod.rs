use review_test_utils::prelude::*;
