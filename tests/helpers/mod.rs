//! Test helpers module
//!
//! This module provides utilities and helpers for testing the EventManager client.
//! It includes a mock API server, sample data and test environment setup.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

#[allow(unused_imports)]
pub use api_mock::*;
#[allow(unused_imports)]
pub use test_data::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
