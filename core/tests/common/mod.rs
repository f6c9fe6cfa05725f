// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - A scriptable in-memory event store
//! - Temporary directory management with auto-cleanup

mod fake_store;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fake_store::{FakeStore, StoreCall};
#[allow(unused_imports)]
pub use fixtures::{test_config, test_draft, test_event, test_planner, utc};
#[allow(unused_imports)]
pub use temp_dir::setup_temp_dirs;
