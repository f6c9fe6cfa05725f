// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directories used for testing.
///
/// Automatically cleans up all created directories when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory for database files, created on demand by the planner.
    pub state_dir: PathBuf,

    _base: TempDir,
}

/// Creates a fresh base directory and the state path inside it.
///
/// # Errors
///
/// Returns an error if the base directory cannot be created.
pub fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;
    let state_dir = base.path().join("state");
    Ok(TempDirs {
        state_dir,
        _base: base,
    })
}
