// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows driven by a parsed TOML configuration.

use jiff::civil;

use dayplan_core::{Config, Error, Planner};

use crate::common::setup_temp_dirs;

#[tokio::test]
async fn config_driven_grid_and_zone() {
    // Arrange
    let temp_dirs = setup_temp_dirs().unwrap();
    let toml_str = format!(
        r#"
owner = "user-1"
state_dir = "{}"
timezone = "UTC"

[grid]
start = "09:00"
end = "17:00"
"#,
        temp_dirs.state_dir.display()
    );
    let config: Config = toml::from_str(&toml_str).unwrap();

    // Act
    let planner = Planner::open(config).await.unwrap();

    // Assert
    assert_eq!(planner.grid().len(), 17);
    assert_eq!(planner.grid().first().key(), "9:00");
    assert_eq!(planner.grid().last().key(), "17:00");
    assert!(temp_dirs.state_dir.is_dir());

    let schedule = planner.day_schedule(civil::date(2024, 6, 18), &[]);
    assert_eq!(schedule.rows.len(), 17);
}

#[tokio::test]
async fn config_driven_rejects_unaligned_grid() {
    // Arrange
    let temp_dirs = setup_temp_dirs().unwrap();
    let toml_str = format!(
        r#"
owner = "user-1"
state_dir = "{}"

[grid]
start = "09:10"
"#,
        temp_dirs.state_dir.display()
    );
    let config: Config = toml::from_str(&toml_str).unwrap();

    // Act
    let result = Planner::open(config).await;

    // Assert
    assert!(matches!(result, Err(Error::InvalidGrid(_))));
}
