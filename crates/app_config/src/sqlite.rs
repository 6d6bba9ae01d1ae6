// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{AppConfig, ConfigError};
use bevy::prelude::*;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

// The table only ever holds this one row.
const ROW_ID: i32 = 1;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS window_settings (
    id INTEGER PRIMARY KEY,
    resolution_x REAL,
    resolution_y REAL,
    position_x INTEGER,
    position_y INTEGER
)";

type Row = (Option<f64>, Option<f64>, Option<i32>, Option<i32>);

#[cfg(feature = "sqlite-tracing")]
fn trace_sql(sql: &str) {
    debug!("sqlite: {sql}");
}

fn open(path: &Path) -> Result<Connection, ConfigError> {
    #[allow(unused_mut)]
    let mut conn = Connection::open(path)?;
    #[cfg(feature = "sqlite-tracing")]
    conn.trace(Some(trace_sql));
    conn.execute(CREATE_TABLE, ())?;
    Ok(conn)
}

pub(crate) fn load(config: &mut AppConfig, path: &Path) -> Result<(), ConfigError> {
    let conn = open(path)?;
    const SQL: &str = "SELECT resolution_x, resolution_y, position_x, position_y
        FROM window_settings WHERE id = ?1";
    let row: Option<Row> = conn
        .query_row(SQL, [ROW_ID], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .optional()?;

    let Some((resolution_x, resolution_y, position_x, position_y)) = row else {
        info!("No stored window settings in {}", path.display());
        return Ok(());
    };
    config.window_resolution = resolution_x
        .zip(resolution_y)
        .map(|(x, y)| Vec2::new(x as f32, y as f32));
    config.window_position = position_x.zip(position_y).map(|(x, y)| IVec2::new(x, y));
    Ok(())
}

pub(crate) fn save(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let conn = open(path)?;
    const SQL: &str = "INSERT OR REPLACE INTO window_settings
        (id, resolution_x, resolution_y, position_x, position_y)
        VALUES (?1, ?2, ?3, ?4, ?5)";
    let resolution = config.window_resolution;
    let position = config.window_position;
    conn.execute(
        SQL,
        params![
            ROW_ID,
            resolution.map(|r| f64::from(r.x)),
            resolution.map(|r| f64::from(r.y)),
            position.map(|p| p.x),
            position.map(|p| p.y),
        ],
    )?;
    Ok(())
}

// End of File
