// src/config.rs
use crate::errors::ServerError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATA_PATH_VAR: &str = "HOUSE_ROCKET_DATA";
pub const ADDR_VAR: &str = "HOUSE_ROCKET_ADDR";
pub const WORKERS_VAR: &str = "HOUSE_ROCKET_WORKERS";
pub const TABLE_ROWS_VAR: &str = "HOUSE_ROCKET_TABLE_ROWS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the sales CSV loaded once at startup.
    pub data_path: PathBuf,
    pub addr: SocketAddr,
    /// Size of astra's blocking worker pool.
    pub max_workers: usize,
    /// Row cap for HTML tables. Spreadsheet exports are never capped.
    pub table_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("kc_house_data.csv"),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            table_rows: 500,
        }
    }
}

impl Config {
    /// Defaults overridden by any `HOUSE_ROCKET_*` variables that are set.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR) {
            cfg.data_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup(ADDR_VAR) {
            cfg.addr = addr
                .parse()
                .map_err(|e| ServerError::ConfigError(format!("{ADDR_VAR}={addr}: {e}")))?;
        }

        if let Some(workers) = lookup(WORKERS_VAR) {
            cfg.max_workers = parse_positive(WORKERS_VAR, &workers)?;
        }

        if let Some(rows) = lookup(TABLE_ROWS_VAR) {
            cfg.table_rows = parse_positive(TABLE_ROWS_VAR, &rows)?;
        }

        Ok(cfg)
    }
}

fn parse_positive(var: &str, raw: &str) -> Result<usize, ServerError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ServerError::ConfigError(format!(
            "{var}={raw}: expected a positive integer"
        ))),
    }
}
