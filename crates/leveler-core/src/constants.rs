//! Shared constants for the Leveler engine.

/// Default display name of the column being adjusted.
pub const DEFAULT_PAYABLE_COLUMN: &str = "Payable";

/// Default display name of the target column.
pub const DEFAULT_ACTUAL_COLUMN: &str = "Actual";

/// Default display name of the gating overtime-net column.
pub const DEFAULT_OT_NET_COLUMN: &str = "OT Net";

/// Default pause between steps in milliseconds (0 = no pause).
pub const DEFAULT_STEP_DELAY_MS: u64 = 0;

/// Default hard cap on steps taken for a single record.
pub const DEFAULT_HARD_CAP: u64 = 20_000;

/// Slack added on top of twice the distance when computing a step limit.
pub const STEP_LIMIT_SLACK: u64 = 10;

/// Default SQLite database path.
pub const DEFAULT_DB_PATH: &str = "leveler.db";

/// Default active table name.
pub const DEFAULT_TABLE: &str = "Sheet1";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "leveler.toml";

/// Nesting depth after which wrapped cell values are treated as empty.
pub const MAX_CELL_UNWRAP_DEPTH: usize = 4;
