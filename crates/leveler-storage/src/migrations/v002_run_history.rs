//! V002: run_history, an append-only log of batch runs.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS run_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    table_name TEXT NOT NULL,
    mode TEXT NOT NULL,
    started_at INTEGER NOT NULL,
    completed_at INTEGER,
    total INTEGER,
    changed INTEGER,
    failed INTEGER,
    duration_ms INTEGER,
    status TEXT NOT NULL,
    error TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_run_history_started
    ON run_history(started_at);
"#;
