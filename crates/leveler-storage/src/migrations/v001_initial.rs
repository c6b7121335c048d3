//! V001: Initial schema: the base itself.
//! base_tables, base_columns, base_records, base_cells, base_selection.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS base_tables (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at INTEGER NOT NULL
) STRICT;

-- Display names are not unique; resolution by name is the caller's concern.
CREATE TABLE IF NOT EXISTS base_columns (
    id TEXT PRIMARY KEY,
    table_id TEXT NOT NULL REFERENCES base_tables(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    position INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_base_columns_table
    ON base_columns(table_id, position);

CREATE TABLE IF NOT EXISTS base_records (
    id TEXT PRIMARY KEY,
    table_id TEXT NOT NULL REFERENCES base_tables(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_base_records_table
    ON base_records(table_id, position);

-- ANY keeps the storage class as written: INTEGER/REAL numbers, TEXT strings,
-- BLOB JSON for booleans, objects and arrays, or NULL.
CREATE TABLE IF NOT EXISTS base_cells (
    record_id TEXT NOT NULL REFERENCES base_records(id) ON DELETE CASCADE,
    column_id TEXT NOT NULL REFERENCES base_columns(id) ON DELETE CASCADE,
    value ANY,
    updated_at INTEGER NOT NULL,
    PRIMARY KEY (record_id, column_id)
) STRICT;

CREATE TABLE IF NOT EXISTS base_selection (
    table_id TEXT NOT NULL REFERENCES base_tables(id) ON DELETE CASCADE,
    record_id TEXT NOT NULL REFERENCES base_records(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    PRIMARY KEY (table_id, record_id)
) STRICT;
"#;
