/// All database primary keys are SQLite INTEGER (rowid) columns.
pub type DbId = i64;
