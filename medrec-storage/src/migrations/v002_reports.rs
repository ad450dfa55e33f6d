//! v002: health_reports.

use rusqlite::Connection;

use medrec_core::errors::MedrecResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MedrecResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS health_reports (
            id                TEXT PRIMARY KEY,
            owner_id          INTEGER NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
            age               REAL,
            gender            TEXT,
            hypertension      INTEGER NOT NULL DEFAULT 0 CHECK (hypertension IN (0, 1)),
            heart_disease     INTEGER NOT NULL DEFAULT 0 CHECK (heart_disease IN (0, 1)),
            ever_married      TEXT,
            work_type         TEXT,
            residence_type    TEXT,
            avg_glucose_level REAL,
            bmi               REAL,
            smoking_status    TEXT NOT NULL DEFAULT 'unknown',
            stroke            INTEGER NOT NULL DEFAULT 0 CHECK (stroke IN (0, 1)),
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_owner ON health_reports(owner_id);
        CREATE INDEX IF NOT EXISTS idx_reports_created ON health_reports(created_at);
        CREATE INDEX IF NOT EXISTS idx_reports_stroke ON health_reports(stroke);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
