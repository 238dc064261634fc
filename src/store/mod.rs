//! Postgres store adapter
//!
//! Owns the connection pool and applies reconciliation mutations inside one
//! transaction, so a failed run rolls back without leaving the table
//! half-updated.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use crate::error::StoreError;
use crate::sync::{snapshot_from_rows, LegislatorRecord, Mutation, Snapshot};

// "position" is quoted throughout: it is a reserved word in Postgres.
const SELECT_ALL: &str = r#"SELECT id, fullname, firstname, lastname, party, state, "position", start_term, end_term FROM legislators ORDER BY id"#;

const UPSERT: &str = r#"
    INSERT INTO legislators (id, fullname, firstname, lastname, party, state, "position", start_term, end_term)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    ON CONFLICT (id) DO UPDATE SET
        fullname = EXCLUDED.fullname,
        firstname = EXCLUDED.firstname,
        lastname = EXCLUDED.lastname,
        party = EXCLUDED.party,
        state = EXCLUDED.state,
        "position" = EXCLUDED."position",
        start_term = EXCLUDED.start_term,
        end_term = EXCLUDED.end_term
"#;

#[derive(Clone, Debug)]
pub struct LegislatorStore {
    pool: PgPool,
}

impl LegislatorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Idempotent create-if-absent of the legislators table.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS legislators (
                id TEXT PRIMARY KEY,
                fullname TEXT NOT NULL,
                firstname TEXT NOT NULL,
                lastname TEXT NOT NULL,
                party TEXT,
                state TEXT,
                "position" TEXT,
                start_term TEXT,
                end_term TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Load the current table contents as a snapshot.
    pub async fn load_existing(&self) -> Result<Snapshot, StoreError> {
        let rows = sqlx::query_as::<_, LegislatorRecord>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(snapshot_from_rows(rows))
    }

    /// Apply all mutations inside one transaction. On any error the
    /// transaction is dropped and therefore rolled back in full.
    pub async fn apply_mutations(&self, mutations: &[Mutation]) -> Result<(), StoreError> {
        if mutations.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for mutation in mutations {
            match mutation {
                Mutation::DeleteAll => {
                    sqlx::query("DELETE FROM legislators")
                        .execute(&mut *tx)
                        .await?;
                }
                Mutation::InsertAll(recs) => {
                    for rec in recs {
                        upsert_row(&mut tx, rec).await?;
                    }
                }
                Mutation::Upsert(rec) => {
                    upsert_row(&mut tx, rec).await?;
                }
                Mutation::Delete(id) => {
                    sqlx::query("DELETE FROM legislators WHERE id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }
        tx.commit().await?;

        info!(mutations = mutations.len(), "applied legislator mutations");
        Ok(())
    }
}

async fn upsert_row(
    tx: &mut Transaction<'_, Postgres>,
    rec: &LegislatorRecord,
) -> Result<(), StoreError> {
    sqlx::query(UPSERT)
        .bind(&rec.id)
        .bind(&rec.fullname)
        .bind(&rec.firstname)
        .bind(&rec.lastname)
        .bind(&rec.party)
        .bind(&rec.state)
        .bind(&rec.position)
        .bind(&rec.start_term)
        .bind(&rec.end_term)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
