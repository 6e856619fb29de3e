//! SQLite implementation of the tournament store

use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::collections::BTreeMap;
use std::str::FromStr;
use swiss_core::{MatchHistory, PlayerId, Standing, Standings};
use tracing::{debug, info};

use crate::error::{ConstraintViolation, StoreError};
use crate::store::{RoundSnapshot, TournamentStore};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connections kept open against a database file
const MAX_CONNECTIONS: u32 = 4;

/// Tournament store backed by a SQLite database.
///
/// Cloning shares the underlying pool. The pool closes when the last clone
/// is dropped or on [`SqliteStore::close`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct StandingRow {
    id: i64,
    name: String,
    wins: i64,
    matches: i64,
    byes: i64,
}

impl From<StandingRow> for Standing {
    fn from(row: StandingRow) -> Self {
        Standing::new(PlayerId::new(row.id), row.name)
            .with_record(count(row.wins), count(row.matches))
            .with_byes(count(row.byes))
    }
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and bring its schema
    /// up to date.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        info!(url, "opened tournament store");
        Self::from_pool(pool).await
    }

    /// A private in-memory database, mainly for tests.
    ///
    /// Every SQLite memory connection is its own database, so the pool is
    /// pinned to a single connection that never expires.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, running pending migrations first.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TournamentStore for SqliteStore {
    async fn register_player(&self, name: &str) -> Result<PlayerId, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConstraintViolation::BlankName.into());
        }

        let result = sqlx::query("INSERT INTO players (name, registered_at) VALUES (?, ?)")
            .bind(name)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        let id = PlayerId::new(result.last_insert_rowid());
        debug!(%id, name, "registered player");
        Ok(id)
    }

    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError> {
        if winner == loser {
            return Err(ConstraintViolation::SelfMatch(winner).into());
        }

        let mut tx = self.pool.begin().await?;
        ensure_registered(&mut tx, winner).await?;
        ensure_registered(&mut tx, loser).await?;

        // Rematches are rejected by the unordered-pair index.
        sqlx::query("INSERT INTO matches (winner, loser, reported_at) VALUES (?, ?, ?)")
            .bind(winner.get())
            .bind(loser.get())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    StoreError::from(ConstraintViolation::Rematch { winner, loser })
                }
                other => StoreError::from(other),
            })?;
        tx.commit().await?;

        info!(%winner, %loser, "reported match");
        Ok(())
    }

    async fn report_bye(&self, player: PlayerId) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        ensure_registered(&mut tx, player).await?;
        sqlx::query("INSERT INTO byes (player, awarded_at) VALUES (?, ?)")
            .bind(player.get())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(%player, "recorded bye");
        Ok(())
    }

    async fn delete_matches(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM byes").execute(&mut *tx).await?;
        let deleted = sqlx::query("DELETE FROM matches").execute(&mut *tx).await?;
        tx.commit().await?;

        info!(matches = deleted.rows_affected(), "deleted matches");
        Ok(())
    }

    async fn delete_players(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        delete_everything(&mut tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        delete_everything(&mut tx).await?;
        sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('players', 'matches', 'byes')")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("cleared tournament");
        Ok(())
    }

    async fn count_players(&self) -> Result<u64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn player_standings(&self) -> Result<Vec<Standing>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        fetch_standings(&mut conn).await
    }

    async fn match_counts(&self) -> Result<BTreeMap<PlayerId, u32>, StoreError> {
        let rows: Vec<(i64, i64)> = sqlx::query_as("SELECT id, matches FROM player_matches")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, matches)| (PlayerId::new(id), count(matches)))
            .collect())
    }

    async fn match_history(&self) -> Result<MatchHistory, StoreError> {
        let mut conn = self.pool.acquire().await?;
        fetch_history(&mut conn).await
    }

    async fn round_snapshot(&self) -> Result<RoundSnapshot, StoreError> {
        let mut tx = self.pool.begin().await?;
        let standings = fetch_standings(&mut tx).await?;
        let history = fetch_history(&mut tx).await?;
        tx.commit().await?;

        Ok(RoundSnapshot {
            standings: Standings::new(standings),
            history,
        })
    }
}

async fn ensure_registered(conn: &mut SqliteConnection, player: PlayerId) -> Result<(), StoreError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM players WHERE id = ?")
        .bind(player.get())
        .fetch_optional(&mut *conn)
        .await?;
    match found {
        Some(_) => Ok(()),
        None => Err(ConstraintViolation::UnknownPlayer(player).into()),
    }
}

async fn delete_everything(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM byes").execute(&mut *conn).await?;
    sqlx::query("DELETE FROM matches").execute(&mut *conn).await?;
    let deleted = sqlx::query("DELETE FROM players").execute(&mut *conn).await?;
    info!(players = deleted.rows_affected(), "deleted players");
    Ok(())
}

async fn fetch_standings(conn: &mut SqliteConnection) -> Result<Vec<Standing>, StoreError> {
    let rows: Vec<StandingRow> = sqlx::query_as(
        "SELECT w.id, w.name, w.wins, m.matches, b.byes
         FROM player_wins AS w
         JOIN player_matches AS m ON m.id = w.id
         JOIN player_byes AS b ON b.id = w.id
         ORDER BY w.wins DESC, w.id ASC",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows.into_iter().map(Standing::from).collect())
}

async fn fetch_history(conn: &mut SqliteConnection) -> Result<MatchHistory, StoreError> {
    let players: Vec<i64> = sqlx::query_scalar("SELECT id FROM players ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    let results: Vec<(i64, i64)> = sqlx::query_as("SELECT winner, loser FROM matches ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    let mut history = MatchHistory::new(players.into_iter().map(PlayerId::new));
    for (winner, loser) in results {
        history.record(PlayerId::new(winner), PlayerId::new(loser));
    }
    Ok(history)
}

/// SQLite counts come back as i64 and are never negative.
fn count(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
