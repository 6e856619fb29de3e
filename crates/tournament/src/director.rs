//! Runs a tournament round by round on top of a store

use swiss_core::{Pair, PairingConfig, PlayerId, RoundPairing, Standing, SwissPairer};
use tournament_store::TournamentStore;
use tracing::info;

use crate::error::TournamentError;

/// Which seat of a pair won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

/// Drives a tournament: records results and pairs the next round.
///
/// The director owns no state of its own; everything is read from and
/// written to the store it was given. Pairing calls for one tournament
/// must not run concurrently with result reporting.
pub struct TournamentDirector<S> {
    store: S,
    pairer: SwissPairer,
}

impl<S: TournamentStore> TournamentDirector<S> {
    pub fn new(store: S, config: PairingConfig) -> Self {
        Self {
            store,
            pairer: SwissPairer::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub async fn register_player(&self, name: &str) -> Result<PlayerId, TournamentError> {
        Ok(self.store.register_player(name).await?)
    }

    pub async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        Ok(self.store.report_match(winner, loser).await?)
    }

    pub async fn report_bye(&self, player: PlayerId) -> Result<(), TournamentError> {
        Ok(self.store.report_bye(player).await?)
    }

    pub async fn delete_matches(&self) -> Result<(), TournamentError> {
        Ok(self.store.delete_matches().await?)
    }

    pub async fn delete_players(&self) -> Result<(), TournamentError> {
        Ok(self.store.delete_players().await?)
    }

    pub async fn clear(&self) -> Result<(), TournamentError> {
        Ok(self.store.clear().await?)
    }

    pub async fn count_players(&self) -> Result<u64, TournamentError> {
        Ok(self.store.count_players().await?)
    }

    pub async fn player_standings(&self) -> Result<Vec<Standing>, TournamentError> {
        Ok(self.store.player_standings().await?)
    }

    /// Pair the next round from the store's current standings and history.
    pub async fn next_round_pairs(&self) -> Result<RoundPairing, TournamentError> {
        let snapshot = self.store.round_snapshot().await?;
        Ok(self
            .pairer
            .pair_round(&snapshot.standings, &snapshot.history)?)
    }

    /// Pair the next round and record its results.
    ///
    /// `decide` picks the winner of each pair; the bye, if any, is recorded
    /// as well. Returns the round that was played.
    pub async fn play_round<F>(&self, mut decide: F) -> Result<RoundPairing, TournamentError>
    where
        F: FnMut(&Pair) -> Winner,
    {
        let round = self.next_round_pairs().await?;
        for pair in &round.pairs {
            let (winner, loser) = match decide(pair) {
                Winner::First => (pair.first.id, pair.second.id),
                Winner::Second => (pair.second.id, pair.first.id),
            };
            self.store.report_match(winner, loser).await?;
        }
        if let Some(bye) = &round.bye {
            self.store.report_bye(bye.id).await?;
        }

        info!(
            pairs = round.pairs.len(),
            bye = ?round.bye.as_ref().map(|seat| seat.id),
            "played round"
        );
        Ok(round)
    }
}
