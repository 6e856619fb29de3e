//! Next-round pairing for a Swiss-system tournament

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};

use crate::error::{Inconsistency, PairingError};
use crate::ledger::RematchLedger;
use crate::matching::perfect_matching;
use crate::standings::{rank, StandingsProvider, TieBreak};
use crate::types::{Pair, RoundPairing, Standing};

/// Pairing configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Ordering among players with equal wins
    pub tie_break: TieBreak,
}

/// Pairs players with the closest records who have not met yet.
///
/// Players are ranked by wins. The highest-ranked unpaired player takes the
/// nearest-ranked opponent it has not played, provided everyone below can
/// still be paired without a rematch. A blossom matching answers that
/// question exactly, so the pass never dead-ends when a valid round exists.
#[derive(Debug, Clone, Default)]
pub struct SwissPairer {
    config: PairingConfig,
}

impl SwissPairer {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Compute the pairing for the next round.
    ///
    /// With an odd number of players exactly one receives a bye: the player
    /// with the fewest previous byes, lowest ranked first, whose absence
    /// still leaves a rematch-free pairing for everyone else.
    pub fn pair_round<P, L>(&self, provider: &P, ledger: &L) -> Result<RoundPairing, PairingError>
    where
        P: StandingsProvider + ?Sized,
        L: RematchLedger + ?Sized,
    {
        let ranked = rank(provider, self.config.tie_break);
        check_consistency(&ranked, ledger)?;

        let n = ranked.len();
        let open: Vec<Vec<bool>> = (0..n)
            .map(|a| {
                (0..n)
                    .map(|b| a != b && !ledger.has_played(ranked[a].id, ranked[b].id))
                    .collect()
            })
            .collect();

        let mut field: Vec<usize> = (0..n).collect();
        let bye = if n % 2 == 1 {
            let sitting_out = choose_bye(&ranked, &open)?;
            field.retain(|&i| i != sitting_out);
            Some(ranked[sitting_out].seat())
        } else {
            None
        };

        let pairs = pair_field(&ranked, &open, field)?;

        info!(
            players = n,
            pairs = pairs.len(),
            bye = ?bye.as_ref().map(|seat| seat.id),
            "paired round"
        );
        Ok(RoundPairing { pairs, bye })
    }
}

/// Standings and ledger must describe the same, duplicate-free population.
fn check_consistency<L>(ranked: &[Standing], ledger: &L) -> Result<(), Inconsistency>
where
    L: RematchLedger + ?Sized,
{
    let mut seen = HashSet::with_capacity(ranked.len());
    for standing in ranked {
        if !seen.insert(standing.id) {
            return Err(Inconsistency::DuplicateStanding(standing.id));
        }
    }

    let known: BTreeSet<_> = ledger.participants().into_iter().collect();
    if let Some(missing) = ranked.iter().find(|s| !known.contains(&s.id)) {
        return Err(Inconsistency::MissingFromLedger(missing.id));
    }
    if let Some(&extra) = known.iter().find(|id| !seen.contains(*id)) {
        return Err(Inconsistency::MissingFromStandings(extra));
    }
    Ok(())
}

fn choose_bye(ranked: &[Standing], open: &[Vec<bool>]) -> Result<usize, PairingError> {
    let mut candidates: Vec<usize> = (0..ranked.len()).collect();
    // Fewest byes first; lowest rank first within equal bye counts.
    candidates.sort_by(|&a, &b| ranked[a].byes.cmp(&ranked[b].byes).then(b.cmp(&a)));

    for candidate in candidates {
        let rest: Vec<usize> = (0..ranked.len()).filter(|&i| i != candidate).collect();
        if perfect_matching(open, &rest).is_some() {
            debug!(player = %ranked[candidate].id, byes = ranked[candidate].byes, "assigned bye");
            return Ok(candidate);
        }
    }

    warn!(players = ranked.len(), "no bye leaves a rematch-free pairing");
    Err(PairingError::Impossible {
        players: ranked.len(),
    })
}

/// Pair an even field in rank order, keeping a perfect matching of the
/// unpaired remainder as a witness that the next anchor can be served.
fn pair_field(
    ranked: &[Standing],
    open: &[Vec<bool>],
    mut remaining: Vec<usize>,
) -> Result<Vec<Pair>, PairingError> {
    let impossible = |players: usize| {
        warn!(players, "every remaining pairing repeats a match");
        PairingError::Impossible { players }
    };

    let mut mate = vec![None; ranked.len()];
    let witness = perfect_matching(open, &remaining).ok_or_else(|| impossible(remaining.len()))?;
    record_mates(&mut mate, &witness);

    let mut pairs = Vec::with_capacity(remaining.len() / 2);
    while let Some(&anchor) = remaining.first() {
        let mut chosen = None;
        for (position, &candidate) in remaining.iter().enumerate().skip(1) {
            if !open[anchor][candidate] {
                continue;
            }
            if mate[anchor] == Some(candidate) {
                chosen = Some(position);
                break;
            }
            let rest: Vec<usize> = remaining[1..]
                .iter()
                .copied()
                .filter(|&v| v != candidate)
                .collect();
            if let Some(witness) = perfect_matching(open, &rest) {
                record_mates(&mut mate, &witness);
                chosen = Some(position);
                break;
            }
        }

        let position = chosen.ok_or_else(|| impossible(remaining.len()))?;
        let partner = remaining.remove(position);
        remaining.remove(0);

        if position > 1 {
            debug!(
                anchor = %ranked[anchor].id,
                partner = %ranked[partner].id,
                skipped = position - 1,
                "floated past closer-ranked opponents"
            );
        }

        pairs.push(Pair {
            first: ranked[anchor].seat(),
            second: ranked[partner].seat(),
        });
    }

    Ok(pairs)
}

fn record_mates(mate: &mut [Option<usize>], pairs: &[(usize, usize)]) {
    for &(a, b) in pairs {
        mate[a] = Some(b);
        mate[b] = Some(a);
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
