use std::collections::HashSet;

use swiss_core::{
    MatchHistory, PairingConfig, PairingError, PlayerId, RematchLedger, RoundPairing, Standing,
    Standings, SwissPairer,
};

struct Field {
    standings: Vec<Standing>,
    history: MatchHistory,
}

impl Field {
    fn new(size: usize) -> Self {
        let standings: Vec<Standing> = (1..=size as i64)
            .map(|raw| Standing::new(PlayerId::new(raw), format!("Player {raw}")))
            .collect();
        let history = MatchHistory::new(standings.iter().map(|s| s.id));
        Self { standings, history }
    }

    fn pair(&self) -> Result<RoundPairing, PairingError> {
        SwissPairer::new(PairingConfig::default())
            .pair_round(&Standings::new(self.standings.clone()), &self.history)
    }

    /// Record a round in which the seat picked by `first_wins` wins each pair.
    fn apply(&mut self, round: &RoundPairing, first_wins: impl Fn(usize) -> bool) {
        for (index, pair) in round.pairs.iter().enumerate() {
            let (winner, loser) = if first_wins(index) {
                (pair.first.id, pair.second.id)
            } else {
                (pair.second.id, pair.first.id)
            };
            self.history.record(winner, loser);
            for s in &mut self.standings {
                if s.id == winner {
                    s.wins += 1;
                    s.matches += 1;
                } else if s.id == loser {
                    s.matches += 1;
                }
            }
        }
        if let Some(bye) = &round.bye {
            for s in &mut self.standings {
                if s.id == bye.id {
                    s.byes += 1;
                }
            }
        }
    }
}

fn rounds_for(size: usize) -> usize {
    (size as f64).log2().ceil() as usize
}

fn assert_covers_once(round: &RoundPairing, size: usize) {
    let seated: Vec<PlayerId> = round.players().collect();
    let unique: HashSet<PlayerId> = seated.iter().copied().collect();
    assert_eq!(seated.len(), size, "someone was seated twice");
    assert_eq!(unique.len(), size, "someone was left out");
    assert_eq!(round.pairs.len(), size / 2);
    assert_eq!(round.bye.is_some(), size % 2 == 1);
}

#[test]
fn fresh_even_fields_pair_everyone() {
    for size in (2..=20).step_by(2) {
        let field = Field::new(size);
        let round = field.pair().unwrap();
        assert_covers_once(&round, size);

        // All on zero wins: adjacent registration order.
        for (index, pair) in round.pairs.iter().enumerate() {
            assert_eq!(pair.first.id.get(), 2 * index as i64 + 1);
            assert_eq!(pair.second.id.get(), 2 * index as i64 + 2);
        }
    }
}

#[test]
fn full_tournaments_never_repeat_a_matchup() {
    for size in 6..=16 {
        let mut field = Field::new(size);
        let mut seen: HashSet<(PlayerId, PlayerId)> = HashSet::new();

        for round_number in 0..rounds_for(size) {
            let round = field
                .pair()
                .unwrap_or_else(|e| panic!("{size} players, round {round_number}: {e}"));
            assert_covers_once(&round, size);

            for pair in &round.pairs {
                assert!(!field.history.has_played(pair.first.id, pair.second.id));
                let key = if pair.first.id < pair.second.id {
                    (pair.first.id, pair.second.id)
                } else {
                    (pair.second.id, pair.first.id)
                };
                assert!(seen.insert(key), "rematch {key:?}");
            }

            field.apply(&round, |index| (index + round_number) % 3 != 0);
        }
    }
}

#[test]
fn byes_are_not_repeated_while_others_remain() {
    let size = 7;
    let mut field = Field::new(size);
    let mut benched = HashSet::new();

    for _ in 0..rounds_for(size) {
        let round = field.pair().unwrap();
        let bye = round.bye.clone().unwrap();
        assert!(benched.insert(bye.id), "{} sat out twice", bye.id);
        field.apply(&round, |_| true);
    }
}

#[test]
fn pairs_prefer_equal_records() {
    let mut field = Field::new(8);
    let first = field.pair().unwrap();
    field.apply(&first, |_| true);

    let second = field.pair().unwrap();
    let wins = |id: PlayerId| {
        field
            .standings
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.wins)
            .unwrap()
    };
    for pair in &second.pairs {
        assert_eq!(wins(pair.first.id), wins(pair.second.id));
    }
}
