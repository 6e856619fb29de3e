use super::*;
use serde_json::json;

fn seat(raw: i64, name: &str) -> Seat {
    Seat {
        id: PlayerId::new(raw),
        name: name.to_string(),
    }
}

#[test]
fn test_player_id_serializes_as_bare_number() {
    assert_eq!(serde_json::to_value(PlayerId::new(7)).unwrap(), json!(7));
    assert_eq!(format!("{:>3}", PlayerId::new(7)), "  7");
}

#[test]
fn test_standing_without_byes_field_defaults_to_zero() {
    let standing: Standing =
        serde_json::from_value(json!({ "id": 4, "name": "Rarity", "wins": 2, "matches": 3 }))
            .unwrap();

    assert_eq!(standing, Standing::new(PlayerId::new(4), "Rarity").with_record(2, 3));
    assert_eq!(standing.losses(), 1);
}

#[test]
fn test_round_pairing_json_shape() {
    let round = RoundPairing {
        pairs: vec![Pair {
            first: seat(1, "Applejack"),
            second: seat(3, "Fluttershy"),
        }],
        bye: Some(seat(2, "Rarity")),
    };

    assert_eq!(
        serde_json::to_value(&round).unwrap(),
        json!({
            "pairs": [{
                "first": { "id": 1, "name": "Applejack" },
                "second": { "id": 3, "name": "Fluttershy" }
            }],
            "bye": { "id": 2, "name": "Rarity" }
        })
    );
    assert_eq!(round.players().map(PlayerId::get).collect::<Vec<_>>(), vec![1, 3, 2]);
    assert_eq!(
        round.tuples(),
        vec![(PlayerId::new(1), "Applejack", PlayerId::new(3), "Fluttershy")]
    );
    assert!(round.pairs[0].involves(PlayerId::new(3)));
    assert!(!round.is_empty());
    assert!(RoundPairing::default().is_empty());
}
