use super::*;
use std::collections::HashSet;

fn roster(count: u32) -> Vec<Entrant> {
    (1..=count)
        .map(|rank| Entrant::new(rank, &format!("Archer {}", rank)))
        .collect()
}

#[test]
fn test_eight_entrant_pairings() {
    let bracket = generate(&roster(8)).unwrap();

    assert_eq!(bracket.size, 8);
    assert!(bracket.adjustment.is_none());
    assert_eq!(bracket.matches.len(), 4);

    // 1v8, 2v7, 3v6, 4v5 on lanes 1..4
    let pairs: Vec<(u32, u32)> = bracket
        .matches
        .iter()
        .map(|m| (m.left.rank, m.right.rank))
        .collect();
    assert_eq!(pairs, vec![(1, 8), (2, 7), (3, 6), (4, 5)]);

    for (i, m) in bracket.matches.iter().enumerate() {
        assert_eq!(m.number, (i + 1) as u32);
        assert_eq!(m.lane, (i + 1) as u32);
        assert_eq!(m.round, "1/4 finals");
    }
}

#[test]
fn test_rank_sum_invariant() {
    let bracket = generate(&roster(16)).unwrap();

    assert_eq!(bracket.matches.len(), 8);
    for m in &bracket.matches {
        assert_eq!(m.left.rank + m.right.rank, 17);
        assert!(m.left.rank < m.right.rank);
    }
}

#[test]
fn test_match_numbers_cover_the_round() {
    let bracket = generate(&roster(16)).unwrap();

    let numbers: HashSet<u32> = bracket.matches.iter().map(|m| m.number).collect();
    assert_eq!(numbers, (1..=8).collect());
}

#[test]
fn test_colors_are_fixed() {
    let bracket = generate(&roster(8)).unwrap();

    for m in &bracket.matches {
        assert_eq!(m.left_color, LaneColor::Green);
        assert_eq!(m.right_color, LaneColor::Red);
    }
}

#[test]
fn test_ten_entrants_round_down_to_eight() {
    let bracket = generate(&roster(10)).unwrap();

    assert_eq!(bracket.size, 8);
    assert_eq!(
        bracket.adjustment,
        Some(SizeAdjustment {
            supplied: 10,
            size: 8,
            dropped: 2,
        })
    );

    // Seeds 9 and 10 are cut, the remaining eight pair as usual
    assert_eq!(bracket.matches.len(), 4);
    for m in &bracket.matches {
        assert!(m.right.rank <= 8);
        assert_eq!(m.left.rank + m.right.rank, 9);
    }
}

#[test]
fn test_small_power_of_two_is_exact() {
    let bracket = generate(&roster(4)).unwrap();

    assert_eq!(bracket.size, 4);
    assert!(bracket.adjustment.is_none());
    let pairs: Vec<(u32, u32)> = bracket
        .matches
        .iter()
        .map(|m| (m.left.rank, m.right.rank))
        .collect();
    assert_eq!(pairs, vec![(1, 4), (2, 3)]);
}

#[test]
fn test_oversized_roster_clamps_to_max() {
    let bracket = generate(&roster(200)).unwrap();

    assert_eq!(bracket.size, MAX_SIZE);
    assert_eq!(
        bracket.adjustment,
        Some(SizeAdjustment {
            supplied: 200,
            size: 128,
            dropped: 72,
        })
    );
    assert_eq!(bracket.matches.len(), 64);
}

#[test]
fn test_normalized_size_rounds_down() {
    assert_eq!(normalized_size(8).unwrap(), 8);
    assert_eq!(normalized_size(10).unwrap(), 8);
    assert_eq!(normalized_size(17).unwrap(), 16);
    assert_eq!(normalized_size(127).unwrap(), 64);
    assert_eq!(normalized_size(3).unwrap(), 2);
    assert_eq!(normalized_size(500).unwrap(), 128);
}

#[test]
fn test_too_few_entrants() {
    assert_eq!(
        generate(&[]),
        Err(BracketError::TooFewEntrants { count: 0 })
    );
    assert_eq!(
        generate(&roster(1)),
        Err(BracketError::TooFewEntrants { count: 1 })
    );
}

#[test]
fn test_duplicate_rank_rejected() {
    let mut entrants = roster(8);
    entrants[3].rank = 3; // two entrants claim rank 3

    assert_eq!(generate(&entrants), Err(BracketError::DuplicateRank { rank: 3 }));
}

#[test]
fn test_missing_rank_rejected() {
    let mut entrants = roster(8);
    entrants[4].rank = 42; // rank 5 left unclaimed

    assert_eq!(generate(&entrants), Err(BracketError::MissingRank { rank: 5 }));
}
