use backend::domain::leaderboard::{LeaderboardStore, LEADERBOARD_CAP};
use proptest::prelude::*;

proptest! {
    /// For any sequence of valid submissions the board never exceeds the
    /// cap and is always sorted ascending by score.
    #[test]
    fn board_stays_capped_and_sorted(
        scores in proptest::collection::vec(0i64..60_000, 0..40)
    ) {
        let mut store = LeaderboardStore::new();
        for (i, score) in scores.iter().enumerate() {
            let board = store.submit("player", *score, i as i64).expect("valid submit");
            prop_assert!(board.len() <= LEADERBOARD_CAP);
            prop_assert!(board.windows(2).all(|w| w[0].score <= w[1].score));
        }
    }

    /// The retained entries are exactly the smallest scores ever
    /// submitted; discarding never drops a best score.
    #[test]
    fn best_scores_are_never_discarded(
        scores in proptest::collection::vec(0i64..60_000, 1..40)
    ) {
        let mut store = LeaderboardStore::new();
        for (i, score) in scores.iter().enumerate() {
            store.submit("player", *score, i as i64).expect("valid submit");
        }

        let mut expected = scores.clone();
        expected.sort_unstable();
        expected.truncate(LEADERBOARD_CAP);

        let retained: Vec<i64> = store.snapshot().iter().map(|e| e.score).collect();
        prop_assert_eq!(retained, expected);
    }
}
