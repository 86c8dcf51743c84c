use broadside::Outcome;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn exactly_one_outcome_per_hit_points(player in 0usize..=17, opponent in 0usize..=17) {
        let outcome = Outcome::from_hit_points(player, opponent);
        prop_assert_eq!(outcome == Outcome::Draw, player == 0 && opponent == 0);
        prop_assert_eq!(outcome == Outcome::PlayerWins, player > 0 && opponent == 0);
        prop_assert_eq!(outcome == Outcome::OpponentWins, player == 0 && opponent > 0);
        prop_assert_eq!(outcome == Outcome::InProgress, player > 0 && opponent > 0);
        prop_assert_eq!(outcome.is_over(), player == 0 || opponent == 0);
    }

    #[test]
    fn outcome_mirrors_when_sides_swap(player in 0usize..=17, opponent in 0usize..=17) {
        let mirrored = match Outcome::from_hit_points(player, opponent) {
            Outcome::PlayerWins => Outcome::OpponentWins,
            Outcome::OpponentWins => Outcome::PlayerWins,
            other => other,
        };
        prop_assert_eq!(Outcome::from_hit_points(opponent, player), mirrored);
    }
}
