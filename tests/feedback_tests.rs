//! Feedback scoring properties.

use mastermind_engine::{Code, Feedback, HintPeg, CODE_LENGTH, PALETTE_SIZE};
use proptest::prelude::*;

fn any_code() -> impl Strategy<Value = Code> {
    prop::array::uniform4(1u8..=PALETTE_SIZE).prop_map(|values| Code::new(values).unwrap())
}

fn score(guess: &str, secret: &str) -> Feedback {
    Feedback::compute(&guess.parse().unwrap(), &secret.parse().unwrap())
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_duplicate_guess_against_pair() {
    // Positions 0 and 2 are black. The spare 2s in the guess find no
    // unmatched 2 in the secret.
    assert_eq!(score("1222", "1123"), Feedback { black: 2, white: 0 });
}

#[test]
fn test_white_capped_by_secret_count() {
    assert_eq!(score("4455", "5566"), Feedback { black: 0, white: 2 });
    assert_eq!(score("5556", "6655"), Feedback { black: 1, white: 2 });
}

#[test]
fn test_pegs_follow_counts() {
    let pegs = score("2143", "1234").pegs();
    assert!(pegs.iter().all(|&p| p == HintPeg::Partial));

    let pegs = score("1256", "1234").pegs();
    assert_eq!(
        pegs,
        [HintPeg::Exact, HintPeg::Exact, HintPeg::Blank, HintPeg::Blank]
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_total_bounded(guess in any_code(), secret in any_code()) {
        let fb = Feedback::compute(&guess, &secret);
        prop_assert!(fb.black as usize + fb.white as usize <= CODE_LENGTH);
    }

    #[test]
    fn prop_all_black_iff_equal(guess in any_code(), secret in any_code()) {
        let fb = Feedback::compute(&guess, &secret);
        prop_assert_eq!(fb.is_win(), guess == secret);
    }

    #[test]
    fn prop_self_is_all_black(code in any_code()) {
        let fb = Feedback::compute(&code, &code);
        prop_assert_eq!(fb, Feedback { black: CODE_LENGTH as u8, white: 0 });
    }

    #[test]
    fn prop_symmetric(guess in any_code(), secret in any_code()) {
        prop_assert_eq!(
            Feedback::compute(&guess, &secret),
            Feedback::compute(&secret, &guess)
        );
    }

    #[test]
    fn prop_black_matches_positions(guess in any_code(), secret in any_code()) {
        let fb = Feedback::compute(&guess, &secret);
        let black = guess.iter().zip(secret.iter()).filter(|(g, s)| g == s).count();
        prop_assert_eq!(fb.black as usize, black);
    }

    #[test]
    fn prop_total_is_multiset_intersection(guess in any_code(), secret in any_code()) {
        let fb = Feedback::compute(&guess, &secret);
        let shared: usize = (1..=PALETTE_SIZE)
            .map(|v| {
                let in_guess = guess.iter().filter(|s| s.raw() == v).count();
                let in_secret = secret.iter().filter(|s| s.raw() == v).count();
                in_guess.min(in_secret)
            })
            .sum();
        prop_assert_eq!(fb.black as usize + fb.white as usize, shared);
    }

    #[test]
    fn prop_pegs_count(guess in any_code(), secret in any_code()) {
        let fb = Feedback::compute(&guess, &secret);
        let pegs = fb.pegs();
        let exact = pegs.iter().filter(|&&p| p == HintPeg::Exact).count();
        let partial = pegs.iter().filter(|&&p| p == HintPeg::Partial).count();
        prop_assert_eq!(exact, fb.black as usize);
        prop_assert_eq!(partial, fb.white as usize);
    }
}
