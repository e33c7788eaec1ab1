use super::*;
use crate::assert::ensure;
use crate::outcome::Failure;
use pretty_assertions::assert_eq;

#[test]
fn test_for_all_passes_when_every_input_holds() {
    assert_eq!(for_all(0..100_u64, |x| ensure("x < 100", x < 100)), Ok(()));
}

#[test]
fn test_for_all_on_empty_domain_passes() {
    assert_eq!(for_all(std::iter::empty::<u64>(), |_| ensure("unreachable", false)), Ok(()));
}

#[test]
fn test_for_all_stops_at_first_failing_input() {
    let mut visited = Vec::new();
    let result = for_all(0..10_u64, |x| {
        visited.push(x);
        ensure_with(x < 3, || format!("{x} too large"))
    });

    assert_eq!(result, Err(Failure::new("3 too large")));
    assert_eq!(visited, vec![0, 1, 2, 3]);
}

#[test]
fn test_pairs_is_row_major() {
    let grid: Vec<(u64, char)> = pairs(0..2_u64, ['a', 'b', 'c']).collect();
    assert_eq!(
        grid,
        vec![(0, 'a'), (0, 'b'), (0, 'c'), (1, 'a'), (1, 'b'), (1, 'c')]
    );
}

#[test]
fn test_for_all_pairs_commutativity() {
    let result = for_all_pairs(0..=20_u64, 0..=20_u64, |x, y| {
        ensure_with(x + y == y + x, || format!("{x} + {y} != {y} + {x}"))
    });
    assert_eq!(result, Ok(()));
}

#[test]
fn test_for_all_pairs_reports_first_pair() {
    let result = for_all_pairs(0..=5_u64, 0..=5_u64, |x, y| {
        ensure_with(x * y < 6, || format!("({x}, {y}) product too large"))
    });
    assert_eq!(result, Err(Failure::new("(2, 3) product too large")));
}

#[test]
fn test_agree_on_equal_implementations() {
    fn rec_double(x: u64) -> u64 {
        if x == 0 {
            0
        } else {
            rec_double(x - 1) + 2
        }
    }

    let result = agree("double", 0..=50_u64, |&x| rec_double(x), |&x| x * 2);
    assert_eq!(result, Ok(()));
}

#[test]
fn test_agree_reports_first_disagreement() {
    let result = agree(
        "add",
        pairs(0..=3_u64, 0..=3_u64),
        |&(x, y)| x + y,
        |&(x, y)| if x == 2 && y == 1 { 4 } else { x + y },
    );
    assert_eq!(
        result,
        Err(Failure::new(
            "recursive and iterative add disagree on (2, 1): 3 vs 4"
        ))
    );
}

#[test]
fn test_agree_treats_error_against_value_as_disagreement() {
    let result = agree(
        "factorial",
        [20_u64, 21],
        |&x| if x > 20 { Err("overflow") } else { Ok(x) },
        |&x| Ok::<u64, &str>(x),
    );
    assert_eq!(
        result,
        Err(Failure::new(
            "recursive and iterative factorial disagree on 21: Err(\"overflow\") vs Ok(21)"
        ))
    );
}

#[test]
fn test_matches_reference() {
    let count_odds = |&n: &usize| (0..=n).filter(|k| k % 2 == 1).count();
    assert_eq!(
        matches_reference("count_odds", 0..=30_usize, |&n| n.div_ceil(2), count_odds),
        Ok(())
    );

    let result = matches_reference("count_odds", 0..=30_usize, |&n| n / 2, count_odds);
    assert_eq!(
        result,
        Err(Failure::new("count_odds on 1: got 0, reference gives 1"))
    );
}
