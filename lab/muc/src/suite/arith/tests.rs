use super::*;

#[test]
fn test_brute_force_gcd() {
    assert_eq!(brute_force_gcd(0, 0), 0);
    assert_eq!(brute_force_gcd(9, 0), 9);
    assert_eq!(brute_force_gcd(0, 4), 4);
    assert_eq!(brute_force_gcd(48, 18), 6);
    assert_eq!(brute_force_gcd(13, 7), 1);
}

#[test]
fn test_brute_force_gcd_agrees_with_euclid() {
    for x in 0..=30 {
        for y in 0..=30 {
            assert_eq!(brute_force_gcd(x, y), iterative::gcd(x, y), "gcd({x}, {y})");
        }
    }
}

#[test]
fn test_arith_units_pass() {
    assert_eq!(test_add(), Ok(()));
    assert_eq!(test_factorial(), Ok(()));
    assert_eq!(test_exponential(), Ok(()));
    assert_eq!(test_gcd(), Ok(()));
    assert_eq!(test_odds(), Ok(()));
    assert_eq!(test_sum(), Ok(()));
}
