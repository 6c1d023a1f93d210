use twentyone_engine::errors::GameError;
use twentyone_engine::rules::validate_bet;

#[test]
fn bet_zero_is_invalid() {
    let err = validate_bet(1000, 0, 0).unwrap_err();
    match err {
        GameError::InvalidBetAmount { amount } => assert_eq!(amount, 0),
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn bet_over_balance_is_rejected() {
    let err = validate_bet(100, 0, 150).unwrap_err();
    match err {
        GameError::InsufficientFunds { amount, balance } => {
            assert_eq!(amount, 150);
            assert_eq!(balance, 100);
        }
        _ => panic!("expected InsufficientFunds"),
    }
}

#[test]
fn bets_accumulate() {
    assert_eq!(validate_bet(1000, 50, 25), Ok(75));
}

#[test]
fn accumulated_bet_cannot_pass_balance() {
    // 80 already staked, 30 more would need 110 against a balance of 100
    assert!(matches!(
        validate_bet(100, 80, 30),
        Err(GameError::InsufficientFunds { .. })
    ));
}

#[test]
fn bet_equal_to_balance_is_allowed() {
    assert_eq!(validate_bet(100, 0, 100), Ok(100));
}

#[test]
fn overflowing_increment_is_invalid() {
    assert!(matches!(
        validate_bet(u32::MAX, u32::MAX - 1, 10),
        Err(GameError::InvalidBetAmount { .. })
    ));
}
