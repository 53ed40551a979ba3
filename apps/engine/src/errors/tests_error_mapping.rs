use crate::errors::domain::GameError;
use crate::errors::error_code::ErrorCode;

#[test]
fn every_variant_maps_to_its_code() {
    let cases = [
        (GameError::invalid_throw("x"), ErrorCode::InvalidThrow),
        (GameError::invalid_bonus("x"), ErrorCode::InvalidBonus),
        (GameError::frame_not_scored("x"), ErrorCode::FrameNotScored),
        (GameError::game_complete("x"), ErrorCode::GameComplete),
    ];
    for (err, code) in cases {
        assert_eq!(err.code(), code);
    }
}

#[test]
fn codes_render_as_screaming_snake_case() {
    assert_eq!(ErrorCode::InvalidThrow.as_str(), "INVALID_THROW");
    assert_eq!(ErrorCode::InvalidBonus.as_str(), "INVALID_BONUS");
    assert_eq!(ErrorCode::FrameNotScored.as_str(), "FRAME_NOT_SCORED");
    assert_eq!(ErrorCode::GameComplete.as_str(), "GAME_COMPLETE");
    assert_eq!(ErrorCode::GameComplete.to_string(), "GAME_COMPLETE");
}

#[test]
fn display_carries_the_violated_rule() {
    let err = GameError::invalid_throw("throw of 11 pins is outside 0..=10");
    assert_eq!(
        err.to_string(),
        "invalid throw: throw of 11 pins is outside 0..=10"
    );
}
