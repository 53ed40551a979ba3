use crate::domain::frame::{Frame, FrameKind};
use crate::errors::domain::GameError;
use crate::errors::error_code::ErrorCode;

#[test]
fn open_frame_accepts_partial_racks() {
    let frame = Frame::open(3, 4).unwrap();
    assert_eq!(frame.kind(), FrameKind::Open);
    assert_eq!(frame.base_throws(), vec![3, 4]);
    assert_eq!(frame.bonus_required(), 0);
    assert!(frame.is_scorable());
}

#[test]
fn open_frame_rejects_a_full_rack() {
    // a sum of ten or more must be bowled as a spare or strike
    for (first, second) in [(5, 5), (0, 10), (10, 0), (9, 1), (6, 9)] {
        let err = Frame::open(first, second).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidThrow);
    }
    assert!(Frame::open(9, 0).is_ok());
    assert!(Frame::open(0, 9).is_ok());
}

#[test]
fn open_frame_rejects_out_of_range_throws() {
    assert!(matches!(
        Frame::open(11, 0),
        Err(GameError::InvalidThrow(_))
    ));
    assert!(matches!(
        Frame::open(0, 42),
        Err(GameError::InvalidThrow(_))
    ));
}

#[test]
fn spare_frame_needs_standing_pins_after_the_first_throw() {
    let frame = Frame::spare(6).unwrap();
    assert_eq!(frame.kind(), FrameKind::Spare);
    assert_eq!(frame.base_throws(), vec![6, 4]);
    assert_eq!(frame.bonus_required(), 1);
    assert!(!frame.is_scorable());

    assert!(Frame::spare(0).is_ok());
    assert!(Frame::spare(9).is_ok());
    assert_eq!(
        Frame::spare(10).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
    assert_eq!(
        Frame::spare(11).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
}

#[test]
fn strike_frame_is_a_single_implied_throw() {
    let frame = Frame::strike();
    assert_eq!(frame.kind(), FrameKind::Strike);
    assert_eq!(frame.base_throws(), vec![10]);
    assert_eq!(frame.bonus_required(), 2);
    assert!(!frame.is_scorable());
}

#[test]
fn tenth_frame_third_throw_is_earned_by_a_mark() {
    // no mark: two throws only
    assert!(Frame::tenth(3, 4, None).is_ok());
    assert_eq!(
        Frame::tenth(3, 4, Some(1)).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
    // spare: third required
    assert!(Frame::tenth(3, 7, Some(5)).is_ok());
    assert_eq!(
        Frame::tenth(3, 7, None).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
    // strike: third required
    assert!(Frame::tenth(10, 3, Some(5)).is_ok());
    assert_eq!(
        Frame::tenth(10, 3, None).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
}

#[test]
fn tenth_frame_enforces_per_rack_ceilings() {
    // first two throws share a rack unless the first was a strike
    assert_eq!(
        Frame::tenth(5, 6, None).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
    // after a first-throw strike, the last two throws share a rack
    assert_eq!(
        Frame::tenth(10, 4, Some(7)).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
    // consecutive strikes reset the rack each time
    assert!(Frame::tenth(10, 10, Some(10)).is_ok());
    assert!(Frame::tenth(10, 10, Some(4)).is_ok());
    assert_eq!(
        Frame::tenth(11, 0, None).unwrap_err().code(),
        ErrorCode::InvalidThrow
    );
}

#[test]
fn tenth_frame_is_self_contained() {
    let mut frame = Frame::tenth(10, 10, Some(10)).unwrap();
    assert_eq!(frame.bonus_required(), 0);
    assert!(frame.is_scorable());
    assert_eq!(frame.score().unwrap(), 30);

    let mut no_mark = Frame::tenth(3, 4, None).unwrap();
    assert_eq!(no_mark.score().unwrap(), 7);
}

#[test]
fn bonus_throws_are_validated() {
    let mut frame = Frame::spare(7).unwrap();
    let err = frame.assign_bonus(&[11]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidBonus);
    // the failed assignment left nothing behind
    assert!(frame.bonus().is_empty());
    assert!(!frame.is_scorable());
}

#[test]
fn bonus_is_truncated_to_the_variant_requirement() {
    let mut strike = Frame::strike();
    strike.assign_bonus(&[1, 2, 3]).unwrap();
    assert_eq!(strike.bonus(), &[1, 2]);
    assert_eq!(strike.score().unwrap(), 13);

    let mut spare = Frame::spare(5).unwrap();
    spare.assign_bonus(&[4, 9]).unwrap();
    assert_eq!(spare.bonus(), &[4]);
    assert_eq!(spare.score().unwrap(), 14);
}

#[test]
fn incomplete_bonus_keeps_the_frame_unscorable() {
    let mut strike = Frame::strike();
    strike.assign_bonus(&[4]).unwrap();
    assert!(!strike.is_scorable());
    let err = strike.score().unwrap_err();
    assert_eq!(err.code(), ErrorCode::FrameNotScored);
    // a later, fuller assignment replaces the partial one
    strike.assign_bonus(&[4, 5]).unwrap();
    assert_eq!(strike.score().unwrap(), 19);
}

#[test]
fn scored_frames_ignore_later_bonus_assignments() {
    let mut spare = Frame::spare(8).unwrap();
    spare.assign_bonus(&[3]).unwrap();
    assert_eq!(spare.score().unwrap(), 13);

    spare.assign_bonus(&[9]).unwrap();
    assert_eq!(spare.score().unwrap(), 13);
    assert_eq!(spare.cached_score(), Some(13));
}

#[test]
fn score_is_cached_on_first_computation() {
    let mut open = Frame::open(1, 2).unwrap();
    assert_eq!(open.cached_score(), None);
    assert_eq!(open.score().unwrap(), 3);
    assert_eq!(open.cached_score(), Some(3));
    assert_eq!(open.score().unwrap(), 3);
}
