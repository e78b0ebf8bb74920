use pixel_invaders::animation::*;
use pixel_invaders::error::SetupError;
use pixel_invaders::sprite::{MaskedSprite, SpriteSheet};

#[test]
fn clock_loops_over_frames() {
    let mut clock = AnimationClock::new(2, 10).unwrap();
    for tick in 0..40 {
        let expected = (tick / 10) % 2;
        assert_eq!(clock.current_frame_index(), expected, "tick {tick}");
        clock.advance();
    }
}

#[test]
fn clock_wraps_time_to_zero() {
    let mut clock = AnimationClock::new(2, 10).unwrap();
    for _ in 0..19 {
        clock.advance();
    }
    assert_eq!(clock.time(), 19);
    assert_eq!(clock.current_frame_index(), 1);
    clock.advance();
    assert_eq!(clock.time(), 0);
    assert_eq!(clock.current_frame_index(), 0);
}

#[test]
fn single_frame_clock_stays_on_frame_zero() {
    let mut clock = AnimationClock::new(1, 3).unwrap();
    for _ in 0..10 {
        clock.advance();
        assert_eq!(clock.current_frame_index(), 0);
    }
}

#[test]
fn zero_frame_duration_is_rejected() {
    assert_eq!(AnimationClock::new(2, 0), Err(SetupError::ZeroFrameDuration));
    assert_eq!(SpriteAnimation::new(Vec::new(), 10), Err(SetupError::NoFrames));
}

#[test]
fn animation_selects_current_sprite() {
    let mut sheet = SpriteSheet::new();
    let f0 = sheet.insert(MaskedSprite::solid(1, 1));
    let f1 = sheet.insert(MaskedSprite::solid(2, 2));
    let mut anim = SpriteAnimation::new(vec![f0, f1], 2).unwrap();

    assert_eq!(anim.current(), f0);
    anim.advance();
    assert_eq!(anim.current(), f0);
    anim.advance();
    assert_eq!(anim.current(), f1);
    anim.advance();
    anim.advance();
    assert_eq!(anim.current(), f0);
    assert_eq!(anim.frames(), &[f0, f1]);
    assert_eq!(anim.clock().num_frames(), 2);
}
