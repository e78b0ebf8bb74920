use pixel_invaders::input::*;

#[test]
fn take_consumes_fire_latch() {
    let mut mailbox = InputMailbox::new();
    mailbox.latch_fire();
    assert!(mailbox.fire_pending());
    assert!(mailbox.take().fire);
    assert!(!mailbox.fire_pending());
    assert!(!mailbox.take().fire);
}

#[test]
fn double_latch_before_take_fires_once() {
    let mut mailbox = InputMailbox::new();
    mailbox.latch_fire();
    mailbox.latch_fire();
    let fired = (0..3).filter(|_| mailbox.take().fire).count();
    assert_eq!(fired, 1);
}

#[test]
fn movement_is_a_sticky_level() {
    let mut mailbox = InputMailbox::new();
    mailbox.set_movement(2);
    assert_eq!(mailbox.take().movement, 2);
    // Movement is a level, not an edge
    assert_eq!(mailbox.take().movement, 2);
    mailbox.set_movement(-1);
    assert_eq!(mailbox.movement(), -1);
    mailbox.set_movement(0);
    assert_eq!(mailbox.take(), InputSignals { movement: 0, fire: false });
}

// ── FireTrigger ───────────────────────────────────────────────────────────────

#[test]
fn press_only_terminal_fires_on_press() {
    let mut mailbox = InputMailbox::new();
    let mut trigger = FireTrigger::new(false);
    trigger.press(&mut mailbox);
    assert!(mailbox.take().fire);
    trigger.press(&mut mailbox);
    assert!(mailbox.take().fire);
    assert!(!trigger.fires_on_release());
}

#[test]
fn release_reporting_terminal_fires_on_release_only() {
    let mut mailbox = InputMailbox::new();
    let mut trigger = FireTrigger::new(true);
    trigger.press(&mut mailbox);
    assert!(!mailbox.fire_pending());
    trigger.release(&mut mailbox);
    assert!(mailbox.take().fire);
}

#[test]
fn first_release_switches_mode_without_double_shot() {
    let mut mailbox = InputMailbox::new();
    let mut trigger = FireTrigger::new(false);

    trigger.press(&mut mailbox);
    trigger.release(&mut mailbox);
    let fired = (0..3).filter(|_| mailbox.take().fire).count();
    assert_eq!(fired, 1);
    assert!(trigger.fires_on_release());

    trigger.press(&mut mailbox);
    assert!(!mailbox.fire_pending());
    trigger.release(&mut mailbox);
    assert!(mailbox.take().fire);
}
