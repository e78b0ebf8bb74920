//! The two signals the host hands the simulation each frame.

/// Snapshot read by one call to `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSignals {
    /// Net horizontal intent: each held right control adds 1, each held left
    /// control subtracts 1.  Not clamped, so two right keys give 2.
    pub movement: i32,
    /// One-shot fire request.
    pub fire: bool,
}

/// Host-side mailbox between the event source and the frame loop.
///
/// Movement is last-writer-wins.  Fire is edge-latched: it stays set until
/// the next [`take`](Self::take), which clears it, so a single press fires
/// at most once no matter how many frames pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputMailbox {
    movement: i32,
    fire: bool,
}

impl InputMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_movement(&mut self, movement: i32) {
        self.movement = movement;
    }

    pub fn latch_fire(&mut self) {
        self.fire = true;
    }

    pub fn movement(&self) -> i32 {
        self.movement
    }

    pub fn fire_pending(&self) -> bool {
        self.fire
    }

    /// Read this frame's signals and consume the fire latch.
    pub fn take(&mut self) -> InputSignals {
        let signals = InputSignals { movement: self.movement, fire: self.fire };
        self.fire = false;
        signals
    }
}

/// Decides whether the fire key latches on press or on release.
///
/// Terminals that report key releases fire on release.  Classic terminals
/// only send presses, so those fire on press.  A trigger that starts out
/// in press mode switches to release mode at the first release it sees;
/// that release does not fire again because its press already did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FireTrigger {
    release_events: bool,
}

impl FireTrigger {
    pub fn new(release_events: bool) -> Self {
        Self { release_events }
    }

    pub fn fires_on_release(&self) -> bool {
        self.release_events
    }

    pub fn press(&mut self, mailbox: &mut InputMailbox) {
        if !self.release_events {
            mailbox.latch_fire();
        }
    }

    pub fn release(&mut self, mailbox: &mut InputMailbox) {
        if self.release_events {
            mailbox.latch_fire();
        } else {
            self.release_events = true;
        }
    }
}
