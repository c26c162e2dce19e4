//! Sound triggers emitted by the simulation
use log::{debug, warn};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SoundEvent {
    Eat,
    HazardCollision,
    SelfCollision,
    PortalEnter,
}

impl SoundEvent {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            SoundEvent::Eat => "eat",
            SoundEvent::HazardCollision => "hazard-collision",
            SoundEvent::SelfCollision => "self-collision",
            SoundEvent::PortalEnter => "portal-enter",
        }
    }
}

/// Fire-and-forget sink for sound triggers.
pub(crate) trait AudioPlayer {
    fn play(&mut self, event: SoundEvent);
}

/// Rings the terminal bell. Collisions get a double ring.
pub(crate) struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub(crate) fn new(out: W) -> Self {
        TerminalBell { out }
    }

    fn rings(event: SoundEvent) -> &'static [u8] {
        match event {
            SoundEvent::HazardCollision | SoundEvent::SelfCollision => b"\x07\x07",
            SoundEvent::Eat | SoundEvent::PortalEnter => b"\x07",
        }
    }
}

impl<W: Write> AudioPlayer for TerminalBell<W> {
    fn play(&mut self, event: SoundEvent) {
        debug!("Sound: {}", event.name());
        let result = self
            .out
            .write_all(Self::rings(event))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("Could not play {}: {}", event.name(), e);
        }
    }
}
