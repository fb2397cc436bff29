//! Declared animation parameters for catalog cards and panels.
//!
//! Nothing here keeps time. A [`Motion`] is sampled with the elapsed time the
//! host measured, so state logic stays testable without a rendering host.

use std::collections::HashSet;
use std::time::Duration;

use crate::catalog::ItemId;

/// Length of every enter/exit motion.
pub const DURATION: Duration = Duration::from_millis(300);
/// Extra delay per card index on entrance.
pub const STAGGER: Duration = Duration::from_millis(50);
/// Full cycle of the loading skeleton pulse.
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Vertical offset a card or panel starts from when entering.
const ENTER_OFFSET: f32 = 20.0;
/// Scale a card shrinks to while exiting.
const EXIT_SCALE: f32 = 0.9;

/// What happened to a key between two renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Enter,
    Update,
    Exit,
}

/// Visual properties at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl MotionFrame {
    /// Fully visible, in place.
    pub const REST: MotionFrame = MotionFrame {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    fn lerp(self, to: MotionFrame, t: f32) -> MotionFrame {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        MotionFrame {
            opacity: mix(self.opacity, to.opacity),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing.
    EaseOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single from/to transition with its timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: MotionFrame,
    pub to: MotionFrame,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Motion {
    /// Frame at `elapsed` since the motion was triggered.
    pub fn sample(&self, elapsed: Duration) -> MotionFrame {
        if elapsed <= self.delay {
            return self.from;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() || running >= self.duration {
            return self.to;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, self.easing.apply(t))
    }

    /// Delay plus duration.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}

/// Entrance delay of the card at `index`.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Fade in and slide up, staggered by index.
pub fn card_enter(index: usize) -> Motion {
    Motion {
        from: MotionFrame {
            opacity: 0.0,
            offset_y: ENTER_OFFSET,
            scale: 1.0,
        },
        to: MotionFrame::REST,
        delay: stagger_delay(index),
        duration: DURATION,
        easing: Easing::EaseOut,
    }
}

/// Fade out and shrink, immediately.
pub fn card_exit() -> Motion {
    Motion {
        from: MotionFrame::REST,
        to: MotionFrame {
            opacity: 0.0,
            offset_y: 0.0,
            scale: EXIT_SCALE,
        },
        delay: Duration::ZERO,
        duration: DURATION,
        easing: Easing::EaseOut,
    }
}

/// Entrance of the "no results" panel.
pub fn empty_enter() -> Motion {
    Motion {
        delay: Duration::ZERO,
        ..card_enter(0)
    }
}

/// Edges between two key sequences.
///
/// Every key of `next` comes first in order (`Enter` or `Update`), followed by
/// `Exit` for each key of `previous` that vanished, in its previous order.
pub fn diff_keys(previous: &[ItemId], next: &[ItemId]) -> Vec<(ItemId, Edge)> {
    let before: HashSet<ItemId> = previous.iter().copied().collect();
    let after: HashSet<ItemId> = next.iter().copied().collect();

    let mut edges: Vec<(ItemId, Edge)> = next
        .iter()
        .map(|key| {
            let edge = if before.contains(key) {
                Edge::Update
            } else {
                Edge::Enter
            };
            (*key, edge)
        })
        .collect();
    edges.extend(
        previous
            .iter()
            .filter(|key| !after.contains(key))
            .map(|key| (*key, Edge::Exit)),
    );
    edges
}

/// Skeleton opacity: 1.0 at the start of a cycle, 0.5 halfway through.
pub fn pulse_opacity(elapsed: Duration) -> f32 {
    let period = PULSE_PERIOD.as_secs_f32();
    let phase = elapsed.as_secs_f32().rem_euclid(period) / period;
    0.75 + 0.25 * (phase * std::f32::consts::TAU).cos()
}
