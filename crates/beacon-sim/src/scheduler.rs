//! Multi-rate tick scheduler.
//!
//! Three fixed-interval triggers share one millisecond clock that the
//! embedder advances. Due triggers fire in deadline order, so a single
//! long `advance` replays missed ticks in the order real time would
//! have delivered them.

/// The periodic trigger kinds. Declaration order doubles as the
/// tie-break priority for triggers due at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Player boundary check, enemy steering, contact check.
    Fast,
    /// Beacon and barricade wear.
    Damage,
    /// New enemy placement.
    Spawn,
}

#[derive(Debug, Clone)]
struct Trigger {
    kind: TickKind,
    interval_ms: u64,
    next_due_ms: u64,
}

/// Deadline queue over the three triggers. Disarmed until [`Scheduler::start`];
/// [`Scheduler::stop`] is idempotent and silences [`Scheduler::pop_due`]
/// immediately, even mid-drain.
#[derive(Debug, Clone)]
pub struct Scheduler {
    now_ms: u64,
    armed: bool,
    triggers: [Trigger; 3],
}

impl Scheduler {
    /// Build a disarmed scheduler. Intervals below 1 ms are clamped up;
    /// a zero interval would come due unboundedly within one advance.
    pub fn new(fast_ms: u64, damage_ms: u64, spawn_ms: u64) -> Self {
        let trigger = |kind, interval_ms: u64| {
            let interval_ms = interval_ms.max(1);
            Trigger {
                kind,
                interval_ms,
                next_due_ms: interval_ms,
            }
        };
        Self {
            now_ms: 0,
            armed: false,
            triggers: [
                trigger(TickKind::Fast, fast_ms),
                trigger(TickKind::Damage, damage_ms),
                trigger(TickKind::Spawn, spawn_ms),
            ],
        }
    }

    /// Rewind the clock to zero and arm every trigger one interval out.
    pub fn start(&mut self) {
        self.now_ms = 0;
        for trigger in &mut self.triggers {
            trigger.next_due_ms = trigger.interval_ms;
        }
        self.armed = true;
    }

    /// Disarm all triggers. Safe to call repeatedly and from inside a
    /// tick handler.
    pub fn stop(&mut self) {
        self.armed = false;
    }

    pub fn is_running(&self) -> bool {
        self.armed
    }

    /// Elapsed clock in milliseconds since the last start.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward. Triggers do not fire here; drain them
    /// with [`Self::pop_due`].
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }

    /// Pop the next due trigger at the current clock: earliest deadline
    /// first, ties broken by [`TickKind`] declaration order. The winner
    /// is rescheduled one interval past its old deadline rather than
    /// past the clock, so a stalled embedder catches up one missed tick
    /// at a time and deadlines stay on their original grid.
    pub fn pop_due(&mut self) -> Option<TickKind> {
        if !self.armed {
            return None;
        }
        let mut winner: Option<usize> = None;
        for (index, trigger) in self.triggers.iter().enumerate() {
            if trigger.next_due_ms > self.now_ms {
                continue;
            }
            match winner {
                Some(best) if self.triggers[best].next_due_ms <= trigger.next_due_ms => {}
                _ => winner = Some(index),
            }
        }
        let trigger = &mut self.triggers[winner?];
        trigger.next_due_ms += trigger.interval_ms;
        Some(trigger.kind)
    }
}
