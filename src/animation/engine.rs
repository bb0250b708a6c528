//! Tick-driven animation batches
//!
//! An [`Animation`] is a batch of [`AnimationEntry`] values sharing one
//! duration. The caller owns the clock and advances the batch with the
//! elapsed time since the previous frame. Each entry is active within its
//! own sub-window of the batch, ticks with eased progress while active, and
//! runs its final step once the batch passes the end of its window.
//!
//! The engine is generic over the target it mutates; it knows nothing about
//! viewports.

use crate::animation::interpolation::EasingFunction;
use std::time::Duration;

/// Result of advancing one entry by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The target visibly changed
    Changed,
    /// Nothing changed, no redraw needed for this entry
    Unchanged,
    /// The entry is done early; its final step runs and it retires
    Completed,
}

/// Typed interpolation applied to a target of type `T`
pub trait Animate<T: ?Sized> {
    /// Applies the value at `progress`, already eased, within the entry window
    fn tick(&mut self, target: &mut T, progress: f64) -> TickOutcome;

    /// Snaps the target to the exact end value; returns true if it changed
    fn finish(&mut self, target: &mut T) -> bool;
}

/// One interpolated transition inside a batch
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry<A> {
    /// Diagnostic name
    pub name: String,
    /// Batch progress at which this entry starts, in `[0, 1]`
    pub animation_start: f64,
    /// Batch progress at which this entry ends, in `[animation_start, 1]`
    pub animation_end: f64,
    pub easing: EasingFunction,
    pub animator: A,
    retired: bool,
}

impl<A> AnimationEntry<A> {
    /// Entry spanning the whole batch with linear easing
    pub fn new(name: impl Into<String>, animator: A) -> Self {
        Self {
            name: name.into(),
            animation_start: 0.0,
            animation_end: 1.0,
            easing: EasingFunction::Linear,
            animator,
            retired: false,
        }
    }

    /// Restricts the entry to a sub-window of the batch
    pub fn window(mut self, start: f64, end: f64) -> Self {
        let start = start.clamp(0.0, 1.0);
        self.animation_start = start;
        self.animation_end = end.clamp(start, 1.0);
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Progress within this entry's window for a batch progress
    fn local_progress(&self, progress: f64) -> f64 {
        let span = self.animation_end - self.animation_start;
        if span <= 0.0 {
            1.0
        } else {
            ((progress - self.animation_start) / span).clamp(0.0, 1.0)
        }
    }
}

/// Lifecycle of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    /// Every entry ran to the end of its window
    Completed,
    /// Interrupted by [`Animation::stop`]
    Stopped,
}

/// What a call to [`Animation::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationUpdate {
    /// At least one entry changed the target
    pub changed: bool,
    /// The batch still has active entries
    pub running: bool,
}

/// A batch of entries sharing one duration
#[derive(Debug, Clone)]
pub struct Animation<A> {
    entries: Vec<AnimationEntry<A>>,
    duration: Duration,
    elapsed: Duration,
    state: AnimationState,
}

impl<A> Animation<A> {
    pub fn new(entries: Vec<AnimationEntry<A>>, duration: Duration) -> Self {
        let state = if entries.is_empty() {
            AnimationState::Completed
        } else {
            AnimationState::Running
        };
        Self {
            entries,
            duration,
            elapsed: Duration::ZERO,
            state,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Batch progress in `[0, 1]`; a zero duration counts as finished
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        }
    }

    pub fn entries(&self) -> &[AnimationEntry<A>] {
        &self.entries
    }

    /// Number of entries that have not retired yet
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.retired).count()
    }

    /// Advances every active entry by the same elapsed time
    pub fn update<T: ?Sized>(&mut self, target: &mut T, delta: Duration) -> AnimationUpdate
    where
        A: Animate<T>,
    {
        if !self.is_running() {
            return AnimationUpdate {
                changed: false,
                running: false,
            };
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let progress = self.progress();
        let mut changed = false;

        for entry in self.entries.iter_mut().filter(|entry| !entry.retired) {
            if progress < entry.animation_start {
                continue;
            }
            if progress >= entry.animation_end {
                changed |= entry.animator.finish(target);
                entry.retired = true;
                continue;
            }

            let eased = entry.easing.apply(entry.local_progress(progress));
            match entry.animator.tick(target, eased) {
                TickOutcome::Changed => changed = true,
                TickOutcome::Unchanged => {}
                TickOutcome::Completed => {
                    log::trace!("animation entry '{}' completed early", entry.name);
                    changed |= entry.animator.finish(target);
                    entry.retired = true;
                }
            }
        }

        if self.entries.iter().all(|entry| entry.retired) {
            log::debug!(
                "animation batch completed after {:?} ({} entries)",
                self.elapsed,
                self.entries.len()
            );
            self.state = AnimationState::Completed;
        }

        AnimationUpdate {
            changed,
            running: self.is_running(),
        }
    }

    /// Interrupts the batch. With `call_final` every active entry snaps to its
    /// end value first; returns true if that changed the target.
    pub fn stop<T: ?Sized>(&mut self, target: &mut T, call_final: bool) -> bool
    where
        A: Animate<T>,
    {
        if !self.is_running() {
            return false;
        }

        let mut changed = false;
        for entry in self.entries.iter_mut().filter(|entry| !entry.retired) {
            if call_final {
                changed |= entry.animator.finish(target);
            }
            entry.retired = true;
        }
        self.state = AnimationState::Stopped;
        changed
    }
}
