//! Reaction round state machine.
//!
//! The machine is pure: transitions take the current instant and return a
//! timer effect for the caller to apply, so the wait-timer race is
//! deterministic under test. The terminal loop owns the real timer.

use std::time::{Duration, Instant};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Shortest wait before the go signal.
pub const MIN_WAIT: Duration = Duration::from_millis(800);

/// Longest wait before the go signal (exclusive).
pub const MAX_WAIT: Duration = Duration::from_millis(3000);

/// Stage of one play round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Nothing armed; a click starts a round.
    Idle,
    /// Wait timer armed; clicking now is a false start.
    Waiting,
    /// Go signal shown; the clock is running.
    Go,
    /// A reaction was measured; a click replays.
    Result,
}

/// Identity of an armed wait timer.
///
/// A disarmed token that later fires is stale and is ignored, so a
/// cancelled timer can never fire into a reset phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimerToken(u64);

/// Timer side effect requested by a transition.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TimerEffect {
    /// Arm a one-shot timer for `delay`, tagged with `token`.
    Schedule { token: TimerToken, delay: Duration },
    /// Drop the pending timer; a late fire of `token` is stale.
    Disarm(TimerToken),
    /// No timer change.
    None,
}

/// What a click meant, paired with the timer effect to apply.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClickOutcome {
    /// Round armed; wait for the go signal.
    Armed,
    /// Clicked during the wait; round reset, no score recorded.
    TooSoon,
    /// Reaction measured, in milliseconds.
    Reacted { reaction_ms: u64 },
}

#[derive(Debug)]
pub struct ReactionMachine {
    phase: Phase,
    armed: Option<TimerToken>,
    started_at: Option<Instant>,
    reaction_ms: Option<u64>,
    next_token: u64,
}

impl ReactionMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            armed: None,
            started_at: None,
            reaction_ms: None,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last measured reaction, kept until a newer one replaces it.
    pub fn reaction_ms(&self) -> Option<u64> {
        self.reaction_ms
    }

    /// Advance the machine on a user click.
    ///
    /// `delay` is the wait to use if this click arms a round; rolling it is
    /// the caller's business so tests stay deterministic.
    pub fn click(&mut self, now: Instant, delay: Duration) -> (ClickOutcome, TimerEffect) {
        match self.phase {
            // A click from idle or result starts (re)plays a round. The
            // previous reaction survives until a new one is measured.
            Phase::Idle | Phase::Result => {
                let token = self.fresh_token();
                self.armed = Some(token);
                self.phase = Phase::Waiting;
                (ClickOutcome::Armed, TimerEffect::Schedule { token, delay })
            }
            Phase::Waiting => {
                let effect = match self.armed.take() {
                    Some(token) => TimerEffect::Disarm(token),
                    None => TimerEffect::None,
                };
                self.phase = Phase::Idle;
                (ClickOutcome::TooSoon, effect)
            }
            Phase::Go => {
                let elapsed = self
                    .started_at
                    .take()
                    .map(|start| now.saturating_duration_since(start))
                    .unwrap_or_default();
                let reaction_ms = round_to_millis(elapsed);
                self.reaction_ms = Some(reaction_ms);
                self.phase = Phase::Result;
                (ClickOutcome::Reacted { reaction_ms }, TimerEffect::None)
            }
        }
    }

    /// Handle a fired wait timer. Returns `true` when the go signal is now
    /// showing; `false` means the token was stale and nothing changed.
    pub fn timer_fired(&mut self, token: TimerToken, now: Instant) -> bool {
        if self.phase == Phase::Waiting && self.armed == Some(token) {
            self.armed = None;
            self.started_at = Some(now);
            self.phase = Phase::Go;
            true
        } else {
            false
        }
    }

    fn fresh_token(&mut self) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        token
    }
}

impl Default for ReactionMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Roll a uniformly random wait in [`MIN_WAIT`, `MAX_WAIT`).
pub fn roll_wait(rng: &mut impl Rng) -> Duration {
    let dist = Uniform::from(MIN_WAIT.as_millis() as u64..MAX_WAIT.as_millis() as u64);
    Duration::from_millis(dist.sample(rng))
}

/// Round to the nearest millisecond.
fn round_to_millis(d: Duration) -> u64 {
    ((d.as_micros() + 500) / 1_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1_000);

    fn armed_machine(t0: Instant) -> (ReactionMachine, TimerToken) {
        let mut machine = ReactionMachine::new();
        let (outcome, effect) = machine.click(t0, DELAY);
        assert_eq!(outcome, ClickOutcome::Armed);
        let TimerEffect::Schedule { token, delay } = effect else {
            panic!("arming click must schedule a timer");
        };
        assert_eq!(delay, DELAY);
        (machine, token)
    }

    #[test]
    fn idle_click_arms_the_wait_timer() {
        let t0 = Instant::now();
        let (machine, _) = armed_machine(t0);
        assert_eq!(machine.phase(), Phase::Waiting);
        assert_eq!(machine.reaction_ms(), None);
    }

    #[test]
    fn click_during_wait_resets_to_idle_without_a_score() {
        let t0 = Instant::now();
        let (mut machine, token) = armed_machine(t0);

        let (outcome, effect) = machine.click(t0 + Duration::from_millis(300), DELAY);

        assert_eq!(outcome, ClickOutcome::TooSoon);
        assert_eq!(effect, TimerEffect::Disarm(token));
        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.reaction_ms(), None);
    }

    #[test]
    fn disarmed_token_firing_late_is_ignored() {
        let t0 = Instant::now();
        let (mut machine, token) = armed_machine(t0);
        machine.click(t0 + Duration::from_millis(300), DELAY);

        // The cancelled timer fires anyway; the machine must not leave idle.
        assert!(!machine.timer_fired(token, t0 + DELAY));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn stale_token_from_a_previous_round_is_ignored() {
        let t0 = Instant::now();
        let (mut machine, old_token) = armed_machine(t0);
        machine.click(t0 + Duration::from_millis(100), DELAY); // too soon
        let (_, effect) = machine.click(t0 + Duration::from_millis(200), DELAY); // re-arm
        let TimerEffect::Schedule { token: new_token, .. } = effect else {
            panic!("re-arming click must schedule a timer");
        };

        assert!(!machine.timer_fired(old_token, t0 + DELAY));
        assert_eq!(machine.phase(), Phase::Waiting);
        assert!(machine.timer_fired(new_token, t0 + DELAY));
        assert_eq!(machine.phase(), Phase::Go);
    }

    #[test]
    fn full_round_measures_a_rounded_reaction() {
        let t0 = Instant::now();
        let (mut machine, token) = armed_machine(t0);

        assert!(machine.timer_fired(token, t0 + DELAY));
        let click_at = t0 + DELAY + Duration::from_micros(234_500);
        let (outcome, effect) = machine.click(click_at, DELAY);

        assert_eq!(outcome, ClickOutcome::Reacted { reaction_ms: 235 });
        assert_eq!(effect, TimerEffect::None);
        assert_eq!(machine.phase(), Phase::Result);
        assert_eq!(machine.reaction_ms(), Some(235));
    }

    #[test]
    fn sub_half_millisecond_rounds_down() {
        let t0 = Instant::now();
        let (mut machine, token) = armed_machine(t0);
        machine.timer_fired(token, t0 + DELAY);

        let click_at = t0 + DELAY + Duration::from_micros(234_400);
        let (outcome, _) = machine.click(click_at, DELAY);

        assert_eq!(outcome, ClickOutcome::Reacted { reaction_ms: 234 });
    }

    #[test]
    fn replay_keeps_the_old_reaction_until_a_new_one_lands() {
        let t0 = Instant::now();
        let (mut machine, token) = armed_machine(t0);
        machine.timer_fired(token, t0 + DELAY);
        machine.click(t0 + DELAY + Duration::from_millis(250), DELAY);
        assert_eq!(machine.reaction_ms(), Some(250));

        // Replay: result -> waiting, the old value is still submittable.
        let (outcome, effect) = machine.click(t0 + Duration::from_secs(5), DELAY);
        assert_eq!(outcome, ClickOutcome::Armed);
        assert_eq!(machine.phase(), Phase::Waiting);
        assert_eq!(machine.reaction_ms(), Some(250));

        let TimerEffect::Schedule { token, .. } = effect else {
            panic!("replay click must schedule a timer");
        };
        machine.timer_fired(token, t0 + Duration::from_secs(6));
        machine.click(t0 + Duration::from_secs(6) + Duration::from_millis(180), DELAY);
        assert_eq!(machine.reaction_ms(), Some(180));
    }

    #[test]
    fn rolled_wait_is_within_bounds() {
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        for _ in 0..100 {
            let wait = roll_wait(&mut rng);
            assert!(wait >= MIN_WAIT);
            assert!(wait < MAX_WAIT);
        }
    }
}
