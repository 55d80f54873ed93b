//! Tournament clock state machine implementation.

use super::models::{BlindField, ClockEvent, ClockState};
use crate::config::models::{BlindLevel, TournamentConfig};

/// The tournament clock: countdown ticking, level advancement, manual-mode
/// override and the start/pause/reset/skip transitions.
///
/// The clock owns its copy of the active blind schedule. It is re-pointed
/// with [`TournamentClock::reset_to_config`] when the configuration store
/// switches configurations; it never polls the store.
///
/// Every operation here degrades to a safe no-op or a clamped value: there is
/// no fatal error path.
#[derive(Debug, Clone)]
pub struct TournamentClock {
    state: ClockState,
    schedule: Vec<BlindLevel>,
    /// Resolution target of last resort for an empty schedule
    fallback: BlindLevel,
}

impl TournamentClock {
    /// Create a clock positioned at the first level of the configuration,
    /// paused, with auto-advance and sound on.
    pub fn new(config: &TournamentConfig) -> Self {
        let fallback = BlindLevel::new(1, 0, 0, 20);
        let first = config.first_level().unwrap_or(&fallback);
        let state = ClockState {
            is_running: false,
            remaining_secs: first.duration_secs(),
            current_level: first.level,
            auto_advance: true,
            sound_enabled: true,
            manual_mode: false,
        };
        Self {
            state,
            schedule: config.blind_structure.clone(),
            fallback,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// The active blind schedule
    pub fn schedule(&self) -> &[BlindLevel] {
        &self.schedule
    }

    /// The level the clock currently sits on.
    ///
    /// Canonical fallback: if the stored level number does not resolve in the
    /// active schedule, the first level of the schedule is used instead.
    pub fn current_level(&self) -> &BlindLevel {
        self.schedule
            .iter()
            .find(|bl| bl.level == self.state.current_level)
            .or_else(|| self.schedule.first())
            .unwrap_or(&self.fallback)
    }

    /// Big blind of the current level
    pub fn current_big_blind(&self) -> i64 {
        self.current_level().big_blind
    }

    /// Whether a scheduled tick should currently be applied
    pub fn is_ticking(&self) -> bool {
        self.state.is_running && !self.state.manual_mode
    }

    /// Start the countdown. No-op while already running or in manual mode.
    pub fn start(&mut self) {
        if self.state.is_running || self.state.manual_mode {
            return;
        }
        self.state.is_running = true;
        log::debug!("clock started at level {}", self.state.current_level);
    }

    /// Pause the countdown. No-op unless running.
    pub fn pause(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.is_running = false;
        log::debug!(
            "clock paused with {}s remaining",
            self.state.remaining_secs
        );
    }

    /// Reset the current level to its full duration, paused. The level
    /// itself does not change.
    pub fn reset(&mut self) {
        let duration = self.current_level().duration_secs();
        self.state.remaining_secs = duration;
        self.state.is_running = false;
    }

    /// Skip to the next level, paused, at full duration. No-op when no level
    /// with number `current + 1` exists (the clock stays on the last level).
    pub fn advance(&mut self) {
        if let Some(next) = self.next_level().cloned() {
            self.state.current_level = next.level;
            self.state.remaining_secs = next.duration_secs();
            self.state.is_running = false;
            log::debug!("clock advanced to level {}", self.state.current_level);
        }
    }

    /// Apply one scheduled second. Valid only while running and not in
    /// manual mode; otherwise a no-op returning no events.
    ///
    /// Warning events are edge-triggered by construction: a threshold event
    /// fires only on the decrement that lands on it, so pausing at a
    /// threshold and resuming never re-fires it.
    pub fn tick(&mut self) -> Vec<ClockEvent> {
        if !self.is_ticking() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let remaining = self.state.remaining_secs.saturating_sub(1);

        if matches!(remaining, 60 | 30 | 10) {
            events.push(ClockEvent::TimeWarning {
                remaining_secs: remaining,
            });
        }

        if remaining == 0 {
            let next = if self.state.auto_advance {
                self.next_level().cloned()
            } else {
                None
            };
            match next {
                Some(level) => {
                    // Auto-continue: roll into the next level still running.
                    self.state.current_level = level.level;
                    self.state.remaining_secs = level.duration_secs();
                    log::debug!("clock auto-advanced to level {}", level.level);
                    events.push(ClockEvent::LevelAdvanced { level: level.level });
                }
                None => {
                    self.state.remaining_secs = 0;
                    self.state.is_running = false;
                    log::debug!("clock expired at level {}", self.state.current_level);
                    events.push(ClockEvent::Expired);
                }
            }
        } else {
            self.state.remaining_secs = remaining;
        }

        events
    }

    /// Toggle manual blind entry mode.
    ///
    /// Manual mode suspends ticking entirely; the run/pause state underneath
    /// is preserved, so switching manual mode off resumes where the clock
    /// left off.
    pub fn set_manual_mode(&mut self, enabled: bool) {
        self.state.manual_mode = enabled;
    }

    /// Toggle auto-advance at level expiry
    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.state.auto_advance = enabled;
    }

    /// Toggle audible warning rendering
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.state.sound_enabled = enabled;
    }

    /// Edit a blind value of the current level. Valid only in manual mode.
    ///
    /// Values are clamped at zero; an ante of zero is normalized to absent.
    /// Returns whether the edit applied. `remaining_secs` is never touched.
    pub fn update_manual_blind(&mut self, field: BlindField, value: i64) -> bool {
        if !self.state.manual_mode {
            return false;
        }
        let value = value.max(0);
        let current = self.state.current_level;
        let Some(level) = self.schedule.iter_mut().find(|bl| bl.level == current) else {
            return false;
        };
        match field {
            BlindField::SmallBlind => level.small_blind = value,
            BlindField::BigBlind => level.big_blind = value,
            BlindField::Ante => level.ante = (value > 0).then_some(value),
        }
        log::debug!("manual blind edit: level {current} {field} = {value}");
        true
    }

    /// Adopt a live-edited schedule without moving the clock.
    ///
    /// Position and remaining time are preserved; if the current level no
    /// longer resolves in the new schedule, reads fall back to the first
    /// level.
    pub fn set_schedule(&mut self, schedule: Vec<BlindLevel>) {
        self.schedule = schedule;
    }

    /// Re-point the clock at a freshly activated configuration: first level,
    /// full duration, paused. Toggles (auto-advance, sound, manual mode) are
    /// preserved.
    pub fn reset_to_config(&mut self, config: &TournamentConfig) {
        self.schedule = config.blind_structure.clone();
        let first = config.first_level().unwrap_or(&self.fallback);
        self.state.current_level = first.level;
        self.state.remaining_secs = first.duration_secs();
        self.state.is_running = false;
    }

    fn next_level(&self) -> Option<&BlindLevel> {
        let next = self.state.current_level + 1;
        self.schedule.iter().find(|bl| bl.level == next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute_levels() -> TournamentConfig {
        TournamentConfig {
            name: "Test".to_string(),
            chips: Vec::new(),
            blind_structure: vec![
                BlindLevel::new(1, 25, 50, 1),
                BlindLevel::new(2, 50, 100, 1),
            ],
        }
    }

    #[test]
    fn test_new_clock_sits_paused_on_first_level() {
        let clock = TournamentClock::new(&TournamentConfig::standard());
        let state = clock.state();
        assert!(!state.is_running);
        assert_eq!(state.current_level, 1);
        assert_eq!(state.remaining_secs, 1200);
        assert!(state.auto_advance);
        assert!(state.sound_enabled);
        assert!(!state.manual_mode);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.start();
        clock.start();
        assert!(clock.state().is_running);
    }

    #[test]
    fn test_start_refused_in_manual_mode() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.set_manual_mode(true);
        clock.start();
        assert!(!clock.state().is_running);
    }

    #[test]
    fn test_pause_without_running_is_noop() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.pause();
        assert!(!clock.state().is_running);
    }

    #[test]
    fn test_tick_noop_while_paused() {
        let mut clock = TournamentClock::new(&minute_levels());
        let events = clock.tick();
        assert!(events.is_empty());
        assert_eq!(clock.state().remaining_secs, 60);
    }

    #[test]
    fn test_pause_then_resume_loses_no_time() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.start();
        clock.tick();
        clock.tick();
        clock.pause();
        let frozen = clock.state().remaining_secs;
        // Stale ticks after pausing must not apply.
        clock.tick();
        clock.tick();
        assert_eq!(clock.state().remaining_secs, frozen);
        clock.start();
        assert_eq!(clock.state().remaining_secs, frozen);
    }

    #[test]
    fn test_manual_mode_suspends_ticking_and_preserves_run_state() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.start();
        clock.tick();
        clock.set_manual_mode(true);
        let frozen = clock.state().remaining_secs;
        assert!(clock.tick().is_empty());
        assert_eq!(clock.state().remaining_secs, frozen);
        assert!(clock.state().is_running);
        clock.set_manual_mode(false);
        assert!(clock.is_ticking());
        clock.tick();
        assert_eq!(clock.state().remaining_secs, frozen - 1);
    }

    #[test]
    fn test_reset_restores_full_duration_without_changing_level() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.advance();
        clock.start();
        clock.tick();
        clock.reset();
        let state = clock.state();
        assert!(!state.is_running);
        assert_eq!(state.current_level, 2);
        assert_eq!(state.remaining_secs, 60);
    }

    #[test]
    fn test_advance_moves_to_next_level_paused() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.start();
        clock.advance();
        let state = clock.state();
        assert_eq!(state.current_level, 2);
        assert_eq!(state.remaining_secs, 60);
        assert!(!state.is_running);
    }

    #[test]
    fn test_advance_past_last_level_is_noop() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.advance();
        let before = clock.state();
        clock.advance();
        assert_eq!(clock.state(), before);
    }

    #[test]
    fn test_advance_follows_level_numbers_not_positions() {
        let config = TournamentConfig {
            name: "Gapped".to_string(),
            chips: Vec::new(),
            blind_structure: vec![BlindLevel::new(1, 25, 50, 1), BlindLevel::new(3, 75, 150, 1)],
        };
        let mut clock = TournamentClock::new(&config);
        clock.advance();
        // No level 2 exists, so the clock stays put.
        assert_eq!(clock.state().current_level, 1);
    }

    #[test]
    fn test_warning_fires_once_on_threshold_crossing() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.advance(); // level 2, 60s
        clock.start();
        // 61 -> 60 would fire; here 60 -> 59 must not.
        let events = clock.tick();
        assert!(events.is_empty());
        // Walk down to 31 -> 30.
        for _ in 0..28 {
            assert!(clock.tick().is_empty());
        }
        assert_eq!(clock.state().remaining_secs, 31);
        let events = clock.tick();
        assert_eq!(events, vec![ClockEvent::TimeWarning { remaining_secs: 30 }]);
        // Next tick fires nothing again.
        assert!(clock.tick().is_empty());
    }

    #[test]
    fn test_sixty_second_warning_fires_on_61_to_60() {
        let config = TournamentConfig {
            name: "Two minutes".to_string(),
            chips: Vec::new(),
            blind_structure: vec![BlindLevel::new(1, 25, 50, 2)],
        };
        let mut clock = TournamentClock::new(&config);
        clock.start();
        let mut warnings = 0;
        for _ in 0..59 {
            warnings += clock.tick().len();
        }
        assert_eq!(warnings, 0);
        assert_eq!(clock.state().remaining_secs, 61);
        let events = clock.tick();
        assert_eq!(events, vec![ClockEvent::TimeWarning { remaining_secs: 60 }]);
    }

    #[test]
    fn test_auto_advance_rolls_into_next_level_running() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.start();
        let mut boundary_events = Vec::new();
        for _ in 0..60 {
            boundary_events.extend(
                clock
                    .tick()
                    .into_iter()
                    .filter(|e| matches!(e, ClockEvent::LevelAdvanced { .. })),
            );
        }
        assert_eq!(boundary_events, vec![ClockEvent::LevelAdvanced { level: 2 }]);
        let state = clock.state();
        assert_eq!(state.current_level, 2);
        assert_eq!(state.remaining_secs, 60);
        assert!(state.is_running);
    }

    #[test]
    fn test_expiry_without_auto_advance() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.set_auto_advance(false);
        clock.start();
        let mut last_events = Vec::new();
        for _ in 0..60 {
            last_events = clock.tick();
        }
        assert_eq!(last_events, vec![ClockEvent::Expired]);
        let state = clock.state();
        assert!(!state.is_running);
        assert_eq!(state.remaining_secs, 0);
        assert_eq!(state.current_level, 1);
    }

    #[test]
    fn test_expiry_on_last_level_even_with_auto_advance() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.advance(); // level 2 is the last
        clock.start();
        let mut last_events = Vec::new();
        for _ in 0..60 {
            last_events = clock.tick();
        }
        assert_eq!(last_events, vec![ClockEvent::Expired]);
        assert_eq!(clock.state().current_level, 2);
        assert!(!clock.state().is_running);
    }

    #[test]
    fn test_update_manual_blind_requires_manual_mode() {
        let mut clock = TournamentClock::new(&minute_levels());
        assert!(!clock.update_manual_blind(BlindField::BigBlind, 75));
        assert_eq!(clock.current_big_blind(), 50);
    }

    #[test]
    fn test_update_manual_blind_edits_current_level_only() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.set_manual_mode(true);
        assert!(clock.update_manual_blind(BlindField::SmallBlind, 40));
        assert!(clock.update_manual_blind(BlindField::BigBlind, 80));
        let remaining = clock.state().remaining_secs;
        assert_eq!(clock.current_level().small_blind, 40);
        assert_eq!(clock.current_level().big_blind, 80);
        assert_eq!(clock.state().remaining_secs, remaining);
        assert_eq!(clock.schedule()[1].big_blind, 100);
    }

    #[test]
    fn test_update_manual_blind_normalizes_zero_ante_to_absent() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.set_manual_mode(true);
        assert!(clock.update_manual_blind(BlindField::Ante, 25));
        assert_eq!(clock.current_level().ante, Some(25));
        assert!(clock.update_manual_blind(BlindField::Ante, 0));
        assert_eq!(clock.current_level().ante, None);
        // Negative input clamps to zero, which is absent.
        assert!(clock.update_manual_blind(BlindField::Ante, -5));
        assert_eq!(clock.current_level().ante, None);
    }

    #[test]
    fn test_reset_to_config_repositions_at_first_level() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.set_auto_advance(false);
        clock.advance();
        clock.start();
        clock.reset_to_config(&TournamentConfig::turbo());
        let state = clock.state();
        assert_eq!(state.current_level, 1);
        assert_eq!(state.remaining_secs, 600);
        assert!(!state.is_running);
        // Toggles survive a configuration switch.
        assert!(!state.auto_advance);
        assert_eq!(clock.current_big_blind(), 50);
    }

    #[test]
    fn test_unresolvable_level_falls_back_to_first() {
        let mut clock = TournamentClock::new(&minute_levels());
        clock.advance();
        assert_eq!(clock.state().current_level, 2);
        // A live edit drops level 2 from the schedule; the clock stays put
        // but reads resolve to the first level.
        clock.set_schedule(vec![BlindLevel::new(1, 25, 50, 1)]);
        assert_eq!(clock.state().current_level, 2);
        assert_eq!(clock.current_level().level, 1);
        assert_eq!(clock.current_big_blind(), 50);
    }

    #[test]
    fn test_empty_schedule_resolves_to_placeholder() {
        let config = TournamentConfig {
            name: "Empty".to_string(),
            chips: Vec::new(),
            blind_structure: Vec::new(),
        };
        let mut clock = TournamentClock::new(&config);
        assert_eq!(clock.state().remaining_secs, 1200);
        assert_eq!(clock.current_big_blind(), 0);
        clock.advance(); // nothing to advance to
        assert_eq!(clock.state().current_level, 1);
    }
}
