//! Hunt play-session engine
//!
//! One `HuntSession` drives one active play screen: it consumes position
//! fixes from the platform location provider, turns them into proximity
//! feedback against the current step's target zone, renders that feedback
//! through the platform capability layer, and scores step completions.
//!
//! The engine is single-threaded and event-driven. Callbacks fire inline
//! on the same call chain that delivered the fix; there are no background
//! threads and no locks. The only temporal state is the beep throttle
//! owned by the renderer.

use crate::core::{Coordinate, PositionFix, TargetZone};
use crate::feedback::proximity::{proximity_feedback, ProximityFeedback};
use crate::feedback::renderer::{FeedbackRenderer, VisualPulse};
use crate::geo::distance::haversine_distance;
use crate::geo::wkt::parse_point;
use crate::platform::{HapticMotor, ToneSink};
use crate::processing::smoother::FixSmoother;
use crate::scoring::score::{
    apply_hint_cost, apply_speed_bonus_with_window, calculate_score, ScoreCalculation,
};
use crate::utils::config::SessionConfig;
use crate::validation::fix::{FixValidationError, FixValidator};
use std::collections::HashMap;

/// Callback invoked with every accepted position fix's feedback
pub type FeedbackCallback = Box<dyn Fn(FeedbackUpdate) + Send>;

/// Callback invoked on session events
pub type EventCallback = Box<dyn Fn(SessionEvent) + Send>;

/// Feedback state pushed to the UI after each accepted fix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackUpdate {
    /// Distance to the current target, if one is set
    pub distance_m: Option<f64>,
    pub feedback: ProximityFeedback,
    pub visual: VisualPulse,
    /// Whether the player is inside the validation radius
    pub within_zone: bool,
}

/// Events emitted while a session runs
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new target zone is active
    TargetSet { center: Coordinate, radius_m: f64 },
    /// The target geometry could not be parsed; feedback is suppressed
    TargetRejected { details: String },
    /// The player crossed into the validation radius
    ZoneEntered { distance_m: f64 },
    /// The player crossed out of the validation radius
    ZoneExited { distance_m: f64 },
    /// A proximity beep was emitted
    BeepEmitted { frequency_hz: f64 },
    /// A position fix was rejected before reaching the feedback path
    FixRejected { error: FixValidationError },
    /// A step timer started
    StepStarted { timestamp_ms: u64 },
    /// A step was completed and scored
    StepCompleted { score: StepScore },
}

/// Final score of one completed step, with the adjustments that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepScore {
    pub calculation: ScoreCalculation,
    pub elapsed_secs: u32,
    pub speed_bonus_applied: bool,
    pub hints_revealed: u32,
    pub final_score: u32,
}

/// Running counters for one session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub fixes_processed: u32,
    pub fixes_rejected: u32,
    pub beeps_emitted: u32,
    pub steps_completed: u32,
    pub within_zone: bool,
    pub last_distance_m: Option<f64>,
}

/// What one `process_fix` call did
#[derive(Debug, Clone, Copy)]
pub struct ProcessOutcome {
    pub accepted: bool,
    pub distance_m: Option<f64>,
    pub feedback: ProximityFeedback,
    pub beeped: bool,
}

/// Callback registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u32);

impl CallbackHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Engine for one active hunt play session
pub struct HuntSession {
    config: SessionConfig,
    target: Option<TargetZone>,
    renderer: FeedbackRenderer,
    smoother: FixSmoother,
    validator: FixValidator,
    feedback_callbacks: HashMap<CallbackHandle, FeedbackCallback>,
    event_callbacks: HashMap<CallbackHandle, EventCallback>,
    callback_counter: u32,
    state: SessionState,
    step_started_ms: Option<u64>,
    hints_revealed: u32,
}

impl HuntSession {
    /// Create a session with the given platform backends. Pass the null
    /// backends on platforms without audio or vibration.
    pub fn new(
        config: SessionConfig,
        audio: Box<dyn ToneSink>,
        haptics: Box<dyn HapticMotor>,
    ) -> Self {
        let validator = FixValidator::with_config(config.fix_validation());
        Self {
            config,
            target: None,
            renderer: FeedbackRenderer::new(audio, haptics),
            smoother: FixSmoother::new(),
            validator,
            feedback_callbacks: HashMap::new(),
            event_callbacks: HashMap::new(),
            callback_counter: 0,
            state: SessionState::default(),
            step_started_ms: None,
            hints_revealed: 0,
        }
    }

    /// Activate a target zone for the current step
    pub fn set_target(&mut self, zone: TargetZone) {
        self.target = Some(zone);
        self.state.within_zone = false;
        self.renderer.reset_throttle();
        self.trigger_event(SessionEvent::TargetSet {
            center: zone.center,
            radius_m: zone.radius_m,
        });
    }

    /// Activate a target from a point-geometry string as stored by the
    /// backend. A malformed string clears the target and suppresses all
    /// feedback instead of failing; returns whether a target is now set.
    pub fn set_target_wkt(&mut self, wkt: &str, radius_m: f64) -> bool {
        match parse_point(wkt) {
            Ok(center) => {
                self.set_target(TargetZone::new(center, radius_m));
                true
            }
            Err(error) => {
                self.target = None;
                self.state.within_zone = false;
                self.trigger_event(SessionEvent::TargetRejected {
                    details: error.to_string(),
                });
                false
            }
        }
    }

    /// Drop the active target; subsequent fixes produce suppressed feedback
    pub fn clear_target(&mut self) {
        self.target = None;
        self.state.within_zone = false;
    }

    pub fn target(&self) -> Option<TargetZone> {
        self.target
    }

    /// Register a callback for per-fix feedback updates
    pub fn register_feedback_callback(&mut self, callback: FeedbackCallback) -> CallbackHandle {
        self.callback_counter += 1;
        let handle = CallbackHandle(self.callback_counter);
        self.feedback_callbacks.insert(handle, callback);
        handle
    }

    /// Register a callback for session events
    pub fn register_event_callback(&mut self, callback: EventCallback) -> CallbackHandle {
        self.callback_counter += 1;
        let handle = CallbackHandle(self.callback_counter);
        self.event_callbacks.insert(handle, callback);
        handle
    }

    /// Remove a previously registered callback
    pub fn unregister_callback(&mut self, handle: CallbackHandle) -> bool {
        self.feedback_callbacks.remove(&handle).is_some()
            || self.event_callbacks.remove(&handle).is_some()
    }

    /// Feed one position fix through the pipeline: validate, smooth,
    /// compute distance and feedback, render, and notify callbacks.
    pub fn process_fix(&mut self, fix: PositionFix, now_ms: u64) -> ProcessOutcome {
        if let Err(error) = self.validator.validate(&fix, now_ms) {
            self.state.fixes_rejected += 1;
            self.trigger_event(SessionEvent::FixRejected { error });
            return ProcessOutcome {
                accepted: false,
                distance_m: None,
                feedback: ProximityFeedback::suppressed(),
                beeped: false,
            };
        }

        self.state.fixes_processed += 1;

        let coordinate = if self.config.smoothing_enabled {
            self.smoother.smooth(&fix)
        } else {
            fix.coordinate
        };

        let target = self.target;
        let distance_m = target.map(|zone| haversine_distance(coordinate, zone.center));

        let feedback = match (distance_m, target) {
            (Some(d), Some(zone)) => proximity_feedback(Some(d), zone.radius_m),
            _ => ProximityFeedback::suppressed(),
        };

        let outcome = if self.config.feedback_enabled {
            self.renderer.render(&feedback, now_ms)
        } else {
            crate::feedback::renderer::RenderOutcome {
                beeped: false,
                vibrated: false,
                visual: VisualPulse::from_feedback(&feedback),
            }
        };

        if outcome.beeped {
            self.state.beeps_emitted += 1;
            self.trigger_event(SessionEvent::BeepEmitted {
                frequency_hz: feedback.audio_frequency_hz,
            });
        }

        // Zone boundary transitions
        if let (Some(d), Some(zone)) = (distance_m, target) {
            let within = d <= zone.radius_m;
            if within != self.state.within_zone {
                self.state.within_zone = within;
                if within {
                    self.trigger_event(SessionEvent::ZoneEntered { distance_m: d });
                } else {
                    self.trigger_event(SessionEvent::ZoneExited { distance_m: d });
                }
            }
        }

        self.state.last_distance_m = distance_m;

        let update = FeedbackUpdate {
            distance_m,
            feedback,
            visual: outcome.visual,
            within_zone: self.state.within_zone,
        };
        for callback in self.feedback_callbacks.values() {
            callback(update);
        }

        ProcessOutcome {
            accepted: true,
            distance_m,
            feedback,
            beeped: outcome.beeped,
        }
    }

    /// Start the step timer and reset per-step state
    pub fn start_step(&mut self, now_ms: u64) {
        self.step_started_ms = Some(now_ms);
        self.hints_revealed = 0;
        self.renderer.reset_throttle();
        self.validator.reset();
        self.trigger_event(SessionEvent::StepStarted { timestamp_ms: now_ms });
    }

    /// Record a revealed hint, returning the count so far this step
    pub fn reveal_hint(&mut self) -> u32 {
        self.hints_revealed += 1;
        self.hints_revealed
    }

    pub fn hints_revealed(&self) -> u32 {
        self.hints_revealed
    }

    /// Score the current step and reset its timer.
    ///
    /// The base calculation is composed with the speed bonus and the hint
    /// cost here at the call site; the score function itself stays free of
    /// both adjustments.
    pub fn complete_step(&mut self, now_ms: u64) -> StepScore {
        let elapsed_secs = self
            .step_started_ms
            .map(|started| (now_ms.saturating_sub(started) / 1000) as u32)
            .unwrap_or(0);

        let calculation = calculate_score(
            self.config.base_points,
            elapsed_secs,
            self.config.max_bonus_time_secs,
        );

        let speed_bonus_applied = elapsed_secs < self.config.speed_bonus_window_secs;
        let with_speed = apply_speed_bonus_with_window(
            calculation.total_score,
            elapsed_secs,
            self.config.speed_bonus_window_secs,
        );
        let final_score =
            apply_hint_cost(with_speed, self.hints_revealed, self.config.hint_cost_points);

        let score = StepScore {
            calculation,
            elapsed_secs,
            speed_bonus_applied,
            hints_revealed: self.hints_revealed,
            final_score,
        };

        self.state.steps_completed += 1;
        self.step_started_ms = None;
        self.hints_revealed = 0;
        self.trigger_event(SessionEvent::StepCompleted { score });

        score
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Tear down the session: drop callbacks, stop any open tone, and
    /// clear the target. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.feedback_callbacks.clear();
        self.event_callbacks.clear();
        self.renderer.stop_audio();
        self.target = None;
        self.step_started_ms = None;
    }

    fn trigger_event(&self, event: SessionEvent) {
        for callback in self.event_callbacks.values() {
            callback(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MockHapticMotor, MockToneSink, NullHapticMotor, NullToneSink};
    use std::sync::{Arc, Mutex};

    fn session_with_mocks() -> (HuntSession, crate::platform::ToneLog) {
        let sink = MockToneSink::new();
        let log = sink.log();
        let session = HuntSession::new(
            SessionConfig::default(),
            Box::new(sink),
            Box::new(MockHapticMotor::new()),
        );
        (session, log)
    }

    fn collected_events(session: &mut HuntSession) -> Arc<Mutex<Vec<SessionEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        session.register_event_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        events
    }

    // Target at the origin; fixes use small latitude offsets (~111 m per
    // millidegree) to step toward it.
    fn target_at_origin(radius_m: f64) -> TargetZone {
        TargetZone::new(Coordinate::new(0.0, 0.0), radius_m)
    }

    #[test]
    fn test_fix_without_target_is_quiet() {
        let (mut session, log) = session_with_mocks();

        let outcome = session.process_fix(PositionFix::new(0.0, 0.0, 1_000), 1_000);

        assert!(outcome.accepted);
        assert_eq!(outcome.distance_m, None);
        assert!(outcome.feedback.is_suppressed());
        assert_eq!(log.play_count(), 0);
    }

    #[test]
    fn test_malformed_target_suppresses_feedback() {
        let (mut session, log) = session_with_mocks();
        let events = collected_events(&mut session);

        assert!(!session.set_target_wkt("POINT(garbage here)", 50.0));
        assert!(session.target().is_none());

        // A fix right where the target would have been stays silent
        let outcome = session.process_fix(PositionFix::new(0.0, 0.0, 1_000), 1_000);
        assert!(outcome.feedback.is_suppressed());
        assert_eq!(log.play_count(), 0);

        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::TargetRejected { .. })));
    }

    #[test]
    fn test_valid_wkt_target_is_set() {
        let (mut session, _) = session_with_mocks();

        assert!(session.set_target_wkt("SRID=4326;POINT(2.3522 48.8566)", 75.0));

        let zone = session.target().unwrap();
        assert!((zone.center.lon - 2.3522).abs() < 1e-12);
        assert_eq!(zone.radius_m, 75.0);
    }

    #[test]
    fn test_close_fix_beeps_and_notifies() {
        let (mut session, log) = session_with_mocks();
        session.set_target(target_at_origin(50.0));

        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        session.register_feedback_callback(Box::new(move |update| {
            sink.lock().unwrap().push(update);
        }));

        // ~11 m from the target center
        let outcome = session.process_fix(PositionFix::new(0.0, 0.0001, 1_000), 1_000);

        assert!(outcome.beeped);
        assert!(outcome.distance_m.unwrap() < 15.0);
        assert_eq!(log.play_count(), 1);

        let updates = updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].within_zone);
        assert!(updates[0].feedback.intensity > 0.9);
    }

    #[test]
    fn test_rapid_fixes_are_throttled() {
        let (mut session, log) = session_with_mocks();
        session.set_target(target_at_origin(50.0));

        session.process_fix(PositionFix::new(0.0, 0.0001, 1_000), 1_000);
        session.process_fix(PositionFix::new(0.0, 0.0001, 1_200), 1_200);

        assert_eq!(log.play_count(), 1);
        assert_eq!(session.state().beeps_emitted, 1);
    }

    #[test]
    fn test_zone_transition_events() {
        // Raw fixes, no smoothing lag, so the crossings are exact
        let mut session = HuntSession::new(
            SessionConfig {
                smoothing_enabled: false,
                ..Default::default()
            },
            Box::new(MockToneSink::new()),
            Box::new(MockHapticMotor::new()),
        );
        let events = collected_events(&mut session);
        session.set_target(target_at_origin(50.0));

        // Approach from outside the zone, enter, then leave
        session.process_fix(PositionFix::new(0.0, 0.001, 1_000), 1_000); // ~111 m
        session.process_fix(PositionFix::new(0.0, 0.0002, 3_000), 3_000); // ~22 m
        session.process_fix(PositionFix::new(0.0, 0.001, 5_000), 5_000); // ~111 m

        let events = events.lock().unwrap();
        let entered = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::ZoneEntered { .. }))
            .count();
        let exited = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::ZoneExited { .. }))
            .count();
        assert_eq!(entered, 1);
        assert_eq!(exited, 1);
    }

    #[test]
    fn test_rejected_fix_is_counted_and_reported() {
        let (mut session, _) = session_with_mocks();
        let events = collected_events(&mut session);
        session.set_target(target_at_origin(50.0));

        let outcome = session.process_fix(PositionFix::new(0.0, 95.0, 1_000), 1_000);

        assert!(!outcome.accepted);
        assert_eq!(session.state().fixes_rejected, 1);
        assert_eq!(session.state().fixes_processed, 0);

        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::FixRejected { .. })));
    }

    #[test]
    fn test_step_scoring_with_speed_bonus() {
        let (mut session, _) = session_with_mocks();

        session.start_step(10_000);
        let score = session.complete_step(70_000); // 60 s later

        assert_eq!(score.elapsed_secs, 60);
        assert_eq!(score.calculation.time_bonus, 40);
        assert!(score.speed_bonus_applied);
        // (100 + 40) * 1.5
        assert_eq!(score.final_score, 210);
        assert_eq!(session.state().steps_completed, 1);
    }

    #[test]
    fn test_step_scoring_with_hints() {
        let (mut session, _) = session_with_mocks();

        session.start_step(0);
        session.reveal_hint();
        session.reveal_hint();
        let score = session.complete_step(200_000); // 200 s, no speed bonus

        assert_eq!(score.elapsed_secs, 200);
        assert!(!score.speed_bonus_applied);
        assert_eq!(score.hints_revealed, 2);
        // 100 + floor(100/300*50) = 116, minus 2 hints at 10 points
        assert_eq!(score.calculation.time_bonus, 16);
        assert_eq!(score.final_score, 96);
    }

    #[test]
    fn test_slow_completion_scores_base_only() {
        let (mut session, _) = session_with_mocks();

        session.start_step(0);
        let score = session.complete_step(400_000); // past the bonus window

        assert_eq!(score.calculation.time_bonus, 0);
        assert!(!score.speed_bonus_applied);
        assert_eq!(score.final_score, 100);
    }

    #[test]
    fn test_hint_count_resets_between_steps() {
        let (mut session, _) = session_with_mocks();

        session.start_step(0);
        session.reveal_hint();
        session.complete_step(10_000);

        session.start_step(20_000);
        assert_eq!(session.hints_revealed(), 0);
    }

    #[test]
    fn test_callbacks_unregister() {
        let (mut session, _) = session_with_mocks();
        session.set_target(target_at_origin(50.0));

        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        let handle = session.register_feedback_callback(Box::new(move |update| {
            sink.lock().unwrap().push(update);
        }));

        session.process_fix(PositionFix::new(0.0, 0.0001, 1_000), 1_000);
        assert!(session.unregister_callback(handle));
        session.process_fix(PositionFix::new(0.0, 0.0001, 5_000), 5_000);

        assert_eq!(updates.lock().unwrap().len(), 1);
        assert!(!session.unregister_callback(handle));
    }

    #[test]
    fn test_session_works_without_audio_or_haptics() {
        let mut session = HuntSession::new(
            SessionConfig::default(),
            Box::new(NullToneSink::new()),
            Box::new(NullHapticMotor::new()),
        );
        session.set_target(target_at_origin(50.0));

        let outcome = session.process_fix(PositionFix::new(0.0, 0.0001, 1_000), 1_000);

        // No beep, but the pipeline keeps running and reports feedback
        assert!(outcome.accepted);
        assert!(!outcome.beeped);
        assert!(outcome.feedback.intensity > 0.9);
    }

    #[test]
    fn test_feedback_disabled_keeps_distance_flowing() {
        let sink = MockToneSink::new();
        let log = sink.log();
        let mut session = HuntSession::new(
            SessionConfig {
                feedback_enabled: false,
                ..Default::default()
            },
            Box::new(sink),
            Box::new(MockHapticMotor::new()),
        );
        session.set_target(target_at_origin(50.0));

        let outcome = session.process_fix(PositionFix::new(0.0, 0.0001, 1_000), 1_000);

        assert!(outcome.distance_m.is_some());
        assert!(!outcome.beeped);
        assert_eq!(log.play_count(), 0);
    }

    #[test]
    fn test_shutdown_stops_audio_and_drops_callbacks() {
        let (mut session, log) = session_with_mocks();
        let events = collected_events(&mut session);
        session.set_target(target_at_origin(50.0));
        session.process_fix(PositionFix::new(0.0, 0.0001, 1_000), 1_000);

        session.shutdown();

        assert!(log.stop_count() >= 1);
        assert!(session.target().is_none());

        // Events no longer reach the dropped callback
        let before = events.lock().unwrap().len();
        session.set_target(target_at_origin(50.0));
        assert_eq!(events.lock().unwrap().len(), before);
    }

    #[test]
    fn test_walk_toward_target_intensity_rises() {
        let (mut session, _) = session_with_mocks();
        session.set_target(target_at_origin(50.0));

        // Fixes every 3 s from ~140 m out to the center
        let distances_deg = [0.00126, 0.0009, 0.0006, 0.0003, 0.0001, 0.0];
        let mut last_intensity = -1.0;
        for (i, lat) in distances_deg.iter().enumerate() {
            let t = (i as u64 + 1) * 3_000;
            let outcome = session.process_fix(
                PositionFix::new(0.0, *lat, t).with_accuracy(5.0),
                t,
            );
            assert!(outcome.accepted);
            assert!(
                outcome.feedback.intensity >= last_intensity,
                "intensity fell while approaching"
            );
            last_intensity = outcome.feedback.intensity;
        }

        assert!(session.state().within_zone);
        assert!(session.state().beeps_emitted >= 2);
    }
}
