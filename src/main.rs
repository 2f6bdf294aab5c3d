//! Demo: a simulated walk toward a hunt step target.
//!
//! Feeds a scripted series of position fixes through a session with a
//! console tone backend and prints the feedback the player would get.

use geohunt::{
    format_distance, HuntSession, NullHapticMotor, PlatformResult, PositionFix, SessionConfig,
    SessionEvent, ToneSink, ToneSpec,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Tone sink that prints beeps instead of playing them
struct ConsoleToneSink;

impl ToneSink for ConsoleToneSink {
    fn play_tone(&mut self, spec: &ToneSpec) -> PlatformResult<()> {
        println!(
            "  * beep {:.0} Hz for {} ms at volume {:.2}",
            spec.frequency_hz, spec.duration_ms, spec.volume
        );
        Ok(())
    }

    fn stop(&mut self) -> PlatformResult<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn main() {
    let base_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = HuntSession::new(
        SessionConfig::default(),
        Box::new(ConsoleToneSink),
        Box::new(NullHapticMotor::new()),
    );

    session.register_event_callback(Box::new(|event| match event {
        SessionEvent::ZoneEntered { distance_m } => {
            println!("  >> entered the validation zone at {}", format_distance(distance_m));
        }
        SessionEvent::ZoneExited { distance_m } => {
            println!("  << left the validation zone at {}", format_distance(distance_m));
        }
        _ => {}
    }));

    // Step target in central Paris, 50 m validation radius
    if !session.set_target_wkt("SRID=4326;POINT(2.3522 48.8566)", 50.0) {
        eprintln!("Could not set target");
        return;
    }

    println!("Walking toward the target...");
    session.start_step(base_ms);

    // Approach from ~160 m south in ~20 m steps, one fix every 3 s
    for i in 0..9u64 {
        let now_ms = base_ms + i * 3_000;
        let lat = 48.8566 - 0.00144 + 0.00018 * i as f64;
        let fix = PositionFix::new(2.3522, lat, now_ms).with_accuracy(8.0);

        let outcome = session.process_fix(fix, now_ms);
        match outcome.distance_m {
            Some(d) => println!(
                "t+{:>2}s  {:>6} away, intensity {:.2}",
                i * 3,
                format_distance(d),
                outcome.feedback.intensity
            ),
            None => println!("t+{:>2}s  no target", i * 3),
        }
    }

    session.reveal_hint();
    let score = session.complete_step(base_ms + 27_000);

    println!(
        "\nStep complete in {} s: {} base + {} bonus, speed bonus {}, {} hint(s) -> {} points",
        score.elapsed_secs,
        score.calculation.base_points,
        score.calculation.time_bonus,
        if score.speed_bonus_applied { "applied" } else { "missed" },
        score.hints_revealed,
        score.final_score
    );

    session.shutdown();
}
