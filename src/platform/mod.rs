//! Platform capability layer for audio and vibration output
//!
//! The feedback renderer talks to the device through these trait seams so
//! the proximity math stays testable without any real audio or vibration
//! backend. Platforms without a capability plug in the null backends and
//! the renderer degrades to visual-only feedback.

pub mod error;
pub mod haptic;
pub mod mock;
pub mod tone;

pub use error::{PlatformError, PlatformResult};
pub use haptic::{HapticMotor, NullHapticMotor};
pub use mock::{HapticLog, MockHapticMotor, MockToneSink, ToneLog};
pub use tone::{NullToneSink, ToneSink, ToneSpec};
