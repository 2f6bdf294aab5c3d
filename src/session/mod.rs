//! Callback-based play-session engine

pub mod engine;

pub use engine::{
    CallbackHandle, EventCallback, FeedbackCallback, FeedbackUpdate, HuntSession, ProcessOutcome,
    SessionEvent, SessionState, StepScore,
};
