pub mod capability;
pub mod sequencer;
pub mod session;
pub mod voice;

pub use capability::{BackgroundAudio, Delay, NarrationRequest, Narrator};
pub use sequencer::{ChantOutcome, ChantSequencer};
pub use session::{ChantState, Rounds, Session};
pub use voice::{Voice, VoiceSelection};

/// Beads on one mala; one round is this many chants.
pub const BEADS_PER_ROUND: u64 = 128;

pub const MANTRA: &str =
    "Hare Krishna Hare Krishna Krishna Krishna Hare Hare, Hare Ram Hare Ram Ram Ram Hare Hare.";

/// The mantra as shown on screen.
pub const MANTRA_LINES: [&str; 2] = [
    "Hare Krishna Hare Krishna Krishna Krishna Hare",
    "Hare Ram Hare Ram Ram Ram Hare Hare.",
];

// Fixed for a soft delivery.
pub const NARRATION_PITCH: f32 = 0.1;
pub const NARRATION_VOLUME: f32 = 0.2;
