//! Audio event routing.
//!
//! The core never touches a sound device; it forwards cues to whatever sink
//! the embedding application installs. The default sink only traces.

use bevy_ecs::prelude::*;
use tracing::trace;

use crate::events::AudioEvent;

use super::components::ModeFlags;

/// Receives sound cues. Implemented by the embedding frontend.
pub trait AudioSink {
    fn play(&mut self, event: AudioEvent);
}

/// Sink that drops every cue, with a trace for diagnostics.
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, event: AudioEvent) {
        trace!(%event, "Audio cue (no sink installed)");
    }
}

/// The installed sink. Non-send because real sinks usually wrap an audio
/// device handle that is not `Send`.
pub struct AudioOutput(pub Box<dyn AudioSink>);

/// Drains the frame's cues into the sink, unless muted.
pub fn audio_system(
    mut output: NonSendMut<AudioOutput>,
    flags: Res<ModeFlags>,
    mut events: EventReader<AudioEvent>,
) {
    for event in events.read() {
        if flags.contains(ModeFlags::MUTED) {
            trace!(%event, "Audio cue muted");
            continue;
        }
        output.0.play(*event);
    }
}
