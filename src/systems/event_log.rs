//! Markdown event log.
//!
//! Gameplay outcomes are appended to a markdown table on disk, one row per
//! hit, miss, level-up or game over. Logging failures never interrupt play;
//! the log just switches itself off.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bevy_ecs::prelude::*;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::LogError;
use crate::events::{LogRecord, RecordKind};

const HEADER: &str = "# Whack-a-Zombie Game Log\n\n\
                      | Timestamp | Position (x,y) | Result | Details |\n\
                      |-----------|----------------|--------|---------|\n";

/// Sink for [`LogRecord`]s. Holds an open file, or nothing when logging is
/// disabled or has failed.
#[derive(Resource)]
pub struct EventLog {
    writer: Option<BufWriter<File>>,
}

impl EventLog {
    /// Opens (truncating) the log file and writes the table header.
    pub fn open(path: &Path) -> Result<Self, LogError> {
        let file = File::create(path).map_err(|source| LogError::Open {
            path: path.to_owned(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(HEADER.as_bytes())?;
        Ok(EventLog {
            writer: Some(writer),
        })
    }

    /// A log that silently discards records.
    pub fn disabled() -> Self {
        EventLog { writer: None }
    }

    fn append(&mut self, record: &LogRecord) -> Result<(), LogError> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        let timestamp = OffsetDateTime::now_utc()
            .format(format_description!("[hour]:[minute]:[second].[subsecond digits:3]"))?;
        let position = match record.position {
            Some(p) => format!("({}, {})", p.x.round() as i32, p.y.round() as i32),
            None => "SYSTEM".to_owned(),
        };
        writeln!(
            writer,
            "| {} | {} | {} | {} |",
            timestamp, position, record.kind, record.details
        )?;
        // Rows should survive a crash mid-run
        writer.flush()?;
        Ok(())
    }
}

/// Appends the frame's records. A write failure disables further logging.
pub fn event_log_system(mut log: ResMut<EventLog>, mut records: EventReader<LogRecord>) {
    for record in records.read() {
        if let Err(error) = log.append(record) {
            warn!(%error, "Event log write failed; disabling log");
            log.writer = None;
        }
    }
}
