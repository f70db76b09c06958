use log::debug;

use crate::error::{Error, Result};
use crate::reading::{RawReading, Sample};

/// Suffix stripped from a capture file's name to obtain its class label.
/// Must match the value used by the acquisition utility.
pub const CAPTURE_FILE_SUFFIX: &str = "_data.dat";

/// One parsed capture file: a class label plus its deduplicated scan bursts.
///
/// A capture file records every scan taken in a single physical room, so
/// the whole file maps to exactly one classifier label.
#[derive(Debug, Clone)]
pub struct CaptureFile {
    /// Class label: the file's base name with [`CAPTURE_FILE_SUFFIX`] stripped.
    pub label: String,
    /// Accepted bursts in file order.
    pub samples: Vec<Sample>,
    /// Bursts discarded because a structurally identical one was already
    /// accepted from this file.
    pub duplicates: usize,
}

/// Line classification state while walking a capture file.
enum BurstState {
    Outside,
    Inside(Sample),
}

impl CaptureFile {
    /// Parse the raw text of one capture file.
    ///
    /// A line is a reading line iff it is non-empty and contains a `:`;
    /// any other line closes the current burst. A reading line that then
    /// fails field extraction is a fatal [`Error::Parse`] for the run.
    pub fn parse(file_name: &str, text: &str) -> Result<CaptureFile> {
        let label = Self::label_for(file_name);
        let mut samples: Vec<Sample> = Vec::new();
        let mut duplicates = 0usize;
        let mut state = BurstState::Outside;

        for (index, line) in text.lines().enumerate() {
            if is_reading_line(line) {
                let reading = parse_reading_line(line).map_err(|reason| Error::Parse {
                    file: file_name.to_string(),
                    line: index + 1,
                    reason,
                })?;
                match &mut state {
                    BurstState::Inside(sample) => sample.readings.push(reading),
                    BurstState::Outside => {
                        let mut sample = Sample::default();
                        sample.readings.push(reading);
                        state = BurstState::Inside(sample);
                    }
                }
            } else if let BurstState::Inside(sample) =
                std::mem::replace(&mut state, BurstState::Outside)
            {
                accept_burst(&mut samples, &mut duplicates, sample, &label);
            }
        }
        // End of file closes a still-open burst.
        if let BurstState::Inside(sample) = state {
            accept_burst(&mut samples, &mut duplicates, sample, &label);
        }

        debug!(
            "parsed {}: {} samples, {} duplicates",
            file_name,
            samples.len(),
            duplicates
        );
        Ok(CaptureFile {
            label,
            samples,
            duplicates,
        })
    }

    /// Derive the class label from a capture file name.
    pub fn label_for(file_name: &str) -> String {
        file_name
            .strip_suffix(CAPTURE_FILE_SUFFIX)
            .unwrap_or(file_name)
            .to_string()
    }
}

/// A burst only ever holds at least one reading, so acceptance is purely
/// a question of structural equality with earlier bursts from this file.
fn accept_burst(samples: &mut Vec<Sample>, duplicates: &mut usize, candidate: Sample, label: &str) {
    if samples.contains(&candidate) {
        *duplicates += 1;
        debug!("{}: duplicate burst discarded", label);
    } else {
        samples.push(candidate);
    }
}

fn is_reading_line(line: &str) -> bool {
    !line.is_empty() && line.contains(':')
}

/// Extract the three fields of a reading line:
/// `<ordinal>: <source_name> (<signal>)[trailing marker]`.
///
/// The source name is the text between the colon plus one separator
/// character and one character before the `(` opening the signal value,
/// so exactly one space is dropped on each side. The signal value sits
/// between the last `(` preceding the last `)`, which tolerates a
/// trailing marker such as `*` after the closing parenthesis.
fn parse_reading_line(line: &str) -> std::result::Result<RawReading, String> {
    let colon = line.find(':').ok_or("missing ':' delimiter")?;
    let ordinal = line[..colon]
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("ordinal {:?} is not an integer", &line[..colon]))?;

    let rparen = line.rfind(')').ok_or("missing ')' after signal value")?;
    let lparen = line[..rparen]
        .rfind('(')
        .ok_or("missing '(' before signal value")?;
    let signal_text = line[lparen + 1..rparen].trim();
    let signal_strength = signal_text
        .parse::<i32>()
        .map_err(|_| format!("signal {:?} is not an integer", signal_text))?;

    let start = colon + 2;
    let end = lparen.saturating_sub(1);
    let source_id = if start >= end {
        String::new()
    } else {
        line.get(start..end)
            .ok_or("source name does not fall on character boundaries")?
            .to_string()
    };

    Ok(RawReading {
        ordinal,
        source_id,
        signal_strength,
    })
}
