/// One observed (source, strength) pair within a scan burst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReading {
    /// Position of the reading within its burst, as printed in the log.
    pub ordinal: u32,
    /// Identifier of the signal source (an access point name).
    pub source_id: String,
    /// Measured signal strength in dBm, zero or negative.
    pub signal_strength: i32,
}

impl RawReading {
    /// Create a new reading.
    pub fn new<T: Into<String>>(ordinal: u32, source_id: T, signal_strength: i32) -> Self {
        Self {
            ordinal,
            source_id: source_id.into(),
            signal_strength,
        }
    }

    /// Absolute magnitude of the signal, the value stored in feature vectors.
    pub fn magnitude(&self) -> u32 {
        self.signal_strength.unsigned_abs()
    }
}

/// One scan burst: the ordered readings between two non-reading lines
/// of a capture file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    /// Readings in the order they appear in the log.
    pub readings: Vec<RawReading>,
}

impl Sample {
    /// Number of readings in the burst.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if the burst holds no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// First reading whose source id matches exactly, in reading order.
    /// Duplicate sources within one burst resolve to the earliest reading.
    pub fn find(&self, source_id: &str) -> Option<&RawReading> {
        self.readings.iter().find(|r| r.source_id == source_id)
    }
}
