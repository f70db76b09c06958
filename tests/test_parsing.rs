use rssi_dataset::{CaptureFile, Error};

const KITCHEN: &str = "\
1: HomeNet (-50)*
2: MEJ-BB870J (-92)*
3: Frases e candeeiros (-89)*

1: HomeNet (-52)*
2: MEJ-BB870J (-90)*
";

#[test]
fn test_capture_file_round_trip() {
    let file = CaptureFile::parse("kitchen_data.dat", KITCHEN).unwrap();
    assert_eq!(file.label, "kitchen");
    assert_eq!(file.samples.len(), 2);
    assert_eq!(file.duplicates, 0);

    let first = &file.samples[0];
    assert_eq!(first.len(), 3);
    assert_eq!(first.readings[1].ordinal, 2);
    assert_eq!(first.readings[1].source_id, "MEJ-BB870J");
    assert_eq!(first.readings[1].signal_strength, -92);
    assert_eq!(first.readings[2].source_id, "Frases e candeeiros");
}

#[test]
fn test_deduplication_is_idempotent() {
    // Appending a verbatim copy of a burst must change nothing but the
    // duplicate counter.
    let clean = CaptureFile::parse("kitchen_data.dat", KITCHEN).unwrap();

    let duplicated = format!("{}\n1: HomeNet (-52)*\n2: MEJ-BB870J (-90)*\n", KITCHEN);
    let parsed = CaptureFile::parse("kitchen_data.dat", &duplicated).unwrap();

    assert_eq!(parsed.samples, clean.samples);
    assert_eq!(parsed.duplicates, clean.duplicates + 1);
}

#[test]
fn test_garbage_line_terminates_burst_without_error() {
    let text = "1: A (-50)\ngarbage\n1: A (-50)\n";
    let file = CaptureFile::parse("hall_data.dat", text).unwrap();
    // The second burst is a duplicate of the first.
    assert_eq!(file.samples.len(), 1);
    assert_eq!(file.duplicates, 1);
}

#[test]
fn test_non_integer_signal_is_a_parse_error() {
    let result = CaptureFile::parse("hall_data.dat", "1: X (abc)\n");
    match result {
        Err(Error::Parse { file, line, .. }) => {
            assert_eq!(file, "hall_data.dat");
            assert_eq!(line, 1);
        }
        other => panic!("expected parse error, got {:?}", other.map(|f| f.samples.len())),
    }
}

#[test]
fn test_missing_parenthesis_is_a_parse_error() {
    assert!(CaptureFile::parse("hall_data.dat", "1: X -50\n").is_err());
}
