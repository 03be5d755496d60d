use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

/// One transcribed utterance: a time span plus its text.
///
/// Times are kept as the strings the transcriber wrote; the matcher never
/// does arithmetic on them and the reporter echoes them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: String,
    pub end: String,
    pub text: String,
}

/// Read segments from a headerless `start_time, end_time, text` CSV file.
pub fn read_file(path: &Path) -> Result<Vec<Segment>, Box<dyn std::error::Error + Send + Sync>> {
    let file = File::open(path)?;
    read_segments(file)
}

/// Read segments from any CSV source. Rows without exactly three fields are
/// skipped silently; everything else is taken verbatim apart from
/// whitespace trimming.
pub fn read_segments<R: Read>(
    reader: R,
) -> Result<Vec<Segment>, Box<dyn std::error::Error + Send + Sync>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut segments = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.len() != 3 {
            log::debug!("Skipping malformed row with {} fields", record.len());
            continue;
        }
        segments.push(Segment {
            start: record[0].to_string(),
            end: record[1].to_string(),
            text: record[2].to_string(),
        });
    }
    Ok(segments)
}
