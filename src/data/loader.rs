use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{parse_year, Sighting, SightingDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV header missing a '{0}' column")]
    MissingColumn(&'static str),
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("opening file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a sighting dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<SightingDataset, DataError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Parse sightings from any CSV source with a header row.
///
/// Columns are located by substring match on the header names, so both a bare
/// `latitude` and the dataset's `duration (seconds)` resolve naturally.
/// Rows with non-numeric or out-of-range coordinates are dropped silently;
/// the drop count is logged once at the end.
pub fn read_csv<R: Read>(input: R) -> Result<SightingDataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let col = |needle: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h.contains(needle))
            .ok_or(DataError::MissingColumn(needle))
    };

    let lat_idx = col("latitude")?;
    let lon_idx = col("longitude")?;
    let date_idx = col("datetime")?;
    let shape_idx = col("shape")?;
    let duration_idx = col("duration (seconds)")?;

    let mut sightings = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                // Best effort: a malformed line is skipped, not fatal.
                dropped += 1;
                continue;
            }
        };

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let lat: f64 = match field(lat_idx).parse() {
            Ok(v) => v,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };
        let lon: f64 = match field(lon_idx).parse() {
            Ok(v) => v,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            dropped += 1;
            continue;
        }

        let date = field(date_idx).to_string();
        let shape = {
            let s = field(shape_idx);
            if s.is_empty() {
                "unknown".to_string()
            } else {
                s.to_ascii_lowercase()
            }
        };
        let duration_secs = field(duration_idx).parse::<f64>().unwrap_or(0.0);

        sightings.push(Sighting {
            latitude: lat,
            longitude: lon,
            year: parse_year(&date),
            date,
            shape,
            duration_secs,
        });
    }

    if dropped > 0 {
        log::info!("dropped {dropped} malformed or out-of-range rows");
    }

    Ok(SightingDataset::new(sightings))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "datetime,city,state,country,shape,\
duration (seconds),duration (hours/min),comments,date posted,latitude,longitude\n";

    fn load(rows: &str) -> SightingDataset {
        let text = format!("{HEADER}{rows}");
        read_csv(text.as_bytes()).expect("parse")
    }

    #[test]
    fn parses_a_valid_row() {
        let ds = load("10/10/1949 20:30,san marcos,tx,us,cylinder,2700,45 minutes,seen,4/27/2004,29.8830556,-97.9411111\n");
        assert_eq!(ds.len(), 1);
        let s = &ds.sightings[0];
        assert_eq!(s.shape, "cylinder");
        assert_eq!(s.year, Some(1949));
        assert_eq!(s.duration_secs, 2700.0);
        assert!((s.latitude - 29.8830556).abs() < 1e-9);
        assert!((s.longitude + 97.9411111).abs() < 1e-9);
    }

    #[test]
    fn header_lookup_matches_by_substring() {
        // Decorated header names still resolve.
        let text = "event datetime,ufo shape,duration (seconds) reported,latitude (deg),longitude (deg)\n\
                    1/1/2001 10:00,disk,60,10.0,20.0\n";
        let ds = read_csv(text.as_bytes()).expect("parse");
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.sightings[0].shape, "disk");
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "datetime,shape,duration (seconds),latitude\n";
        match read_csv(text.as_bytes()) {
            Err(DataError::MissingColumn("longitude")) => {}
            other => panic!("expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_coordinates_are_dropped() {
        let ds = load(
            "1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,91.0,0.0\n\
             1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,-91.0,0.0\n\
             1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,0.0,181.0\n\
             1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,0.0,-181.0\n\
             1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,90.0,-180.0\n",
        );
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.sightings[0].latitude, 90.0);
    }

    #[test]
    fn non_numeric_coordinates_are_dropped() {
        let ds = load(
            "1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,not-a-number,0.0\n\
             1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,40.0,-75.0\n",
        );
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn empty_shape_and_duration_get_placeholders() {
        let ds = load("1/1/2001 10:00,a,b,us,,,,x,1/1/2001,40.0,-75.0\n");
        assert_eq!(ds.sightings[0].shape, "unknown");
        assert_eq!(ds.sightings[0].duration_secs, 0.0);
    }

    #[test]
    fn shape_is_lower_cased() {
        let ds = load("1/1/2001 10:00,a,b,us,TRIANGLE,10,,x,1/1/2001,40.0,-75.0\n");
        assert_eq!(ds.sightings[0].shape, "triangle");
    }

    #[test]
    fn short_rows_are_skipped_not_fatal() {
        let ds = load(
            "only,two\n\
             1/1/2001 10:00,a,b,us,light,10,,x,1/1/2001,40.0,-75.0\n",
        );
        assert_eq!(ds.len(), 1);
    }
}
