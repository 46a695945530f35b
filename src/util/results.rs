//! CSV files holding benchmark timings
//!
//! Only elapsed times and graph sizes are written, never traversal results.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::Duration;

const HEADER: [&str; 6] = [
    "vertices",
    "connections",
    "edges",
    "serial_ms",
    "parallel_ms",
    "threads",
];

/// one serial-vs-parallel measurement on a single generated graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRecord {
    pub vertices: usize,
    pub connections: usize,
    pub edges: usize,
    pub serial: Duration,
    pub parallel: Duration,
    pub threads: usize,
}

impl BenchmarkRecord {
    fn fields(&self) -> [String; 6] {
        [
            self.vertices.to_string(),
            self.connections.to_string(),
            self.edges.to_string(),
            self.serial.as_millis().to_string(),
            self.parallel.as_millis().to_string(),
            self.threads.to_string(),
        ]
    }
}

/// Appends benchmark records to a CSV file, flushing after every row so that a
/// long sweep leaves usable output behind if it is interrupted.
pub struct ResultsWriter {
    writer: csv::Writer<fs::File>,
}

impl ResultsWriter {
    /// Opens `path` for appending, creating it and its parent directories if needed.
    /// The header is only written when the file is empty.
    pub fn open(path: &Path) -> csv::Result<ResultsWriter> {
        create_parent_dir(path)?;

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::Writer::from_writer(file);

        if writer.get_ref().metadata()?.len() == 0 {
            writer.write_record(HEADER)?;
            writer.flush()?;
        }

        Ok(ResultsWriter { writer })
    }

    pub fn append(&mut self, record: &BenchmarkRecord) -> csv::Result<()> {
        self.writer.write_record(record.fields())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes a thread-scaling table: one row per mode (e.g. `serial`, `parallel_4`)
/// and one millisecond column per graph size. Overwrites `path`.
pub fn write_scaling_table(
    path: &Path,
    sizes: &[usize],
    rows: &[(String, Vec<Duration>)],
) -> csv::Result<()> {
    create_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["mode".to_string()];
    header.extend(sizes.iter().map(|size| size.to_string()));
    writer.write_record(&header)?;

    for (mode, times) in rows {
        let mut record = vec![mode.clone()];
        record.extend(times.iter().map(|time| time.as_millis().to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
