//! CSV populator for aggregation fixtures.

use crate::error::CSVPopulatorError;
use aggtest_generator::{Record, RecordGenerator};
use aggtest_populate::{data_row_count, PopulateMetrics, DEFAULT_BUFFER_SIZE};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// CSV populator that generates fixture files.
pub struct CSVPopulator {
    generator: RecordGenerator,
}

impl CSVPopulator {
    /// Create a new CSV populator.
    ///
    /// # Arguments
    ///
    /// * `seed` - Random seed for deterministic generation
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
        }
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Generate a CSV file for the requested row count.
    ///
    /// The header occupies the first of the `count` rows, so the file holds
    /// `count - 1` data records. Lines are separated by `\n`.
    ///
    /// # Arguments
    ///
    /// * `output_path` - Path to the output CSV file
    /// * `count` - Requested number of rows, header included
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        let data_rows = data_row_count(count);
        info!(
            "Generating CSV file '{}' with {} data rows ({} requested)",
            output_path.display(),
            data_rows,
            count
        );

        // Create writer
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buf_writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        let write_start = Instant::now();
        writer.write_record(Record::field_names())?;
        write_time += write_start.elapsed();

        for _ in 0..data_rows {
            let gen_start = Instant::now();
            let record = self.generator.next_record()?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(record.formatted_values())?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        // Flush and get file size
        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CSVPopulatorError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
