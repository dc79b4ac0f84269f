//! XML populator for aggregation fixtures.

use crate::error::XMLPopulatorError;
use aggtest_generator::{Record, RecordGenerator};
use aggtest_populate::{data_row_count, PopulateMetrics, DEFAULT_BUFFER_SIZE};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Name of the document element.
pub const ROOT_ELEMENT: &str = "root";

/// Name of the element wrapping each record.
pub const ROW_ELEMENT: &str = "row";

const INDENT_SIZE: usize = 2;

/// XML populator that generates fixture files.
pub struct XMLPopulator {
    generator: RecordGenerator,
    indent: bool,
}

impl XMLPopulator {
    /// Create a new XML populator.
    ///
    /// # Arguments
    ///
    /// * `seed` - Random seed for deterministic generation
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
            indent: false,
        }
    }

    /// Set whether to indent nested elements.
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Generate an XML file for the requested row count.
    ///
    /// Like the CSV populator, the first of the `count` rows is never
    /// emitted, so the root holds `count - 1` row elements. The document
    /// starts with the UTF-8 XML declaration.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, XMLPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        let data_rows = data_row_count(count);
        info!(
            "Generating XML file '{}' with {} rows ({} requested)",
            output_path.display(),
            data_rows,
            count
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = if self.indent {
            Writer::new_with_indent(buf_writer, b' ', INDENT_SIZE)
        } else {
            Writer::new(buf_writer)
        };

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        let write_start = Instant::now();
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Text(BytesText::new("\n")))?;
        writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
        write_time += write_start.elapsed();

        for _ in 0..data_rows {
            let gen_start = Instant::now();
            let record = self.generator.next_record()?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            write_row(&mut writer, &record)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        writer.into_inner().flush()?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "XML generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

/// Write one `<row>` element with a leaf per record field.
fn write_row<W: Write>(writer: &mut Writer<W>, record: &Record) -> Result<(), XMLPopulatorError> {
    writer.write_event(Event::Start(BytesStart::new(ROW_ELEMENT)))?;
    for field in record.fields() {
        let text = field.to_string();
        writer.write_event(Event::Start(BytesStart::new(field.name())))?;
        writer.write_event(Event::Text(BytesText::new(&text)))?;
        writer.write_event(Event::End(BytesEnd::new(field.name())))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROW_ELEMENT)))?;
    Ok(())
}
