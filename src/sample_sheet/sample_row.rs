// src/sample_sheet/sample_row.rs
use serde::Serialize;

/// Fixed strandedness marker; the downstream pipeline infers it.
pub const STRANDEDNESS_AUTO: &str = "auto";

/// One samplesheet line. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRow {
    pub sample: String,
    pub fastq_1: String,
    pub fastq_2: String,
    pub strandedness: String,
}

impl SampleRow {
    pub fn new(sample: &str, fastq_1: &str, fastq_2: &str) -> Self {
        SampleRow {
            sample: sample.to_string(),
            fastq_1: fastq_1.to_string(),
            fastq_2: fastq_2.to_string(),
            strandedness: STRANDEDNESS_AUTO.to_string(),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.sample, &self.fastq_1, &self.fastq_2, &self.strandedness]
    }
}
