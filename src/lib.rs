//! Build an nf-core/rnaseq samplesheet from a directory of paired
//! `fastq.gz` read files.
//!
//! Read files are sorted by name and walked two at a time; neighbours whose
//! first three `_`-delimited tokens agree become one row
//! `sample,fastq_1,fastq_2,strandedness`. Sample names are the token before
//! the first `_`, optionally translated through a JSON name map.

pub mod error;
pub mod sample_sheet;

pub use error::{Error, Result};
pub use sample_sheet::{BuildOptions, BuildReport, SampleRow, SampleSheet, SemanticNames};
