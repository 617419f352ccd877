// src/sample_sheet/mod.rs
pub mod fastq_name;
pub mod pairing;
pub mod sample_row;
pub mod sample_sheet;
pub mod semantic_names;

pub use fastq_name::FastqName;
pub use pairing::{PairWalk, Pairing};
pub use sample_row::SampleRow;
pub use sample_sheet::{BuildOptions, BuildReport, SampleSheet, OUTPUT_FILE};
pub use semantic_names::SemanticNames;
