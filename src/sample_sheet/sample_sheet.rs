// src/sample_sheet/sample_sheet.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::sample_sheet::fastq_name::DEFAULT_SUFFIX;
use crate::sample_sheet::{FastqName, PairWalk, Pairing, SampleRow, SemanticNames};

/// Name of the sheet written into the output directory.
pub const OUTPUT_FILE: &str = "samplesheet.csv";

pub const HEADER: [&str; 4] = ["sample", "fastq_1", "fastq_2", "strandedness"];

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Everything after the first '.' of a read filename.
    pub suffix: String,
    /// Warn about and drop unmatched files instead of failing.
    pub skip_missing: bool,
    pub semantic_names: Option<SemanticNames>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            suffix: DEFAULT_SUFFIX.to_string(),
            skip_missing: false,
            semantic_names: None,
        }
    }
}

/// What happened during a build besides the rows themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// read files that passed the suffix filter
    pub candidates: usize,
    /// files dropped for lacking a mate, in walk order
    pub skipped: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleSheet {
    pub rows: Vec<SampleRow>,
}

impl SampleSheet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Filter, sort, pair and rename a raw directory listing.
    /// The input order does not matter.
    pub fn build<I, S>(listing: I, opts: &BuildOptions) -> Result<(Self, BuildReport)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files: Vec<FastqName> = listing
            .into_iter()
            .filter_map(|n| FastqName::parse(n.as_ref(), &opts.suffix))
            .collect();
        files.sort();

        let mut report = BuildReport { candidates: files.len(), ..Default::default() };
        let mut sheet = SampleSheet::default();

        for step in PairWalk::new(&files) {
            match step {
                Pairing::Mates(fwd, rev) => {
                    let sample = match &opts.semantic_names {
                        Some(names) => names.resolve(fwd.sample_id())?,
                        None => fwd.sample_id(),
                    };
                    tracing::debug!("paired {} with {} as '{}'", fwd, rev, sample);
                    sheet.rows.push(SampleRow::new(sample, fwd.as_str(), rev.as_str()));
                }
                Pairing::Orphan(file) => {
                    if !opts.skip_missing {
                        return Err(Error::MissingMate { file: file.name.clone() });
                    }
                    tracing::warn!(
                        "File {} is missing its paired counterpart, this sample will be skipped",
                        file
                    );
                    report.skipped.push(file.name.clone());
                }
            }
        }

        Ok((sheet, report))
    }

    /// List `data_dir` (no recursion) and build from the regular files in it.
    pub fn from_dir<P: AsRef<Path>>(data_dir: P, opts: &BuildOptions) -> Result<(Self, BuildReport)> {
        let data_dir = data_dir.as_ref();
        // surfaces unreadable or missing dirs, which the walk would swallow
        fs::read_dir(data_dir).map_err(|e| Error::io(data_dir, e))?;

        let mut listing = Vec::new();
        for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1).follow_links(true) {
            // a dangling link or unstat-able entry must not vanish silently
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(data_dir).to_path_buf();
                Error::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => listing.push(name.to_string()),
                None => tracing::debug!("ignoring non-utf8 filename {}", entry.path().display()),
            }
        }
        tracing::debug!("{} files listed in {}", listing.len(), data_dir.display());

        Self::build(listing, opts)
    }

    /// Write `samplesheet.csv` into `out_dir`. The sheet is written to a
    /// temporary file first and renamed, so a failed write leaves no sheet.
    pub fn write_csv<P: AsRef<Path>>(&self, out_dir: P) -> Result<PathBuf> {
        let out_dir = out_dir.as_ref();
        let out_path = out_dir.join(OUTPUT_FILE);
        let tmp_path = out_dir.join(format!("{OUTPUT_FILE}.tmp"));

        let file = File::create(&tmp_path).map_err(|e| Error::io(&tmp_path, e))?;
        if let Err(e) = self.write_records(file) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        fs::rename(&tmp_path, &out_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            Error::io(&out_path, e)
        })?;
        Ok(out_path)
    }

    /// Serialize header and rows to any writer.
    pub fn write_records<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// First `n` rows as a space aligned text table, for a quick look.
    pub fn snapshot(&self, n: usize) -> String {
        let shown: Vec<[&str; 4]> = self.rows.iter().take(n).map(SampleRow::cells).collect();

        let mut widths = HEADER.map(str::len);
        for cells in &shown {
            for (w, c) in widths.iter_mut().zip(cells.iter()) {
                *w = (*w).max(c.len());
            }
        }

        let mut out = String::new();
        let mut push_line = |cells: &[&str; 4]| {
            let line: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(c, &w)| format!("{c:<w$}"))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };
        push_line(&HEADER);
        for cells in &shown {
            push_line(cells);
        }
        if self.rows.len() > n {
            out.push_str(&format!("... {} more rows\n", self.rows.len() - n));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const PAIRED: [&str; 4] = [
        "Ctrl_S1_L001_R1_001.fastq.gz",
        "Ctrl_S1_L001_R2_001.fastq.gz",
        "Drought_S2_L001_R1_001.fastq.gz",
        "Drought_S2_L001_R2_001.fastq.gz",
    ];

    fn to_csv(sheet: &SampleSheet) -> String {
        let mut buf = Vec::new();
        sheet.write_records(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn builds_one_row_per_pair() {
        let mut listing = PAIRED.to_vec();
        listing.push("notes.txt");
        listing.push("Ctrl_S1_L001_R1_001.fastq.gz.md5");
        let (sheet, report) = SampleSheet::build(listing, &BuildOptions::default()).unwrap();

        assert_eq!(report.candidates, 4);
        assert!(report.skipped.is_empty());
        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.rows[0],
            SampleRow::new("Ctrl", "Ctrl_S1_L001_R1_001.fastq.gz", "Ctrl_S1_L001_R2_001.fastq.gz")
        );
        assert_eq!(sheet.rows[1].strandedness, "auto");
    }

    #[test]
    fn listing_order_does_not_matter() {
        let opts = BuildOptions::default();
        let (sorted, _) = SampleSheet::build(PAIRED, &opts).unwrap();
        let shuffled = [PAIRED[3], PAIRED[0], PAIRED[2], PAIRED[1]];
        let (from_shuffled, _) = SampleSheet::build(shuffled, &opts).unwrap();
        assert_eq!(sorted, from_shuffled);
    }

    #[test]
    fn strict_mode_fails_on_first_orphan() {
        let mut listing = PAIRED.to_vec();
        listing.push("Alone_S3_L001_R1_001.fastq.gz");
        match SampleSheet::build(listing, &BuildOptions::default()) {
            Err(Error::MissingMate { file }) => assert_eq!(file, "Alone_S3_L001_R1_001.fastq.gz"),
            other => panic!("expected MissingMate, got {other:?}"),
        }
    }

    #[test]
    fn lenient_mode_skips_and_reports_orphans() {
        let mut listing = PAIRED.to_vec();
        listing.push("Alone_S3_L001_R1_001.fastq.gz");
        listing.push("Zed_S4_L001_R2_001.fastq.gz");
        let opts = BuildOptions { skip_missing: true, ..Default::default() };
        let (sheet, report) = SampleSheet::build(listing, &opts).unwrap();

        assert_eq!(sheet.len(), 2);
        assert_eq!(
            report.skipped,
            vec!["Alone_S3_L001_R1_001.fastq.gz", "Zed_S4_L001_R2_001.fastq.gz"]
        );
        assert_eq!(report.candidates, 6);
    }

    #[test]
    fn semantic_names_replace_sample_ids() {
        let names = SemanticNames::from_map(HashMap::from([
            ("S1".to_string(), "ControlRep1".to_string()),
        ]));
        let opts = BuildOptions { semantic_names: Some(names), ..Default::default() };
        let (sheet, _) = SampleSheet::build(
            ["S1_L001_R2_001.fastq.gz", "S1_L001_R1_001.fastq.gz"],
            &opts,
        )
        .unwrap();
        assert_eq!(sheet.rows[0].sample, "ControlRep1");
        assert_eq!(sheet.rows[0].fastq_1, "S1_L001_R1_001.fastq.gz");
    }

    #[test]
    fn samples_named_like_read_directions_do_not_pair() {
        let listing = ["R1_L001_R1_001.fastq.gz", "R2_L001_R1_001.fastq.gz"];
        match SampleSheet::build(listing, &BuildOptions::default()) {
            Err(Error::MissingMate { file }) => assert_eq!(file, "R1_L001_R1_001.fastq.gz"),
            other => panic!("expected MissingMate, got {other:?}"),
        }
    }

    #[test]
    fn unknown_semantic_name_fails_the_build() {
        let opts = BuildOptions {
            semantic_names: Some(SemanticNames::default()),
            ..Default::default()
        };
        let res = SampleSheet::build(["S1_L001_R1_001.fastq.gz", "S1_L001_R2_001.fastq.gz"], &opts);
        assert!(matches!(res, Err(Error::UnknownSample { sample }) if sample == "S1"));
    }

    #[test]
    fn csv_layout() {
        let (sheet, _) = SampleSheet::build(PAIRED, &BuildOptions::default()).unwrap();
        assert_eq!(
            to_csv(&sheet),
            "sample,fastq_1,fastq_2,strandedness\n\
             Ctrl,Ctrl_S1_L001_R1_001.fastq.gz,Ctrl_S1_L001_R2_001.fastq.gz,auto\n\
             Drought,Drought_S2_L001_R1_001.fastq.gz,Drought_S2_L001_R2_001.fastq.gz,auto\n"
        );
    }

    #[test]
    fn empty_sheet_still_has_a_header() {
        assert_eq!(to_csv(&SampleSheet::default()), "sample,fastq_1,fastq_2,strandedness\n");
    }

    #[test]
    fn snapshot_truncates() {
        let (sheet, _) = SampleSheet::build(PAIRED, &BuildOptions::default()).unwrap();
        let snap = sheet.snapshot(1);
        let lines: Vec<&str> = snap.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("sample"));
        assert!(lines[1].starts_with("Ctrl "));
        assert_eq!(lines[2], "... 1 more rows");
    }
}
