// src/sample_sheet/fastq_name.rs

/// Default read file suffix (everything after the first '.').
pub const DEFAULT_SUFFIX: &str = "fastq.gz";

/// A read filename (basename only) that passed the suffix filter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FastqName {
    pub name: String,
}

impl FastqName {
    /// Returns `Some` only if `name` splits on its first '.' into a base and
    /// a remainder equal to `suffix`. Names without a '.' are not read files.
    pub fn parse(name: &str, suffix: &str) -> Option<Self> {
        if Self::is_read_file(name, suffix) {
            Some(FastqName { name: name.to_string() })
        } else {
            None
        }
    }

    pub fn is_read_file(name: &str, suffix: &str) -> bool {
        match name.split_once('.') {
            Some((_base, rest)) => rest == suffix,
            None => false,
        }
    }

    /// Token before the first '_' (the whole name if there is none).
    pub fn sample_id(&self) -> &str {
        self.name.split('_').next().unwrap_or(&self.name)
    }

    /// Up to three leading '_'-delimited tokens; mates share this key.
    /// A read direction in the third token (`R1`/`R2`, optionally carrying
    /// the suffix) collapses to `R` so forward and reverse files of one run
    /// compare equal. The sample and lane tokens are compared as they are.
    pub fn pairing_key(&self) -> Vec<&str> {
        self.name
            .split('_')
            .take(3)
            .enumerate()
            .map(|(i, tok)| if i == 2 && Self::is_read_direction(tok) { "R" } else { tok })
            .collect()
    }

    fn is_read_direction(tok: &str) -> bool {
        let head = tok.split('.').next().unwrap_or(tok);
        head == "R1" || head == "R2"
    }

    pub fn is_mate_of(&self, other: &FastqName) -> bool {
        self.pairing_key() == other.pairing_key()
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for FastqName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
