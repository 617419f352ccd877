// src/sample_sheet/pairing.rs
use super::FastqName;

/// One step of the walk over the sorted read files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pairing<'a> {
    /// forward file, reverse file
    Mates(&'a FastqName, &'a FastqName),
    /// a file whose successor is not its mate (or that has no successor)
    Orphan(&'a FastqName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    AwaitingPairStart,
    SkippedOne,
}

/// Walks an already sorted slice two at a time. On a mismatch only the
/// current file is given up and the walk restarts at its successor, so a run
/// of unmatched files is reported one by one.
pub struct PairWalk<'a> {
    files: &'a [FastqName],
    pos: usize,
    cursor: Cursor,
}

impl<'a> PairWalk<'a> {
    pub fn new(files: &'a [FastqName]) -> Self {
        PairWalk { files, pos: 0, cursor: Cursor::AwaitingPairStart }
    }
}

impl<'a> Iterator for PairWalk<'a> {
    type Item = Pairing<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.files.get(self.pos)?;
        if self.cursor == Cursor::SkippedOne {
            tracing::trace!("restarting pair walk at {}", first);
        }
        match self.files.get(self.pos + 1) {
            Some(second) if first.is_mate_of(second) => {
                self.pos += 2;
                self.cursor = Cursor::AwaitingPairStart;
                Some(Pairing::Mates(first, second))
            }
            _ => {
                self.pos += 1;
                self.cursor = Cursor::SkippedOne;
                Some(Pairing::Orphan(first))
            }
        }
    }
}
