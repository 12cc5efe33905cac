//! Line-diff alignment: compares two text blobs at line granularity and pairs
//! the resulting change stream into two equal-length display columns suitable
//! for side-by-side rendering.
//!
//! The diff itself comes from a pluggable collaborator (`LineDiffer`, backed
//! by Myers via the `similar` crate by default); this module only reshapes the
//! change blocks into aligned rows with empty-row padding. Padding rows let a
//! two-column renderer walk both sequences by a single shared index and always
//! have a visually aligned row pair, without a reconciliation pass at render
//! time.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

use crate::errors::ToolError;

/// Classification of a contiguous change block emitted by the differ.
///
/// A changed line never gets its own classification: the differ reports it as
/// a removed block followed by an added block at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Unchanged,
}

/// One contiguous block of text in document order, tagged with how it differs
/// between the two inputs. The block may span multiple lines and keeps its
/// line terminators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub text: String,
}

/// Kind of a single rendered row. `Empty` marks a padding row inserted only
/// opposite an added or removed row on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Added,
    Removed,
    Unchanged,
    Empty,
}

/// One rendered line of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    /// 1-based line number within its own side; `None` only for padding rows.
    pub line_number: Option<usize>,
    /// The line's text, without its terminator; empty for padding rows.
    pub content: String,
    pub kind: RowKind,
}

impl DisplayRow {
    fn numbered(line_number: usize, content: &str, kind: RowKind) -> Self {
        Self {
            line_number: Some(line_number),
            content: content.to_string(),
            kind,
        }
    }

    fn padding() -> Self {
        Self {
            line_number: None,
            content: String::new(),
            kind: RowKind::Empty,
        }
    }

    /// Whether this row is a padding row.
    pub fn is_padding(&self) -> bool {
        self.kind == RowKind::Empty
    }
}

/// Paired left/right row sequences ready for two-column rendering.
///
/// Invariants: `left.len() == right.len()`; no index holds a padding row on
/// both sides; padding appears only opposite an added or removed row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedResult {
    /// Rows for the original (left) side.
    pub left: Vec<DisplayRow>,
    /// Rows for the modified (right) side.
    pub right: Vec<DisplayRow>,
}

impl AlignedResult {
    /// Number of aligned row pairs.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Derive the `+N / -M` toolbar counts by scanning the rows.
    ///
    /// Counts are recomputed from scratch on every call; nothing is cached.
    pub fn stats(&self) -> DiffStats {
        DiffStats {
            additions: self
                .right
                .iter()
                .filter(|row| row.kind == RowKind::Added)
                .count(),
            deletions: self
                .left
                .iter()
                .filter(|row| row.kind == RowKind::Removed)
                .count(),
        }
    }
}

/// Derived addition/deletion counts for the diff toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
}

/// Line-level diff collaborator.
///
/// Any algorithm that partitions two texts into an ordered sequence of
/// added/removed/unchanged blocks is substitutable here; the aligner treats
/// the implementation as a black box.
pub trait LineDiffer {
    fn diff(&self, original: &str, modified: &str) -> Vec<ChangeRecord>;
}

/// Default differ: Myers line diff via the `similar` crate, with consecutive
/// same-tag changes coalesced into one block record.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersLineDiffer;

impl LineDiffer for MyersLineDiffer {
    fn diff(&self, original: &str, modified: &str) -> Vec<ChangeRecord> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_lines(original, modified);

        let mut records: Vec<ChangeRecord> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => ChangeKind::Unchanged,
                ChangeTag::Delete => ChangeKind::Removed,
                ChangeTag::Insert => ChangeKind::Added,
            };
            match records.last_mut() {
                // Runs of equally-tagged lines merge into one block, so the
                // record stream keeps the removed-then-added emission order a
                // replacement produces.
                Some(last) if last.kind == kind => last.text.push_str(change.value()),
                _ => records.push(ChangeRecord {
                    kind,
                    text: change.value().to_string(),
                }),
            }
        }
        records
    }
}

/// Alignment of a change-record stream into paired display columns.
pub struct Aligner;

impl Aligner {
    /// Safety cap for pathological inputs, mirrored by `DiffConfig`.
    pub const MAX_DIFF_LINES: usize = 10_000;

    /// Split a block into its lines.
    ///
    /// The final split segment is dropped only when it is empty and more than
    /// one segment exists (an artifact of the trailing terminator); a genuine
    /// blank line before end of input is preserved.
    fn block_lines(block: &str) -> Vec<&str> {
        let mut segments: Vec<&str> = block.split('\n').collect();
        if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        segments
    }

    /// Pair an ordered change-record stream into two equal-length columns.
    ///
    /// Pure data transformation: records are processed strictly in emission
    /// order, and every push to one side is matched by exactly one push to
    /// the other, so both sides end up the same length by construction.
    pub fn align(records: &[ChangeRecord]) -> AlignedResult {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut left_line_num = 1usize;
        let mut right_line_num = 1usize;

        for record in records {
            for line in Self::block_lines(&record.text) {
                match record.kind {
                    ChangeKind::Added => {
                        left.push(DisplayRow::padding());
                        right.push(DisplayRow::numbered(right_line_num, line, RowKind::Added));
                        right_line_num += 1;
                    }
                    ChangeKind::Removed => {
                        left.push(DisplayRow::numbered(left_line_num, line, RowKind::Removed));
                        right.push(DisplayRow::padding());
                        left_line_num += 1;
                    }
                    ChangeKind::Unchanged => {
                        left.push(DisplayRow::numbered(
                            left_line_num,
                            line,
                            RowKind::Unchanged,
                        ));
                        right.push(DisplayRow::numbered(
                            right_line_num,
                            line,
                            RowKind::Unchanged,
                        ));
                        left_line_num += 1;
                        right_line_num += 1;
                    }
                }
            }
        }

        AlignedResult { left, right }
    }

    /// Diff and align two text blobs with a caller-supplied differ.
    pub fn align_with<D: LineDiffer>(differ: &D, original: &str, modified: &str) -> AlignedResult {
        Self::align(&differ.diff(original, modified))
    }

    /// Reject inputs whose combined line count exceeds `limit`.
    ///
    /// Line counting is cheap relative to diffing, so the guard runs on the
    /// raw inputs before any change computation.
    pub fn check_input_size(
        original: &str,
        modified: &str,
        limit: usize,
    ) -> Result<(), ToolError> {
        let total = original.lines().count() + modified.lines().count();
        if total > limit {
            return Err(ToolError::InputTooLarge(total, limit));
        }
        Ok(())
    }
}

/// Diff and align two text blobs with the default Myers differ.
pub fn align(original: &str, modified: &str) -> AlignedResult {
    Aligner::align_with(&MyersLineDiffer, original, modified)
}

#[cfg(test)]
mod tests {
    use super::{
        Aligner, ChangeKind, ChangeRecord, LineDiffer, MyersLineDiffer, RowKind, align,
    };

    fn kinds(rows: &[super::DisplayRow]) -> Vec<RowKind> {
        rows.iter().map(|r| r.kind).collect()
    }

    /// Identical inputs yield only unchanged rows with matching content.
    #[test]
    fn identity_alignment() {
        let text = "a\nb\nc";
        let aligned = align(text, text);
        assert_eq!(aligned.len(), 3);
        for i in 0..aligned.len() {
            assert_eq!(aligned.left[i].kind, RowKind::Unchanged);
            assert_eq!(aligned.right[i].kind, RowKind::Unchanged);
            assert_eq!(aligned.left[i].content, aligned.right[i].content);
            assert_eq!(aligned.left[i].line_number, Some(i + 1));
            assert_eq!(aligned.right[i].line_number, Some(i + 1));
        }
    }

    /// Pure addition pads the left side and numbers the right from 1.
    #[test]
    fn pure_addition() {
        let aligned = align("", "x\ny");
        assert_eq!(kinds(&aligned.left), vec![RowKind::Empty, RowKind::Empty]);
        assert_eq!(kinds(&aligned.right), vec![RowKind::Added, RowKind::Added]);
        assert_eq!(aligned.right[0].content, "x");
        assert_eq!(aligned.right[1].content, "y");
        assert_eq!(aligned.right[0].line_number, Some(1));
        assert_eq!(aligned.right[1].line_number, Some(2));
        assert!(aligned.left.iter().all(|r| r.line_number.is_none()));
    }

    /// Pure removal is the mirror image on the opposite side.
    #[test]
    fn pure_removal() {
        let aligned = align("x\ny", "");
        assert_eq!(kinds(&aligned.left), vec![RowKind::Removed, RowKind::Removed]);
        assert_eq!(kinds(&aligned.right), vec![RowKind::Empty, RowKind::Empty]);
        assert_eq!(aligned.left[0].content, "x");
        assert_eq!(aligned.left[1].content, "y");
        assert_eq!(aligned.left[0].line_number, Some(1));
        assert_eq!(aligned.left[1].line_number, Some(2));
    }

    /// A changed middle line appears as a removed+added pair, never as a
    /// dedicated "modified" row kind.
    #[test]
    fn mixed_edit_pairs_removed_and_added() {
        let aligned = align("a\nb\nc", "a\nx\nc");
        assert_eq!(aligned.len(), 3);

        assert_eq!(aligned.left[0].kind, RowKind::Unchanged);
        assert_eq!(aligned.right[0].kind, RowKind::Unchanged);
        assert_eq!(aligned.left[0].content, "a");

        assert_eq!(aligned.left[1].kind, RowKind::Removed);
        assert_eq!(aligned.left[1].content, "b");
        assert_eq!(aligned.right[1].kind, RowKind::Added);
        assert_eq!(aligned.right[1].content, "x");

        assert_eq!(aligned.left[2].kind, RowKind::Unchanged);
        assert_eq!(aligned.left[2].content, "c");
        assert_eq!(aligned.left[2].line_number, Some(3));
        assert_eq!(aligned.right[2].line_number, Some(3));
    }

    /// A trailing terminator must not produce a spurious empty row; a genuine
    /// blank line before end of input must survive.
    #[test]
    fn trailing_newline_handling() {
        let aligned = align("a\n", "a\n");
        assert_eq!(aligned.len(), 1);
        assert_eq!(aligned.left[0].content, "a");

        let aligned = align("a\n\n", "a\n\n");
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.left[0].content, "a");
        assert_eq!(aligned.left[1].content, "");
        assert_eq!(aligned.left[1].kind, RowKind::Unchanged);
    }

    /// Two empty inputs align to two empty columns.
    #[test]
    fn empty_inputs() {
        let aligned = align("", "");
        assert!(aligned.is_empty());
        assert_eq!(aligned.left.len(), aligned.right.len());
    }

    /// Summary counts equal the added rows on the right and removed rows on
    /// the left, recomputed per call.
    #[test]
    fn derived_stats() {
        let aligned = align("a\nb\nc", "a\nx\nc");
        let stats = aligned.stats();
        assert_eq!(stats.additions, 1);
        assert_eq!(stats.deletions, 1);
        // A second call re-derives the same values from the rows.
        assert_eq!(aligned.stats(), stats);

        let aligned = align("", "x\ny\nz");
        assert_eq!(aligned.stats().additions, 3);
        assert_eq!(aligned.stats().deletions, 0);
    }

    /// Unequal replacement blocks pad independently rather than zipping
    /// pairwise, so the longer block runs past the shorter one against
    /// padding.
    #[test]
    fn unequal_replacement_blocks_pad_independently() {
        let aligned = align("a\nb\nc\nd", "a\nx\nd");
        // Removed block "b\nc" fully precedes added block "x".
        assert_eq!(
            kinds(&aligned.left),
            vec![
                RowKind::Unchanged,
                RowKind::Removed,
                RowKind::Removed,
                RowKind::Empty,
                RowKind::Unchanged,
            ]
        );
        assert_eq!(
            kinds(&aligned.right),
            vec![
                RowKind::Unchanged,
                RowKind::Empty,
                RowKind::Empty,
                RowKind::Added,
                RowKind::Unchanged,
            ]
        );
    }

    /// The default differ coalesces consecutive same-tag lines into a single
    /// block and keeps removed-before-added ordering for replacements.
    #[test]
    fn differ_coalesces_blocks() {
        let records = MyersLineDiffer.diff("a\nb\nc\n", "a\nx\ny\n");
        let kinds: Vec<ChangeKind> = records.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![ChangeKind::Unchanged, ChangeKind::Removed, ChangeKind::Added]
        );
        assert_eq!(records[1].text, "b\nc\n");
        assert_eq!(records[2].text, "x\ny\n");
    }

    /// Block splitting drops only the final separator artifact.
    #[test]
    fn block_line_splitting() {
        assert_eq!(Aligner::block_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(Aligner::block_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(Aligner::block_lines("a\n\n"), vec!["a", ""]);
        // A single empty segment is kept: only a trailing-separator artifact
        // is dropped, and that requires more than one segment.
        assert_eq!(Aligner::block_lines(""), vec![""]);
    }

    /// Aligning a hand-built record stream works without any differ.
    #[test]
    fn align_from_records() {
        let records = vec![
            ChangeRecord {
                kind: ChangeKind::Unchanged,
                text: "ctx\n".to_string(),
            },
            ChangeRecord {
                kind: ChangeKind::Added,
                text: "new\n".to_string(),
            },
        ];
        let aligned = Aligner::align(&records);
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.right[1].kind, RowKind::Added);
        assert_eq!(aligned.right[1].content, "new");
        assert!(aligned.left[1].is_padding());
    }

    /// The size guard rejects oversized inputs before any diffing.
    #[test]
    fn input_size_guard() {
        assert!(Aligner::check_input_size("a\nb", "c", 10).is_ok());
        let err = Aligner::check_input_size("a\nb\nc", "d\ne", 4).unwrap_err();
        assert!(err.to_string().contains("5 lines"));
    }
}
