//! Property tests over the diff aligner: for arbitrary input pairs the two
//! columns stay the same length, padding never faces padding, and identical
//! inputs produce an all-unchanged alignment.

use devtools_core::{RowKind, align};
use quickcheck::quickcheck;

fn init_logger() {
    use tracing_subscriber::util::SubscriberInitExt;
    let _ = tracing_subscriber::fmt::Subscriber::builder()
        .with_target(false)
        .without_time()
        .with_level(true)
        .with_max_level(tracing::Level::DEBUG)
        .finish()
        .try_init(); // avoid multi-init
}

#[test]
fn columns_always_pair_up() {
    init_logger();

    fn prop(original: String, modified: String) -> bool {
        let aligned = align(&original, &modified);
        if aligned.left.len() != aligned.right.len() {
            return false;
        }
        aligned
            .left
            .iter()
            .zip(&aligned.right)
            .all(|(l, r)| match (l.kind, r.kind) {
                // No index may be padding on both sides, and padding only
                // ever faces an edit row.
                (RowKind::Empty, RowKind::Empty) => false,
                (RowKind::Empty, k) => k == RowKind::Added,
                (k, RowKind::Empty) => k == RowKind::Removed,
                _ => true,
            })
    }
    quickcheck(prop as fn(String, String) -> bool);
}

#[test]
fn identical_inputs_align_unchanged() {
    fn prop(text: String) -> bool {
        let aligned = align(&text, &text);
        aligned
            .left
            .iter()
            .zip(&aligned.right)
            .all(|(l, r)| {
                l.kind == RowKind::Unchanged
                    && r.kind == RowKind::Unchanged
                    && l.content == r.content
                    && l.line_number == r.line_number
            })
            && aligned.stats().additions == 0
            && aligned.stats().deletions == 0
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn alignment_is_deterministic() {
    fn prop(original: String, modified: String) -> bool {
        align(&original, &modified) == align(&original, &modified)
    }
    quickcheck(prop as fn(String, String) -> bool);
}

#[test]
fn line_numbers_count_each_side_independently() {
    fn prop(original: String, modified: String) -> bool {
        let aligned = align(&original, &modified);
        let mut expected_left = 1usize;
        let mut expected_right = 1usize;
        for (l, r) in aligned.left.iter().zip(&aligned.right) {
            if let Some(n) = l.line_number {
                if n != expected_left {
                    return false;
                }
                expected_left += 1;
            }
            if let Some(n) = r.line_number {
                if n != expected_right {
                    return false;
                }
                expected_right += 1;
            }
        }
        true
    }
    quickcheck(prop as fn(String, String) -> bool);
}
