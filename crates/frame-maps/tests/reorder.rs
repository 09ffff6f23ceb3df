//! Tests for column moves.

use frame_maps::{FrameMapError, move_column, move_column_by_name};
use polars::prelude::{DataFrame, NamedFrom, Series};
use proptest::prelude::{prop_assert_eq, proptest};

fn sample_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("a".into(), vec![1i64, 2]).into(),
        Series::new("b".into(), vec![10i64, 20]).into(),
        Series::new("c".into(), vec![100i64, 200]).into(),
        Series::new("d".into(), vec![1000i64, 2000]).into(),
    ])
    .unwrap()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

#[test]
fn move_forward_inserts_against_the_reduced_order() {
    let df = sample_frame();

    let out = move_column(&df, 0, 2).unwrap();

    assert_eq!(names(&out), vec!["b", "c", "a", "d"]);
}

#[test]
fn move_backward_shifts_later_columns_right() {
    let df = sample_frame();

    let out = move_column(&df, 3, 0).unwrap();

    assert_eq!(names(&out), vec!["d", "a", "b", "c"]);
}

#[test]
fn move_to_last_position() {
    let df = sample_frame();

    let out = move_column(&df, 0, 3).unwrap();

    assert_eq!(names(&out), vec!["b", "c", "d", "a"]);
}

#[test]
fn move_to_same_index_is_a_noop() {
    let df = sample_frame();

    let out = move_column(&df, 1, 1).unwrap();

    assert_eq!(names(&out), names(&df));
}

#[test]
fn move_preserves_column_data() {
    let df = sample_frame();

    let out = move_column(&df, 0, 2).unwrap();

    assert_eq!(out.height(), df.height());
    let a = out.column("a").unwrap().i64().unwrap();
    assert_eq!(a.get(0), Some(1));
    assert_eq!(a.get(1), Some(2));
}

#[test]
fn move_from_index_out_of_range_errors() {
    let df = sample_frame();

    let err = move_column(&df, 5, 0).unwrap_err();

    match err {
        FrameMapError::IndexOutOfRange { index, width } => {
            assert_eq!(index, 5);
            assert_eq!(width, 4);
        }
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn move_to_index_out_of_range_errors() {
    let df = sample_frame();

    let err = move_column(&df, 0, 4).unwrap_err();

    assert!(matches!(err, FrameMapError::IndexOutOfRange { index: 4, width: 4 }));
}

#[test]
fn move_does_not_mutate_the_input_frame() {
    let df = sample_frame();

    let _ = move_column(&df, 0, 3).unwrap();

    assert_eq!(names(&df), vec!["a", "b", "c", "d"]);
}

#[test]
fn move_by_name_resolves_case_insensitively() {
    let df = sample_frame();

    let out = move_column_by_name(&df, "C", 0).unwrap();

    assert_eq!(names(&out), vec!["c", "a", "b", "d"]);
}

#[test]
fn move_by_unknown_name_errors() {
    let df = sample_frame();

    let err = move_column_by_name(&df, "nope", 0).unwrap_err();

    assert!(matches!(err, FrameMapError::ColumnNotFound(_)));
}

proptest! {
    #[test]
    fn moved_column_lands_at_the_target_index(from in 0usize..4, to in 0usize..4) {
        let df = sample_frame();

        let moved = move_column(&df, from, to).unwrap();

        prop_assert_eq!(&names(&moved)[to], &names(&df)[from]);
    }

    #[test]
    fn move_then_reverse_restores_the_original_order(from in 0usize..4, to in 0usize..4) {
        let df = sample_frame();

        let moved = move_column(&df, from, to).unwrap();
        let restored = move_column(&moved, to, from).unwrap();

        prop_assert_eq!(names(&restored), names(&df));
    }
}
