mod common;

use anyhow::Result;
use common::*;
use polars::prelude::*;
use turtle_island::{bulk_append, case_when, prepend, shift, Case};

#[test]
fn test_case_when_single_conditions() -> Result<()> {
    let expr = case_when(
        [
            Case::new(col("x").lt(lit(2)), lit("small")),
            Case::new(col("x").lt(lit(4)), lit("medium")),
        ],
        Some(lit("large")),
    )?
    .alias("size");

    let out = df_x()?.lazy().with_columns([expr]).collect()?;
    assert_eq!(
        str_values(&out, "size")?,
        vec!["small", "medium", "medium", "large"]
    );
    Ok(())
}

#[test]
fn test_case_when_conditions_are_and_combined() -> Result<()> {
    let expr = case_when(
        [
            Case::all([col("x").lt(lit(3)), col("y").lt(lit(6))], lit("small")),
            Case::all([col("x").lt(lit(4)), col("y").lt(lit(8))], lit("medium")),
        ],
        Some(lit("large")),
    )?
    .alias("size");

    let out = select(&df_x()?, vec![expr])?;
    assert_eq!(
        str_values(&out, "size")?,
        vec!["small", "medium", "medium", "large"]
    );
    Ok(())
}

#[test]
fn test_case_when_accepts_tuples() -> Result<()> {
    let expr = case_when(
        vec![(col("x").gt(lit(2)), lit(true))],
        Some(lit(false)),
    )?
    .alias("big");

    let out = select(&df_x()?, vec![expr])?;
    assert_eq!(bool_values(&out, "big")?, vec![false, false, true, true]);
    Ok(())
}

#[test]
fn test_case_when_without_otherwise_yields_null() -> Result<()> {
    let expr = case_when([Case::new(col("x").lt(lit(4)), col("y"))], None)?.alias("out");

    let out = select(&df_x()?, vec![expr])?;
    let column = out.column("out")?;
    assert_eq!(column.null_count(), 1);
    assert_eq!(
        column.as_materialized_series().i64()?.get(0),
        Some(5)
    );
    Ok(())
}

#[test]
fn test_case_when_inside_list_eval() -> Result<()> {
    let expr = case_when(
        [
            Case::new(col("").lt(lit(2)), col("") * lit(100)),
            Case::new(col("").eq(lit(4)), lit(0i64)),
        ],
        Some(col("")),
    )?;
    let df = df!("x" => [1i64, 2, 3, 4])?
        .lazy()
        .select([col("x").implode()])
        .collect()?;

    let out = eval_lists(&df, expr)?;
    assert_eq!(list_i64_values(&out, "x")?, vec![vec![100, 2, 3, 0]]);
    Ok(())
}

#[test]
fn test_case_when_rejects_empty_input() {
    let err = case_when(Vec::<Case>::new(), None).unwrap_err();
    assert!(err.to_string().contains("at least one case"));

    let err = case_when([Case::all(Vec::<Expr>::new(), lit(1))], None).unwrap_err();
    assert!(err.to_string().contains("cases[0]"));
}

#[test]
fn test_bulk_append_concatenates_in_order() -> Result<()> {
    let df = df!("a" => [1i64, 2, 3])?;
    let out = select(
        &df,
        vec![bulk_append([col("a").first(), col("a").last(), col("a").first()])?],
    )?;
    assert_eq!(i64_values(&out, "a")?, vec![1, 3, 1]);
    Ok(())
}

#[test]
fn test_bulk_append_wildcard() -> Result<()> {
    let out = select(
        &df_abcd()?,
        vec![bulk_append([all().last(), all().first()])?],
    )?;
    assert_eq!(column_names(&out), vec!["a", "b", "c", "d"]);
    assert_eq!(i64_values(&out, "a")?, vec![3, 1]);
    assert_eq!(f64_values(&out, "b")?, vec![3.33, 1.11]);
    assert_eq!(i64_values(&out, "c")?, vec![6, 4]);
    assert_eq!(str_values(&out, "d")?, vec!["z", "x"]);
    Ok(())
}

#[test]
fn test_bulk_append_inside_list_eval() -> Result<()> {
    let element = || col("");
    let out = eval_lists(
        &df_xy_list()?,
        bulk_append([element().first(), element().last()])?,
    )?;
    assert_eq!(list_i64_values(&out, "x")?, vec![vec![1, 4], vec![5, 8]]);
    assert_eq!(list_i64_values(&out, "y")?, vec![vec![9, 12], vec![13, 16]]);
    Ok(())
}

#[test]
fn test_bulk_append_needs_two_expressions() {
    let err = bulk_append([col("a")]).unwrap_err();
    assert!(err
        .to_string()
        .contains("`exprs` must contain a minimum of 2 expressions."));
}

#[test]
fn test_shift_fills_leading_rows() -> Result<()> {
    let out = select(&df_x()?, vec![shift(col("x"), 2, col("x") + lit(100))])?;
    assert_eq!(i64_values(&out, "x")?, vec![101, 102, 1, 2]);

    let out = select(&df_x()?, vec![shift(col("x"), 1, col("x") + lit(100))])?;
    assert_eq!(i64_values(&out, "x")?, vec![101, 1, 2, 3]);
    Ok(())
}

#[test]
fn test_shift_fills_trailing_rows() -> Result<()> {
    let out = select(&df_x()?, vec![shift(col("x"), -2, col("x") + lit(100))])?;
    assert_eq!(i64_values(&out, "x")?, vec![3, 4, 103, 104]);
    Ok(())
}

#[test]
fn test_shift_past_length_uses_fill_everywhere() -> Result<()> {
    let out = select(&df_x()?, vec![shift(col("x"), 10, col("y"))])?;
    assert_eq!(i64_values(&out, "x")?, vec![5, 6, 7, 8]);
    Ok(())
}

#[test]
fn test_shift_wildcard() -> Result<()> {
    let out = df_x()?
        .lazy()
        .with_columns([shift(all(), 1, col("y") + lit(100))])
        .collect()?;
    assert_eq!(i64_values(&out, "x")?, vec![105, 1, 2, 3]);
    assert_eq!(i64_values(&out, "y")?, vec![105, 5, 6, 7]);
    Ok(())
}

#[test]
fn test_shift_inside_list_eval() -> Result<()> {
    let out = eval_lists(&df_xy_list()?, shift(col(""), 2, col("") + lit(10)))?;
    assert_eq!(
        list_i64_values(&out, "x")?,
        vec![vec![11, 12, 1, 2], vec![15, 16, 5, 6]]
    );
    assert_eq!(
        list_i64_values(&out, "y")?,
        vec![vec![19, 20, 9, 10], vec![23, 24, 13, 14]]
    );
    Ok(())
}

#[test]
fn test_shift_zero_returns_input() {
    assert_eq!(shift(col("x"), 0, col("x") + lit(100)), col("x"));
}

#[test]
fn test_prepend_defaults_to_leading_rows() -> Result<()> {
    let out = select(&df_x()?, vec![prepend(col("x"), 1, None)?])?;
    assert_eq!(i64_values(&out, "x")?, vec![1, 1, 2, 3, 4]);

    let out = select(&df_x()?, vec![prepend(col("x"), 2, None)?])?;
    assert_eq!(i64_values(&out, "x")?, vec![1, 2, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_prepend_with_expression() -> Result<()> {
    let out = select(&df_x()?, vec![prepend(col("x"), 2, Some(lit(0i64)))?])?;
    assert_eq!(i64_values(&out, "x")?, vec![0, 0, 1, 2, 3, 4]);

    let out = select(
        &df_x()?,
        vec![prepend(col("x"), 3, Some(col("x") * col("y")))?],
    )?;
    assert_eq!(i64_values(&out, "x")?, vec![5, 12, 21, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_prepend_offsets_up_to_row_count() -> Result<()> {
    let cases: [(i64, Vec<i64>); 5] = [
        (1, vec![1, 1, 2, 3, 4]),
        (2, vec![1, 2, 1, 2, 3, 4]),
        (3, vec![1, 2, 3, 1, 2, 3, 4]),
        (4, vec![1, 2, 3, 4, 1, 2, 3, 4]),
        // capped at the row count
        (5, vec![1, 2, 3, 4, 1, 2, 3, 4]),
    ];
    for (offset, expected) in cases {
        let out = select(&df_x()?, vec![prepend(col("x"), offset, None)?])?;
        assert_eq!(i64_values(&out, "x")?, expected, "offset = {}", offset);
    }
    Ok(())
}

#[test]
fn test_prepend_wildcard() -> Result<()> {
    let out = select(&df_x()?, vec![prepend(all(), 1, None)?])?;
    assert_eq!(i64_values(&out, "x")?, vec![1, 1, 2, 3, 4]);
    assert_eq!(i64_values(&out, "y")?, vec![5, 5, 6, 7, 8]);
    Ok(())
}

#[test]
fn test_prepend_inside_list_eval() -> Result<()> {
    let plus_one = col("") + lit(1);
    let out = eval_lists(
        &df_xy_list()?,
        prepend(plus_one.clone(), 2, Some(col("") * lit(2)))?,
    )?;
    assert_eq!(
        list_i64_values(&out, "x")?,
        vec![vec![2, 4, 2, 3, 4, 5], vec![10, 12, 6, 7, 8, 9]]
    );
    assert_eq!(
        list_i64_values(&out, "y")?,
        vec![vec![18, 20, 10, 11, 12, 13], vec![26, 28, 14, 15, 16, 17]]
    );

    let out = eval_lists(&df_xy_list()?, prepend(plus_one, 2, Some(lit(0i64)))?)?;
    assert_eq!(
        list_i64_values(&out, "x")?,
        vec![vec![0, 0, 2, 3, 4, 5], vec![0, 0, 6, 7, 8, 9]]
    );
    Ok(())
}

#[test]
fn test_prepend_zero_and_negative() -> Result<()> {
    assert_eq!(prepend(col("x"), 0, None)?, col("x"));

    let err = prepend(col("x"), -1, None).unwrap_err();
    assert!(err.to_string().contains("`offset` cannot be negative."));
    Ok(())
}
