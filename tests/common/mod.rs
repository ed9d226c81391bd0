#![allow(dead_code)]

use anyhow::Result;
use polars::prelude::*;

pub fn df_x() -> Result<DataFrame> {
    Ok(df!("x" => [1i64, 2, 3, 4], "y" => [5i64, 6, 7, 8])?)
}

/// Nine rows, `n = 1..=9`.
pub fn df_n() -> Result<DataFrame> {
    Ok(df!("n" => (1i64..=9).collect::<Vec<_>>())?)
}

pub fn df_abcd() -> Result<DataFrame> {
    Ok(df!(
        "a" => [1i64, 2, 3],
        "b" => [1.11f64, 2.22, 3.33],
        "c" => [4i64, 5, 6],
        "d" => ["x", "y", "z"]
    )?)
}

pub fn select(df: &DataFrame, exprs: Vec<Expr>) -> Result<DataFrame> {
    Ok(df.clone().lazy().select(exprs).collect()?)
}

pub fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series.i64()?.into_no_null_iter().collect())
}

pub fn u32_values(df: &DataFrame, name: &str) -> Result<Vec<u32>> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series.u32()?.into_no_null_iter().collect())
}

pub fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series.f64()?.into_no_null_iter().collect())
}

pub fn bool_values(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series.bool()?.into_no_null_iter().collect())
}

pub fn str_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series
        .str()?
        .into_no_null_iter()
        .map(str::to_string)
        .collect())
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Two list columns with four elements per row.
pub fn df_xy_list() -> Result<DataFrame> {
    let x = Series::new(
        "x".into(),
        [
            Series::new("".into(), [1i64, 2, 3, 4]),
            Series::new("".into(), [5i64, 6, 7, 8]),
        ],
    );
    let y = Series::new(
        "y".into(),
        [
            Series::new("".into(), [9i64, 10, 11, 12]),
            Series::new("".into(), [13i64, 14, 15, 16]),
        ],
    );
    Ok(DataFrame::new(vec![x.into_column(), y.into_column()])?)
}

/// Evaluates `expr` on every list of every column.
pub fn eval_lists(df: &DataFrame, expr: Expr) -> Result<DataFrame> {
    Ok(df
        .clone()
        .lazy()
        .select([all().list().eval(expr, false)])
        .collect()?)
}

pub fn list_i64_values(df: &DataFrame, name: &str) -> Result<Vec<Vec<i64>>> {
    let series = df.column(name)?.as_materialized_series();
    let mut rows = Vec::new();
    for row in series.list()?.into_iter() {
        let row = row.ok_or_else(|| anyhow::anyhow!("null list in `{}`", name))?;
        rows.push(row.i64()?.into_no_null_iter().collect());
    }
    Ok(rows)
}
