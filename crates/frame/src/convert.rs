//! Conversion between polars frames and engine tables.

use lagpanel_primitives::{Table, UNDEFINED, is_undefined};
use ndarray::Array2;
use polars::prelude::*;

use crate::FrameError;

/// Copy named columns of `df` into a `Table`, in the given order.
///
/// Every column is cast to `Float64`; nulls become the undefined sentinel.
///
/// # Errors
/// Returns `FrameError::MissingColumn` if a name is not present and
/// `FrameError::Polars` if a column cannot be cast to float.
pub fn table_from_frame(df: &DataFrame, columns: &[&str]) -> Result<Table, FrameError> {
    let mut data = Array2::<f64>::zeros((df.height(), columns.len()));

    for (j, &name) in columns.iter().enumerate() {
        let column =
            df.column(name).map_err(|_| FrameError::MissingColumn(name.to_string()))?;
        let values = column.cast(&DataType::Float64)?;
        let values = values.f64()?;

        for (cell, v) in data.column_mut(j).iter_mut().zip(values) {
            *cell = v.unwrap_or(UNDEFINED);
        }
    }

    Ok(Table::new(data))
}

/// Build a `DataFrame` from a `Table`, naming columns in order.
///
/// Undefined cells become nulls.
///
/// # Errors
/// Returns `FrameError::ColumnCount` if `names` does not match the table width.
pub fn table_to_frame(table: &Table, names: &[&str]) -> Result<DataFrame, FrameError> {
    if names.len() != table.width() {
        return Err(FrameError::ColumnCount { expected: table.width(), actual: names.len() });
    }

    let view = table.view();
    let columns: Vec<Column> = names
        .iter()
        .zip(view.columns())
        .map(|(&name, values)| {
            let values: Vec<Option<f64>> =
                values.iter().map(|v| (!is_undefined(*v)).then_some(*v)).collect();
            Column::new(name.into(), values)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        df! {
            "row_id" => &[0, 1, 2],
            "time_index" => &[0, 1, 2],
            "group_id" => &[5, 5, 5],
            "target" => &[Some(1.5), None, Some(3.5)],
        }
        .unwrap()
    }

    #[test]
    fn from_frame_casts_and_orders() {
        let table = table_from_frame(&sample(), &["target", "group_id"]).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 3);
        assert_eq!(table.column(1).unwrap().to_vec(), vec![5.0, 5.0, 5.0]);
        assert_eq!(table.count_undefined(0), 1);
    }

    #[test]
    fn from_frame_missing_column() {
        let err = table_from_frame(&sample(), &["nope"]).unwrap_err();
        assert!(matches!(err, FrameError::MissingColumn(name) if name == "nope"));
    }

    #[test]
    fn frame_round_trip_keeps_nulls() {
        let names = ["row_id", "time_index", "group_id", "target"];
        let table = table_from_frame(&sample(), &names).unwrap();
        let df = table_to_frame(&table, &names).unwrap();

        let target: Vec<Option<f64>> =
            df.column("target").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(target, vec![Some(1.5), None, Some(3.5)]);
    }

    #[test]
    fn to_frame_checks_names() {
        let table = table_from_frame(&sample(), &["target"]).unwrap();
        assert!(matches!(
            table_to_frame(&table, &["a", "b"]),
            Err(FrameError::ColumnCount { expected: 1, actual: 2 })
        ));
    }
}
