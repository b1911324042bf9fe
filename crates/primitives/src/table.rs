//! Panel table definition.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis, ErrorKind, ShapeError, concatenate};

/// Sentinel stored in a cell that has no defined value.
pub const UNDEFINED: f64 = f64::NAN;

/// Returns true if `value` is the undefined sentinel.
#[must_use]
pub const fn is_undefined(value: f64) -> bool {
    value.is_nan()
}

/// Dense numeric panel table.
///
/// Rows are observations, columns are fields. The conventional layout is
/// `row_id`, `time_index`, `group_id`, zero or more features, then the target
/// in the last column, but nothing here enforces it: column roles are chosen
/// by the caller through column indices.
///
/// Operations that shift a column assume the rows are sorted by group and
/// then by time, with each group occupying one contiguous block. The table
/// does not track or verify that ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    data: Array2<f64>,
}

impl Table {
    /// Wrap an existing matrix.
    #[must_use]
    pub const fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Build a table from row tuples.
    ///
    /// # Errors
    /// Returns `ShapeError` if the rows differ in width.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows.len(), width), flat).map(Self::new)
    }

    /// Build a table from equal-length columns.
    ///
    /// # Errors
    /// Returns `ShapeError` if the columns differ in length.
    pub fn from_columns(columns: &[&[f64]]) -> Result<Self, ShapeError> {
        let height = columns.first().map_or(0, |c| c.len());
        if columns.iter().any(|c| c.len() != height) {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        Ok(Self::new(Array2::from_shape_fn((height, columns.len()), |(i, j)| columns[j][i])))
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Borrow the underlying matrix.
    #[must_use]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Consume the table and return the underlying matrix.
    #[must_use]
    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }

    /// Borrow a single column, or `None` if `index` is out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.width()).then(|| self.data.column(index))
    }

    /// Copy a single row, or `None` if `index` is out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.height()).then(|| self.data.row(index).to_vec())
    }

    /// Replace the values of column `index`.
    ///
    /// # Errors
    /// Returns `ShapeError` if `index` is out of range or `values` has the wrong length.
    pub fn with_column_replaced(
        mut self,
        index: usize,
        values: ArrayView1<'_, f64>,
    ) -> Result<Self, ShapeError> {
        if index >= self.width() {
            return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
        }
        if values.len() != self.height() {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        self.data.column_mut(index).assign(&values);
        Ok(self)
    }

    /// Append `values` as a new trailing column.
    ///
    /// # Errors
    /// Returns `ShapeError` if `values` has the wrong length.
    pub fn with_column_appended(self, values: ArrayView1<'_, f64>) -> Result<Self, ShapeError> {
        if values.len() != self.height() {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        let column = values.insert_axis(Axis(1));
        let data = concatenate(Axis(1), &[self.data.view(), column.view()])?;
        Ok(Self::new(data))
    }

    /// Copy the rows at `indices`, in the given order.
    ///
    /// # Panics
    /// Panics if any index is out of range.
    #[must_use]
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self::new(self.data.select(Axis(0), indices))
    }

    /// Count the undefined cells in column `index`.
    #[must_use]
    pub fn count_undefined(&self, index: usize) -> usize {
        self.column(index).map_or(0, |c| c.iter().filter(|v| is_undefined(**v)).count())
    }
}

impl From<Array2<f64>> for Table {
    fn from(data: Array2<f64>) -> Self {
        Self::new(data)
    }
}

impl From<Table> for Array2<f64> {
    fn from(table: Table) -> Self {
        table.into_inner()
    }
}
