//! Dense N-dimensional payoff arrays.
//!
//! A `PayoffArray` stores `f64` values in row-major order together with
//! its shape. It supports exactly what payoff reduction needs:
//!
//! - **Pure reduction**: `take_last` fixes the last axis to one index.
//! - **Mixed reduction**: `dot_last` contracts the last axis against a
//!   weight vector.
//! - **Indexed access**: `get` / `set` at a full multi-index.
//!
//! Shapes are stored in a `SmallVec` since games rarely have more than a
//! handful of players.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

use super::error::GameError;

/// Shape of a payoff array, one entry per axis.
pub type Shape = SmallVec<[usize; 4]>;

/// Row-major N-dimensional array of payoffs.
///
/// ## Example
///
/// ```
/// use rust_nfg::core::PayoffArray;
///
/// let a = PayoffArray::from_matrix(vec![vec![4.0, 0.0], vec![3.0, 2.0]]).unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.get(&[1, 0]).unwrap(), 3.0);
///
/// // Fix the column player's action to 1.
/// assert_eq!(a.take_last(1).unwrap().data(), &[0.0, 2.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPayoffArray")]
pub struct PayoffArray {
    shape: Shape,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawPayoffArray {
    shape: Shape,
    data: Vec<f64>,
}

impl TryFrom<RawPayoffArray> for PayoffArray {
    type Error = GameError;

    fn try_from(raw: RawPayoffArray) -> Result<Self, Self::Error> {
        Self::new(&raw.shape, raw.data)
    }
}

impl PayoffArray {
    /// Create an array from a shape and row-major data.
    pub fn new(shape: &[usize], data: Vec<f64>) -> Result<Self, GameError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(GameError::DataLength {
                shape: shape.to_vec(),
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            shape: SmallVec::from_slice(shape),
            data,
        })
    }

    /// Create an all-zero array.
    #[must_use]
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            shape: SmallVec::from_slice(shape),
            data: vec![0.0; shape.iter().product()],
        }
    }

    /// Create a rank-0 array holding one value.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Shape::new(),
            data: vec![value],
        }
    }

    /// Create a rank-1 array.
    #[must_use]
    pub fn from_vector(values: Vec<f64>) -> Self {
        Self {
            shape: smallvec![values.len()],
            data: values,
        }
    }

    /// Create a rank-2 array from rows. Fails on ragged rows.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self, GameError> {
        let cols = rows.first().map_or(0, Vec::len);
        let shape = [rows.len(), cols];
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(GameError::DataLength {
                shape: vec![1, cols],
                expected: cols,
                found: row.len(),
            });
        }
        Self::new(&shape, rows.into_iter().flatten().collect())
    }

    /// Create an array by evaluating `f` at every multi-index, in row-major order.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> f64) -> Self {
        let data = Indices::new(shape).map(|index| f(&index)).collect();
        Self {
            shape: SmallVec::from_slice(shape),
            data,
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Size of every axis.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major values.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the array, returning its row-major values.
    #[must_use]
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Total number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if some axis has size 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the value at a full multi-index.
    pub fn get(&self, index: &[usize]) -> Result<f64, GameError> {
        let offset = self.checked_offset(index)?;
        Ok(self.data[offset])
    }

    /// Overwrite the value at a full multi-index.
    pub fn set(&mut self, index: &[usize], value: f64) -> Result<(), GameError> {
        let offset = self.checked_offset(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Validate `index` against the shape and return its row-major offset.
    pub fn checked_offset(&self, index: &[usize]) -> Result<usize, GameError> {
        if index.len() != self.ndim() {
            return Err(GameError::IndexArity {
                expected: self.ndim(),
                found: index.len(),
            });
        }
        for (axis, (&i, &size)) in index.iter().zip(self.shape.iter()).enumerate() {
            if i >= size {
                return Err(GameError::IndexOutOfBounds { axis, index: i, size });
            }
        }
        Ok(self.offset(index))
    }

    /// Row-major offset of an index already known to be in bounds.
    pub(crate) fn offset(&self, index: &[usize]) -> usize {
        index
            .iter()
            .zip(self.shape.iter())
            .fold(0, |offset, (&i, &size)| offset * size + i)
    }

    /// Drop the last axis by selecting slice `index` along it.
    ///
    /// The rank decreases by one; values along the remaining axes are
    /// unchanged.
    pub fn take_last(&self, index: usize) -> Result<Self, GameError> {
        let last = self.last_axis()?;
        if index >= last {
            return Err(GameError::ActionOutOfRange {
                action: index,
                num_actions: last,
            });
        }
        let data = self.data.chunks_exact(last).map(|row| row[index]).collect();
        Ok(self.reduced(data))
    }

    /// Drop the last axis by a weighted sum against `weights`.
    pub fn dot_last(&self, weights: &[f64]) -> Result<Self, GameError> {
        let last = self.last_axis()?;
        if weights.len() != last {
            return Err(GameError::MixedActionLength {
                num_actions: last,
                found: weights.len(),
            });
        }
        let data = self
            .data
            .chunks_exact(last)
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).sum())
            .collect();
        Ok(self.reduced(data))
    }

    fn last_axis(&self) -> Result<usize, GameError> {
        match self.shape.last() {
            Some(&0) => Err(GameError::InvalidActionSizes {
                sizes: self.shape.to_vec(),
            }),
            Some(&last) => Ok(last),
            None => Err(GameError::NothingToReduce),
        }
    }

    fn reduced(&self, data: Vec<f64>) -> Self {
        Self {
            shape: SmallVec::from_slice(&self.shape[..self.ndim() - 1]),
            data,
        }
    }
}

impl fmt::Display for PayoffArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_axis(
            f: &mut fmt::Formatter<'_>,
            shape: &[usize],
            data: &[f64],
        ) -> fmt::Result {
            let Some((&size, rest)) = shape.split_first() else {
                return write!(f, "{}", data[0]);
            };
            let stride: usize = rest.iter().product();
            write!(f, "[")?;
            for i in 0..size {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_axis(f, rest, &data[i * stride..(i + 1) * stride])?;
            }
            write!(f, "]")
        }

        if self.is_empty() {
            return write!(f, "[]");
        }
        write_axis(f, &self.shape, &self.data)
    }
}

/// Iterator over every multi-index of a shape in row-major order.
///
/// Yields nothing when some axis has size 0, and a single empty index
/// for a rank-0 shape.
///
/// ```
/// use rust_nfg::core::Indices;
///
/// let all: Vec<Vec<usize>> = Indices::new(&[2, 2]).map(|i| i.to_vec()).collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct Indices {
    shape: Shape,
    next: Option<Shape>,
}

impl Indices {
    /// Iterate over all indices of `shape`.
    #[must_use]
    pub fn new(shape: &[usize]) -> Self {
        let next = if shape.contains(&0) {
            None
        } else {
            Some(smallvec![0; shape.len()])
        };
        Self {
            shape: SmallVec::from_slice(shape),
            next,
        }
    }
}

impl Iterator for Indices {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        for axis in (0..successor.len()).rev() {
            successor[axis] += 1;
            if successor[axis] < self.shape[axis] {
                self.next = Some(successor);
                break;
            }
            successor[axis] = 0;
        }
        Some(current)
    }
}
