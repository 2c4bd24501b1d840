//! Borrowed strided views into column-major storage.
//!
//! A view is a window of `m` rows and `n` columns into a slice that
//! it does not own, with column `j` starting `j*ld` elements past the
//! first entry.  Mutable views can be split into disjoint quadrants
//! that each keep the lifetime of the parent borrow, which is what the
//! recursive factorizations need to work on several blocks of the same
//! matrix at once.

use crate::algebra::{DenseFactorizationError, MatrixShape, ShapedMatrix};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Read-only strided view of a column-major matrix.
#[derive(Debug)]
pub struct StridedMatrix<'a, T> {
    ptr: *const T,
    m: usize,
    n: usize,
    ld: usize,
    phantom: PhantomData<&'a [T]>,
}

/// Mutable strided view of a column-major matrix.
#[derive(Debug)]
pub struct StridedMatrixMut<'a, T> {
    ptr: *mut T,
    m: usize,
    n: usize,
    ld: usize,
    phantom: PhantomData<&'a mut [T]>,
}

// SAFETY: the views behave as &'a [T] and &'a mut [T] respectively.
unsafe impl<T: Sync> Send for StridedMatrix<'_, T> {}
unsafe impl<T: Sync> Sync for StridedMatrix<'_, T> {}
unsafe impl<T: Send> Send for StridedMatrixMut<'_, T> {}
unsafe impl<T: Sync> Sync for StridedMatrixMut<'_, T> {}

impl<T> Clone for StridedMatrix<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for StridedMatrix<'_, T> {}

// number of elements a slice must hold to back an m x n view with
// leading dimension ld, or None if ld is too small
fn required_len(m: usize, n: usize, ld: usize) -> Option<usize> {
    if ld < usize::max(1, m) {
        return None;
    }
    if m == 0 || n == 0 {
        Some(0)
    } else {
        (n - 1).checked_mul(ld)?.checked_add(m)
    }
}

fn check_view_dims(len: usize, m: usize, n: usize, ld: usize) -> Result<(), DenseFactorizationError> {
    match required_len(m, n, ld) {
        Some(req) if req <= len => Ok(()),
        _ => Err(DenseFactorizationError::IncompatibleDimension),
    }
}

// Every (i,j) with i < m and j < n satisfies ptr + i + j*ld inside the
// borrowed allocation.  Offsets are computed with wrapping arithmetic
// so that pointers for empty views are never dereferenced.

impl<'a, T> StridedMatrix<'a, T> {
    /// Creates an `m x n` view over `data` with leading dimension `ld`.
    pub fn from_slice(
        data: &'a [T],
        m: usize,
        n: usize,
        ld: usize,
    ) -> Result<Self, DenseFactorizationError> {
        check_view_dims(data.len(), m, n, ld)?;
        Ok(Self {
            ptr: data.as_ptr(),
            m,
            n,
            ld,
            phantom: PhantomData,
        })
    }

    /// Leading dimension, i.e. the distance between columns.
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Reborrows the view for a shorter lifetime.
    pub fn rb(&self) -> StridedMatrix<'_, T> {
        *self
    }

    /// Contiguous storage of column `j`.
    pub fn col(&self, j: usize) -> &'a [T] {
        assert!(j < self.n);
        // SAFETY: column j lies entirely inside the view
        unsafe { std::slice::from_raw_parts(self.ptr.wrapping_add(j * self.ld), self.m) }
    }

    /// Sub-view of `nrows x ncols` entries starting at `(row, col)`.
    pub fn submatrix(self, row: usize, col: usize, nrows: usize, ncols: usize) -> Self {
        assert!(row + nrows <= self.m && col + ncols <= self.n);
        Self {
            ptr: self.ptr.wrapping_add(row + col * self.ld),
            m: nrows,
            n: ncols,
            ld: self.ld,
            phantom: PhantomData,
        }
    }

    /// Splits into `(top_left, top_right, bottom_left, bottom_right)`
    /// with the top left quadrant of size `i x j`.
    pub fn split_at(self, i: usize, j: usize) -> (Self, Self, Self, Self) {
        assert!(i <= self.m && j <= self.n);
        let (m, n) = (self.m, self.n);
        (
            self.submatrix(0, 0, i, j),
            self.submatrix(0, j, i, n - j),
            self.submatrix(i, 0, m - i, j),
            self.submatrix(i, j, m - i, n - j),
        )
    }
}

impl<'a, T> StridedMatrixMut<'a, T> {
    /// Creates a mutable `m x n` view over `data` with leading dimension `ld`.
    pub fn from_slice_mut(
        data: &'a mut [T],
        m: usize,
        n: usize,
        ld: usize,
    ) -> Result<Self, DenseFactorizationError> {
        check_view_dims(data.len(), m, n, ld)?;
        Ok(Self {
            ptr: data.as_mut_ptr(),
            m,
            n,
            ld,
            phantom: PhantomData,
        })
    }

    /// Leading dimension, i.e. the distance between columns.
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Reborrows the view immutably for a shorter lifetime.
    pub fn rb(&self) -> StridedMatrix<'_, T> {
        StridedMatrix {
            ptr: self.ptr,
            m: self.m,
            n: self.n,
            ld: self.ld,
            phantom: PhantomData,
        }
    }

    /// Reborrows the view mutably for a shorter lifetime.
    pub fn rb_mut(&mut self) -> StridedMatrixMut<'_, T> {
        StridedMatrixMut {
            ptr: self.ptr,
            m: self.m,
            n: self.n,
            ld: self.ld,
            phantom: PhantomData,
        }
    }

    /// Gives up mutable access for the remainder of the lifetime.
    pub fn into_const(self) -> StridedMatrix<'a, T> {
        StridedMatrix {
            ptr: self.ptr,
            m: self.m,
            n: self.n,
            ld: self.ld,
            phantom: PhantomData,
        }
    }

    pub fn col(&self, j: usize) -> &[T] {
        assert!(j < self.n);
        // SAFETY: column j lies entirely inside the view
        unsafe { std::slice::from_raw_parts(self.ptr.wrapping_add(j * self.ld), self.m) }
    }

    pub fn col_mut(&mut self, j: usize) -> &mut [T] {
        assert!(j < self.n);
        // SAFETY: column j lies entirely inside the view and we hold
        // exclusive access to the view
        unsafe { std::slice::from_raw_parts_mut(self.ptr.wrapping_add(j * self.ld), self.m) }
    }

    /// Columns `j` and `k` as a pair of mutable slices.
    ///
    /// # Panics
    /// Panics if `j == k`.
    pub fn two_cols_mut(&mut self, j: usize, k: usize) -> (&mut [T], &mut [T]) {
        assert!(j != k && j < self.n && k < self.n);
        // SAFETY: distinct columns of a view with ld >= m never overlap
        unsafe {
            (
                std::slice::from_raw_parts_mut(self.ptr.wrapping_add(j * self.ld), self.m),
                std::slice::from_raw_parts_mut(self.ptr.wrapping_add(k * self.ld), self.m),
            )
        }
    }

    /// Sub-view of `nrows x ncols` entries starting at `(row, col)`.
    pub fn submatrix_mut(self, row: usize, col: usize, nrows: usize, ncols: usize) -> Self {
        assert!(row + nrows <= self.m && col + ncols <= self.n);
        Self {
            ptr: self.ptr.wrapping_add(row + col * self.ld),
            m: nrows,
            n: ncols,
            ld: self.ld,
            phantom: PhantomData,
        }
    }

    /// Splits into `(top_left, top_right, bottom_left, bottom_right)`
    /// with the top left quadrant of size `i x j`.  The four quadrants
    /// are disjoint and may be used independently.
    pub fn split_at_mut(self, i: usize, j: usize) -> (Self, Self, Self, Self) {
        assert!(i <= self.m && j <= self.n);
        let (ptr, m, n, ld) = (self.ptr, self.m, self.n, self.ld);
        let quadrant = |row: usize, col: usize, nrows: usize, ncols: usize| Self {
            ptr: ptr.wrapping_add(row + col * ld),
            m: nrows,
            n: ncols,
            ld,
            phantom: PhantomData,
        };
        (
            quadrant(0, 0, i, j),
            quadrant(0, j, i, n - j),
            quadrant(i, 0, m - i, j),
            quadrant(i, j, m - i, n - j),
        )
    }

    /// Splits into the first `j` columns and the remainder.
    pub fn split_at_col_mut(self, j: usize) -> (Self, Self) {
        let i = self.m;
        let (left, right, _, _) = self.split_at_mut(i, j);
        (left, right)
    }

    /// Splits into the first `i` rows and the remainder.
    pub fn split_at_row_mut(self, i: usize) -> (Self, Self) {
        let j = self.n;
        let (top, _, bottom, _) = self.split_at_mut(i, j);
        (top, bottom)
    }

    pub fn fill(&mut self, c: T)
    where
        T: Copy,
    {
        for j in 0..self.n {
            self.col_mut(j).fill(c);
        }
    }
}

impl<T> ShapedMatrix for StridedMatrix<'_, T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> ShapedMatrix for StridedMatrixMut<'_, T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> Index<(usize, usize)> for StridedMatrix<'_, T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.col(idx.1)[idx.0]
    }
}

impl<T> Index<(usize, usize)> for StridedMatrixMut<'_, T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.col(idx.1)[idx.0]
    }
}

impl<T> IndexMut<(usize, usize)> for StridedMatrixMut<'_, T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        &mut self.col_mut(idx.1)[idx.0]
    }
}
