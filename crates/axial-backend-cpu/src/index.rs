//! Index arithmetic: strides, axis normalization, coordinate
//! linearization and broadcast stride tables.

use axial::{ArrayError, ArrayResult, Buffer, DType};
use smallvec::SmallVec;

/// Per-axis coordinates of one element; stack-allocated for typical ranks.
pub(crate) type Coords = SmallVec<[usize; 4]>;

/// Row-major strides for the given extents.
///
/// Suffix products saturate instead of overflowing. With a checked element
/// count an overflow can only occur behind a zero extent, and a zero extent
/// admits no coordinates.
pub(crate) fn compute_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![0usize; dims.len()];
    let mut acc = 1usize;
    for (i, dim) in dims.iter().enumerate().rev() {
        strides[i] = acc;
        acc = acc.saturating_mul(*dim);
    }
    strides
}

/// Product of a run of extents, saturating on overflow.
pub(crate) fn extent_product(dims: &[usize]) -> usize {
    dims.iter().fold(1usize, |acc, &dim| acc.saturating_mul(dim))
}

/// Converts a flat row-major offset back into per-axis coordinates.
pub(crate) fn unravel_index(mut index: usize, dims: &[usize]) -> Coords {
    let mut coords: Coords = SmallVec::from_elem(0, dims.len());
    for (i, dim) in dims.iter().enumerate().rev() {
        if *dim > 0 {
            coords[i] = index % *dim;
            index /= *dim;
        }
    }
    coords
}

/// Resolves a possibly-negative axis against `rank`.
pub(crate) fn normalize_axis(argument: &'static str, axis: isize, rank: usize) -> ArrayResult<usize> {
    let resolved = if axis < 0 { axis + rank as isize } else { axis };
    if resolved < 0 || resolved as usize >= rank {
        return Err(ArrayError::invalid_argument(
            argument,
            format!("axis {axis} is out of bounds for rank {rank}"),
        ));
    }
    Ok(resolved as usize)
}

/// Reads an integer index buffer into widened values.
pub(crate) fn index_values(argument: &'static str, indices: &Buffer) -> ArrayResult<Vec<i64>> {
    match indices.dtype() {
        DType::I32 => Ok(indices
            .values::<i32>()?
            .iter()
            .map(|&v| i64::from(v))
            .collect()),
        DType::I64 => indices.to_vec::<i64>(),
        other => Err(ArrayError::invalid_argument(
            argument,
            format!("expected an integer dtype, got {other}"),
        )),
    }
}

/// Linearized coordinate rows: one base offset per row plus the implicit
/// contiguous block each row addresses.
#[derive(Debug)]
pub(crate) struct LinearizedRows {
    pub base_offsets: Vec<usize>,
    /// Product of the unaddressed trailing extents; 1 when rows carry full
    /// coordinates.
    pub block_len: usize,
}

impl LinearizedRows {
    pub fn position_count(&self) -> usize {
        self.base_offsets.len().saturating_mul(self.block_len)
    }
}

/// Converts coordinate rows of length `row_len` into flat base offsets into
/// a row-major buffer of extents `target_dims`.
///
/// Rows address the leading `row_len` axes; the remaining trailing axes form
/// one contiguous block per row (`block_len`). Every coordinate is bounds
/// checked before any offset is returned, negatives included.
pub(crate) fn linearize_rows(
    argument: &'static str,
    rows: &[i64],
    row_len: usize,
    target_dims: &[usize],
) -> ArrayResult<LinearizedRows> {
    if row_len == 0 {
        return Err(ArrayError::invalid_argument(
            argument,
            "coordinate rows must carry at least one coordinate".to_string(),
        ));
    }
    if row_len > target_dims.len() {
        return Err(ArrayError::invalid_argument(
            argument,
            format!(
                "coordinate rows of length {row_len} exceed target rank {}",
                target_dims.len()
            ),
        ));
    }

    let strides = compute_strides(target_dims);
    let block_len = extent_product(&target_dims[row_len..]);
    let mut base_offsets = Vec::with_capacity(rows.len() / row_len);
    for row in rows.chunks_exact(row_len) {
        let mut offset = 0usize;
        for (axis, &coord) in row.iter().enumerate() {
            let extent = target_dims[axis];
            if coord < 0 || coord as usize >= extent {
                return Err(ArrayError::index_out_of_bounds(coord, axis, extent));
            }
            offset += coord as usize * strides[axis];
        }
        base_offsets.push(offset);
    }

    Ok(LinearizedRows {
        base_offsets,
        block_len,
    })
}

/// Stride table for reading a buffer of extents `from_dims` as if it were
/// broadcast to `to_dims`: expanded axes (missing or size 1) get stride 0.
pub(crate) fn broadcast_strides(
    argument: &'static str,
    from_dims: &[usize],
    to_dims: &[usize],
) -> ArrayResult<Vec<usize>> {
    if from_dims.len() > to_dims.len() {
        return Err(ArrayError::shape_mismatch(argument, to_dims, from_dims));
    }
    let from_strides = compute_strides(from_dims);
    let offset = to_dims.len() - from_dims.len();
    let mut strides = vec![0usize; to_dims.len()];
    for (i, &from_dim) in from_dims.iter().enumerate() {
        let to_dim = to_dims[offset + i];
        if from_dim == to_dim {
            strides[offset + i] = from_strides[i];
        } else if from_dim != 1 {
            return Err(ArrayError::shape_mismatch(argument, to_dims, from_dims));
        }
    }
    Ok(strides)
}

/// Maps a flat offset in the broadcast target space back to an offset in
/// the source buffer described by `broadcast_strides`.
pub(crate) fn broadcast_offset(mut flat: usize, to_dims: &[usize], strides: &[usize]) -> usize {
    let mut offset = 0usize;
    for i in (0..to_dims.len()).rev() {
        if to_dims[i] > 0 {
            offset += (flat % to_dims[i]) * strides[i];
            flat /= to_dims[i];
        }
    }
    offset
}
