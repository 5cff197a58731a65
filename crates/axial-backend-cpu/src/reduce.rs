//! The reduction engine: collision-aware application of updates onto a
//! linearized target.

use axial::{Element, Reduction};

/// Combines one update into a target cell under `rule`.
pub(crate) fn combine<E: Element>(rule: Reduction, current: E, update: E) -> E {
    match rule {
        Reduction::Sum => current.add(update),
        Reduction::Replace => update,
        Reduction::Min => current.minimum(update),
        Reduction::Max => current.maximum(update),
    }
}

/// Applies every update position onto `target`.
///
/// Rows are walked in order and each row's implicit block is walked
/// contiguously, so `replace` keeps last-write-wins determinism; the
/// commutative rules are order-insensitive anyway. `update_at` is handed
/// the running position index `row * block_len + j`, which is exactly the
/// row-major offset into the broadcast update space.
///
/// `touched` carries the per-cell mask for `min`/`max` onto a freshly
/// allocated target: the first update to a cell stores its value and later
/// ones combine, so untouched cells keep their zero initialization without
/// any sentinel pre-fill. Pass `None` when the target carries meaningful
/// existing contents (or the rule treats zero as its identity).
pub(crate) fn scatter_apply<E: Element>(
    rule: Reduction,
    target: &mut [E],
    mut touched: Option<&mut [bool]>,
    base_offsets: &[usize],
    block_len: usize,
    mut update_at: impl FnMut(usize) -> E,
) {
    for (row, &base) in base_offsets.iter().enumerate() {
        for j in 0..block_len {
            let cell = base + j;
            let update = update_at(row * block_len + j);
            match touched.as_deref_mut() {
                Some(mask) if !mask[cell] => {
                    target[cell] = update;
                    mask[cell] = true;
                }
                _ => target[cell] = combine(rule, target[cell], update),
            }
        }
    }
}
