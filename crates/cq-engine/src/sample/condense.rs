//! Bounded-size thinning of sample batches for display.
//!
//! A batch larger than [`CONDENSED_LIMIT`] is filtered with an independent
//! fair coin per element, and the filter is applied again to the survivors
//! until the batch fits. This is not a uniform random subset: how many
//! elements survive depends on how far the last pass overshoots, and the
//! number of passes has no fixed bound (about `log2(n / 50)` on average).

use crate::dice::DiceSource;

/// Largest number of samples kept for display.
pub const CONDENSED_LIMIT: usize = 50;

/// Thin `items` down to at most [`CONDENSED_LIMIT`] elements.
///
/// Batches already within the limit are returned unchanged, in order.
/// Survivors keep their relative order.
pub fn condense<T: Clone>(items: &[T], dice: &mut impl DiceSource) -> Vec<T> {
    let mut kept = items.to_vec();
    if kept.len() <= CONDENSED_LIMIT {
        return kept;
    }

    let mut passes = 0u32;
    while kept.len() > CONDENSED_LIMIT {
        kept.retain(|_| dice.flip_coin());
        passes += 1;
    }

    tracing::debug!(
        from = items.len(),
        to = kept.len(),
        passes,
        "condensed samples"
    );
    kept
}
