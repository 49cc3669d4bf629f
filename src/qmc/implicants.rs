//! Prime implicant search
//!
//! Masks are merged column by column. A mask that does not take part in any
//! merge of its column, and does not consist of don't-cares only, is prime.

use super::config::MinimizerConfig;
use super::error::MinimizerError;
use super::mask::Mask;
use super::table::Column;
use log::{debug, log_enabled, trace, Level};

/// Find every prime implicant of the function covering `base`
///
/// `base` holds one fully specified mask per minterm and per don't-care.
/// Implicants are returned in the order they are discovered: by column, then
/// by weight, then by insertion order within a bucket.
pub(crate) fn find_prime_implicants(
    width: usize,
    base: Vec<Mask>,
    config: &MinimizerConfig,
) -> Result<Vec<Mask>, MinimizerError> {
    let mut column = Column::initial(width, base);
    let mut primes = Vec::new();
    let mut pass = 0usize;

    loop {
        let (next, merged) = merge_pass(&mut column)?;
        if config.trace_columns && log_enabled!(Level::Trace) {
            trace_column(pass, &column);
        }

        for mask in column.masks() {
            if !mask.is_combined() && !mask.is_dont_care() {
                trace!("Prime implicant found: {}", mask);
                primes.push(mask.clone());
            }
        }

        if !merged {
            break;
        }
        column = next;
        pass += 1;
    }

    debug!("Found {} prime implicants in {} passes", primes.len(), pass + 1);
    Ok(primes)
}

/// Merge every pair of masks from adjacent buckets
///
/// Returns the next column and whether any merge succeeded. Merged parents
/// are flagged in `column`.
fn merge_pass(column: &mut Column) -> Result<(Column, bool), MinimizerError> {
    let pairs = column.bucket_count().saturating_sub(1);
    let mut next = Column::with_buckets(pairs);
    let mut merged = false;

    for i in 0..pairs {
        let (lower, upper) = column.adjacent_mut(i);
        for low in lower.masks_mut() {
            for high in upper.masks_mut().iter_mut() {
                if let Some(mask) = low.combine_with(high)? {
                    next.insert(i, mask);
                    merged = true;
                }
            }
        }
    }

    Ok((next, merged))
}

fn trace_column(pass: usize, column: &Column) {
    trace!("Column {}:", pass);
    trace!("=================================");
    let last = column.bucket_count().saturating_sub(1);
    for (i, bucket) in column.buckets().iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        for mask in bucket.masks() {
            trace!("{}", mask);
        }
        if i != last {
            trace!("-------------------------------");
        }
    }
}
