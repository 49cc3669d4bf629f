//! Columns of the prime implicant table

use super::mask::{Mask, Trit};
use std::collections::HashSet;
use std::sync::Arc;

/// Masks of one weight, deduplicated by pattern, in insertion order
#[derive(Debug, Clone, Default)]
pub(crate) struct Bucket {
    masks: Vec<Mask>,
    patterns: HashSet<Arc<[Trit]>>,
}

impl Bucket {
    /// Add a mask unless one with the same pattern is already present
    pub fn insert(&mut self, mask: Mask) -> bool {
        if !self.patterns.insert(Arc::from(mask.pattern())) {
            return false;
        }
        self.masks.push(mask);
        true
    }

    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    pub fn masks_mut(&mut self) -> &mut [Mask] {
        &mut self.masks
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

/// One column of the table: buckets indexed by weight
#[derive(Debug, Clone)]
pub(crate) struct Column {
    buckets: Vec<Bucket>,
}

impl Column {
    /// Column with `count` empty buckets
    pub fn with_buckets(count: usize) -> Self {
        Column {
            buckets: vec![Bucket::default(); count],
        }
    }

    /// First column over `width` variables, one bucket per possible weight
    pub fn initial(width: usize, masks: impl IntoIterator<Item = Mask>) -> Self {
        let mut column = Self::with_buckets(width + 1);
        for mask in masks {
            let weight = mask.weight();
            column.insert(weight, mask);
        }
        column
    }

    pub fn insert(&mut self, bucket: usize, mask: Mask) -> bool {
        self.buckets[bucket].insert(mask)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Mutable access to the adjacent buckets `index` and `index + 1`
    pub fn adjacent_mut(&mut self, index: usize) -> (&mut Bucket, &mut Bucket) {
        let (lower, upper) = self.buckets.split_at_mut(index + 1);
        (&mut lower[index], &mut upper[0])
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// All masks, lowest weight first
    pub fn masks(&self) -> impl Iterator<Item = &Mask> {
        self.buckets.iter().flat_map(|bucket| bucket.masks().iter())
    }
}
