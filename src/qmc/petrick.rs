//! Minimal cover selection with Petrick's method
//!
//! Essential prime implicants are taken first. Any minterm they leave
//! uncovered contributes one clause to the covering formula, a product of
//! sums over implicant indices, which is multiplied out into a sum of
//! products. The products with the fewest implicants complete the cover.

use super::bitset::BitSet;
use super::config::MinimizerConfig;
use super::error::MinimizerError;
use super::mask::Mask;
use log::{debug, trace};
use std::collections::{BTreeSet, HashSet};

/// Coverage of the target minterms by the prime implicants
struct CoverTable {
    /// Minterms in ascending order, one column each
    minterms: Vec<usize>,
    /// `rows[i][j]` is true when implicant `i` covers `minterms[j]`
    rows: Vec<Vec<bool>>,
}

impl CoverTable {
    fn new(implicants: &[Mask], minterms: &BTreeSet<usize>) -> Self {
        let minterms: Vec<usize> = minterms.iter().copied().collect();
        let rows = implicants
            .iter()
            .map(|implicant| minterms.iter().map(|&m| implicant.covers(m)).collect())
            .collect();
        CoverTable { minterms, rows }
    }

    /// Implicants covering column `column`
    fn covering(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| row[column])
            .map(|(i, _)| i)
    }
}

/// Select every minimum-size cover of `minterms`
///
/// Each cover is a list of indices into `implicants`: the essential
/// implicants in the order they were found, then the completion chosen by
/// Petrick's method in ascending order. Covers are ordered by their
/// completions. An empty `minterms` set yields one empty cover.
pub(crate) fn select_minimal_covers(
    implicants: &[Mask],
    minterms: &BTreeSet<usize>,
    config: &MinimizerConfig,
) -> Result<Vec<Vec<usize>>, MinimizerError> {
    let table = CoverTable::new(implicants, minterms);
    let (essential, covered) = essential_implicants(&table);
    debug!(
        "Essential prime implicants: {}",
        describe(implicants, &essential)
    );

    if covered.iter().all(|&c| c) {
        return Ok(vec![essential]);
    }

    let clauses = build_p_function(&table, &covered, implicants.len())?;
    trace!("p-function: {}", describe_clauses(&clauses));

    let completions = minimum_products(&clauses, implicants.len(), config)?;
    let covers: Vec<Vec<usize>> = completions
        .into_iter()
        .map(|completion| {
            let mut cover = essential.clone();
            cover.extend(completion);
            cover
        })
        .collect();

    debug!("Found {} minimal covers", covers.len());
    Ok(covers)
}

/// Implicants that alone cover some minterm, and the minterms they cover
fn essential_implicants(table: &CoverTable) -> (Vec<usize>, Vec<bool>) {
    let mut essential = Vec::new();
    let mut covered = vec![false; table.minterms.len()];

    for column in 0..table.minterms.len() {
        let mut covering = table.covering(column);
        let (Some(only), None) = (covering.next(), covering.next()) else {
            continue;
        };
        if essential.contains(&only) {
            continue;
        }
        essential.push(only);
        for (j, &hit) in table.rows[only].iter().enumerate() {
            covered[j] |= hit;
        }
    }

    (essential, covered)
}

/// One clause per uncovered minterm, holding the implicants that cover it
fn build_p_function(
    table: &CoverTable,
    covered: &[bool],
    implicant_count: usize,
) -> Result<Vec<BitSet>, MinimizerError> {
    let mut clauses = Vec::new();
    for column in (0..covered.len()).filter(|&j| !covered[j]) {
        let mut clause = BitSet::new(implicant_count);
        for i in table.covering(column) {
            clause.insert(i);
        }
        if clause.is_empty() {
            return Err(MinimizerError::InvariantViolation {
                message: format!(
                    "minterm {} is not covered by any prime implicant",
                    table.minterms[column]
                ),
            });
        }
        clauses.push(clause);
    }
    Ok(clauses)
}

/// Multiply out the product of sums and keep the smallest products
///
/// Products are deduplicated after every clause. Each returned product is a
/// sorted list of implicant indices; the list of products is sorted too.
fn minimum_products(
    clauses: &[BitSet],
    implicant_count: usize,
    config: &MinimizerConfig,
) -> Result<Vec<Vec<usize>>, MinimizerError> {
    let mut products = vec![BitSet::new(implicant_count)];

    for clause in clauses {
        let mut next = Vec::new();
        let mut seen = HashSet::new();
        for product in &products {
            for i in clause {
                let extended = product.with(i);
                if seen.insert(extended.clone()) {
                    next.push(extended);
                    if let Some(limit) = config.max_cover_candidates {
                        if next.len() > limit {
                            return Err(MinimizerError::CoverLimitExceeded { limit });
                        }
                    }
                }
            }
        }
        products = next;
    }
    trace!(
        "Sum of products after distribution: {}",
        describe_clauses(&products)
    );

    let Some(smallest) = products.iter().map(BitSet::len).min() else {
        return Ok(Vec::new());
    };
    let mut minimal: Vec<Vec<usize>> = products
        .iter()
        .filter(|product| product.len() == smallest)
        .map(|product| product.iter().collect())
        .collect();
    minimal.sort();
    trace!("Smallest completions: {:?}", minimal);
    Ok(minimal)
}

fn describe(implicants: &[Mask], selected: &[usize]) -> String {
    let patterns: Vec<String> = selected
        .iter()
        .map(|&i| implicants[i].pattern_string())
        .collect();
    format!("[{}]", patterns.join(", "))
}

fn describe_clauses(sets: &[BitSet]) -> String {
    let parts: Vec<String> = sets
        .iter()
        .map(|set| format!("{:?}", set.iter().collect::<Vec<_>>()))
        .collect();
    parts.join(" ")
}
