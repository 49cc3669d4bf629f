//! Product terms as ternary masks

use super::error::MinimizerError;
use crate::expression::BoolExpr;
use crate::truth_table;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// State of one variable in a product term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trit {
    /// The variable appears complemented
    Negated,
    /// The variable appears uncomplemented
    Asserted,
    /// The variable does not appear in the product
    Absent,
}

impl Trit {
    /// The character used when printing a pattern: `0`, `1` or `-`
    pub fn symbol(self) -> char {
        match self {
            Trit::Negated => '0',
            Trit::Asserted => '1',
            Trit::Absent => '-',
        }
    }
}

impl From<bool> for Trit {
    fn from(value: bool) -> Self {
        if value {
            Trit::Asserted
        } else {
            Trit::Negated
        }
    }
}

impl TryFrom<char> for Trit {
    type Error = MinimizerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Trit::Negated),
            '1' => Ok(Trit::Asserted),
            '-' => Ok(Trit::Absent),
            other => Err(MinimizerError::invalid_argument(format!(
                "'{}' is not a pattern character (expected 0, 1 or -)",
                other
            ))),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A product term over a fixed number of variables
///
/// Besides its pattern a mask remembers which truth table rows it covers and
/// whether all of them are don't-cares. Two masks are equal, and hash alike,
/// when their patterns are equal; the other fields do not take part.
///
/// # Examples
///
/// ```
/// use qmc_logic::Mask;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut a = Mask::from_row_index(5, 4, false)?; // 0101
/// let mut b = Mask::from_row_index(7, 4, false)?; // 0111
///
/// let merged = a.combine_with(&mut b)?.expect("rows 5 and 7 are adjacent");
/// assert_eq!(merged.pattern_string(), "01-1");
/// assert!(a.is_combined() && b.is_combined());
/// assert_eq!(merged.to_string(), "01-1 .   [5, 7]");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Mask {
    pattern: Arc<[Trit]>,
    indexes: BTreeSet<usize>,
    dont_care: bool,
    combined: bool,
    weight: usize,
}

impl Mask {
    /// Fully specified mask of one truth table row
    ///
    /// The first variable is the most significant bit of `index`. Fails with
    /// [`MinimizerError::InvalidArgument`] when `width` is zero or `index`
    /// does not fit in `width` bits.
    pub fn from_row_index(index: usize, width: usize, dont_care: bool) -> Result<Self, MinimizerError> {
        if width < 1 {
            return Err(MinimizerError::invalid_argument(format!(
                "mask width must be at least 1, got {}",
                width
            )));
        }
        if width < usize::BITS as usize && index >> width != 0 {
            return Err(MinimizerError::invalid_argument(format!(
                "row index {} is out of range for {} variables",
                index, width
            )));
        }

        let pattern: Vec<Trit> = truth_table::index_to_assignment(index, width)
            .into_iter()
            .map(Trit::from)
            .collect();
        Ok(Self::build(pattern.into(), BTreeSet::from([index]), dont_care))
    }

    /// Mask with an explicit pattern and covered row set
    ///
    /// Fails with [`MinimizerError::InvalidArgument`] when `indexes` is empty.
    pub fn from_pattern(
        pattern: &[Trit],
        indexes: &BTreeSet<usize>,
        dont_care: bool,
    ) -> Result<Self, MinimizerError> {
        if indexes.is_empty() {
            return Err(MinimizerError::invalid_argument(
                "a mask must cover at least one row",
            ));
        }
        Ok(Self::build(Arc::from(pattern), indexes.clone(), dont_care))
    }

    fn build(pattern: Arc<[Trit]>, indexes: BTreeSet<usize>, dont_care: bool) -> Self {
        let weight = pattern.iter().filter(|&&t| t == Trit::Asserted).count();
        Mask {
            pattern,
            indexes,
            dont_care,
            combined: false,
            weight,
        }
    }

    /// The pattern, one trit per variable
    pub fn pattern(&self) -> &[Trit] {
        &self.pattern
    }

    /// The pattern as a string of `0`, `1` and `-`
    pub fn pattern_string(&self) -> String {
        self.pattern.iter().map(|t| t.symbol()).collect()
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.pattern.len()
    }

    /// Truth table rows covered by this mask, ascending
    pub fn indexes(&self) -> &BTreeSet<usize> {
        &self.indexes
    }

    /// Whether the mask covers the given row
    pub fn covers(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    /// True when every covered row is a don't-care
    pub fn is_dont_care(&self) -> bool {
        self.dont_care
    }

    /// True once the mask has taken part in a successful merge
    pub fn is_combined(&self) -> bool {
        self.combined
    }

    /// Set or clear the combined flag
    pub fn set_combined(&mut self, combined: bool) {
        self.combined = combined;
    }

    /// Number of asserted positions
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Number of literals in the product term
    pub fn literal_count(&self) -> usize {
        self.pattern.iter().filter(|&&t| t != Trit::Absent).count()
    }

    /// Merge two masks that differ in exactly one specified position
    ///
    /// Returns the merged mask, with that position absent, or `None` when
    /// the masks are not adjacent. On success both inputs are marked
    /// combined; on failure neither is touched. Masks of different widths
    /// are an error rather than a failed merge.
    pub fn combine_with(&mut self, other: &mut Mask) -> Result<Option<Mask>, MinimizerError> {
        if self.width() != other.width() {
            return Err(MinimizerError::DimensionMismatch {
                expected: self.width(),
                found: other.width(),
            });
        }
        if self.weight.abs_diff(other.weight) != 1 {
            return Ok(None);
        }

        let mut differing = None;
        for (position, (&lhs, &rhs)) in self.pattern.iter().zip(other.pattern.iter()).enumerate() {
            if lhs == rhs {
                continue;
            }
            if lhs == Trit::Absent || rhs == Trit::Absent || differing.is_some() {
                return Ok(None);
            }
            differing = Some(position);
        }
        let Some(position) = differing else {
            return Ok(None);
        };

        let mut pattern = self.pattern.to_vec();
        pattern[position] = Trit::Absent;
        let indexes = self.indexes.union(&other.indexes).copied().collect();
        let merged = Self::build(pattern.into(), indexes, self.dont_care && other.dont_care);

        self.combined = true;
        other.combined = true;
        Ok(Some(merged))
    }

    /// Literals of the product term, in variable order
    ///
    /// A pattern with no specified position yields the single literal
    /// `true`.
    pub fn to_product_term<S: AsRef<str>>(&self, variables: &[S]) -> Result<Vec<BoolExpr>, MinimizerError> {
        if variables.len() != self.width() {
            return Err(MinimizerError::invalid_argument(format!(
                "{} variable names given for a mask of width {}",
                variables.len(),
                self.width()
            )));
        }

        let mut literals: Vec<BoolExpr> = self
            .pattern
            .iter()
            .zip(variables)
            .filter_map(|(trit, name)| match trit {
                Trit::Negated => Some(BoolExpr::variable(name.as_ref()).not()),
                Trit::Asserted => Some(BoolExpr::variable(name.as_ref())),
                Trit::Absent => None,
            })
            .collect();
        if literals.is_empty() {
            literals.push(BoolExpr::Constant(true));
        }
        Ok(literals)
    }

    /// The product term as a single expression
    pub fn to_expr<S: AsRef<str>>(&self, variables: &[S]) -> Result<BoolExpr, MinimizerError> {
        Ok(BoolExpr::and_all(self.to_product_term(variables)?))
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Mask {}

impl Hash for Mask {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indexes: Vec<String> = self.indexes.iter().map(|i| i.to_string()).collect();
        write!(
            f,
            "{} {} {} [{}]",
            self.pattern_string(),
            if self.dont_care { 'D' } else { '.' },
            if self.combined { '*' } else { ' ' },
            indexes.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pattern(text: &str) -> Vec<Trit> {
        text.chars().map(|c| Trit::try_from(c).unwrap()).collect()
    }

    fn mask(text: &str, indexes: &[usize]) -> Mask {
        Mask::from_pattern(&pattern(text), &indexes.iter().copied().collect(), false).unwrap()
    }

    #[test]
    fn test_from_row_index_msb_first() {
        let m = Mask::from_row_index(11, 4, false).unwrap();
        assert_eq!(m.pattern_string(), "1011");
        assert_eq!(m.weight(), 3);
        assert_eq!(m.indexes().iter().copied().collect::<Vec<_>>(), vec![11]);
        assert!(!m.is_dont_care());
        assert!(!m.is_combined());
    }

    #[test]
    fn test_from_row_index_bounds() {
        assert!(Mask::from_row_index(15, 4, false).is_ok());
        assert!(matches!(
            Mask::from_row_index(16, 4, false),
            Err(MinimizerError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Mask::from_row_index(0, 0, false),
            Err(MinimizerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_from_row_index_wide() {
        let m = Mask::from_row_index(usize::MAX, 70, false).unwrap();
        assert_eq!(m.width(), 70);
        assert_eq!(m.weight(), usize::BITS as usize);
    }

    #[test]
    fn test_from_pattern_requires_indexes() {
        let result = Mask::from_pattern(&pattern("1-"), &BTreeSet::new(), false);
        assert!(matches!(result, Err(MinimizerError::InvalidArgument { .. })));
    }

    #[test]
    fn test_from_pattern_copies_input() {
        let mut source = pattern("10");
        let indexes = BTreeSet::from([2]);
        let m = Mask::from_pattern(&source, &indexes, true).unwrap();
        source[0] = Trit::Absent;
        assert_eq!(m.pattern_string(), "10");
        assert!(m.is_dont_care());
    }

    #[test]
    fn test_trit_from_char() {
        assert_eq!(Trit::try_from('-').unwrap(), Trit::Absent);
        assert!(Trit::try_from('x').is_err());
    }

    #[test]
    fn test_equality_ignores_everything_but_pattern() {
        let a = mask("01-", &[2, 3]);
        let mut b = Mask::from_pattern(&pattern("01-"), &BTreeSet::from([7]), true).unwrap();
        b.set_combined(true);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
        assert!(set.insert(mask("011", &[3])));
    }

    #[test]
    fn test_combine_one_difference() {
        let mut a = mask("0-01", &[1, 5]);
        let mut b = mask("0-11", &[3, 7]);
        let merged = a.combine_with(&mut b).unwrap().unwrap();

        assert_eq!(merged.pattern_string(), "0--1");
        assert_eq!(merged.indexes().iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
        assert!(!merged.is_combined());
        assert!(a.is_combined());
        assert!(b.is_combined());
    }

    #[test]
    fn test_combine_is_symmetric() {
        let mut a = mask("0101", &[5]);
        let mut b = mask("0111", &[7]);
        let forward = a.clone().combine_with(&mut b.clone()).unwrap();
        let backward = b.combine_with(&mut a).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_combine_rejects_no_difference() {
        let mut a = mask("01-1", &[5, 7]);
        let mut b = mask("01-1", &[5, 7]);
        assert_eq!(a.combine_with(&mut b).unwrap(), None);
        assert!(!a.is_combined());
        assert!(!b.is_combined());
    }

    #[test]
    fn test_combine_rejects_two_differences() {
        // weights 1 and 2 but two positions differ
        let mut a = mask("0010", &[2]);
        let mut b = mask("0101", &[5]);
        assert_eq!(a.combine_with(&mut b).unwrap(), None);
        assert!(!a.is_combined() && !b.is_combined());
    }

    #[test]
    fn test_combine_rejects_absent_difference() {
        let mut a = mask("0-1", &[1, 3]);
        let mut b = mask("011", &[3]);
        assert_eq!(a.combine_with(&mut b).unwrap(), None);
        assert!(!a.is_combined() && !b.is_combined());
    }

    #[test]
    fn test_combine_width_mismatch() {
        let mut a = mask("01", &[1]);
        let mut b = mask("011", &[3]);
        assert_eq!(
            a.combine_with(&mut b),
            Err(MinimizerError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_combine_dont_care_flag() {
        let mut dc = Mask::from_row_index(2, 2, true).unwrap();
        let mut dc2 = Mask::from_row_index(3, 2, true).unwrap();
        let mut real = Mask::from_row_index(1, 2, false).unwrap();

        assert!(dc.combine_with(&mut dc2).unwrap().unwrap().is_dont_care());

        let mut dc3 = Mask::from_row_index(3, 2, true).unwrap();
        assert!(!real.combine_with(&mut dc3).unwrap().unwrap().is_dont_care());
    }

    #[test]
    fn test_to_product_term() {
        let m = mask("1-0", &[4, 6]);
        let term = m.to_product_term(&["A", "B", "C"]).unwrap();
        assert_eq!(
            term,
            vec![BoolExpr::variable("A"), BoolExpr::variable("C").not()]
        );
        assert_eq!(m.to_expr(&["A", "B", "C"]).unwrap().to_string(), "A AND NOT C");
        assert_eq!(m.literal_count(), 2);
    }

    #[test]
    fn test_to_product_term_all_absent() {
        let m = mask("--", &[0, 1, 2, 3]);
        assert_eq!(
            m.to_product_term(&["A", "B"]).unwrap(),
            vec![BoolExpr::Constant(true)]
        );
    }

    #[test]
    fn test_to_product_term_name_count() {
        let m = mask("10", &[2]);
        assert!(matches!(
            m.to_product_term(&["A"]),
            Err(MinimizerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut m = Mask::from_pattern(&pattern("1-"), &BTreeSet::from([2, 3]), true).unwrap();
        assert_eq!(m.to_string(), "1- D   [2, 3]");
        m.set_combined(true);
        assert_eq!(m.to_string(), "1- D * [2, 3]");
    }
}
