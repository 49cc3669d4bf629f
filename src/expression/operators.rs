//! Operator overloading for boolean expressions
//!
//! `*` builds AND, `+` builds OR, `^` builds XOR and `!` builds NOT, each on
//! owned expressions or references. They delegate to the named builders, so
//! `a * b` is exactly `a.and(&b)`.
//!
//! ```
//! use qmc_logic::BoolExpr;
//!
//! let a = BoolExpr::variable("A");
//! let b = BoolExpr::variable("B");
//! let c = BoolExpr::variable("C");
//!
//! assert_eq!(&a * &b, a.and(&b));
//! assert_eq!((&a + &b + &c).to_string(), "A OR B OR C");
//! assert_eq!((!&a ^ b).to_string(), "NOT A XOR B");
//! ```

use super::BoolExpr;
use std::ops::{Add, BitXor, Mul, Not};

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $builder:ident) => {
        impl $trait for &BoolExpr {
            type Output = BoolExpr;

            fn $method(self, rhs: &BoolExpr) -> BoolExpr {
                self.$builder(rhs)
            }
        }

        impl $trait<&BoolExpr> for BoolExpr {
            type Output = BoolExpr;

            fn $method(self, rhs: &BoolExpr) -> BoolExpr {
                self.$builder(rhs)
            }
        }

        impl $trait for BoolExpr {
            type Output = BoolExpr;

            fn $method(self, rhs: BoolExpr) -> BoolExpr {
                self.$builder(&rhs)
            }
        }
    };
}

binary_operator!(Mul, mul, and);
binary_operator!(Add, add, or);
binary_operator!(BitXor, bitxor, xor);

impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}
