//! Arbitrary-precision decimal integers stored as base-1000 limbs.
//!
//! A [`BigInt`] keeps its magnitude as an ordered sequence of *limbs*, each
//! holding three decimal digits, most significant limb first. On top of the
//! usual construction, arithmetic, and formatting, the limb sequence itself
//! is editable: limbs can be inserted, removed, or overwritten at any
//! position, which makes the type useful for exercising and demonstrating
//! grouped-digit representations, not just computing with them.
//!
//! # Arithmetic
//!
//! Values parse from plain digit strings and display with their limbs
//! comma-delimited:
//!
//! ```
//! use groupnum::BigInt;
//!
//! let a: BigInt = "999".parse().unwrap();
//! let b: BigInt = "1".parse().unwrap();
//! assert_eq!((a + b).to_string(), "1,000");
//!
//! let small: BigInt = "999".parse().unwrap();
//! let large: BigInt = "1000".parse().unwrap();
//! let difference = small - large;
//! assert!(difference.is_negative());
//! assert_eq!(difference.to_string(), "-1");
//! ```
//!
//! Addition and subtraction operate on magnitudes: a sum is never negative,
//! and a difference is negative exactly when the right-hand operand's
//! magnitude is larger.
//!
//! # Positional editing
//!
//! Limb positions are 0-indexed from the most significant limb. Edits
//! validate the position before touching anything, so a rejected call
//! leaves the value unchanged:
//!
//! ```
//! use groupnum::BigInt;
//!
//! let mut n: BigInt = "1987210".parse().unwrap();
//! n.set_limb(1, 2).unwrap();
//! assert_eq!(n.to_string(), "1,002,210");
//!
//! assert!(n.remove_limb(3).is_err());
//! assert_eq!(n.to_string(), "1,002,210");
//! ```
//!
//! Editing works on raw limbs and makes no attempt to keep the sequence
//! numerically canonical; see [`BigInt::insert_limb`] for the consequences.

mod bigint;
mod error;
mod limbs;

pub use crate::bigint::BigInt;
pub use crate::error::{Error, Result};
pub use crate::limbs::{Limb, RADIX};
