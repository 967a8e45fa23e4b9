//! The Wideints crate is a library of fixed-width unsigned integers that are
//! wider than the standard integer types.
//!
//! A [`WideUint`] is built from two halves, each of which is either a native
//! [`u64`] or another [`WideUint`]. This gives [`Uint128`] and [`Uint256`]
//! out of the box, and any wider power-of-two width by nesting further. All
//! arithmetic wraps, in the same way as the native types do in release
//! builds.
//!



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::erasing_op,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::identity_op,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																											

mod errors;
mod interop;
mod limb;
mod wide;



//		Packages																										

pub use errors::{ArithmeticError, ConversionError};
pub use limb::Limb;
pub use wide::{MAX_RADIX, MIN_RADIX, Uint128, Uint256, WideUint};
