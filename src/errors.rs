//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use core::num::TryFromIntError;
use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError															
/// Represents the arithmetic failures a [`WideUint`](crate::WideUint) can
/// report.
/// 
/// All other arithmetic is total: addition, subtraction, multiplication, and
/// shifting wrap modulo 2<sup>W</sup> in the same way as the native unsigned
/// integer types.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor of a division or remainder operation was zero.
	#[error("Division by zero")]
	DivisionByZero,
	
	/// The requested numeral base is outside of the supported range, which is
	/// `2` to `36` inclusive.
	#[error("Invalid base: {0}")]
	InvalidBase(u32),
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not a digit in any
	/// supported base.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value contains a digit that is not valid for the base in
	/// use.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),
	
	/// The requested numeral base is not supported.
	#[error("Invalid base: {0}")]
	InvalidBase(u32),
	
	/// The incoming value is not a valid integer for the destination type.
	#[error("Invalid integer for destination type: {0}")]
	TryFromIntError(#[from] TryFromIntError),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
