//! Fixed-width unsigned integers built from pairs of limbs.

//	These lint checks are unnecessary in this module because the arithmetic on
//	bit counts and shift amounts is bounded by the width of the type, and the
//	wrapping behaviour of the limbs is exactly what is being emulated here.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]

//	The multiplication works on a fixed 4x4 grid of quarter-limbs, so every index
//	is known to be in range.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/wide.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ArithmeticError, ConversionError},
	limb::Limb,
};
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use generic_array::GenericArray;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants

/// The smallest numeral base accepted for rendering and parsing.
pub const MIN_RADIX: u32 = 2;

/// The largest numeral base accepted for rendering and parsing. Digits beyond
/// `9` are the letters `a` to `z`, so the alphabet holds exactly 36 symbols.
pub const MAX_RADIX: u32 = 36;

/// Formatter flag bit set by `{:x?}`.
const DEBUG_LOWER_HEX: u32 = 1 << 4;

/// Formatter flag bit set by `{:X?}`.
const DEBUG_UPPER_HEX: u32 = 1 << 5;



//		Type aliases

/// A 128-bit unsigned integer made of two [`u64`] limbs.
pub type Uint128 = WideUint<u64>;

/// A 256-bit unsigned integer made of two [`Uint128`] limbs.
pub type Uint256 = WideUint<Uint128>;



//		Structs

//		WideUint																
/// A fixed-width unsigned integer made of two limbs.
/// 
/// The value is `hi * 2^H + lo`, where `H` is the width of the limb type `L`,
/// and the total width `W` is therefore `2 * H`. The limb can be a native
/// [`u64`] or another [`WideUint`], so widths are composed recursively:
/// 
///   - [`Uint128`] is `WideUint<u64>`
///   - [`Uint256`] is `WideUint<WideUint<u64>>`
///   - `WideUint<Uint256>` is a 512-bit integer, and so on
/// 
/// # Arithmetic
/// 
/// All arithmetic follows the semantics of the native unsigned integers when
/// they wrap, i.e. every result is reduced modulo 2<sup>W</sup>:
/// 
///   1. Addition, subtraction, multiplication, and negation always wrap, in
///      debug and release builds alike. Overflow is never an error.
///   2. Shifting by `W` bits or more produces zero, rather than wrapping the
///      shift amount.
///   3. Division and remainder by zero panic when using the operators, in the
///      same way as the native types. [`divmod()`](WideUint::divmod()) reports
///      [`ArithmeticError::DivisionByZero`] instead.
/// 
/// Explicit checked, overflowing, and saturating forms are available through
/// the respective methods.
/// 
/// # Ordering
/// 
/// The derived ordering compares the `hi` limb first and then the `lo` limb,
/// which is the numeric order because of the field declaration order.
/// 
/// # Conversion
/// 
/// Any native unsigned integer or [`bool`] converts into a [`WideUint`] with
/// [`From`], zero-extending the value. Going the other way there are two
/// options: the `as_*()` methods truncate to the low bits of the target, in
/// the same way as an `as` cast, and [`TryFrom`] fails if the value does not
/// fit.
/// 
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WideUint<L: Limb> {
	/// The most-significant half.
	hi: L,
	
	/// The least-significant half.
	lo: L,
}

//󰭅		WideUint																
impl<L: Limb> WideUint<L> {
	//		Public constants													
	/// Number of bits in the integer.
	pub const BITS: u32 = L::BITS * 2;
	
	/// The value `0`.
	pub const ZERO: Self = Self { hi: L::ZERO, lo: L::ZERO };
	
	/// The value `1`.
	pub const ONE: Self = Self { hi: L::ZERO, lo: L::ONE };
	
	/// The smallest value, which is zero.
	pub const MIN: Self = Self::ZERO;
	
	/// The largest value, which is 2<sup>W</sup> - 1.
	pub const MAX: Self = Self { hi: L::MAX, lo: L::MAX };
	
	//		Private constants													
	/// Number of bits in a quarter-limb, half the width of a limb.
	#[expect(clippy::integer_division, reason = "Limb widths are always even")]
	const QUARTER: u32 = L::BITS / 2;
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`WideUint`] from its two halves.
	/// 
	/// # Parameters
	/// 
	/// * `hi` - The most-significant half.
	/// * `lo` - The least-significant half.
	/// 
	#[must_use]
	pub const fn new(hi: L, lo: L) -> Self {
		Self { hi, lo }
	}
	
	//		Public methods														
	
	//		as_bool																
	/// Determines whether any bit is set, in the same way as a C conversion to
	/// `bool`.
	#[must_use]
	pub fn as_bool(self) -> bool {
		!self.is_zero()
	}
	
	//		as_u8																
	/// Truncates the value to its low 8 bits.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	#[must_use]
	pub fn as_u8(self) -> u8 {
		self.as_u128() as u8
	}
	
	//		as_u16																
	/// Truncates the value to its low 16 bits.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	#[must_use]
	pub fn as_u16(self) -> u16 {
		self.as_u128() as u16
	}
	
	//		as_u32																
	/// Truncates the value to its low 32 bits.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	#[must_use]
	pub fn as_u32(self) -> u32 {
		self.as_u128() as u32
	}
	
	//		as_u64																
	/// Truncates the value to its low 64 bits.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	#[must_use]
	pub fn as_u64(self) -> u64 {
		self.as_u128() as u64
	}
	
	//		as_u128																
	/// Truncates the value to its low 128 bits.
	#[must_use]
	pub fn as_u128(self) -> u128 {
		self.hi.as_u128().checked_shl(L::BITS).unwrap_or(0) | self.lo.as_u128()
	}
	
	//		as_usize															
	/// Truncates the value to the width of a [`usize`].
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	#[must_use]
	pub fn as_usize(self) -> usize {
		self.as_u128() as usize
	}
	
	//		bit																	
	/// Gets the value of a specific bit.
	/// 
	/// Returns `false` if the position is out of range.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	/// 
	#[must_use]
	pub fn bit(self, pos: u32) -> bool {
		pos < Self::BITS && !((self >> pos) & Self::ONE).is_zero()
	}
	
	//		bits																
	/// The bit length of the value.
	/// 
	/// This is the 1-based position of the highest set bit, or `0` if no bit
	/// is set. The `hi` limb is scanned first, and the `lo` limb only if `hi`
	/// is zero.
	/// 
	#[must_use]
	pub fn bits(self) -> u32 {
		if self.hi.is_zero() {
			L::BITS - self.lo.leading_zeros()
		} else {
			Self::BITS - self.hi.leading_zeros()
		}
	}
	
	//		checked_add															
	/// Checked addition.
	/// 
	/// Computes `self + rhs`, returning [`None`] if overflow occurred.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		match self.overflowing_add(rhs) {
			(sum, false) => Some(sum),
			(_,   true)  => None,
		}
	}
	
	//		checked_div															
	/// Checked division.
	/// 
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		self.divmod(rhs).ok().map(|(quotient, _)| quotient)
	}
	
	//		checked_mul															
	/// Checked multiplication.
	/// 
	/// Computes `self * rhs`, returning [`None`] if overflow occurred.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	#[must_use]
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		match self.overflowing_mul(rhs) {
			(product, false) => Some(product),
			(_,       true)  => None,
		}
	}
	
	//		checked_pow															
	/// Checked exponentiation.
	/// 
	/// Computes `self.pow(exp)`, returning [`None`] if the result does not fit.
	/// 
	/// # Parameters
	/// 
	/// * `exp` - The power to raise `self` to.
	/// 
	#[must_use]
	pub fn checked_pow(self, mut exp: u32) -> Option<Self> {
		let mut base   = self;
		let mut result = Self::ONE;
		
		while exp > 0 {
			if exp & 1 == 1 {
				result = result.checked_mul(base)?;
			}
			exp >>= 1_u32;
			if exp > 0 {
				base = base.checked_mul(base)?;
			}
		}
		
		Some(result)
	}
	
	//		checked_rem															
	/// Checked remainder.
	/// 
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		self.divmod(rhs).ok().map(|(_, remainder)| remainder)
	}
	
	//		checked_sub															
	/// Checked subtraction.
	/// 
	/// Computes `self - rhs`, returning [`None`] if the result would be
	/// negative.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn checked_sub(self, rhs: Self) -> Option<Self> {
		match self.overflowing_sub(rhs) {
			(difference, false) => Some(difference),
			(_,          true)  => None,
		}
	}
	
	//		count_ones															
	/// Counts the number of ones in the binary representation of the value.
	#[must_use]
	pub fn count_ones(self) -> u32 {
		self.hi.count_ones() + self.lo.count_ones()
	}
	
	//		count_zeros															
	/// Counts the number of zeroes in the binary representation of the value.
	#[must_use]
	pub fn count_zeros(self) -> u32 {
		Self::BITS - self.count_ones()
	}
	
	//		divmod																
	/// Divides one value by another, producing both quotient and remainder.
	/// 
	/// This is the single division primitive behind [`Div`], [`Rem`], and
	/// the string conversions. It is a restoring binary long division: the
	/// divisor is aligned with the top bit of the dividend, and then shifted
	/// down one bit at a time alongside a marker for the matching quotient
	/// bit, subtracting wherever it fits. The remainder is always less than
	/// the divisor.
	/// 
	/// # Parameters
	/// 
	/// * `divisor` - The value to divide `self` by.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
	/// 
	pub fn divmod(self, divisor: Self) -> Result<(Self, Self), ArithmeticError> {
		if divisor.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}
		if divisor == Self::ONE {
			return Ok((self, Self::ZERO));
		}
		if self == divisor {
			return Ok((Self::ONE, Self::ZERO));
		}
		if self.is_zero() || self < divisor {
			return Ok((Self::ZERO, self));
		}
		
		//	The dividend is larger, so the shift is less than the width
		let shift         = self.bits() - divisor.bits();
		let mut aligned   = divisor   << shift;
		let mut marker    = Self::ONE << shift;
		let mut quotient  = Self::ZERO;
		let mut remainder = self;
		
		while !marker.is_zero() {
			if remainder >= aligned {
				remainder = remainder.wrapping_sub(aligned);
				quotient  = quotient | marker;
			}
			aligned = aligned >> 1_u32;
			marker  = marker  >> 1_u32;
		}
		
		Ok((quotient, remainder))
	}
	
	//		from_json															
	/// Deserialises a JSON string into this integer type.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to deserialise.
	/// 
	/// # Errors
	/// 
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		hi																	
	/// The most-significant half.
	#[must_use]
	pub fn hi(self) -> L {
		self.hi
	}
	
	//		is_power_of_two														
	/// Determines if the value is a power of two.
	#[must_use]
	pub fn is_power_of_two(self) -> bool {
		self.count_ones() == 1
	}
	
	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(self) -> bool {
		self.hi.is_zero() && self.lo.is_zero()
	}
	
	//		leading_zeros														
	/// Counts the number of leading zeroes in the binary representation of the
	/// value.
	/// 
	/// If the value is zero, the result is the number of bits in the value.
	/// 
	#[must_use]
	pub fn leading_zeros(self) -> u32 {
		Self::BITS - self.bits()
	}
	
	//		lo																	
	/// The least-significant half.
	#[must_use]
	pub fn lo(self) -> L {
		self.lo
	}
	
	//		overflowing_add														
	/// Overflowing addition.
	/// 
	/// Computes `self + rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	/// 
	/// There is no carry flag to read at this level, so the carry out of each
	/// limb is detected by the wrapped sum being smaller than an operand.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let lo      = self.lo.wrapping_add(rhs.lo);
		let carry   = if lo < self.lo { L::ONE } else { L::ZERO };
		let partial = self.hi.wrapping_add(rhs.hi);
		let hi      = partial.wrapping_add(carry);
		(Self { hi, lo }, partial < self.hi || hi < partial)
	}
	
	//		overflowing_mul														
	/// Overflowing multiplication.
	/// 
	/// Computes `self * rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	#[must_use]
	pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let (low, high) = self.widening_mul(rhs);
		(low, !high.is_zero())
	}
	
	//		overflowing_sub														
	/// Overflowing subtraction.
	/// 
	/// Computes `self - rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	/// 
	/// A borrow out of a limb shows up as the wrapped difference being larger
	/// than the value it was taken from.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let lo      = self.lo.wrapping_sub(rhs.lo);
		let borrow  = if lo > self.lo { L::ONE } else { L::ZERO };
		let partial = self.hi.wrapping_sub(rhs.hi);
		let hi      = partial.wrapping_sub(borrow);
		(Self { hi, lo }, partial > self.hi || hi > partial)
	}
	
	//		parse_radix															
	/// Parses a string of digits in the given base.
	/// 
	/// Digits above `9` are the letters `a` to `z` in either case, and
	/// underscores between digits are ignored. No prefix or sign is accepted;
	/// use [`FromStr`] for that.
	/// 
	/// # Parameters
	/// 
	/// * `s`    - The digits to parse.
	/// * `base` - The numeral base, from `2` to `36` inclusive.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the base is not supported, if there are no digits,
	/// if a character is not a digit in the base, or if the value does not
	/// fit.
	/// 
	#[expect(clippy::cast_possible_truncation, reason = "Base already checked")]
	pub fn parse_radix(s: &str, base: u32) -> Result<Self, ConversionError> {
		if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
			return Err(ConversionError::InvalidBase(base));
		}
		
		let radix      = Self::from(base);
		let mut value  = Self::ZERO;
		let mut digits = 0_usize;
		
		for c in s.chars() {
			if c == '_' {
				continue;
			}
			let digit = c.to_digit(MAX_RADIX).ok_or(ConversionError::InvalidDigit(c))?;
			if digit >= base {
				return Err(ConversionError::InvalidRadix(c, base as u8));
			}
			value = value
				.checked_mul(radix)
				.and_then(|shifted| shifted.checked_add(Self::from(digit)))
				.ok_or(ConversionError::ValueTooLarge)?
			;
			digits += 1;
		}
		
		if digits == 0 {
			return Err(ConversionError::EmptyValue);
		}
		Ok(value)
	}
	
	//		pow																	
	/// Raises `self` to the power of `exp`, wrapping on overflow.
	/// 
	/// # Parameters
	/// 
	/// * `exp` - The power to raise `self` to.
	/// 
	#[must_use]
	pub fn pow(self, exp: u32) -> Self {
		self.wrapping_pow(exp)
	}
	
	//		rotate_left															
	/// Rotates the bits left by `n` places, wrapping the truncated bits round
	/// to the end.
	/// 
	/// # Parameters
	/// 
	/// * `n` - The number of places to rotate by.
	/// 
	#[must_use]
	pub fn rotate_left(self, n: u32) -> Self {
		let n = n % Self::BITS;
		if n == 0 {
			return self;
		}
		(self << n) | (self >> (Self::BITS - n))
	}
	
	//		rotate_right														
	/// Rotates the bits right by `n` places, wrapping the truncated bits round
	/// to the beginning.
	/// 
	/// # Parameters
	/// 
	/// * `n` - The number of places to rotate by.
	/// 
	#[must_use]
	pub fn rotate_right(self, n: u32) -> Self {
		let n = n % Self::BITS;
		if n == 0 {
			return self;
		}
		(self >> n) | (self << (Self::BITS - n))
	}
	
	//		saturating_add														
	/// Saturating addition.
	/// 
	/// Computes `self + rhs`, saturating at [`MAX`](Self::MAX).
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn saturating_add(self, rhs: Self) -> Self {
		self.checked_add(rhs).unwrap_or(Self::MAX)
	}
	
	//		saturating_mul														
	/// Saturating multiplication.
	/// 
	/// Computes `self * rhs`, saturating at [`MAX`](Self::MAX).
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	#[must_use]
	pub fn saturating_mul(self, rhs: Self) -> Self {
		self.checked_mul(rhs).unwrap_or(Self::MAX)
	}
	
	//		saturating_sub														
	/// Saturating subtraction.
	/// 
	/// Computes `self - rhs`, saturating at zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn saturating_sub(self, rhs: Self) -> Self {
		self.checked_sub(rhs).unwrap_or(Self::ZERO)
	}
	
	//		set_bit																
	/// Sets the value of a specific bit.
	/// 
	/// Returns `false` if the position is out of range. Otherwise, returns
	/// `true` to indicate success. Note that success does not mean the bit was
	/// actually changed.
	/// 
	/// # Parameters
	/// 
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The value to set the bit to.
	/// 
	pub fn set_bit(&mut self, pos: u32, value: bool) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		let mask = Self::ONE << pos;
		if value {
			*self |= mask;
		} else {
			*self &= !mask;
		}
		true
	}
	
	//		to_json																
	/// Serialises this integer to a JSON string.
	/// 
	/// # Errors
	/// 
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		to_string_radix														
	/// Renders the value as a string of digits in the given base.
	/// 
	/// Each digit is the remainder of a [`divmod()`](WideUint::divmod()) by
	/// the base, taken from the alphabet `0-9a-z`, and the result is padded
	/// on the left with `'0'` up to `min_length` characters. Zero renders as
	/// `"0"`.
	/// 
	/// # Parameters
	/// 
	/// * `base`       - The numeral base, from `2` to `36` inclusive.
	/// * `min_length` - The minimum number of characters to produce.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::InvalidBase`] if the base is not supported.
	/// 
	pub fn to_string_radix(self, base: u32, min_length: usize) -> Result<String, ArithmeticError> {
		if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
			return Err(ArithmeticError::InvalidBase(base));
		}
		
		let radix         = Self::from(base);
		let mut digits    = Vec::new();
		let mut remaining = self;
		
		loop {
			let (quotient, digit) = remaining.divmod(radix)?;
			digits.push(char::from_digit(digit.as_u32(), base).ok_or(ArithmeticError::InvalidBase(base))?);
			remaining = quotient;
			if remaining.is_zero() {
				break;
			}
		}
		
		if digits.len() < min_length {
			digits.resize(min_length, '0');
		}
		
		//	Digits were produced least-significant first
		Ok(digits.iter().rev().collect())
	}
	
	//		trailing_zeros														
	/// Counts the number of trailing zeroes in the binary representation of
	/// the value.
	/// 
	/// If the value is zero, the result is the number of bits in the value.
	/// 
	#[must_use]
	pub fn trailing_zeros(self) -> u32 {
		if self.lo.is_zero() {
			L::BITS + self.hi.trailing_zeros()
		} else {
			self.lo.trailing_zeros()
		}
	}
	
	//		widening_mul														
	/// Full multiplication.
	/// 
	/// Computes the complete `2W`-bit product of `self` and `rhs`, returned as
	/// a `(low, high)` pair of halves.
	/// 
	/// Each operand is cut into four quarter-limbs, so that every entry in the
	/// 4x4 matrix of cross products fits exactly in one limb. Each product is
	/// then split across the two output columns it straddles, and the carries
	/// are propagated from the least-significant column upwards.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	#[must_use]
	pub fn widening_mul(self, rhs: Self) -> (Self, Self) {
		let mask   = Self::quarter_mask();
		let (a, b) = (self.quarters(), rhs.quarters());
		
		let mut columns = [L::ZERO; 8];
		for (i, &x) in a.iter().enumerate() {
			for (j, &y) in b.iter().enumerate() {
				let product = x.wrapping_mul(y);
				columns[i + j]     = columns[i + j    ].wrapping_add(product & mask);
				columns[i + j + 1] = columns[i + j + 1].wrapping_add(product >> Self::QUARTER);
			}
		}
		
		Self::carry_columns(&mut columns);
		(
			Self::from_columns(columns[0], columns[1], columns[2], columns[3]),
			Self::from_columns(columns[4], columns[5], columns[6], columns[7]),
		)
	}
	
	//		wrapping_add														
	/// Wrapping addition.
	/// 
	/// Computes `self + rhs`, wrapping around at the boundary of the type.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn wrapping_add(self, rhs: Self) -> Self {
		self.overflowing_add(rhs).0
	}
	
	//		wrapping_mul														
	/// Wrapping multiplication.
	/// 
	/// Computes `self * rhs`, discarding any bits of the product above the
	/// width of the type.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	#[must_use]
	pub fn wrapping_mul(self, rhs: Self) -> Self {
		let mask   = Self::quarter_mask();
		let (a, b) = (self.quarters(), rhs.quarters());
		
		//	Only the cross products that land in the low four columns are formed
		let mut columns = [L::ZERO; 4];
		for (i, &x) in a.iter().enumerate() {
			for (j, &y) in b.iter().enumerate().take(4 - i) {
				let product = x.wrapping_mul(y);
				columns[i + j] = columns[i + j].wrapping_add(product & mask);
				if let Some(next) = columns.get_mut(i + j + 1) {
					*next = next.wrapping_add(product >> Self::QUARTER);
				}
			}
		}
		
		Self::carry_columns(&mut columns);
		Self::from_columns(columns[0], columns[1], columns[2], columns[3])
	}
	
	//		wrapping_neg														
	/// Wrapping negation, i.e. the two's complement `!self + 1`.
	#[must_use]
	pub fn wrapping_neg(self) -> Self {
		(!self).wrapping_add(Self::ONE)
	}
	
	//		wrapping_pow														
	/// Wrapping exponentiation.
	/// 
	/// Computes `self.pow(exp)`, wrapping around at the boundary of the type.
	/// 
	/// # Parameters
	/// 
	/// * `exp` - The power to raise `self` to.
	/// 
	#[must_use]
	pub fn wrapping_pow(self, mut exp: u32) -> Self {
		let mut base   = self;
		let mut result = Self::ONE;
		
		while exp > 0 {
			if exp & 1 == 1 {
				result = result.wrapping_mul(base);
			}
			exp >>= 1_u32;
			if exp > 0 {
				base = base.wrapping_mul(base);
			}
		}
		
		result
	}
	
	//		wrapping_sub														
	/// Wrapping subtraction.
	/// 
	/// Computes `self - rhs`, wrapping around at the boundary of the type.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn wrapping_sub(self, rhs: Self) -> Self {
		self.overflowing_sub(rhs).0
	}
	
	//		Crate methods														
	
	//		from_u128															
	/// Creates a value from the low `W` bits of a [`u128`].
	pub(crate) fn from_u128(value: u128) -> Self {
		Self {
			hi: L::from_u128(value.checked_shr(L::BITS).unwrap_or(0)),
			lo: L::from_u128(value),
		}
	}
	
	//		shift_amount														
	/// Interprets the value as a shift amount. Only the `lo` limb is
	/// considered, and a non-zero `hi` limb means the amount is out of range.
	pub(crate) fn shift_amount(self) -> Option<u32> {
		if self.hi.is_zero() {
			self.lo.shift_amount()
		} else {
			None
		}
	}
	
	//		Private methods														
	
	//		carry_columns														
	/// Propagates the carries between quarter-limb columns, from the
	/// least-significant column upwards, leaving each column within one
	/// quarter-limb. The carry out of the last column is discarded.
	fn carry_columns(columns: &mut [L]) {
		let mask      = Self::quarter_mask();
		let mut carry = L::ZERO;
		for column in columns {
			let total = column.wrapping_add(carry);
			carry     = total >> Self::QUARTER;
			*column   = total & mask;
		}
	}
	
	//		fmt_radix															
	/// Writes the value to a formatter in the given base, honouring the
	/// formatter's width, fill, zero-padding, and alternate-prefix flags.
	fn fmt_radix(self, f: &mut Formatter<'_>, base: u32, prefix: &str, uppercase: bool) -> fmt::Result {
		let mut digits = self.to_string_radix(base, 0).map_err(|_| fmt::Error)?;
		if uppercase {
			digits.make_ascii_uppercase();
		}
		f.pad_integral(true, prefix, &digits)
	}
	
	//		from_columns														
	/// Joins four quarter-limb columns, least significant first, into a value.
	fn from_columns(c0: L, c1: L, c2: L, c3: L) -> Self {
		Self {
			hi: (c3 << Self::QUARTER) | c2,
			lo: (c1 << Self::QUARTER) | c0,
		}
	}
	
	//		quarter_mask														
	/// Mask selecting the low quarter-limb of a limb.
	fn quarter_mask() -> L {
		L::MAX >> Self::QUARTER
	}
	
	//		quarters															
	/// Splits the value into four quarter-limbs, least significant first, each
	/// held in the low half of a limb.
	fn quarters(self) -> [L; 4] {
		let mask = Self::quarter_mask();
		[self.lo & mask, self.lo >> Self::QUARTER, self.hi & mask, self.hi >> Self::QUARTER]
	}
}

//󰭅		WideUint: bytes															
impl<L: Limb> WideUint<L>
where
	Self: Limb,
{
	//		from_be_bytes														
	/// Creates a [`WideUint`] from a big-endian byte array, i.e. with the
	/// most-significant byte first.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The big-endian bytes to create the [`WideUint`] from.
	/// 
	#[must_use]
	pub fn from_be_bytes(bytes: &GenericArray<u8, <Self as Limb>::Bytes>) -> Self {
		<Self as Limb>::read_be_bytes(bytes)
	}
	
	//		from_le_bytes														
	/// Creates a [`WideUint`] from a little-endian byte array, i.e. with the
	/// least-significant byte first.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The little-endian bytes to create the [`WideUint`] from.
	/// 
	#[must_use]
	pub fn from_le_bytes(bytes: &GenericArray<u8, <Self as Limb>::Bytes>) -> Self {
		let mut reversed = bytes.clone();
		reversed.reverse();
		<Self as Limb>::read_be_bytes(&reversed)
	}
	
	//		to_be_bytes															
	/// Returns the bytes in big-endian order.
	#[must_use]
	pub fn to_be_bytes(self) -> GenericArray<u8, <Self as Limb>::Bytes> {
		let mut bytes = GenericArray::default();
		<Self as Limb>::write_be_bytes(self, &mut bytes);
		bytes
	}
	
	//		to_le_bytes															
	/// Returns the bytes in little-endian order.
	#[must_use]
	pub fn to_le_bytes(self) -> GenericArray<u8, <Self as Limb>::Bytes> {
		let mut bytes = self.to_be_bytes();
		bytes.reverse();
		bytes
	}
}

//󰭅		Uint256																	
impl Uint256 {
	//		from_quadrants														
	/// Creates a [`Uint256`] from four 64-bit words, most-significant first.
	/// 
	/// # Parameters
	/// 
	/// * `q3` - Bits 192 to 255.
	/// * `q2` - Bits 128 to 191.
	/// * `q1` - Bits 64 to 127.
	/// * `q0` - Bits 0 to 63.
	/// 
	#[must_use]
	pub const fn from_quadrants(q3: u64, q2: u64, q1: u64, q0: u64) -> Self {
		Self::new(Uint128::new(q3, q2), Uint128::new(q1, q0))
	}
}

//󰭅		Add																		
impl<L: Limb> Add for WideUint<L> {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		self.wrapping_add(rhs)
	}
}

//󰭅		AddAssign																
impl<L: Limb> AddAssign for WideUint<L> {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		Binary																	
impl<L: Limb> Binary for WideUint<L> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 2, "0b", false)
	}
}

//󰭅		BitAnd																	
impl<L: Limb> BitAnd for WideUint<L> {
	type Output = Self;
	
	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		Self { hi: self.hi & rhs.hi, lo: self.lo & rhs.lo }
	}
}

//󰭅		BitAndAssign															
impl<L: Limb> BitAndAssign for WideUint<L> {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr																	
impl<L: Limb> BitOr for WideUint<L> {
	type Output = Self;
	
	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		Self { hi: self.hi | rhs.hi, lo: self.lo | rhs.lo }
	}
}

//󰭅		BitOrAssign																
impl<L: Limb> BitOrAssign for WideUint<L> {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor																	
impl<L: Limb> BitXor for WideUint<L> {
	type Output = Self;
	
	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self { hi: self.hi ^ rhs.hi, lo: self.lo ^ rhs.lo }
	}
}

//󰭅		BitXorAssign															
impl<L: Limb> BitXorAssign for WideUint<L> {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Debug																	
impl<L: Limb> Debug for WideUint<L> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	For alternate formatting (#), show the limbs
		if f.alternate() {
			f.debug_struct("WideUint")
				.field("hi", &self.hi)
				.field("lo", &self.lo)
				.finish()
		} else if debug_hex_flag(f, DEBUG_LOWER_HEX) {
			LowerHex::fmt(self, f)
		} else if debug_hex_flag(f, DEBUG_UPPER_HEX) {
			UpperHex::fmt(self, f)
		} else {
			write!(f, "WideUint::<{}>({})", Self::BITS, self)
		}
	}
}

//󰭅		Deserialize																
impl<'de, L: Limb> Deserialize<'de> for WideUint<L> {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(WideVisitor::<L>(PhantomData))
		} else {
			deserializer.deserialize_str(WideVisitor::<L>(PhantomData))
		}
	}
}

//󰭅		Display																	
impl<L: Limb> Display for WideUint<L> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 10, "", false)
	}
}

//󰭅		Div																		
impl<L: Limb> Div for WideUint<L> {
	type Output = Self;
	
	//		div																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		self.checked_div(rhs).expect("Attempt to divide by zero")
	}
}

//󰭅		DivAssign																
impl<L: Limb> DivAssign for WideUint<L> {
	//		div_assign															
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		From: Uint128 -> Uint256												
impl From<Uint128> for Uint256 {
	//		from																
	fn from(v: Uint128) -> Self {
		Self::new(Uint128::ZERO, v)
	}
}

//󰭅		FromSql																	
impl<'a, L: Limb> FromSql<'a> for WideUint<L> {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT2                => Ok(Self::try_from(i16::from_sql(ty, raw)?)?),
			Type::INT4                => Ok(Self::try_from(i32::from_sql(ty, raw)?)?),
			Type::INT8                => Ok(Self::try_from(i64::from_sql(ty, raw)?)?),
			Type::TEXT | Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse()?),
			ref unknown               => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for WideUint::<{}>: {unknown}", Self::BITS),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr																	
impl<L: Limb> FromStr for WideUint<L> {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		
		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		if trimmed.starts_with('-') {
			return Err(ConversionError::ValueIsNegative);
		}
		let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
		
		//	Handle different bases
		let (digits, radix) = match unsigned.get(..2) {
			Some("0x" | "0X") => (unsigned.get(2..).unwrap_or_default(), 16),
			Some("0o" | "0O") => (unsigned.get(2..).unwrap_or_default(),  8),
			Some("0b" | "0B") => (unsigned.get(2..).unwrap_or_default(),  2),
			_                 => (unsigned,                               10),
		};
		
		Self::parse_radix(digits, radix)
	}
}

//󰭅		LowerHex																
impl<L: Limb> LowerHex for WideUint<L> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 16, "0x", false)
	}
}

//󰭅		Mul																		
impl<L: Limb> Mul for WideUint<L> {
	type Output = Self;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		self.wrapping_mul(rhs)
	}
}

//󰭅		MulAssign																
impl<L: Limb> MulAssign for WideUint<L> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Neg																		
impl<L: Limb> Neg for WideUint<L> {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Not																		
impl<L: Limb> Not for WideUint<L> {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		Self { hi: !self.hi, lo: !self.lo }
	}
}

//󰭅		Octal																	
impl<L: Limb> Octal for WideUint<L> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 8, "0o", false)
	}
}

//󰭅		Product																	
impl<L: Limb> Product for WideUint<L> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ONE, Mul::mul)
	}
}

//󰭅		Product<&>																
impl<'a, L: Limb> Product<&'a WideUint<L>> for WideUint<L> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ONE, |acc, &x| acc * x)
	}
}

//󰭅		Rem																		
impl<L: Limb> Rem for WideUint<L> {
	type Output = Self;
	
	//		rem																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		self.checked_rem(rhs).expect("Attempt to calculate the remainder with a divisor of zero")
	}
}

//󰭅		RemAssign																
impl<L: Limb> RemAssign for WideUint<L> {
	//		rem_assign															
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Serialize																
impl<L: Limb> Serialize for WideUint<L> {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		//	Always a decimal string, as most formats cannot hold the full range
		serializer.serialize_str(&self.to_string())
	}
}

//󰭅		Shl																		
impl<L: Limb> Shl<u32> for WideUint<L> {
	type Output = Self;
	
	//		shl																	
	fn shl(self, rhs: u32) -> Self::Output {
		let half = L::BITS;
		match rhs {
			0                         => self,
			s if s < half             => Self {
				hi: (self.hi << s) | (self.lo >> (half - s)),
				lo:  self.lo << s,
			},
			s if s == half            => Self { hi: self.lo, lo: L::ZERO },
			s if s < Self::BITS       => Self { hi: self.lo << (s - half), lo: L::ZERO },
			_                         => Self::ZERO,
		}
	}
}

//󰭅		Shl<WideUint>															
impl<L: Limb> Shl for WideUint<L> {
	type Output = Self;
	
	//		shl																	
	fn shl(self, rhs: Self) -> Self::Output {
		rhs.shift_amount().map_or(Self::ZERO, |amount| self << amount)
	}
}

//󰭅		ShlAssign																
impl<L: Limb> ShlAssign<u32> for WideUint<L> {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		ShlAssign<WideUint>														
impl<L: Limb> ShlAssign for WideUint<L> {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: Self) {
		*self = *self << rhs;
	}
}

//󰭅		Shr																		
impl<L: Limb> Shr<u32> for WideUint<L> {
	type Output = Self;
	
	//		shr																	
	fn shr(self, rhs: u32) -> Self::Output {
		let half = L::BITS;
		match rhs {
			0                         => self,
			s if s < half             => Self {
				hi:  self.hi >> s,
				lo: (self.lo >> s) | (self.hi << (half - s)),
			},
			s if s == half            => Self { hi: L::ZERO, lo: self.hi },
			s if s < Self::BITS       => Self { hi: L::ZERO, lo: self.hi >> (s - half) },
			_                         => Self::ZERO,
		}
	}
}

//󰭅		Shr<WideUint>															
impl<L: Limb> Shr for WideUint<L> {
	type Output = Self;
	
	//		shr																	
	fn shr(self, rhs: Self) -> Self::Output {
		rhs.shift_amount().map_or(Self::ZERO, |amount| self >> amount)
	}
}

//󰭅		ShrAssign																
impl<L: Limb> ShrAssign<u32> for WideUint<L> {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		ShrAssign<WideUint>														
impl<L: Limb> ShrAssign for WideUint<L> {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: Self) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub																		
impl<L: Limb> Sub for WideUint<L> {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		self.wrapping_sub(rhs)
	}
}

//󰭅		SubAssign																
impl<L: Limb> SubAssign for WideUint<L> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum																		
impl<L: Limb> Sum for WideUint<L> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ZERO, Add::add)
	}
}

//󰭅		Sum<&>																	
impl<'a, L: Limb> Sum<&'a WideUint<L>> for WideUint<L> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ZERO, |acc, &x| acc + x)
	}
}

//󰭅		ToSql																	
impl<L: Limb> ToSql for WideUint<L> {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT2                 => i16::try_from(*self)?.to_sql(ty, out),
			Type::INT4                 => i32::try_from(*self)?.to_sql(ty, out),
			Type::INT8                 => i64::try_from(*self)?.to_sql(ty, out),
			Type::TEXT | Type::VARCHAR => self.to_string().to_sql(ty, out),
			ref unknown                => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for WideUint::<{}>: {unknown}", Self::BITS),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
	
	to_sql_checked!();
}

//󰭅		UpperHex																
impl<L: Limb> UpperHex for WideUint<L> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 16, "0x", true)
	}
}

//		WideVisitor																
/// A visitor for parsing wide integers from numbers and strings.
struct WideVisitor<L>(PhantomData<L>);

//󰭅		Visitor																	
impl<L: Limb> Visitor<'_> for WideVisitor<L> {
	type Value = WideUint<L>;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an unsigned integer of at most {} bits", WideUint::<L>::BITS)
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		WideUint::try_from(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(WideUint::from(v))
	}
	
	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(WideUint::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}



//		Functions

//		debug_hex_flag															
/// Checks whether a `{:x?}` or `{:X?}` flag is set on a formatter.
/// 
/// The dedicated accessors are not public, but the legacy [`Formatter::flags()`]
/// bit layout is kept stable for these two flags.
/// 
#[expect(deprecated, reason = "The only stable way to read the debug-hex flags")]
fn debug_hex_flag(f: &Formatter<'_>, flag: u32) -> bool {
	f.flags() & flag != 0
}
