//! The limb abstraction that wide integers are composed from.
//!
//! A [`WideUint`] is a pair of limbs. The leaf limb is the native [`u64`], and
//! every [`WideUint`] is itself a limb, so wider types are built by nesting:
//! `WideUint<u64>` is 128 bits wide, `WideUint<WideUint<u64>>` is 256 bits
//! wide, and so on.

//	The limb operations are modular by definition.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules

#[cfg(test)]
#[path = "tests/limb.rs"]
mod tests;



//		Packages

use crate::wide::WideUint;
use core::{
	fmt::Debug,
	hash::Hash,
	ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr},
};
use generic_array::ArrayLength;
use typenum::{Sum as TnSum, U8};



//		Traits

//		Limb																	
/// One half of a [`WideUint`].
/// 
/// This trait describes the minimum a type has to provide so that two of it
/// can be combined into an integer of twice the width. All of the arithmetic
/// here is modular, i.e. it wraps silently at the limb's own width, and shift
/// amounts passed to [`Shl`] and [`Shr`] are always less than
/// [`BITS`](Limb::BITS).
/// 
/// The trait is sealed. It is implemented for [`u64`] and, recursively, for
/// every [`WideUint`] built from a limb.
/// 
pub trait Limb:
	Copy
	+ Debug
	+ Default
	+ Eq
	+ Hash
	+ Ord
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Output = Self>
	+ BitOr<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
	+ Shl<u32, Output = Self>
	+ Shr<u32, Output = Self>
	+ private::Sealed
{
	//		Constants															
	/// The width of the limb in bits.
	const BITS: u32;
	
	/// The value `0`.
	const ZERO: Self;
	
	/// The value `1`.
	const ONE: Self;
	
	/// The largest value the limb can hold.
	const MAX: Self;
	
	//		Associated types													
	/// The number of bytes in the limb, as a [`typenum`] type, so that byte
	/// arrays of the right length can be described at compile time.
	type Bytes: ArrayLength;
	
	//		Required methods													
	
	//		wrapping_add														
	/// Addition modulo 2<sup>[`BITS`](Limb::BITS)</sup>.
	#[must_use]
	fn wrapping_add(self, rhs: Self) -> Self;
	
	//		wrapping_sub														
	/// Subtraction modulo 2<sup>[`BITS`](Limb::BITS)</sup>.
	#[must_use]
	fn wrapping_sub(self, rhs: Self) -> Self;
	
	//		wrapping_mul														
	/// Multiplication modulo 2<sup>[`BITS`](Limb::BITS)</sup>.
	#[must_use]
	fn wrapping_mul(self, rhs: Self) -> Self;
	
	//		leading_zeros														
	/// The number of zero bits above the highest set bit.
	#[must_use]
	fn leading_zeros(self) -> u32;
	
	//		trailing_zeros														
	/// The number of zero bits below the lowest set bit.
	#[must_use]
	fn trailing_zeros(self) -> u32;
	
	//		count_ones															
	/// The number of set bits.
	#[must_use]
	fn count_ones(self) -> u32;
	
	//		from_u128															
	/// Creates a limb from the low [`BITS`](Limb::BITS) bits of a [`u128`].
	#[must_use]
	fn from_u128(value: u128) -> Self;
	
	//		as_u128																
	/// The low 128 bits of the limb.
	#[must_use]
	fn as_u128(self) -> u128;
	
	//		shift_amount														
	/// Interprets the limb as a shift amount.
	/// 
	/// Returns [`None`] if the value does not fit in a [`u32`], which callers
	/// treat as a shift past the end of any supported width.
	/// 
	#[must_use]
	fn shift_amount(self) -> Option<u32>;
	
	//		write_be_bytes														
	/// Writes the limb into `out` in big-endian order. The slice must be
	/// exactly [`Bytes`](Limb::Bytes) long.
	fn write_be_bytes(self, out: &mut [u8]);
	
	//		read_be_bytes														
	/// Reads a limb from big-endian `bytes`. The slice must be exactly
	/// [`Bytes`](Limb::Bytes) long.
	#[must_use]
	fn read_be_bytes(bytes: &[u8]) -> Self;
	
	//		Provided methods													
	
	//		is_zero																
	/// Determines if the limb is zero.
	#[must_use]
	fn is_zero(self) -> bool {
		self == Self::ZERO
	}
}



//		Implementations

//󰭅		Limb: u64																
impl Limb for u64 {
	const BITS: u32 = Self::BITS;
	const ZERO: Self = 0;
	const ONE:  Self = 1;
	const MAX:  Self = Self::MAX;
	
	type Bytes = U8;
	
	//		wrapping_add														
	fn wrapping_add(self, rhs: Self) -> Self {
		Self::wrapping_add(self, rhs)
	}
	
	//		wrapping_sub														
	fn wrapping_sub(self, rhs: Self) -> Self {
		Self::wrapping_sub(self, rhs)
	}
	
	//		wrapping_mul														
	fn wrapping_mul(self, rhs: Self) -> Self {
		Self::wrapping_mul(self, rhs)
	}
	
	//		leading_zeros														
	fn leading_zeros(self) -> u32 {
		Self::leading_zeros(self)
	}
	
	//		trailing_zeros														
	fn trailing_zeros(self) -> u32 {
		Self::trailing_zeros(self)
	}
	
	//		count_ones															
	fn count_ones(self) -> u32 {
		Self::count_ones(self)
	}
	
	//		from_u128															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	fn from_u128(value: u128) -> Self {
		value as Self
	}
	
	//		as_u128																
	fn as_u128(self) -> u128 {
		u128::from(self)
	}
	
	//		shift_amount														
	fn shift_amount(self) -> Option<u32> {
		u32::try_from(self).ok()
	}
	
	//		write_be_bytes														
	fn write_be_bytes(self, out: &mut [u8]) {
		for (dst, src) in out.iter_mut().zip(self.to_be_bytes()) {
			*dst = src;
		}
	}
	
	//		read_be_bytes														
	fn read_be_bytes(bytes: &[u8]) -> Self {
		bytes.iter().fold(0, |acc, &byte| (acc << 8_u32) | Self::from(byte))
	}
}

//󰭅		Limb: WideUint															
impl<L> Limb for WideUint<L>
where
	L:                         Limb,
	L::Bytes:                  Add<L::Bytes>,
	TnSum<L::Bytes, L::Bytes>: ArrayLength,
{
	const BITS: u32  = Self::BITS;
	const ZERO: Self = Self::ZERO;
	const ONE:  Self = Self::ONE;
	const MAX:  Self = Self::MAX;
	
	type Bytes = TnSum<L::Bytes, L::Bytes>;
	
	//		wrapping_add														
	fn wrapping_add(self, rhs: Self) -> Self {
		Self::wrapping_add(self, rhs)
	}
	
	//		wrapping_sub														
	fn wrapping_sub(self, rhs: Self) -> Self {
		Self::wrapping_sub(self, rhs)
	}
	
	//		wrapping_mul														
	fn wrapping_mul(self, rhs: Self) -> Self {
		Self::wrapping_mul(self, rhs)
	}
	
	//		leading_zeros														
	fn leading_zeros(self) -> u32 {
		Self::leading_zeros(self)
	}
	
	//		trailing_zeros														
	fn trailing_zeros(self) -> u32 {
		Self::trailing_zeros(self)
	}
	
	//		count_ones															
	fn count_ones(self) -> u32 {
		Self::count_ones(self)
	}
	
	//		from_u128															
	fn from_u128(value: u128) -> Self {
		Self::from_u128(value)
	}
	
	//		as_u128																
	fn as_u128(self) -> u128 {
		Self::as_u128(self)
	}
	
	//		shift_amount														
	fn shift_amount(self) -> Option<u32> {
		Self::shift_amount(self)
	}
	
	//		write_be_bytes														
	fn write_be_bytes(self, out: &mut [u8]) {
		#[expect(clippy::integer_division, reason = "Limb widths are always even")]
		let (hi, lo) = out.split_at_mut(out.len() / 2);
		self.hi().write_be_bytes(hi);
		self.lo().write_be_bytes(lo);
	}
	
	//		read_be_bytes														
	fn read_be_bytes(bytes: &[u8]) -> Self {
		#[expect(clippy::integer_division, reason = "Limb widths are always even")]
		let (hi, lo) = bytes.split_at(bytes.len() / 2);
		Self::new(L::read_be_bytes(hi), L::read_be_bytes(lo))
	}
}



//		Private

mod private {
	use super::WideUint;
	
	//		Sealed																
	/// Prevents [`Limb`](super::Limb) from being implemented outside of this
	/// crate, as the arithmetic relies on every limb being a two's-complement
	/// unsigned integer with a power-of-two width.
	pub trait Sealed {}
	
	impl Sealed for u64 {}
	impl<L: super::Limb> Sealed for WideUint<L> {}
}
