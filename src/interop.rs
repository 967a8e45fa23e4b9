//! Interoperability between wide integers and the native integer types.
//!
//! Every native unsigned integer can be used on either side of an arithmetic,
//! bitwise, shift, or comparison operator with a [`WideUint`]. The native
//! operand is zero-extended first, so the result of `wide op native` and
//! `native op wide` is always a [`WideUint`]. This includes shifts, so
//! `1_u8 << Uint128::from(100_u8)` is a 128-bit value with bit 100 set.
//!
//! The exception is compound assignment onto a native (`native op= wide`),
//! which stores the wide result truncated to the width of the native, in the
//! same way as an `as` cast. For shifts this means amounts at or past the
//! native's width leave zero.
//!

//	The operator bodies delegate to the wide implementations, which already
//	define the wrapping behaviour.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

#[cfg(test)]
#[path = "tests/interop.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	limb::Limb,
	wide::WideUint,
};
use core::{
	cmp::Ordering,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, ShlAssign, Shr, ShrAssign},
};



//		Macros																											

//		impl_from_native														
/// Implements zero-extending [`From`] conversions from native unsigned
/// integers.
macro_rules! impl_from_native {
	($($t:ty),*) => {$(
		//󰭅		From: native -> WideUint										
		impl<L: Limb> From<$t> for WideUint<L> {
			//		from														
			fn from(v: $t) -> Self {
				Self::from_u128(u128::from(v))
			}
		}
	)*};
}

//		impl_binop																
/// Implements an arithmetic or bitwise operator, and its compound assignment
/// form, in both directions between a native type and a [`WideUint`].
macro_rules! impl_binop {
	($t:ty, $as:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
		//󰭅		Op: WideUint op native											
		impl<L: Limb> $Op<$t> for WideUint<L> {
			type Output = Self;
			
			//		op															
			fn $op(self, rhs: $t) -> Self::Output {
				$Op::$op(self, Self::from(rhs))
			}
		}
		
		//󰭅		Op: native op WideUint											
		impl<L: Limb> $Op<WideUint<L>> for $t {
			type Output = WideUint<L>;
			
			//		op															
			fn $op(self, rhs: WideUint<L>) -> Self::Output {
				$Op::$op(WideUint::from(self), rhs)
			}
		}
		
		//󰭅		OpAssign: WideUint op= native									
		impl<L: Limb> $OpAssign<$t> for WideUint<L> {
			//		op_assign													
			fn $op_assign(&mut self, rhs: $t) {
				*self = $Op::$op(*self, rhs);
			}
		}
		
		//󰭅		OpAssign: native op= WideUint									
		impl<L: Limb> $OpAssign<WideUint<L>> for $t {
			//		op_assign													
			fn $op_assign(&mut self, rhs: WideUint<L>) {
				*self = $Op::$op(*self, rhs).$as();
			}
		}
	};
}

//		impl_native																
/// Implements the operators and comparisons shared by every native unsigned
/// integer type.
macro_rules! impl_native {
	($($t:ty => $as:ident),*) => {$(
		impl_binop!($t, $as, Add,    add,    AddAssign,    add_assign);
		impl_binop!($t, $as, Sub,    sub,    SubAssign,    sub_assign);
		impl_binop!($t, $as, Mul,    mul,    MulAssign,    mul_assign);
		impl_binop!($t, $as, Div,    div,    DivAssign,    div_assign);
		impl_binop!($t, $as, Rem,    rem,    RemAssign,    rem_assign);
		impl_binop!($t, $as, BitAnd, bitand, BitAndAssign, bitand_assign);
		impl_binop!($t, $as, BitOr,  bitor,  BitOrAssign,  bitor_assign);
		impl_binop!($t, $as, BitXor, bitxor, BitXorAssign, bitxor_assign);
		
		//󰭅		Shl: native << WideUint											
		impl<L: Limb> Shl<WideUint<L>> for $t {
			type Output = WideUint<L>;
			
			//		shl															
			fn shl(self, rhs: WideUint<L>) -> Self::Output {
				WideUint::<L>::from(self) << rhs
			}
		}
		
		//󰭅		ShlAssign: native <<= WideUint									
		impl<L: Limb> ShlAssign<WideUint<L>> for $t {
			//		shl_assign													
			fn shl_assign(&mut self, rhs: WideUint<L>) {
				*self = (WideUint::<L>::from(*self) << rhs).$as();
			}
		}
		
		//󰭅		Shr: native >> WideUint											
		impl<L: Limb> Shr<WideUint<L>> for $t {
			type Output = WideUint<L>;
			
			//		shr															
			fn shr(self, rhs: WideUint<L>) -> Self::Output {
				WideUint::<L>::from(self) >> rhs
			}
		}
		
		//󰭅		ShrAssign: native >>= WideUint									
		impl<L: Limb> ShrAssign<WideUint<L>> for $t {
			//		shr_assign													
			fn shr_assign(&mut self, rhs: WideUint<L>) {
				*self = (WideUint::<L>::from(*self) >> rhs).$as();
			}
		}
		
		//󰭅		PartialEq: WideUint == native									
		impl<L: Limb> PartialEq<$t> for WideUint<L> {
			//		eq															
			fn eq(&self, other: &$t) -> bool {
				*self == Self::from(*other)
			}
		}
		
		//󰭅		PartialEq: native == WideUint									
		impl<L: Limb> PartialEq<WideUint<L>> for $t {
			//		eq															
			fn eq(&self, other: &WideUint<L>) -> bool {
				WideUint::from(*self) == *other
			}
		}
		
		//󰭅		PartialOrd: WideUint <=> native									
		impl<L: Limb> PartialOrd<$t> for WideUint<L> {
			//		partial_cmp													
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(self.cmp(&Self::from(*other)))
			}
		}
		
		//󰭅		PartialOrd: native <=> WideUint									
		impl<L: Limb> PartialOrd<WideUint<L>> for $t {
			//		partial_cmp													
			fn partial_cmp(&self, other: &WideUint<L>) -> Option<Ordering> {
				Some(WideUint::from(*self).cmp(other))
			}
		}
		
		//󰭅		TryFrom: WideUint -> native										
		impl<L: Limb> TryFrom<WideUint<L>> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: WideUint<L>) -> Result<Self, Self::Error> {
				(v.bits() <= Self::BITS).then(|| v.$as()).ok_or(ConversionError::ValueTooLarge)
			}
		}
	)*};
}

//		impl_wide_shift															
/// Implements shifting a [`WideUint`] by a native amount. Shifting by a
/// [`u32`] is the primitive form and lives alongside the type itself.
macro_rules! impl_wide_shift {
	($($t:ty),*) => {$(
		//󰭅		Shl: WideUint << native											
		impl<L: Limb> Shl<$t> for WideUint<L> {
			type Output = Self;
			
			//		shl															
			fn shl(self, rhs: $t) -> Self::Output {
				self << Self::from(rhs)
			}
		}
		
		//󰭅		ShlAssign: WideUint <<= native									
		impl<L: Limb> ShlAssign<$t> for WideUint<L> {
			//		shl_assign													
			fn shl_assign(&mut self, rhs: $t) {
				*self = *self << rhs;
			}
		}
		
		//󰭅		Shr: WideUint >> native											
		impl<L: Limb> Shr<$t> for WideUint<L> {
			type Output = Self;
			
			//		shr															
			fn shr(self, rhs: $t) -> Self::Output {
				self >> Self::from(rhs)
			}
		}
		
		//󰭅		ShrAssign: WideUint >>= native									
		impl<L: Limb> ShrAssign<$t> for WideUint<L> {
			//		shr_assign													
			fn shr_assign(&mut self, rhs: $t) {
				*self = *self >> rhs;
			}
		}
	)*};
}

//		impl_signed																
/// Implements fallible conversions between signed native integers and a
/// [`WideUint`].
macro_rules! impl_signed {
	($($t:ty),*) => {$(
		//󰭅		TryFrom: signed -> WideUint										
		impl<L: Limb> TryFrom<$t> for WideUint<L> {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: $t) -> Result<Self, Self::Error> {
				u128::try_from(v).map(Self::from_u128).map_err(|_| ConversionError::ValueIsNegative)
			}
		}
		
		//󰭅		TryFrom: WideUint -> signed										
		impl<L: Limb> TryFrom<WideUint<L>> for $t {
			type Error = ConversionError;
			
			//		try_from													
			//	Only one of these fires, depending on the width of the target
			#[allow(clippy::cast_possible_truncation, reason = "Already checked")]
			#[allow(clippy::cast_possible_wrap,       reason = "Already checked")]
			fn try_from(v: WideUint<L>) -> Result<Self, Self::Error> {
				//	The sign bit is not available for the magnitude
				(v.bits() < Self::BITS).then(|| v.as_u128() as Self).ok_or(ConversionError::ValueTooLarge)
			}
		}
	)*};
}



//		Implementations																									

impl_from_native!(u8, u16, u32, u64, u128);

impl_native!(
	u8    => as_u8,
	u16   => as_u16,
	u32   => as_u32,
	u64   => as_u64,
	u128  => as_u128,
	usize => as_usize
);

impl_wide_shift!(u8, u16, u64, u128, usize);

impl_signed!(i8, i16, i32, i64, i128, isize);

//󰭅		From: bool -> WideUint													
impl<L: Limb> From<bool> for WideUint<L> {
	//		from																
	fn from(v: bool) -> Self {
		Self::from(u8::from(v))
	}
}

//󰭅		From: usize -> WideUint													
impl<L: Limb> From<usize> for WideUint<L> {
	//		from																
	fn from(v: usize) -> Self {
		//	No platform has a usize wider than 128 bits
		Self::from_u128(v as u128)
	}
}
