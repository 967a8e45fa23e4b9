//		Packages																										

use super::*;
use proptest::prelude::*;



//		Functions																										

//		uint256																	
/// Generates an arbitrary [`Uint256`] from four words, most significant first,
/// alongside the words themselves.
fn uint256() -> impl Strategy<Value = ([u64; 4], Uint256)> {
	any::<[u64; 4]>().prop_map(|q| (q, Uint256::from_quadrants(q[0], q[1], q[2], q[3])))
}



//		Tests																											

//	The native u128 serves as the reference for the 128-bit type
proptest! {
	//		Arithmetic															
	#[test]
	fn add__matches_native(a: u128, b: u128) {
		prop_assert_eq!(Uint128::from(a) + Uint128::from(b), Uint128::from(a.wrapping_add(b)));
		prop_assert_eq!(Uint128::from(a).checked_add(Uint128::from(b)), a.checked_add(b).map(Uint128::from));
	}
	
	#[test]
	fn sub__matches_native(a: u128, b: u128) {
		prop_assert_eq!(Uint128::from(a) - Uint128::from(b), Uint128::from(a.wrapping_sub(b)));
		prop_assert_eq!(Uint128::from(a).checked_sub(Uint128::from(b)), a.checked_sub(b).map(Uint128::from));
	}
	
	#[test]
	fn mul__matches_native(a: u128, b: u128) {
		prop_assert_eq!(Uint128::from(a) * Uint128::from(b), Uint128::from(a.wrapping_mul(b)));
		prop_assert_eq!(Uint128::from(a).checked_mul(Uint128::from(b)), a.checked_mul(b).map(Uint128::from));
	}
	
	#[test]
	fn divmod__matches_native(a: u128, b in 1_u128..) {
		prop_assert_eq!(
			Uint128::from(a).divmod(Uint128::from(b)),
			Ok((Uint128::from(a / b), Uint128::from(a % b))),
		);
	}
	
	#[test]
	fn divmod__small_divisor(a: u128, b in 1_u64..) {
		let b = u128::from(b);
		prop_assert_eq!(Uint128::from(a) / Uint128::from(b), Uint128::from(a / b));
		prop_assert_eq!(Uint128::from(a) % Uint128::from(b), Uint128::from(a % b));
	}
	
	#[test]
	fn neg__matches_native(a: u128) {
		prop_assert_eq!(-Uint128::from(a), Uint128::from(a.wrapping_neg()));
	}
	
	//		Bits																
	#[test]
	fn bit_counts__match_native(a: u128) {
		let value = Uint128::from(a);
		prop_assert_eq!(value.leading_zeros(),  a.leading_zeros());
		prop_assert_eq!(value.trailing_zeros(), a.trailing_zeros());
		prop_assert_eq!(value.count_ones(),     a.count_ones());
		prop_assert_eq!(value.bits(),           128 - a.leading_zeros());
	}
	
	#[test]
	fn shifts__match_native(a: u128, n in 0_u32..300) {
		prop_assert_eq!(Uint128::from(a) << n, Uint128::from(a.checked_shl(n).unwrap_or(0)));
		prop_assert_eq!(Uint128::from(a) >> n, Uint128::from(a.checked_shr(n).unwrap_or(0)));
	}
	
	#[test]
	fn rotates__match_native(a: u128, n: u32) {
		prop_assert_eq!(Uint128::from(a).rotate_left(n),  Uint128::from(a.rotate_left(n)));
		prop_assert_eq!(Uint128::from(a).rotate_right(n), Uint128::from(a.rotate_right(n)));
	}
	
	//		Ordering															
	#[test]
	fn ordering__matches_native(a: u128, b: u128) {
		prop_assert_eq!(Uint128::from(a).cmp(&Uint128::from(b)), a.cmp(&b));
		prop_assert_eq!(Uint128::from(a) < Uint128::from(b),     a < b);
		prop_assert_eq!(Uint128::from(a) > Uint128::from(b),     a > b);
	}
	
	//		Formatting															
	#[test]
	fn formatting__matches_native(a: u128) {
		let value = Uint128::from(a);
		prop_assert_eq!(value.to_string(),       a.to_string());
		prop_assert_eq!(format!("{value:x}"),    format!("{a:x}"));
		prop_assert_eq!(format!("{value:#o}"),   format!("{a:#o}"));
		prop_assert_eq!(format!("{value:040b}"), format!("{a:040b}"));
	}
	
	#[test]
	fn parsing__matches_native(a: u128, base in 2_u32..=36) {
		let digits = Uint128::from(a).to_string_radix(base, 0).unwrap();
		prop_assert_eq!(u128::from_str_radix(&digits, base), Ok(a));
		prop_assert_eq!(Uint128::parse_radix(&digits, base), Ok(Uint128::from(a)));
	}
	
	//		Wider types															
	#[test]
	fn uint256__division_identity(
		n in any::<[u64; 4]>(),
		d in any::<[u64; 4]>().prop_filter("non-zero divisor", |d| d.iter().any(|&q| q != 0)),
	) {
		let dividend = Uint256::from_quadrants(n[0], n[1], n[2], n[3]);
		let divisor  = Uint256::from_quadrants(d[0], d[1], d[2], d[3]);
		let (quotient, remainder) = dividend.divmod(divisor).unwrap();
		prop_assert!(remainder < divisor);
		prop_assert_eq!(quotient.checked_mul(divisor).and_then(|p| p.checked_add(remainder)), Some(dividend));
	}
	
	#[test]
	fn uint256__widening_mul_of_halves(a: u128, b: u128) {
		//	Two 128-bit factors cannot overflow 256 bits
		let product = Uint256::from(Uint128::from(a)) * Uint256::from(Uint128::from(b));
		let (low, high) = Uint128::from(a).widening_mul(Uint128::from(b));
		prop_assert_eq!(product, Uint256::new(high, low));
	}
	
	#[test]
	fn uint256__add_commutes_and_associates((_, a) in uint256(), (_, b) in uint256(), (_, c) in uint256()) {
		prop_assert_eq!(a + b,       b + a);
		prop_assert_eq!((a + b) + c, a + (b + c));
	}
	
	#[test]
	fn uint256__mul_commutes((_, a) in uint256(), (_, b) in uint256()) {
		prop_assert_eq!(a * b, b * a);
	}
	
	#[test]
	fn uint256__wrapping_mul_is_low_half((_, a) in uint256(), (_, b) in uint256()) {
		let (low, high) = a.widening_mul(b);
		prop_assert_eq!(a.wrapping_mul(b), low);
		prop_assert_eq!(a.checked_mul(b),  high.is_zero().then_some(low));
	}
	
	#[test]
	fn uint256__identities((_, a) in uint256()) {
		prop_assert_eq!(a + (-a),          Uint256::ZERO);
		prop_assert_eq!(a - a,             Uint256::ZERO);
		prop_assert_eq!(a * Uint256::ONE,  a);
		prop_assert_eq!(a * Uint256::ZERO, Uint256::ZERO);
		prop_assert_eq!(a >> 256_u32,      Uint256::ZERO);
		prop_assert_eq!(a << 256_u32,      Uint256::ZERO);
	}
	
	#[test]
	fn uint256__ordering_matches_words((qa, a) in uint256(), (qb, b) in uint256()) {
		//	Arrays compare lexicographically, which is numeric order for words
		//	stored most significant first
		prop_assert_eq!(a.cmp(&b), qa.cmp(&qb));
		let holding = [a < b, a == b, a > b].iter().filter(|&&held| held).count();
		prop_assert_eq!(holding, 1);
	}
}
