//		Packages

use super::*;



//		Constants

const PATTERN: Uint256 = Uint256::from_quadrants(
	0x0123_4567_89AB_CDEF,
	0xFEDC_BA98_7654_3210,
	0x0F1E_2D3C_4B5A_6978,
	0x8796_A5B4_C3D2_E1F0,
);



//		Tests

mod constructors {
	use super::*;
	
	//		from_quadrants														
	#[test]
	fn from_quadrants() {
		assert_eq!(PATTERN.hi(), Uint128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210));
		assert_eq!(PATTERN.lo(), Uint128::new(0x0F1E_2D3C_4B5A_6978, 0x8796_A5B4_C3D2_E1F0));
	}
	#[test]
	fn max() {
		assert_eq!(Uint256::MAX, Uint256::from_quadrants(u64::MAX, u64::MAX, u64::MAX, u64::MAX));
		assert_eq!(Uint256::MAX.bits(), 256);
	}
}

mod public_methods {
	use super::*;
	
	//		bits																
	#[test]
	fn bits() {
		assert_eq!(PATTERN.bits(),                                    249);
		assert_eq!(Uint256::from_quadrants(0, 0, 1, 0).bits(),        65);
		assert_eq!(Uint256::from_quadrants(0, 1, 0, 0).bits(),        129);
		assert_eq!(Uint256::from_quadrants(1 << 63, 0, 0, 0).bits(),  256);
	}
	
	//		divmod																
	#[test]
	fn divmod__by_native() {
		let divisor = Uint256::from(0xFEDC_BA98_7654_3210_u64);
		let (quotient, remainder) = Uint256::MAX.divmod(divisor).unwrap();
		assert_eq!(remainder, Uint256::from(0x6379_4F9D_55C8_D29F_u64));
		assert_eq!(quotient,  Uint256::from_quadrants(
			0x1,
			0x0124_9249_2492_4924,
			0x7FEB_1A1F_58D0_FAC6,
			0x8926_106B_79A7_EE16,
		));
	}
	#[test]
	fn divmod__by_zero() {
		assert_err_eq!(Uint256::MAX.divmod(Uint256::ZERO),  ArithmeticError::DivisionByZero);
		assert_err_eq!(Uint256::ZERO.divmod(Uint256::ZERO), ArithmeticError::DivisionByZero);
	}
	#[test]
	fn divmod__wide_divisor() {
		let divisor = Uint256::from_quadrants(0, 0, 0x1111_1111_1111_1111, 0x2222_2222_2222_2222);
		assert_ok_eq!(PATTERN.divmod(divisor), (
			Uint256::from_quadrants(0, 0, 0x1111_1111_1111_110F, 0xDDDD_DDDD_DDDD_DDE1),
			Uint256::from_quadrants(0, 0, 0x029A_31C9_60F8_9027, 0x60E7_6DF4_7B01_880E),
		));
	}
	
	//		to_string_radix														
	#[test]
	fn to_string_radix__max() {
		assert_ok_eq!(
			Uint256::MAX.to_string_radix(10, 0),
			s!("115792089237316195423570985008687907853269984665640564039457584007913129639935"),
		);
	}
	#[test]
	fn to_string_radix__hex() {
		assert_ok_eq!(
			PATTERN.to_string_radix(16, 64),
			s!("0123456789abcdeffedcba98765432100f1e2d3c4b5a69788796a5b4c3d2e1f0"),
		);
	}
	
	//		wrapping_mul														
	#[test]
	fn wrapping_mul__square() {
		assert_eq!(PATTERN * PATTERN, Uint256::from_quadrants(
			0x7716_581E_4ABF_5E08,
			0xC7BA_A363_DDF3_8678,
			0x6959_66AF_516B_1A7D,
			0xB2D8_0B6B_1527_C100,
		));
	}
	#[test]
	fn wrapping_mul__max() {
		assert_eq!(Uint256::MAX * Uint256::MAX, Uint256::ONE);
	}
}

mod derived_traits {
	use super::*;
	use core::cmp::Ordering;
	
	//		Ord																	
	#[test]
	fn ord__decided_by_highest_word() {
		let low  = Uint256::from_quadrants(1, 0, 0, 0);
		let high = Uint256::from_quadrants(1, 0, 0, 1);
		assert_eq!(low.cmp(&high), Ordering::Less);
		assert!(Uint256::from_quadrants(0, 1, 0, 0) > Uint256::from_quadrants(0, 0, u64::MAX, u64::MAX));
		assert!(Uint256::from_quadrants(0, 0, 1, 0) > Uint256::from_quadrants(0, 0, 0, u64::MAX));
		assert!(Uint256::from_quadrants(2, 0, 0, 0) > Uint256::from_quadrants(1, u64::MAX, u64::MAX, u64::MAX));
	}
	#[test]
	fn ord__equal_high_limbs() {
		let a = Uint256::from_quadrants(7, 7, 7, 1);
		let b = Uint256::from_quadrants(7, 7, 7, 2);
		assert!(a < b);
		assert!(b > a);
		assert!(a <= b && b >= a);
		assert_eq!(a.cmp(&a), Ordering::Equal);
		assert_eq!(a.max(b), b);
		assert_eq!(a.min(b), a);
	}
}

mod traits {
	use super::*;
	
	//		Add																	
	#[test]
	fn add__carry_through_all_limbs() {
		let value = Uint256::from_quadrants(0, u64::MAX, u64::MAX, u64::MAX);
		assert_eq!(value + Uint256::ONE, Uint256::from_quadrants(1, 0, 0, 0));
		assert_eq!(Uint256::MAX + Uint256::ONE, Uint256::ZERO);
	}
	
	//		Rem																	
	#[test]
	fn rem__max_by_native() {
		assert_eq!(Uint256::MAX % Uint256::from(0xFEDC_BA98_7654_3210_u64), Uint256::from(0x6379_4F9D_55C8_D29F_u64));
		assert_eq!(Uint256::MAX % 0xFEDC_BA98_7654_3210_u64,                Uint256::from(0x6379_4F9D_55C8_D29F_u64));
	}
	
	//		Shl																	
	#[test]
	fn shl() {
		assert_eq!(Uint256::ONE << 64_u32,  Uint256::from_quadrants(0, 0, 1, 0));
		assert_eq!(Uint256::ONE << 128_u32, Uint256::from_quadrants(0, 1, 0, 0));
		assert_eq!(Uint256::ONE << 255_u32, Uint256::from_quadrants(1 << 63, 0, 0, 0));
		assert_eq!(Uint256::ONE << 256_u32, Uint256::ZERO);
		assert_eq!(PATTERN << 100_u32, Uint256::from_quadrants(
			0x6543_2100_F1E2_D3C4,
			0xB5A6_9788_796A_5B4C,
			0x3D2E_1F00_0000_0000,
			0,
		));
	}
	
	//		Shr																	
	#[test]
	fn shr() {
		assert_eq!(PATTERN >> 100_u32, Uint256::from_quadrants(
			0,
			0x0000_0000_0012_3456,
			0x789A_BCDE_FFED_CBA9,
			0x8765_4321_00F1_E2D3,
		));
	}
	
	//		Sub																	
	#[test]
	fn sub__borrow_through_all_limbs() {
		assert_eq!(
			Uint256::from_quadrants(1, 0, 0, 0) - Uint256::ONE,
			Uint256::from_quadrants(0, u64::MAX, u64::MAX, u64::MAX),
		);
	}
	
	//		Display / FromStr													
	#[test]
	fn display() {
		assert_eq!(
			Uint256::MAX.to_string(),
			"115792089237316195423570985008687907853269984665640564039457584007913129639935",
		);
		assert_eq!(format!("{:#x}", Uint256::ONE << 200_u32), format!("0x1{}", "0".repeat(50)));
	}
	#[test]
	fn from_str() {
		assert_ok_eq!(
			"115792089237316195423570985008687907853269984665640564039457584007913129639935".parse::<Uint256>(),
			Uint256::MAX,
		);
		assert_err_eq!(
			"115792089237316195423570985008687907853269984665640564039457584007913129639936".parse::<Uint256>(),
			ConversionError::ValueTooLarge,
		);
	}
	
	//		to_be_bytes															
	#[test]
	fn to_be_bytes() {
		let bytes = PATTERN.to_be_bytes();
		assert_eq!(bytes.len(), 32);
		assert_eq!(bytes[0],  0x01);
		assert_eq!(bytes[31], 0xF0);
		assert_eq!(Uint256::from_be_bytes(&bytes), PATTERN);
	}
}
