//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements binary arithmetic on the accumulator:
//! - ADC: Add with Carry
//! - SBC: Subtract with Borrow
//!
//! SBC is ADC of the operand's ones' complement. With the carry acting as an
//! inverted borrow, `A + !M + C` equals `A - M - (1 - C)` modulo 256, and the
//! carry and overflow outputs of the addition are exactly the subtraction's.
//! Decimal mode is not modelled; D is ignored.

use crate::{MemoryBus, Operand, CPU};

/// Flag outputs and result of an 8-bit addition with carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcOutcome {
    /// `(a + operand + carry_in) mod 256`
    pub result: u8,
    /// Set if the unsigned sum exceeded 255.
    pub carry: bool,
    /// Set if both inputs share a sign and the result's sign differs.
    pub overflow: bool,
}

/// Adds `operand` and `carry_in` to `a`.
///
/// # Examples
///
/// ```
/// use acc6502::instructions::alu::add_with_carry;
///
/// // 0x50 + 0x50: two positives producing a negative
/// let out = add_with_carry(0x50, 0x50, false);
/// assert_eq!(out.result, 0xA0);
/// assert!(out.overflow);
/// assert!(!out.carry);
/// ```
pub const fn add_with_carry(a: u8, operand: u8, carry_in: bool) -> AdcOutcome {
    let sum = a as u16 + operand as u16 + carry_in as u16;
    let result = sum as u8;

    AdcOutcome {
        result,
        carry: sum > 0xFF,
        overflow: (a ^ result) & (operand ^ result) & 0x80 != 0,
    }
}

/// Subtracts `operand` and the inverted carry from `a`.
///
/// Defined as `add_with_carry(a, !operand, carry_in)`.
///
/// # Examples
///
/// ```
/// use acc6502::instructions::alu::subtract_with_borrow;
///
/// let out = subtract_with_borrow(0xFF, 0x01, false);
/// assert_eq!(out.result, 0xFD);
/// assert!(out.carry); // no borrow needed
/// assert!(!out.overflow);
/// ```
pub const fn subtract_with_borrow(a: u8, operand: u8, carry_in: bool) -> AdcOutcome {
    add_with_carry(a, !operand, carry_in)
}

impl<M: MemoryBus> CPU<M> {
    /// ADC: `A + M + C -> A`, updating N, V, Z and C.
    pub(crate) fn adc(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        self.accumulate(value);
    }

    /// SBC: `A - M - !C -> A`, updating N, V, Z and C.
    pub(crate) fn sbc(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        self.accumulate(!value);
    }

    fn accumulate(&mut self, value: u8) {
        self.charge(1);

        let outcome = add_with_carry(self.a, value, self.flag_c);
        self.a = outcome.result;
        self.flag_c = outcome.carry;
        self.flag_v = outcome.overflow;
        self.update_nz(outcome.result);
    }
}
