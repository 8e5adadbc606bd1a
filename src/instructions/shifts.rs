//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! The bit math lives in pure functions taking `(input, carry_in)` and
//! returning `(result, carry_out)`. `read_modify_write` applies one of them
//! to the accumulator or to memory.

use crate::{MemoryBus, Operand, CPU};

/// Signature of a shift/rotate kernel: `(input, carry_in) -> (result, carry_out)`.
pub type ShiftFn = fn(u8, bool) -> (u8, bool);

/// ASL: bit 7 into carry, zero into bit 0.
pub fn asl(value: u8, _carry_in: bool) -> (u8, bool) {
    (value << 1, value & 0x80 != 0)
}

/// LSR: bit 0 into carry, zero into bit 7.
pub fn lsr(value: u8, _carry_in: bool) -> (u8, bool) {
    (value >> 1, value & 0x01 != 0)
}

/// ROL: bit 7 into carry, old carry into bit 0.
pub fn rol(value: u8, carry_in: bool) -> (u8, bool) {
    ((value << 1) | carry_in as u8, value & 0x80 != 0)
}

/// ROR: bit 0 into carry, old carry into bit 7.
pub fn ror(value: u8, carry_in: bool) -> (u8, bool) {
    ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0)
}

impl<M: MemoryBus> CPU<M> {
    /// Applies `op` to the accumulator or to the byte at the operand's address.
    ///
    /// Memory targets are read, computed and written back as separate bus
    /// operations. Either way the handler itself costs one cycle.
    /// Any other operand leaves the processor untouched and charges nothing.
    pub(crate) fn read_modify_write(&mut self, operand: Operand, op: ShiftFn) {
        let result = match operand {
            Operand::Address(addr) => {
                self.charge(1);
                let value = self.read_byte(addr);
                let (result, carry) = op(value, self.flag_c);
                self.flag_c = carry;
                self.write_byte(addr, result)
            }
            Operand::Accumulator => {
                self.charge(1);
                let (result, carry) = op(self.a, self.flag_c);
                self.flag_c = carry;
                self.a = result;
                result
            }
            Operand::Immediate(_) | Operand::Implied => return,
        };

        self.update_nz(result);
    }
}
