//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: read-modify-write on memory
//! - INX, INY, DEX, DEY: directly on an index register
//!
//! All results wrap at the 8-bit boundary and update N and Z.

use super::Register;
use crate::{MemoryBus, Operand, CPU};

impl<M: MemoryBus> CPU<M> {
    /// INC / DEC: adds `delta` to the byte at the operand's address.
    ///
    /// Charges two handler cycles on top of the read and the write-back.
    /// Operands without an address leave the processor untouched.
    pub(crate) fn step_memory(&mut self, operand: Operand, delta: i8) {
        if let Operand::Address(addr) = operand {
            self.charge(2);
            let value = self.read_byte(addr);
            let result = self.write_byte(addr, value.wrapping_add_signed(delta));
            self.update_nz(result);
        }
    }

    /// INX / INY / DEX / DEY: adds `delta` to an index register.
    ///
    /// No memory traffic and no handler cycles.
    pub(crate) fn step_register(&mut self, register: Register, delta: i8) {
        let reg = self.register_mut(register);
        *reg = reg.wrapping_add_signed(delta);
        let result = *reg;
        self.update_nz(result);
    }
}
