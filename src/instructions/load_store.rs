//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register, update N and Z
//! - STA, STX, STY: store a register, flags unaffected
//!
//! Both cost one handler cycle on top of addressing and bus traffic.

use super::Register;
use crate::{MemoryBus, Operand, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Loads the operand into `register`.
    ///
    /// # Flag Behavior
    ///
    /// - Zero (Z): Set if the loaded value is 0
    /// - Negative (N): Set if bit 7 of the loaded value is set
    /// - Other flags: Not affected
    pub(crate) fn load_register(&mut self, register: Register, operand: Operand) {
        let value = self.operand_value(operand);
        *self.register_mut(register) = value;
        self.update_nz(value);
        self.charge(1);
    }

    /// Stores `register` at the operand's effective address.
    ///
    /// The opcode table only pairs stores with memory modes, so other
    /// operands write nothing.
    pub(crate) fn store_register(&mut self, register: Register, operand: Operand) {
        self.charge(1);
        if let Operand::Address(addr) = operand {
            let value = self.register(register);
            self.write_byte(addr, value);
        }
    }
}
