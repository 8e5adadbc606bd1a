//! # Instruction Implementations
//!
//! Handlers are grouped by family. Each receives an already-resolved
//! `Operand`, so a handler never looks at opcode bytes or addressing modes.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **alu**: ADC, SBC and the carry/overflow evaluator
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **shifts**: ASL, LSR, ROL, ROR

pub mod alu;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;

use crate::{MemoryBus, Operand, CPU};

/// The supported instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Load accumulator.
    Lda,
    /// Load X register.
    Ldx,
    /// Load Y register.
    Ldy,
    /// Store accumulator.
    Sta,
    /// Store X register.
    Stx,
    /// Store Y register.
    Sty,
    /// Add with carry.
    Adc,
    /// Subtract with borrow.
    Sbc,
    /// Increment memory.
    Inc,
    /// Decrement memory.
    Dec,
    /// Increment X register.
    Inx,
    /// Increment Y register.
    Iny,
    /// Decrement X register.
    Dex,
    /// Decrement Y register.
    Dey,
    /// Arithmetic shift left.
    Asl,
    /// Logical shift right.
    Lsr,
    /// Rotate left through carry.
    Rol,
    /// Rotate right through carry.
    Ror,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Adc => "ADC",
            Instruction::Sbc => "SBC",
            Instruction::Inc => "INC",
            Instruction::Dec => "DEC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Asl => "ASL",
            Instruction::Lsr => "LSR",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
        }
    }
}

/// An 8-bit register a handler reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator.
    A,
    /// X index register.
    X,
    /// Y index register.
    Y,
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the handler for `instruction` on an already-resolved operand.
    pub(crate) fn execute(&mut self, instruction: Instruction, operand: Operand) {
        match instruction {
            Instruction::Lda => self.load_register(Register::A, operand),
            Instruction::Ldx => self.load_register(Register::X, operand),
            Instruction::Ldy => self.load_register(Register::Y, operand),
            Instruction::Sta => self.store_register(Register::A, operand),
            Instruction::Stx => self.store_register(Register::X, operand),
            Instruction::Sty => self.store_register(Register::Y, operand),
            Instruction::Adc => self.adc(operand),
            Instruction::Sbc => self.sbc(operand),
            Instruction::Inc => self.step_memory(operand, 1),
            Instruction::Dec => self.step_memory(operand, -1),
            Instruction::Inx => self.step_register(Register::X, 1),
            Instruction::Iny => self.step_register(Register::Y, 1),
            Instruction::Dex => self.step_register(Register::X, -1),
            Instruction::Dey => self.step_register(Register::Y, -1),
            Instruction::Asl => self.read_modify_write(operand, shifts::asl),
            Instruction::Lsr => self.read_modify_write(operand, shifts::lsr),
            Instruction::Rol => self.read_modify_write(operand, shifts::rol),
            Instruction::Ror => self.read_modify_write(operand, shifts::ror),
        }
    }

    /// Sets Z if `value` is zero and N from bit 7.
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Charges `cycles` handler-internal cycles to the current step.
    pub(crate) fn charge(&mut self, cycles: u8) {
        self.cycles_this_step = self.cycles_this_step.wrapping_add(cycles);
    }

    pub(crate) fn register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    pub(crate) fn register_mut(&mut self, register: Register) -> &mut u8 {
        match register {
            Register::A => &mut self.a,
            Register::X => &mut self.x,
            Register::Y => &mut self.y,
        }
    }

    /// Produces the 8-bit value an operand denotes, reading memory if needed.
    ///
    /// `Implied` has no value and yields 0; the opcode table never pairs it
    /// with a value-consuming instruction.
    pub(crate) fn operand_value(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.read_byte(addr),
            Operand::Accumulator => self.a,
            Operand::Implied => 0,
        }
    }
}
