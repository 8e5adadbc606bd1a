//! # Addressing Modes
//!
//! This module defines the addressing modes used by the supported opcodes and
//! the resolver that turns operand bytes into an effective address or an
//! immediate value.
//!
//! ## Cycle penalties
//!
//! Resolution fetches operand bytes with `fetch_byte` and dereferences
//! pointers with `read_byte`, each costing one cycle. On top of that:
//!
//! | Mode | Extra |
//! |---|---|
//! | ZeroPageX / ZeroPageY | +1 always |
//! | IndirectX | +1 always (zero-page indexing) |
//! | AbsoluteX / AbsoluteY | +1 if the index crosses a page |
//! | IndirectY | +1 if the index crosses a page |

use crate::{MemoryBus, CPU};

/// Addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, the register is implied by the instruction.
    ///
    /// Examples: INX, DEY
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, ROR A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address, little-endian.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }

    /// Returns true if the mode resolves to a memory address.
    pub const fn is_memory(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Immediate
        )
    }

    /// Returns true if the effective address involves the X or Y register.
    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            AddressingMode::ZeroPageX
                | AddressingMode::ZeroPageY
                | AddressingMode::AbsoluteX
                | AddressingMode::AbsoluteY
                | AddressingMode::IndirectX
                | AddressingMode::IndirectY
        )
    }
}

/// The result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator is the operand.
    Accumulator,
    /// Value taken directly from the instruction stream.
    Immediate(u8),
    /// Effective address in memory.
    Address(u16),
}

/// Joins two bytes into a little-endian word.
#[inline]
pub(crate) fn word(low: u8, high: u8) -> u16 {
    (low as u16) | ((high as u16) << 8)
}

/// Returns true if `base` and `effective` lie in different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(base: u16, effective: u16) -> bool {
    (base ^ effective) & 0xFF00 != 0
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` against the instruction stream at PC.
    ///
    /// Consumes the mode's operand bytes, performs any pointer reads and
    /// charges mode-specific penalties to the current step.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => Operand::Address(self.zero_page_indexed(self.x) as u16),
            AddressingMode::ZeroPageY => Operand::Address(self.zero_page_indexed(self.y) as u16),
            AddressingMode::Absolute => Operand::Address(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Operand::Address(self.index_with_penalty(base, self.x))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Operand::Address(self.index_with_penalty(base, self.y))
            }
            AddressingMode::IndirectX => {
                let pointer = self.zero_page_indexed(self.x);
                Operand::Address(self.read_zero_page_word(pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte();
                let base = self.read_zero_page_word(pointer);
                Operand::Address(self.index_with_penalty(base, self.y))
            }
        }
    }

    /// Fetches a little-endian 16-bit operand.
    fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte();
        let high = self.fetch_byte();
        word(low, high)
    }

    /// Fetches a zero-page byte and adds `index` within the zero page.
    fn zero_page_indexed(&mut self, index: u8) -> u8 {
        self.cycles_this_step = self.cycles_this_step.wrapping_add(1);
        self.fetch_byte().wrapping_add(index)
    }

    /// Adds `index` to `base`, charging a cycle when the page changes.
    fn index_with_penalty(&mut self, base: u16, index: u8) -> u16 {
        let effective = base.wrapping_add(index as u16);
        if page_crossed(base, effective) {
            self.cycles_this_step = self.cycles_this_step.wrapping_add(1);
        }
        effective
    }

    /// Reads a pointer from the zero page; the high byte wraps to 0x00 after 0xFF.
    fn read_zero_page_word(&mut self, pointer: u8) -> u16 {
        let low = self.read_byte(pointer as u16);
        let high = self.read_byte(pointer.wrapping_add(1) as u16);
        word(low, high)
    }
}
