//! # Opcode Table
//!
//! Binds each supported opcode byte to an addressing mode and an instruction.
//! The table is generated at compile time from `DEFINITIONS`, a flat list that
//! reads like a reference card; every byte not listed there is unknown.
//!
//! Instruction size is derived from the addressing mode. Cycle costs are not
//! stored: they emerge from the bus accesses and penalties of each step.

use crate::addressing::AddressingMode;
use crate::instructions::Instruction;

/// Metadata for a single supported opcode.
///
/// # Examples
///
/// ```
/// use acc6502::{lookup, AddressingMode, Instruction};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte value.
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA").
    pub mnemonic: &'static str,

    /// Handler this opcode dispatches to.
    pub instruction: Instruction,

    /// Addressing mode for this opcode.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(opcode: u8, instruction: Instruction, addressing_mode: AddressingMode) -> Self {
        Self {
            opcode,
            mnemonic: instruction.mnemonic(),
            instruction,
            addressing_mode,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }
}

use AddressingMode::*;
use Instruction::*;

/// Every supported opcode, grouped by instruction family.
const DEFINITIONS: &[(u8, Instruction, AddressingMode)] = &[
    // Load
    (0xA9, Lda, Immediate),
    (0xA5, Lda, ZeroPage),
    (0xB5, Lda, ZeroPageX),
    (0xAD, Lda, Absolute),
    (0xBD, Lda, AbsoluteX),
    (0xB9, Lda, AbsoluteY),
    (0xA1, Lda, IndirectX),
    (0xB1, Lda, IndirectY),
    (0xA2, Ldx, Immediate),
    (0xA6, Ldx, ZeroPage),
    (0xB6, Ldx, ZeroPageY),
    (0xAE, Ldx, Absolute),
    (0xBE, Ldx, AbsoluteY),
    (0xA0, Ldy, Immediate),
    (0xA4, Ldy, ZeroPage),
    (0xB4, Ldy, ZeroPageX),
    (0xAC, Ldy, Absolute),
    (0xBC, Ldy, AbsoluteX),
    // Store
    (0x85, Sta, ZeroPage),
    (0x95, Sta, ZeroPageX),
    (0x8D, Sta, Absolute),
    (0x9D, Sta, AbsoluteX),
    (0x99, Sta, AbsoluteY),
    (0x81, Sta, IndirectX),
    (0x91, Sta, IndirectY),
    (0x86, Stx, ZeroPage),
    (0x96, Stx, ZeroPageY),
    (0x8E, Stx, Absolute),
    (0x84, Sty, ZeroPage),
    (0x94, Sty, ZeroPageX),
    (0x8C, Sty, Absolute),
    // Arithmetic
    (0x69, Adc, Immediate),
    (0x65, Adc, ZeroPage),
    (0x75, Adc, ZeroPageX),
    (0x6D, Adc, Absolute),
    (0x7D, Adc, AbsoluteX),
    (0x79, Adc, AbsoluteY),
    (0x61, Adc, IndirectX),
    (0x71, Adc, IndirectY),
    (0xE9, Sbc, Immediate),
    (0xE5, Sbc, ZeroPage),
    (0xF5, Sbc, ZeroPageX),
    (0xED, Sbc, Absolute),
    (0xFD, Sbc, AbsoluteX),
    (0xF9, Sbc, AbsoluteY),
    (0xE1, Sbc, IndirectX),
    (0xF1, Sbc, IndirectY),
    // Increment and decrement
    (0xE6, Inc, ZeroPage),
    (0xF6, Inc, ZeroPageX),
    (0xEE, Inc, Absolute),
    (0xFE, Inc, AbsoluteX),
    (0xC6, Dec, ZeroPage),
    (0xD6, Dec, ZeroPageX),
    (0xCE, Dec, Absolute),
    (0xDE, Dec, AbsoluteX),
    (0xE8, Inx, Implied),
    (0xC8, Iny, Implied),
    (0xCA, Dex, Implied),
    (0x88, Dey, Implied),
    // Shift and rotate
    (0x0A, Asl, Accumulator),
    (0x06, Asl, ZeroPage),
    (0x16, Asl, ZeroPageX),
    (0x0E, Asl, Absolute),
    (0x1E, Asl, AbsoluteX),
    (0x4A, Lsr, Accumulator),
    (0x46, Lsr, ZeroPage),
    (0x56, Lsr, ZeroPageX),
    (0x4E, Lsr, Absolute),
    (0x5E, Lsr, AbsoluteX),
    (0x2A, Rol, Accumulator),
    (0x26, Rol, ZeroPage),
    (0x36, Rol, ZeroPageX),
    (0x2E, Rol, Absolute),
    (0x3E, Rol, AbsoluteX),
    (0x6A, Ror, Accumulator),
    (0x66, Ror, ZeroPage),
    (0x76, Ror, ZeroPageX),
    (0x6E, Ror, Absolute),
    (0x7E, Ror, AbsoluteX),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < DEFINITIONS.len() {
        let (opcode, instruction, mode) = DEFINITIONS[i];
        if table[opcode as usize].is_some() {
            panic!("opcode defined twice");
        }
        table[opcode as usize] = Some(OpcodeMetadata::new(opcode, instruction, mode));
        i += 1;
    }
    table
}

/// 256-entry table indexed by opcode byte; `None` marks an unknown opcode.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Number of supported opcodes.
pub const SUPPORTED_OPCODES: usize = DEFINITIONS.len();

/// Looks up the metadata for `opcode`.
#[inline]
pub const fn lookup(opcode: u8) -> Option<OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize]
}
