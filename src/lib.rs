//! # Accumulator-Core 6502 Emulator
//!
//! Emulates the execution core of an 8-bit, 6502-class accumulator processor:
//! registers, a 64KB address space, status flags, and a fetch-decode-execute
//! step covering the load/store, add/subtract-with-carry, increment/decrement
//! and shift/rotate instruction families across their addressing modes.
//!
//! ## Quick Start
//!
//! ```rust
//! use acc6502::{CPU, FlatMemory};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$01 ; STA $2000 ; LDA #$FF ; SBC $2000
//! cpu.load(0x0600, &[0xA9, 0x01, 0x8D, 0x00, 0x20, 0xA9, 0xFF, 0xED, 0x00, 0x20]);
//!
//! for _ in 0..4 {
//!     cpu.step().unwrap();
//! }
//!
//! // Carry starts clear, so one extra is borrowed: 0xFF - 0x01 - 1
//! assert_eq!(cpu.a(), 0xFD);
//! assert!(cpu.flag_c());
//! assert!(!cpu.flag_v());
//! ```
//!
//! ## Cycle Model
//!
//! Every bus access made by the CPU (opcode fetch, operand fetch, data read,
//! data write) costs one cycle. Addressing modes and handlers add their own
//! fixed penalties on top. `step()` returns the total for the instruction.
//!
//! ## Modules
//!
//! - `cpu` - Processor state, memory access layer and the dispatch step
//! - `memory` - `MemoryBus` trait and the `FlatMemory` implementation
//! - `addressing` - Addressing modes and resolved operands
//! - `opcodes` - Opcode table binding each byte to a mode and instruction
//! - `config` - Reset-time configuration (entry point, stack pointer)

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod instructions;
pub mod memory;
pub mod opcodes;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::CpuConfig;
pub use cpu::CPU;
pub use instructions::{Instruction, Register};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the opcode table.
    ///
    /// Contains the opcode byte value. The step that reported it left the
    /// processor state untouched, with PC still pointing at the opcode.
    #[error("unknown opcode 0x{0:02X}")]
    UnknownOpcode(u8),
}
