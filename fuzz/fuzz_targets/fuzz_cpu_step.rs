//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes a few instructions to find edge cases and crashes.

#![no_main]

use acc6502::{lookup, ExecutionError, FlatMemory, MemoryBus, CPU};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    pc: u16,
    flag_c: bool,
    flag_z: bool,
    flag_v: bool,
    flag_n: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instructions + operands)
    program: [u8; 12],
    /// Zero page contents, so indirect pointers are arbitrary too
    zero_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }

    let mut cpu = CPU::new(memory);
    let state = &input.cpu_state;
    cpu.load(state.pc, &input.memory.program);
    cpu.set_pc(state.pc);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_flag_c(state.flag_c);
    cpu.set_flag_z(state.flag_z);
    cpu.set_flag_v(state.flag_v);
    cpu.set_flag_n(state.flag_n);

    for _ in 0..4 {
        let pc = cpu.pc();
        let status = cpu.status();
        let cycles = cpu.cycles();
        let opcode = cpu.memory().read(pc);

        match cpu.step() {
            Ok(step_cycles) => {
                let metadata = lookup(opcode).expect("executed opcode must be in the table");
                assert_eq!(cpu.cycles(), cycles + step_cycles as u64);
                // Every instruction costs at least its own fetch bytes
                assert!(step_cycles >= metadata.size_bytes);
                assert_eq!(cpu.pc(), pc.wrapping_add(metadata.size_bytes as u16));
            }
            Err(ExecutionError::UnknownOpcode(reported)) => {
                assert_eq!(reported, opcode);
                assert!(lookup(opcode).is_none());
                // Unknown opcodes leave the processor untouched
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.status(), status);
                assert_eq!(cpu.cycles(), cycles);
                break;
            }
        }
    }
});
