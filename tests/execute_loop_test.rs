//! Execution loop tests
//!
//! Verifies reset state, the fetch-decode-execute step, unknown opcode
//! reporting, and end-to-end program execution.

use acc6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

// ========== Reset ==========

#[test]
fn test_cpu_reset_values() {
    let cpu = setup_cpu();

    assert_eq!(cpu.pc(), 0x0600, "PC should start at the fixed entry point");
    assert_eq!(cpu.sp(), 0x0100, "SP should start at 0x0100");
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.status(), 0x20, "All flags should be clear");
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_reset_ignores_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x0600);
}

#[test]
fn test_configured_entry_point() {
    let config = CpuConfig::default().with_entry_point(0xC000);
    let mut cpu = CPU::with_config(FlatMemory::new(), config);
    cpu.load(0xC000, &[0xA2, 0x07]); // LDX #$07

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x07);

    cpu.set_pc(0x1234);
    cpu.reset();
    assert_eq!(cpu.pc(), 0xC000);
}

// ========== Step ==========

#[test]
fn test_step_returns_cycles_and_advances_pc() {
    let mut cpu = setup_cpu();
    cpu.load(0x0600, &[0xA9, 0x42]); // LDA #$42

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.pc(), 0x0602);
    assert_eq!(cpu.cycles_this_step(), 3);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_cycle_counter_resets_each_step() {
    let mut cpu = setup_cpu();
    // LDA $2000 ; INX
    cpu.load(0x0600, &[0xAD, 0x00, 0x20, 0xE8]);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.step(), Ok(1));
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_pc_wraps_during_fetch() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0xFFFF);
    cpu.load(0xFFFF, &[0xA9, 0x11]); // operand lands at 0x0000

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.pc(), 0x0001);
}

// ========== Unknown Opcodes ==========

#[test]
fn test_unknown_opcode_is_reported() {
    let mut cpu = setup_cpu();
    cpu.load(0x0600, &[0x02]);

    match cpu.step() {
        Err(ExecutionError::UnknownOpcode(0x02)) => {}
        other => panic!("Expected UnknownOpcode(0x02), got {:?}", other),
    }
}

#[test]
fn test_unknown_opcode_has_no_side_effects() {
    let mut cpu = setup_cpu();
    // INX ; <unknown>
    cpu.load(0x0600, &[0xE8, 0x4C, 0x00, 0x20]);
    cpu.step().unwrap();

    let status = cpu.status();
    assert!(cpu.step().is_err());

    assert_eq!(cpu.pc(), 0x0601, "PC should still point at the bad opcode");
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.cycles(), 1);
    assert_eq!(cpu.cycles_this_step(), 1, "Previous step's count is kept");
    assert_eq!(cpu.memory().read(0x2000), 0x00);
}

#[test]
fn test_caller_can_skip_unknown_opcode() {
    let mut cpu = setup_cpu();
    // <unknown> ; LDY #$09
    cpu.load(0x0600, &[0xFF, 0xA0, 0x09]);

    if let Err(ExecutionError::UnknownOpcode(_)) = cpu.step() {
        cpu.set_pc(cpu.pc().wrapping_add(1));
    }
    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x09);
}

// ========== Programs ==========

#[test]
fn test_self_check_program() {
    let mut cpu = setup_cpu();
    cpu.load(
        0x0600,
        &[
            0xA9, 0x01, // LDA #$01
            0x8D, 0x00, 0x20, // STA $2000
            0xA9, 0xFF, // LDA #$FF
            0xED, 0x00, 0x20, // SBC $2000
        ],
    );

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert!(cpu.flag_c(), "No borrow: C should be set");
    assert!(!cpu.flag_v(), "No signed overflow");
    assert_eq!(cpu.memory().read(0x2000), 0x01);
    assert_eq!(cpu.a(), 0xFD); // carry was clear, so an extra 1 is borrowed
    assert_eq!(cpu.pc(), 0x060A);
    assert_eq!(cpu.cycles(), 3 + 5 + 3 + 5);
}

#[test]
fn test_sixteen_bit_add() {
    let mut cpu = setup_cpu();
    // 0x12FF + 0x0001 stored little-endian at $10/$11
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.memory_mut().write(0x0011, 0x12);
    cpu.load(
        0x0600,
        &[
            0xA5, 0x10, // LDA $10
            0x69, 0x01, // ADC #$01
            0x85, 0x10, // STA $10
            0xA5, 0x11, // LDA $11
            0x69, 0x00, // ADC #$00
            0x85, 0x11, // STA $11
        ],
    );

    while cpu.pc() < 0x060C {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert_eq!(cpu.memory().read(0x0011), 0x13);
    assert!(!cpu.flag_c());
}

#[test]
fn test_independent_machines() {
    let mut first = setup_cpu();
    let mut second = setup_cpu();
    first.load(0x0600, &[0xA9, 0xAA, 0x85, 0x00]);
    second.load(0x0600, &[0xA9, 0x55, 0x85, 0x00]);

    // LDA # (3) + STA zp (4)
    assert_eq!(first.run_for_cycles(7), Ok(7));
    assert_eq!(second.run_for_cycles(7), Ok(7));

    assert_eq!(first.memory().read(0x0000), 0xAA);
    assert_eq!(second.memory().read(0x0000), 0x55);
}
