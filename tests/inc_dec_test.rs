//! Tests for INC, DEC, INX, INY, DEX and DEY.
//!
//! Memory forms are read-modify-write and cost two handler cycles on top of
//! the read and the write. Register forms cost only the opcode fetch.

use acc6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

// ========== INC / DEC ==========

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x41);
    cpu.load(0x0600, &[0xE6, 0x10]);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_inc_wraps_ff_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x2000, 0xFF);
    cpu.load(0x0600, &[0xEE, 0x00, 0x20]);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x2000), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_inc_does_not_touch_carry_or_accumulator() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x12);
    cpu.set_flag_c(true);
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.load(0x0600, &[0xE6, 0x20]);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert_eq!(cpu.a(), 0x12);
}

#[test]
fn test_inc_indexed_modes() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0000, 0x7F); // $E0,X wraps to $00
    cpu.memory_mut().write(0x3100, 0x05); // $30E0,X crosses a page
    cpu.load(0x0600, &[0xF6, 0xE0, 0xFE, 0xE0, 0x30]);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x0000), 0x80);
    assert!(cpu.flag_n());

    assert_eq!(cpu.step(), Ok(8));
    assert_eq!(cpu.memory().read(0x3100), 0x06);
}

#[test]
fn test_dec_wraps_zero_to_ff() {
    let mut cpu = setup_cpu();
    cpu.load(0x0600, &[0xC6, 0x10]);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_dec_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0011, 0x01);
    cpu.memory_mut().write(0x4001, 0x02);
    cpu.memory_mut().write(0x5000, 0x81);
    cpu.load(
        0x0600,
        &[
            0xD6, 0x10, // DEC $10,X
            0xDE, 0x00, 0x40, // DEC $4000,X
            0xCE, 0x00, 0x50, // DEC $5000
        ],
    );

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x0011), 0x00);
    assert!(cpu.flag_z());

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x4001), 0x01);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x5000), 0x80);
    assert!(cpu.flag_n());
}

// ========== Register forms ==========

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0xFF);
    cpu.load(0x0600, &[0xE8]);

    assert_eq!(cpu.step(), Ok(1));
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0601);
}

#[test]
fn test_iny_sets_negative() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x7F);
    cpu.load(0x0600, &[0xC8]);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_dex_wraps() {
    let mut cpu = setup_cpu();
    cpu.load(0x0600, &[0xCA]);

    assert_eq!(cpu.step(), Ok(1));
    assert_eq!(cpu.x(), 0xFF);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x01);
    cpu.load(0x0600, &[0x88]);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_register_forms_leave_other_registers() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xAA);
    cpu.set_x(0x10);
    cpu.set_y(0x20);
    cpu.load(0x0600, &[0xE8, 0x88]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.x(), 0x11);
    assert_eq!(cpu.y(), 0x1F);
}

#[test]
fn test_countdown_loop_body() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x03);
    cpu.load(0x0600, &[0xCA, 0xCA, 0xCA]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(!cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}
