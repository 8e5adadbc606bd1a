//! Runs a four-instruction program and checks the resulting flags.
//!
//! LDA #$01 ; STA $2000 ; LDA #$FF ; SBC $2000
//!
//! -1 minus 1 stays within the signed range and needs no unsigned borrow,
//! so C ends up set and V clear.

use acc6502::{FlatMemory, MemoryBus, CPU};

fn main() {
    let mut cpu = CPU::new(FlatMemory::new());
    let entry = cpu.pc();

    cpu.load(
        entry,
        &[
            0xA9, 0x01, // LDA #$01
            0x8D, 0x00, 0x20, // STA $2000
            0xA9, 0xFF, // LDA #$FF
            0xED, 0x00, 0x20, // SBC $2000
        ],
    );

    for _ in 0..4 {
        match cpu.step() {
            Ok(cycles) => println!("{:?} (+{} cycles)", cpu, cycles),
            Err(e) => {
                eprintln!("Execution error: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("$2000 = ${:02X}", cpu.memory().read(0x2000));
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    println!("SUCCESS!");
}
