//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the processor state, the
//! cycle-counting memory access layer, and the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction byte
//! - **Stack pointer** (SP): 16-bit, set on reset, not used by any instruction
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counters**: per-step `u8` and a running `u64` total
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, returning the cycles it took
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted

use log::{debug, trace};

use crate::{lookup, CpuConfig, ExecutionError, FlatMemory, MemoryBus};

/// Processor state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. Each
/// instance exclusively owns its memory; independent machines are independent
/// `CPU` values.
///
/// # Examples
///
/// ```
/// use acc6502::{CPU, FlatMemory};
///
/// let cpu = CPU::new(FlatMemory::new());
///
/// assert_eq!(cpu.pc(), 0x0600);
/// assert_eq!(cpu.sp(), 0x0100);
/// assert_eq!(cpu.a(), 0x00);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer, reserved
    pub(crate) sp: u16,

    /// Negative flag (bit 7 of the last result)
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (last result was zero)
    pub(crate) flag_z: bool,

    /// Carry flag (unsigned overflow / no borrow / shifted-out bit)
    pub(crate) flag_c: bool,

    /// Cycles charged to the instruction currently or most recently executed
    pub(crate) cycles_this_step: u8,

    /// Total cycles of all successfully executed instructions
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    config: CpuConfig,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the default configuration and resets it.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration and resets it.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles_this_step: 0,
            cycles: 0,
            memory,
            config,
        };
        cpu.reset();
        cpu
    }

    /// Resets the processor.
    ///
    /// Zeroes A, X, Y and every flag, sets PC to the configured entry point
    /// and SP to the configured stack pointer. Memory is not touched.
    ///
    /// No reset vector is read: PC comes from `CpuConfig::entry_point`.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.pc = self.config.entry_point;
        self.sp = self.config.stack_pointer;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = false;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles_this_step = 0;
        self.cycles = 0;
    }

    /// Copies `bytes` into memory starting at `address`.
    ///
    /// Addresses wrap from 0xFFFF to 0x0000. No cycles are charged.
    ///
    /// # Examples
    ///
    /// ```
    /// use acc6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(0xFFFF, &[0xAA, 0xBB]);
    ///
    /// assert_eq!(cpu.memory().read(0xFFFF), 0xAA);
    /// assert_eq!(cpu.memory().read(0x0000), 0xBB);
    /// ```
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let mut addr = address;
        for &byte in bytes {
            self.memory.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    // ========== Memory Access Layer ==========

    /// Reads a byte from memory, charging one cycle.
    pub(crate) fn read_byte(&mut self, address: u16) -> u8 {
        self.cycles_this_step = self.cycles_this_step.wrapping_add(1);
        self.memory.read(address)
    }

    /// Writes a byte to memory, charging one cycle. Returns the stored value.
    pub(crate) fn write_byte(&mut self, address: u16, value: u8) -> u8 {
        self.cycles_this_step = self.cycles_this_step.wrapping_add(1);
        self.memory.write(address, value);
        value
    }

    /// Reads the byte at PC and advances PC, wrapping at 0xFFFF.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    // ========== Dispatch ==========

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// The step resets the per-step counter, fetches the opcode, resolves its
    /// addressing mode and runs its handler. The opcode fetch itself is one
    /// of the counted cycles.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::UnknownOpcode` if the byte at PC has no
    /// table entry. In that case nothing is modified: PC still points at the
    /// opcode and both cycle counters keep their previous values.
    ///
    /// # Examples
    ///
    /// ```
    /// use acc6502::{CPU, ExecutionError, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(0x0600, &[0xA9, 0x80, 0x02]); // LDA #$80, then an unknown byte
    ///
    /// assert_eq!(cpu.step(), Ok(3));
    /// assert!(cpu.flag_n());
    ///
    /// assert_eq!(cpu.step(), Err(ExecutionError::UnknownOpcode(0x02)));
    /// assert_eq!(cpu.pc(), 0x0602);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        let opcode_address = self.pc;
        let opcode = self.memory.read(opcode_address);

        let Some(metadata) = lookup(opcode) else {
            debug!("unknown opcode 0x{opcode:02X} at ${opcode_address:04X}");
            return Err(ExecutionError::UnknownOpcode(opcode));
        };

        self.cycles_this_step = 0;
        self.fetch_byte();

        let operand = self.resolve(metadata.addressing_mode);
        self.execute(metadata.instruction, operand);

        self.cycles += self.cycles_this_step as u64;

        trace!(
            "${opcode_address:04X} {opcode:02X} {} {:?} -> {} cycles",
            metadata.mnemonic,
            operand,
            self.cycles_this_step
        );

        Ok(self.cycles_this_step)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until at least `cycle_budget` cycles have been
    /// consumed. Returns the cycles actually consumed, which may overshoot the
    /// budget by up to one instruction.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step and returns its error. Cycles of the
    /// instructions already executed remain in `cycles()`.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use acc6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0b0010_0000);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Returns the cycles consumed by the most recent successful step.
    pub fn cycles_this_step(&self) -> u8 {
        self.cycles_this_step
    }

    /// Returns the total number of cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the configuration applied on reset.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Writes through this reference are not charged any cycles.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters (test harnesses and debuggers) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:04X} PC:{:04X} CYC:{}",
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp,
            self.pc,
            self.cycles
        )
    }
}
