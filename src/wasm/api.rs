//! WASM API for the emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control and state inspection.

use crate::{CpuConfig, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator whose PC starts at `entry_point` after every reset
    #[wasm_bindgen(constructor)]
    pub fn new(entry_point: u16) -> Self {
        let config = CpuConfig::default().with_entry_point(entry_point);
        Emulator {
            cpu: CPU::with_config(FlatMemory::new(), config),
        }
    }

    /// Execute a single instruction, returning its cycle count
    pub fn step(&mut self) -> Result<u8, js_sys::Error> {
        self.cpu
            .step()
            .map_err(|e| js_sys::Error::new(&e.to_string()))
    }

    /// Execute instructions for at least `cycles` cycles
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, js_sys::Error> {
        self.cpu
            .run_for_cycles(cycles as u64)
            .map(|c| c as u32)
            .map_err(|e| js_sys::Error::new(&e.to_string()))
    }

    /// Reset registers and flags; memory is kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Copy a program into memory at `start_addr`
    pub fn load(&mut self, start_addr: u16, program: &[u8]) {
        self.cpu.load(start_addr, program);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().as_slice()[start..start + 256].to_vec()
    }
}
