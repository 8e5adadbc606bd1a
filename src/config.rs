//! # Processor Configuration
//!
//! Reset-time settings for the CPU. The processor does not fetch a reset
//! vector from high memory; `reset()` jumps straight to a configured entry
//! point instead.

/// Default program entry point loaded into PC on reset.
pub const DEFAULT_ENTRY_POINT: u16 = 0x0600;

/// Default value loaded into SP on reset.
pub const DEFAULT_STACK_POINTER: u16 = 0x0100;

/// Values applied to the processor on every `reset()`.
///
/// # Examples
///
/// ```
/// use acc6502::{CPU, CpuConfig, FlatMemory};
///
/// let config = CpuConfig::default().with_entry_point(0x8000);
/// let cpu = CPU::with_config(FlatMemory::new(), config);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0x0100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Address PC is set to on reset.
    pub entry_point: u16,

    /// Value SP is set to on reset. No in-scope instruction reads it.
    pub stack_pointer: u16,
}

impl CpuConfig {
    /// Creates a configuration with the default entry point and stack pointer.
    pub const fn new() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT,
            stack_pointer: DEFAULT_STACK_POINTER,
        }
    }

    /// Returns a copy with a different entry point.
    #[must_use]
    pub const fn with_entry_point(mut self, entry_point: u16) -> Self {
        self.entry_point = entry_point;
        self
    }

    /// Returns a copy with a different reset stack pointer.
    #[must_use]
    pub const fn with_stack_pointer(mut self, stack_pointer: u16) -> Self {
        self.stack_pointer = stack_pointer;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::new()
    }
}
