//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from the backing store of its
//! 16-bit address space. `FlatMemory` maps all 65536 addresses to RAM.
//!
//! Bus operations are plain reads and writes. Cycle accounting happens one
//! layer up, in the CPU's `read_byte`/`write_byte`/`fetch_byte` primitives,
//! so a bus implementation never needs to know about timing.

/// Memory bus trait for CPU to read/write bytes.
///
/// There is no error type: every 16-bit address is a valid location, so
/// reads and writes always succeed.
///
/// # Examples
///
/// ```
/// use acc6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use acc6502::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800], // 2KB mirrored across the whole space
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[(addr & 0x07FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[(addr & 0x07FF) as usize] = value;
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic for any address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic for any address. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Number of addressable bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
/// Indexing uses the 16-bit address directly, so no access can fall
/// outside the backing array.
///
/// # Examples
///
/// ```
/// use acc6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0600, 0xE8); // INX
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 0x01);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Returns the whole address space as a slice, e.g. for snapshots.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &ADDRESS_SPACE_SIZE)
            .finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
