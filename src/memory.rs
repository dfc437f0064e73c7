use crate::machine::MachineError;

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless casting

/// Represents memory map, ROM, RAM etc. Every access is bounds checked, so a
/// stray program gets `None` back rather than taking the host down.
pub trait MemoryMap {
    /// write a chunk of bytes into "RAM"
    fn write(&mut self, data: &[u8], addr: u16) -> Option<()> {
        let bytes = self.get_rw_slice(addr, data.len())?;
        bytes.copy_from_slice(data);
        Some(())
    }

    /// get a two-byte big-endian word (opcodes)
    fn get_word(&self, addr: u16) -> Option<u16> {
        let word = self.get_ro_slice(addr, 2)?;
        Some(((word[0] as u16) << 8) | (word[1] as u16))
    }

    /// get a single byte
    fn get_byte(&self, addr: u16) -> Option<u8> {
        self.get_ro_slice(addr, 1).map(|b| b[0])
    }

    /// get a r/w slice of the underlying memory (heap)
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Option<&mut [u8]>;

    /// get a r/o slice of the underlying memory (heap)
    fn get_ro_slice(&self, addr: u16, len: usize) -> Option<&[u8]>;
}

/// Defines the 4K CHIP-8 memory map as the interpreter sees it:
///   0x0000-0x004f  hex font, 5 bytes per glyph
///   0x0050-0x01ff  unused
///   0x0200-0x0fff  program
///
/// the stack lives outside addressable memory
pub struct Chip8MemoryMap {
    bytes: Box<[u8]>,
    pub program_addr: u16,
}

impl MemoryMap for Chip8MemoryMap {
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Option<&mut [u8]> {
        let a = addr as usize;
        self.bytes.get_mut(a..a.checked_add(len)?)
    }
    fn get_ro_slice(&self, addr: u16, len: usize) -> Option<&[u8]> {
        let a = addr as usize;
        self.bytes.get(a..a.checked_add(len)?)
    }
}

/// how much RAM we have
pub const CHIP8_RAM_SIZE_BYTES: usize = 4096;

/// where the program is loaded
const CHIP8_PROGRAM_ADDR: u16 = 0x0200;

/// largest program that fits between the load address and the top of RAM
pub const CHIP8_MAX_PROGRAM_BYTES: usize = CHIP8_RAM_SIZE_BYTES - CHIP8_PROGRAM_ADDR as usize;

/// bytes per font glyph; LD F, Vx points I at glyph * this
pub const CHIP8_FONT_GLYPH_BYTES: u16 = 5;

impl Chip8MemoryMap {
    /// initialises CHIP-8 memory with the font baked in
    pub fn new() -> Self {
        let mut bytes = vec![0u8; CHIP8_RAM_SIZE_BYTES].into_boxed_slice();
        bytes[..CHIP8_FONT.len()].copy_from_slice(&CHIP8_FONT);
        Chip8MemoryMap {
            bytes,
            program_addr: CHIP8_PROGRAM_ADDR,
        }
    }

    /// load a CHIP-8 program at 0x200
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MachineError> {
        if program.is_empty() {
            return Err(MachineError::InitializationFailure(
                "program is empty".to_string(),
            ));
        }
        if program.len() > CHIP8_MAX_PROGRAM_BYTES {
            return Err(MachineError::InitializationFailure(format!(
                "program is {} bytes; at most {} fit above {:#06x}",
                program.len(),
                CHIP8_MAX_PROGRAM_BYTES,
                self.program_addr
            )));
        }
        let addr = self.program_addr;
        self.write(program, addr).ok_or_else(|| {
            MachineError::InitializationFailure("program does not fit in memory".to_string())
        })
    }
}

impl Default for Chip8MemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

const CHIP8_FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_zeroed() {
        let m = Chip8MemoryMap::new();
        // NB. memory is zeroed from 0x50 because before that we bake in the font
        assert!(m.bytes[0x50..].iter().all(|&b| b == 0));
        assert_eq!(m.bytes.len(), 4096);
    }

    #[test]
    fn test_font_at_zero() {
        let m = Chip8MemoryMap::new();
        // glyph "0"
        assert_eq!(m.get_ro_slice(0, 5), Some(&[0xF0, 0x90, 0x90, 0x90, 0xF0][..]));
        // glyph "F"
        assert_eq!(
            m.get_ro_slice(0xF * CHIP8_FONT_GLYPH_BYTES, 5),
            Some(&[0xF0, 0x80, 0xF0, 0x80, 0x80][..])
        );
    }

    #[test]
    fn test_write_slice_ok() {
        let mut dst = Chip8MemoryMap::new();
        let src: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(dst.write(src, 0x300), Some(()));
        assert_eq!(dst.get_ro_slice(0x300, 8), Some(src));
    }

    #[test]
    fn test_read_word() {
        let mut m = Chip8MemoryMap::new();
        m.write(&[0, 1, 2, 3, 4, 5, 6, 7], 0x300).unwrap();
        assert_eq!(m.get_word(0x304), Some(0x0405));
    }

    #[test]
    fn test_read_past_end_is_none() {
        let m = Chip8MemoryMap::new();
        assert_eq!(m.get_word(0x0fff), None);
        assert_eq!(m.get_byte(0x1000), None);
        assert_eq!(m.get_byte(0x0fff), Some(0));
    }

    #[test]
    fn test_write_too_much_is_none() {
        let mut dst = Chip8MemoryMap::new();
        assert_eq!(dst.write(&[0; 8], 4089), None);
    }

    #[test]
    fn test_program_load_ok() -> Result<(), MachineError> {
        let mut dst = Chip8MemoryMap::new();
        dst.load_program(&[0x00, 0xe0])?; // clear screen
        assert_eq!(dst.get_ro_slice(0x200, 2), Some(&[0x00, 0xe0][..]));
        Ok(())
    }

    #[test]
    fn test_program_load_rejects_empty() {
        let mut dst = Chip8MemoryMap::new();
        assert!(matches!(
            dst.load_program(&[]),
            Err(MachineError::InitializationFailure(_))
        ));
    }

    #[test]
    fn test_program_load_size_limit() {
        let mut dst = Chip8MemoryMap::new();
        assert!(dst.load_program(&vec![0x12; CHIP8_MAX_PROGRAM_BYTES]).is_ok());
        assert!(matches!(
            dst.load_program(&vec![0x12; CHIP8_MAX_PROGRAM_BYTES + 1]),
            Err(MachineError::InitializationFailure(_))
        ));
    }
}
