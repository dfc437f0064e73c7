//! # interpreter
//!
//! The bundled CHIP-8 machine. It is what the host drives when nothing else is
//! plugged in; the host itself only ever talks to it through `Machine`.
//!
//! Machine state, as the interpreter sees it:
//!  V0-VF  8bit general registers; VF doubles as carry/borrow/collision flag
//!  I      16bit address register
//!  PC     program counter                      -- 0x200
//!  SP     via the stack's length; 16 deep
//!  DT, ST delay and sound registers            -- loaded and read, never decremented
//!  RNG    glibc LCG state                      -- the seed handed to `new`
//!
//! Keypad instructions fault: there is no keypad.

use crate::machine::{Machine, MachineError};
use crate::memory::{self, MemoryMap};
use std::fmt;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

const NUM_V_REGISTERS: usize = 16;
const STACK_DEPTH: usize = 16;

/// decoded CHIP-8 instruction, named after Cowgod's mnemonics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Sys(u16),
    Cls,
    Ret,
    Jp(u16),
    Call(u16),
    SeVxByte(u8, u8),
    SneVxByte(u8, u8),
    SeVxVy(u8, u8),
    LdVxByte(u8, u8),
    AddVxByte(u8, u8),
    LdVxVy(u8, u8),
    OrVxVy(u8, u8),
    AndVxVy(u8, u8),
    XorVxVy(u8, u8),
    AddVxVy(u8, u8),
    SubVxVy(u8, u8),
    ShrVx(u8),
    SubnVxVy(u8, u8),
    ShlVx(u8),
    SneVxVy(u8, u8),
    LdIAddr(u16),
    JpV0Addr(u16),
    RndVxByte(u8, u8),
    DrwVxVyNibble(u8, u8, u8),
    SkpVx(u8),
    SknpVx(u8),
    LdVxDt(u8),
    LdVxK(u8),
    LdDtVx(u8),
    LdStVx(u8),
    AddIVx(u8),
    LdFVx(u8),
    LdBVx(u8),
    LdIVx(u8),
    LdVxI(u8),
}

impl Instruction {
    /// decode one opcode; `None` if it isn't a CHIP-8 instruction
    pub fn decode(opcode: u16) -> Option<Instruction> {
        let nibbles = (
            ((opcode >> 12) & 0xF) as u8,
            ((opcode >> 8) & 0xF) as u8,
            ((opcode >> 4) & 0xF) as u8,
            (opcode & 0xF) as u8,
        );
        let nnn = opcode & 0x0FFF;
        let kk = (opcode & 0x00FF) as u8;

        let instruction = match nibbles {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x0, _, _, _) => Instruction::Sys(nnn),
            (0x1, _, _, _) => Instruction::Jp(nnn),
            (0x2, _, _, _) => Instruction::Call(nnn),
            (0x3, x, _, _) => Instruction::SeVxByte(x, kk),
            (0x4, x, _, _) => Instruction::SneVxByte(x, kk),
            (0x5, x, y, 0x0) => Instruction::SeVxVy(x, y),
            (0x6, x, _, _) => Instruction::LdVxByte(x, kk),
            (0x7, x, _, _) => Instruction::AddVxByte(x, kk),
            (0x8, x, y, 0x0) => Instruction::LdVxVy(x, y),
            (0x8, x, y, 0x1) => Instruction::OrVxVy(x, y),
            (0x8, x, y, 0x2) => Instruction::AndVxVy(x, y),
            (0x8, x, y, 0x3) => Instruction::XorVxVy(x, y),
            (0x8, x, y, 0x4) => Instruction::AddVxVy(x, y),
            (0x8, x, y, 0x5) => Instruction::SubVxVy(x, y),
            (0x8, x, _, 0x6) => Instruction::ShrVx(x),
            (0x8, x, y, 0x7) => Instruction::SubnVxVy(x, y),
            (0x8, x, _, 0xE) => Instruction::ShlVx(x),
            (0x9, x, y, 0x0) => Instruction::SneVxVy(x, y),
            (0xA, _, _, _) => Instruction::LdIAddr(nnn),
            (0xB, _, _, _) => Instruction::JpV0Addr(nnn),
            (0xC, x, _, _) => Instruction::RndVxByte(x, kk),
            (0xD, x, y, n) => Instruction::DrwVxVyNibble(x, y, n),
            (0xE, x, 0x9, 0xE) => Instruction::SkpVx(x),
            (0xE, x, 0xA, 0x1) => Instruction::SknpVx(x),
            (0xF, x, 0x0, 0x7) => Instruction::LdVxDt(x),
            (0xF, x, 0x0, 0xA) => Instruction::LdVxK(x),
            (0xF, x, 0x1, 0x5) => Instruction::LdDtVx(x),
            (0xF, x, 0x1, 0x8) => Instruction::LdStVx(x),
            (0xF, x, 0x1, 0xE) => Instruction::AddIVx(x),
            (0xF, x, 0x2, 0x9) => Instruction::LdFVx(x),
            (0xF, x, 0x3, 0x3) => Instruction::LdBVx(x),
            (0xF, x, 0x5, 0x5) => Instruction::LdIVx(x),
            (0xF, x, 0x6, 0x5) => Instruction::LdVxI(x),
            _ => return None,
        };
        Some(instruction)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Sys(addr) => write!(f, "SYS {:#05x}", addr),
            Instruction::Cls => write!(f, "CLS"),
            Instruction::Ret => write!(f, "RET"),
            Instruction::Jp(addr) => write!(f, "JP {:#05x}", addr),
            Instruction::Call(addr) => write!(f, "CALL {:#05x}", addr),
            Instruction::SeVxByte(x, kk) => write!(f, "SE V{:X}, {:#04x}", x, kk),
            Instruction::SneVxByte(x, kk) => write!(f, "SNE V{:X}, {:#04x}", x, kk),
            Instruction::SeVxVy(x, y) => write!(f, "SE V{:X}, V{:X}", x, y),
            Instruction::LdVxByte(x, kk) => write!(f, "LD V{:X}, {:#04x}", x, kk),
            Instruction::AddVxByte(x, kk) => write!(f, "ADD V{:X}, {:#04x}", x, kk),
            Instruction::LdVxVy(x, y) => write!(f, "LD V{:X}, V{:X}", x, y),
            Instruction::OrVxVy(x, y) => write!(f, "OR V{:X}, V{:X}", x, y),
            Instruction::AndVxVy(x, y) => write!(f, "AND V{:X}, V{:X}", x, y),
            Instruction::XorVxVy(x, y) => write!(f, "XOR V{:X}, V{:X}", x, y),
            Instruction::AddVxVy(x, y) => write!(f, "ADD V{:X}, V{:X}", x, y),
            Instruction::SubVxVy(x, y) => write!(f, "SUB V{:X}, V{:X}", x, y),
            Instruction::ShrVx(x) => write!(f, "SHR V{:X}", x),
            Instruction::SubnVxVy(x, y) => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Instruction::ShlVx(x) => write!(f, "SHL V{:X}", x),
            Instruction::SneVxVy(x, y) => write!(f, "SNE V{:X}, V{:X}", x, y),
            Instruction::LdIAddr(addr) => write!(f, "LD I, {:#05x}", addr),
            Instruction::JpV0Addr(addr) => write!(f, "JP V0, {:#05x}", addr),
            Instruction::RndVxByte(x, kk) => write!(f, "RND V{:X}, {:#04x}", x, kk),
            Instruction::DrwVxVyNibble(x, y, n) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Instruction::SkpVx(x) => write!(f, "SKP V{:X}", x),
            Instruction::SknpVx(x) => write!(f, "SKNP V{:X}", x),
            Instruction::LdVxDt(x) => write!(f, "LD V{:X}, DT", x),
            Instruction::LdVxK(x) => write!(f, "LD V{:X}, K", x),
            Instruction::LdDtVx(x) => write!(f, "LD DT, V{:X}", x),
            Instruction::LdStVx(x) => write!(f, "LD ST, V{:X}", x),
            Instruction::AddIVx(x) => write!(f, "ADD I, V{:X}", x),
            Instruction::LdFVx(x) => write!(f, "LD F, V{:X}", x),
            Instruction::LdBVx(x) => write!(f, "LD B, V{:X}", x),
            Instruction::LdIVx(x) => write!(f, "LD [I], V{:X}", x),
            Instruction::LdVxI(x) => write!(f, "LD V{:X}, [I]", x),
        }
    }
}

pub struct ChipEight {
    memory: memory::Chip8MemoryMap,
    v: [u8; NUM_V_REGISTERS],
    i: u16,
    pc: u16,
    dt: u8,
    st: u8,
    stack: Vec<u16>,
    // indexed [x][y]
    display_buffer: Box<[[bool; DISPLAY_HEIGHT]; DISPLAY_WIDTH]>,
    rng_state: u32,
}

impl ChipEight {
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// (delay, sound) register contents
    pub fn timers(&self) -> (u8, u8) {
        (self.dt, self.st)
    }

    fn fault(&self, pc: u16, reason: impl Into<String>) -> MachineError {
        MachineError::StepFault {
            pc,
            reason: reason.into(),
        }
    }

    fn get_reg(&self, reg: u8) -> u8 {
        self.v[usize::from(reg & 0xF)]
    }

    fn set_reg(&mut self, reg: u8, val: u8) {
        self.v[usize::from(reg & 0xF)] = val;
    }

    fn set_vf(&mut self, val: bool) {
        self.set_reg(0xF, val as u8)
    }

    fn skip_if(&mut self, cond: bool) {
        if cond {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    fn execute(&mut self, at: u16, instruction: Instruction) -> Result<(), MachineError> {
        match instruction {
            Instruction::Cls => {
                for column in self.display_buffer.iter_mut() {
                    column.fill(false);
                }
            }
            Instruction::Ret => {
                self.pc = self
                    .stack
                    .pop()
                    .ok_or_else(|| self.fault(at, "RET with an empty stack"))?;
            }
            Instruction::Sys(_) => return Err(self.fault(at, "SYS calls into the host are not supported")),
            Instruction::Jp(addr) => self.pc = addr,
            Instruction::Call(addr) => {
                if self.stack.len() == STACK_DEPTH {
                    return Err(self.fault(at, "CALL overflowed the stack"));
                }
                self.stack.push(self.pc);
                self.pc = addr;
            }
            Instruction::SeVxByte(x, kk) => self.skip_if(self.get_reg(x) == kk),
            Instruction::SneVxByte(x, kk) => self.skip_if(self.get_reg(x) != kk),
            Instruction::SeVxVy(x, y) => self.skip_if(self.get_reg(x) == self.get_reg(y)),
            Instruction::LdVxByte(x, kk) => self.set_reg(x, kk),
            Instruction::AddVxByte(x, kk) => self.set_reg(x, self.get_reg(x).wrapping_add(kk)),
            Instruction::LdVxVy(x, y) => self.set_reg(x, self.get_reg(y)),
            Instruction::OrVxVy(x, y) => self.set_reg(x, self.get_reg(x) | self.get_reg(y)),
            Instruction::AndVxVy(x, y) => self.set_reg(x, self.get_reg(x) & self.get_reg(y)),
            Instruction::XorVxVy(x, y) => self.set_reg(x, self.get_reg(x) ^ self.get_reg(y)),
            Instruction::AddVxVy(x, y) => {
                let (val, carry) = self.get_reg(x).overflowing_add(self.get_reg(y));
                self.set_reg(x, val);
                self.set_vf(carry);
            }
            Instruction::SubVxVy(x, y) => {
                let (val, borrow) = self.get_reg(x).overflowing_sub(self.get_reg(y));
                self.set_reg(x, val);
                self.set_vf(!borrow);
            }
            Instruction::ShrVx(x) => {
                let old = self.get_reg(x);
                self.set_reg(x, old >> 1);
                self.set_vf(old & 0x01 != 0);
            }
            Instruction::SubnVxVy(x, y) => {
                let (val, borrow) = self.get_reg(y).overflowing_sub(self.get_reg(x));
                self.set_reg(x, val);
                self.set_vf(!borrow);
            }
            Instruction::ShlVx(x) => {
                let old = self.get_reg(x);
                self.set_reg(x, old << 1);
                self.set_vf(old & 0x80 != 0);
            }
            Instruction::SneVxVy(x, y) => self.skip_if(self.get_reg(x) != self.get_reg(y)),
            Instruction::LdIAddr(addr) => self.i = addr,
            Instruction::JpV0Addr(addr) => self.pc = u16::from(self.get_reg(0)) + addr,
            Instruction::RndVxByte(x, kk) => {
                let byte = self.next_random();
                self.set_reg(x, byte & kk);
            }
            Instruction::DrwVxVyNibble(x, y, n) => self.draw_sprite(at, x, y, n)?,
            Instruction::SkpVx(_) | Instruction::SknpVx(_) | Instruction::LdVxK(_) => {
                return Err(self.fault(at, format!("{} needs a keypad, and there isn't one", instruction)))
            }
            Instruction::LdVxDt(x) => self.set_reg(x, self.dt),
            Instruction::LdDtVx(x) => self.dt = self.get_reg(x),
            Instruction::LdStVx(x) => self.st = self.get_reg(x),
            Instruction::AddIVx(x) => self.i = self.i.wrapping_add(u16::from(self.get_reg(x))),
            Instruction::LdFVx(x) => {
                self.i = u16::from(self.get_reg(x) & 0xF) * memory::CHIP8_FONT_GLYPH_BYTES
            }
            Instruction::LdBVx(x) => {
                let value = self.get_reg(x);
                let digits = [value / 100, (value % 100) / 10, value % 10];
                self.memory
                    .write(&digits, self.i)
                    .ok_or_else(|| self.fault(at, "LD B wrote past the end of memory"))?;
            }
            Instruction::LdIVx(x) => {
                let regs = self.v;
                self.memory
                    .write(&regs[..=usize::from(x)], self.i)
                    .ok_or_else(|| self.fault(at, "LD [I] wrote past the end of memory"))?;
            }
            Instruction::LdVxI(x) => {
                let len = usize::from(x) + 1;
                let bytes = self
                    .memory
                    .get_ro_slice(self.i, len)
                    .ok_or_else(|| self.fault(at, "LD Vx, [I] read past the end of memory"))?;
                self.v[..len].copy_from_slice(bytes);
            }
        }
        Ok(())
    }

    // https://en.wikipedia.org/wiki/Linear_congruential_generator
    // glibc values: m = 2^31, a = 1103515245, c = 12345.
    // the low bits alternate odd/even, so take the middle 8.
    fn next_random(&mut self) -> u8 {
        self.rng_state = self.rng_state.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
        (self.rng_state >> 8) as u8
    }

    fn draw_sprite(&mut self, at: u16, x: u8, y: u8, n: u8) -> Result<(), MachineError> {
        let sprite = self
            .memory
            .get_ro_slice(self.i, usize::from(n))
            .ok_or_else(|| self.fault(at, "DRW read a sprite past the end of memory"))?
            .to_vec();
        let base_x = usize::from(self.get_reg(x));
        let base_y = usize::from(self.get_reg(y));
        let mut collision = false;
        for (dy, row) in sprite.iter().enumerate() {
            for dx in 0..8 {
                if row & (0x80 >> dx) == 0 {
                    continue;
                }
                let px = (base_x + dx) % DISPLAY_WIDTH;
                let py = (base_y + dy) % DISPLAY_HEIGHT;
                let cell = &mut self.display_buffer[px][py];
                // a pixel switched off is a collision
                collision |= *cell;
                *cell = !*cell;
            }
        }
        self.set_vf(collision);
        Ok(())
    }
}

impl Machine for ChipEight {
    fn new(program: &[u8], seed: u32) -> Result<Self, MachineError> {
        let mut memory = memory::Chip8MemoryMap::new();
        memory.load_program(program)?;
        let pc = memory.program_addr;
        Ok(ChipEight {
            memory,
            v: [0; NUM_V_REGISTERS],
            i: 0,
            pc,
            dt: 0,
            st: 0,
            stack: Vec::with_capacity(STACK_DEPTH),
            display_buffer: Box::new([[false; DISPLAY_HEIGHT]; DISPLAY_WIDTH]),
            rng_state: seed,
        })
    }

    fn buffer_width(&self) -> usize {
        DISPLAY_WIDTH
    }

    fn buffer_height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    fn step(&mut self) -> Result<String, MachineError> {
        let at = self.pc;
        let opcode = self
            .memory
            .get_word(at)
            .ok_or_else(|| self.fault(at, "program counter ran off the end of memory"))?;
        let instruction = Instruction::decode(opcode)
            .ok_or_else(|| self.fault(at, format!("unknown opcode {:04x}", opcode)))?;
        self.pc = self.pc.wrapping_add(2);
        self.execute(at, instruction)?;
        Ok(format!("{:#06x}  {:04x}  {}", at, opcode, instruction))
    }

    fn get_buffer(&self, x: usize, y: usize) -> Result<bool, MachineError> {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return Err(MachineError::OutOfBounds { x, y });
        }
        Ok(self.display_buffer[x][y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::get_example_program;

    fn lit_pixels(c: &ChipEight) -> Vec<(usize, usize)> {
        let mut lit = Vec::new();
        for y in 0..c.buffer_height() {
            for x in 0..c.buffer_width() {
                if c.get_buffer(x, y).unwrap() {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_example_program_first_step() -> Result<(), MachineError> {
        let mut c = ChipEight::new(get_example_program(), 42)?;
        let trace = c.step()?;
        assert!(!trace.is_empty());
        assert_eq!(trace, "0x0200  00e0  CLS");
        assert_eq!(c.get_buffer(0, 0), Ok(false));
        Ok(())
    }

    #[test]
    fn test_buffer_size_is_64_by_32() -> Result<(), MachineError> {
        let mut c = ChipEight::new(get_example_program(), 42)?;
        assert_eq!((c.buffer_width(), c.buffer_height()), (64, 32));
        for _ in 0..50 {
            c.step()?;
        }
        assert_eq!((c.buffer_width(), c.buffer_height()), (64, 32));
        Ok(())
    }

    #[test]
    fn test_rejects_empty_program() {
        assert!(matches!(
            ChipEight::new(&[], 42),
            Err(MachineError::InitializationFailure(_))
        ));
    }

    #[test]
    fn test_any_seed_is_accepted() {
        for seed in [0, 1, 42, u32::MAX / 2, u32::MAX] {
            assert!(ChipEight::new(get_example_program(), seed).is_ok());
        }
    }

    #[test]
    fn test_out_of_bounds_query_is_rejected() -> Result<(), MachineError> {
        let c = ChipEight::new(get_example_program(), 42)?;
        assert_eq!(c.get_buffer(64, 0), Err(MachineError::OutOfBounds { x: 64, y: 0 }));
        assert_eq!(c.get_buffer(0, 32), Err(MachineError::OutOfBounds { x: 0, y: 32 }));
        assert_eq!(c.get_buffer(63, 31), Ok(false));
        Ok(())
    }

    #[test]
    fn test_pixel_query_has_no_side_effects() -> Result<(), MachineError> {
        let mut a = ChipEight::new(get_example_program(), 7)?;
        let mut b = ChipEight::new(get_example_program(), 7)?;
        for _ in 0..30 {
            a.step()?;
            b.step()?;
            // hammer `a` with queries; `b` is left alone
            let _ = lit_pixels(&a);
            let _ = lit_pixels(&a);
        }
        assert_eq!(a.step()?, b.step()?);
        assert_eq!(lit_pixels(&a), lit_pixels(&b));
        Ok(())
    }

    #[test]
    fn test_same_seed_same_run() -> Result<(), MachineError> {
        let mut a = ChipEight::new(get_example_program(), 1234)?;
        let mut b = ChipEight::new(get_example_program(), 1234)?;
        for _ in 0..200 {
            assert_eq!(a.step()?, b.step()?);
            assert_eq!(lit_pixels(&a), lit_pixels(&b));
        }
        Ok(())
    }

    #[test]
    fn test_different_seed_different_picture() -> Result<(), MachineError> {
        let mut a = ChipEight::new(get_example_program(), 1)?;
        let mut b = ChipEight::new(get_example_program(), 2)?;
        for _ in 0..60 {
            a.step()?;
            b.step()?;
        }
        assert_ne!(lit_pixels(&a), lit_pixels(&b));
        Ok(())
    }

    #[test]
    fn test_rnd_uses_glibc_lcg() -> Result<(), MachineError> {
        // RND V0, 0xff ; RND V1, 0xff
        let mut c = ChipEight::new(&[0xC0, 0xFF, 0xC1, 0xFF], 42)?;
        c.step()?;
        c.step()?;
        assert_eq!(c.v[0], 0x0e);
        assert_eq!(c.v[1], 0x6b);
        Ok(())
    }

    #[test]
    fn test_draw_and_collision() -> Result<(), MachineError> {
        // LD V0, 62 ; LD V1, 31 ; LD I, 0x000 ; DRW V0, V1, 1 ; DRW V0, V1, 1
        let prog = [0x60, 62, 0x61, 31, 0xA0, 0x00, 0xD0, 0x11, 0xD0, 0x11];
        let mut c = ChipEight::new(&prog, 0)?;
        for _ in 0..4 {
            c.step()?;
        }
        // font row 0 of "0" is 0xF0: four pixels, wrapping past the right edge
        assert_eq!(lit_pixels(&c), vec![(0, 31), (1, 31), (62, 31), (63, 31)]);
        assert_eq!(c.v[0xF], 0);
        c.step()?;
        assert!(lit_pixels(&c).is_empty());
        assert_eq!(c.v[0xF], 1);
        Ok(())
    }

    #[test]
    fn test_call_and_ret() -> Result<(), MachineError> {
        // CALL 0x206 ; JP 0x202 ; -- ; RET
        let prog = [0x22, 0x06, 0x12, 0x02, 0x00, 0x00, 0x00, 0xEE];
        let mut c = ChipEight::new(&prog, 0)?;
        assert_eq!(c.step()?, "0x0200  2206  CALL 0x206");
        assert_eq!(c.pc(), 0x206);
        assert_eq!(c.step()?, "0x0206  00ee  RET");
        assert_eq!(c.pc(), 0x202);
        Ok(())
    }

    #[test]
    fn test_ret_on_empty_stack_faults() -> Result<(), MachineError> {
        let mut c = ChipEight::new(&[0x00, 0xEE], 0)?;
        assert!(matches!(c.step(), Err(MachineError::StepFault { pc: 0x200, .. })));
        Ok(())
    }

    #[test]
    fn test_keypad_instruction_faults() -> Result<(), MachineError> {
        let mut c = ChipEight::new(&[0xE0, 0x9E], 0)?;
        assert!(matches!(c.step(), Err(MachineError::StepFault { .. })));
        Ok(())
    }

    #[test]
    fn test_unknown_opcode_faults() -> Result<(), MachineError> {
        let mut c = ChipEight::new(&[0x50, 0x01], 0)?;
        let err = c.step().unwrap_err();
        assert_eq!(err.to_string(), "fault at 0x0200: unknown opcode 5001");
        Ok(())
    }

    #[test]
    fn test_bcd_and_register_dump() -> Result<(), MachineError> {
        // LD V0, 254 ; LD I, 0x300 ; LD B, V0 ; LD V2, [I]
        let prog = [0x60, 254, 0xA3, 0x00, 0xF0, 0x33, 0xF2, 0x65];
        let mut c = ChipEight::new(&prog, 0)?;
        for _ in 0..4 {
            c.step()?;
        }
        assert_eq!(&c.v[..3], &[2, 5, 4]);
        Ok(())
    }

    #[test]
    fn test_arithmetic_flags() -> Result<(), MachineError> {
        // LD V0, 200 ; LD V1, 100 ; ADD V0, V1 ; SUB V0, V1
        let prog = [0x60, 200, 0x61, 100, 0x80, 0x14, 0x80, 0x15];
        let mut c = ChipEight::new(&prog, 0)?;
        for _ in 0..3 {
            c.step()?;
        }
        assert_eq!((c.v[0], c.v[0xF]), (44, 1));
        c.step()?;
        // 44 - 100 borrows
        assert_eq!((c.v[0], c.v[0xF]), (200, 0));
        Ok(())
    }

    #[test]
    fn test_decode_display() {
        assert_eq!(Instruction::decode(0xD125).unwrap().to_string(), "DRW V1, V2, 5");
        assert_eq!(Instruction::decode(0xC03F).unwrap().to_string(), "RND V0, 0x3f");
        assert_eq!(Instruction::decode(0xF065).unwrap().to_string(), "LD V0, [I]");
        assert_eq!(Instruction::decode(0x8AB9), None);
    }
}
