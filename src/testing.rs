//! Stand-in machines for exercising the host without running a real program.
use crate::machine::{Machine, MachineError};

fn check_bounds(x: usize, y: usize, w: usize, h: usize) -> Result<(), MachineError> {
    if x >= w || y >= h {
        return Err(MachineError::OutOfBounds { x, y });
    }
    Ok(())
}

/// a fixed picture that stepping never changes
pub struct Picture {
    pub w: usize,
    pub h: usize,
    pub lit: Vec<(usize, usize)>,
}

impl Picture {
    pub fn new(w: usize, h: usize, lit: Vec<(usize, usize)>) -> Self {
        Picture { w, h, lit }
    }
}

impl Machine for Picture {
    fn new(_program: &[u8], _seed: u32) -> Result<Self, MachineError> {
        Ok(Picture::new(4, 2, vec![]))
    }
    fn buffer_width(&self) -> usize {
        self.w
    }
    fn buffer_height(&self) -> usize {
        self.h
    }
    fn step(&mut self) -> Result<String, MachineError> {
        Ok(String::from("nop"))
    }
    fn get_buffer(&self, x: usize, y: usize) -> Result<bool, MachineError> {
        check_bounds(x, y, self.w, self.h)?;
        Ok(self.lit.contains(&(x, y)))
    }
}

/// 8x4 machine that lights one more pixel of the top row per step and
/// faults on step `fault_at`, if set. On step `bad_read_at` it fails with
/// an out-of-range read instead of a fault. An empty program is rejected.
pub struct Scripted {
    pub steps: usize,
    pub fault_at: Option<usize>,
    pub bad_read_at: Option<usize>,
    pub seed: u32,
}

impl Machine for Scripted {
    fn new(program: &[u8], seed: u32) -> Result<Self, MachineError> {
        if program.is_empty() {
            return Err(MachineError::InitializationFailure(
                "program is empty".to_string(),
            ));
        }
        Ok(Scripted {
            steps: 0,
            fault_at: None,
            bad_read_at: None,
            seed,
        })
    }
    fn buffer_width(&self) -> usize {
        8
    }
    fn buffer_height(&self) -> usize {
        4
    }
    fn step(&mut self) -> Result<String, MachineError> {
        if self.fault_at == Some(self.steps) {
            return Err(MachineError::StepFault {
                pc: self.steps as u16,
                reason: "scripted fault".to_string(),
            });
        }
        if self.bad_read_at == Some(self.steps) {
            return Err(MachineError::OutOfBounds { x: 8, y: 4 });
        }
        self.steps += 1;
        Ok(format!("step {}", self.steps))
    }
    fn get_buffer(&self, x: usize, y: usize) -> Result<bool, MachineError> {
        check_bounds(x, y, 8, 4)?;
        Ok(y == 0 && x < self.steps)
    }
}
