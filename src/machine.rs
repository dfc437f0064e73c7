use thiserror::Error;

/// Errors a machine reports back to the host
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// the program or seed was rejected, so no machine exists
    #[error("initialisation failed: {0}")]
    InitializationFailure(String),

    /// unrecoverable fault while executing one step
    #[error("fault at {pc:#06x}: {reason}")]
    StepFault { pc: u16, reason: String },

    /// pixel query outside [0, width) x [0, height)
    #[error("pixel ({x}, {y}) is outside the display buffer")]
    OutOfBounds { x: usize, y: usize },
}

/// Machine is the capability the host drives. The host never looks inside;
/// it builds one from a program and a seed, steps it, and asks it about
/// individual pixels. Width and height must not change once built.
pub trait Machine {
    /// build a machine running `program`, with its RNG seeded from `seed`
    fn new(program: &[u8], seed: u32) -> Result<Self, MachineError>
    where
        Self: Sized;

    /// columns in the display buffer
    fn buffer_width(&self) -> usize;

    /// rows in the display buffer
    fn buffer_height(&self) -> usize;

    /// advance by one instruction, returning a human-readable trace of it
    fn step(&mut self) -> Result<String, MachineError>;

    /// state of one pixel; coordinates past the edge are rejected, never
    /// wrapped or clamped
    fn get_buffer(&self, x: usize, y: usize) -> Result<bool, MachineError>;
}
