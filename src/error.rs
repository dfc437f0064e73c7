use crate::machine::MachineError;
use std::io;
use thiserror::Error;

/// Everything that can stop the host before or during the run loop
#[derive(Debug, Error)]
pub enum HostError {
    #[error("machine error: {0}")]
    Machine(#[from] MachineError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("bad configuration: {0}")]
    Config(String),
}
