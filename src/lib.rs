//!
//! ## Design
//!
//! * the host knows nothing about CHIP-8; it drives anything implementing
//!   `Machine`: build once from (program, seed), step, ask about pixels
//! * one tick = `steps_per_frame` steps (1 by default), then one full repaint
//!   of the render surface, then present it; sleep a fixed delay, repeat
//! * real time and instruction count are coupled; not authentic timing
//! * no partial repaints: every frame clears the surface first
//! * step faults halt the loop explicitly instead of unwinding out of it
//! * abstract display so can plug alternatives; TUI in-console for now
//! * input only exists to let the operator stop the loop
//!
//! Model
//!
//! main
//!  |-- seed from entropy, program from `program`
//!  |-- Host::start(program, seed, config)        -- Idle -> Running, or error out
//!  |    |-- machine (interpreter::ChipEight, or anything else `Machine`)
//!  |    |-- render surface (width*scale x height*scale)
//!  |    `-- trace log (bounded, oldest out first)
//!  `-- host.run(display, input)
//!       |-- input.interrupted()?                  -- Halt::Interrupted
//!       |-- machine.step() x N -> trace.append()  -- fault: Halt::Fault
//!       |-- render(machine, surface)
//!       |-- display.draw(surface, trace)
//!       `-- sleep(tick_interval)

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod machine;
pub mod memory;
pub mod program;
pub mod render;
pub mod scheduler;
pub mod trace;

#[cfg(test)]
mod testing;

pub use config::HostConfig;
pub use error::HostError;
pub use machine::{Machine, MachineError};
pub use scheduler::{Halt, Host, StepOutcome};
