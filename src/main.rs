use std::process;
use std::time::Duration;

use chip8_host::display::TermDisplay;
use chip8_host::input::StdinInput;
use chip8_host::interpreter::ChipEight;
use chip8_host::program::get_example_program;
use chip8_host::{Halt, Host, HostConfig, HostError};
use clap::Parser;
use log::{error, info};

/// Run the built-in CHIP-8 demo in the terminal, tracing every step.
/// Esc, q or Ctrl-C stops it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RNG seed for the machine; drawn from entropy when absent
    #[arg(long)]
    seed: Option<u32>,

    /// terminal cells per display pixel, each way
    #[arg(long, default_value_t = 1)]
    scale: usize,

    /// machine steps per rendered frame
    #[arg(long, default_value_t = 1)]
    steps_per_frame: u32,

    /// milliseconds to sleep between ticks
    #[arg(long, default_value_t = 1)]
    tick_ms: u64,

    /// trace lines kept on screen and in memory
    #[arg(long, default_value_t = 1024)]
    trace_lines: usize,
}

impl Args {
    fn config(&self) -> HostConfig {
        HostConfig {
            scale: self.scale,
            tick_interval: Duration::from_millis(self.tick_ms),
            steps_per_frame: self.steps_per_frame,
            trace_capacity: self.trace_lines,
            ..Default::default()
        }
    }
}

fn run(args: Args) -> Result<(), HostError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut host = Host::<ChipEight>::start(get_example_program(), seed, args.config())?;

    let halt = {
        // dropped in reverse: leave the alternate screen, then raw mode
        let mut input = StdinInput::new()?;
        let mut display = TermDisplay::stdout()?;
        host.run(&mut display, &mut input)?
    };

    info!(
        "stopped after {} ticks, {} steps traced",
        host.ticks(),
        host.trace().appended()
    );
    match halt {
        Halt::Fault(fault) => Err(fault.into()),
        Halt::Interrupted | Halt::TicksExhausted => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        process::exit(1);
    }
}
