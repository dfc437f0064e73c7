use crate::config::HostConfig;
use crate::display::Display;
use crate::error::HostError;
use crate::input::Input;
use crate::machine::{Machine, MachineError};
use crate::render::{render, RenderSurface};
use crate::trace::TraceLog;
use log::{debug, info};

/// why the run loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// the machine faulted mid-step
    Fault(MachineError),
    /// the operator asked to stop
    Interrupted,
    /// a bounded run used up its ticks
    TicksExhausted,
}

/// what one tick decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halt(Halt),
}

/// Everything the run loop owns: the machine, the surface it is rendered to
/// and the trace of its steps. A `Host` only exists once its machine was
/// built, so holding one means the harness is running.
pub struct Host<M: Machine> {
    machine: M,
    surface: RenderSurface,
    trace: TraceLog,
    config: HostConfig,
    ticks: u64,
}

impl<M: Machine> Host<M> {
    /// build the machine from `program` and `seed`, and everything around it
    pub fn start(program: &[u8], seed: u32, config: HostConfig) -> Result<Self, HostError> {
        config.validate()?;
        let machine = M::new(program, seed)?;
        info!(
            "machine up: {} byte program, seed {:#010x}, {}x{} buffer",
            program.len(),
            seed,
            machine.buffer_width(),
            machine.buffer_height()
        );
        debug!("{:?}", config);
        Self::with_machine(machine, config)
    }

    /// wrap a machine that is already built; `config` is checked the same
    /// way `start` checks it
    pub fn with_machine(machine: M, config: HostConfig) -> Result<Self, HostError> {
        config.validate()?;
        let surface = RenderSurface::for_machine(&machine, config.scale, config.palette)
            .ok_or_else(|| {
                HostError::Config(format!(
                    "{}x{} buffer at scale {} is too large to draw",
                    machine.buffer_width(),
                    machine.buffer_height(),
                    config.scale
                ))
            })?;
        let trace = TraceLog::new(config.trace_capacity);
        Ok(Host {
            machine,
            surface,
            trace,
            config,
            ticks: 0,
        })
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// ticks completed, i.e. frames rendered
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Step the machine `steps_per_frame` times, tracing each step, then
    /// repaint the whole surface once. A step fault halts before rendering.
    pub fn tick(&mut self) -> Result<StepOutcome, HostError> {
        for _ in 0..self.config.steps_per_frame {
            match self.machine.step() {
                Ok(text) => self.trace.append(text),
                Err(fault @ MachineError::StepFault { .. }) => {
                    debug!("machine halted: {}", fault);
                    return Ok(StepOutcome::Halt(Halt::Fault(fault)));
                }
                Err(e) => return Err(e.into()),
            }
        }
        render(&self.machine, &mut self.surface)?;
        self.ticks += 1;
        Ok(StepOutcome::Continue)
    }

    /// Drive the machine until it halts or the operator interrupts. Only
    /// returns early on a halt or an error; otherwise runs forever.
    pub fn run(&mut self, display: &mut impl Display, input: &mut impl Input) -> Result<Halt, HostError> {
        self.drive(display, input, None)
    }

    /// as `run`, but gives up after `ticks` ticks
    pub fn run_for(
        &mut self,
        display: &mut impl Display,
        input: &mut impl Input,
        ticks: u64,
    ) -> Result<Halt, HostError> {
        self.drive(display, input, Some(ticks))
    }

    fn drive(
        &mut self,
        display: &mut impl Display,
        input: &mut impl Input,
        limit: Option<u64>,
    ) -> Result<Halt, HostError> {
        let mut remaining = limit;
        loop {
            if remaining == Some(0) {
                return Ok(Halt::TicksExhausted);
            }
            if input.interrupted()? {
                info!("interrupted after {} ticks", self.ticks);
                return Ok(Halt::Interrupted);
            }
            match self.tick()? {
                StepOutcome::Continue => display.draw(&self.surface, &self.trace)?,
                StepOutcome::Halt(halt) => {
                    // show the trace up to the fault; the surface still holds the last good frame
                    display.draw(&self.surface, &self.trace)?;
                    return Ok(halt);
                }
            }
            if let Some(n) = remaining.as_mut() {
                *n -= 1;
            }
            spin_sleep::sleep(self.config.tick_interval);
        }
    }
}
