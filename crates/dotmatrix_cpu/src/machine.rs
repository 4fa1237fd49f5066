//! Execution driver: owns the CPU and the bus capability and runs
//! frame-budgeted slices for an external scheduler.

use crate::cpu::{Bus, Cpu};

/// A CPU wired to a bus.
///
/// The external frame scheduler is expected to call [`Machine::run_for`]
/// once per simulated frame with a budget of `CLOCK_HZ / frame_rate`
/// T-cycles. Pacing against wall-clock time is the scheduler's job, not
/// the machine's.
pub struct Machine<B: Bus> {
    pub cpu: Cpu,
    pub bus: B,
    breakpoint: Option<u16>,
}

impl<B: Bus> Machine<B> {
    pub fn new(bus: B) -> Self {
        Self {
            cpu: Cpu::new(),
            bus,
            breakpoint: None,
        }
    }

    /// Reset the CPU to its post-boot state. The bus is a capability
    /// owned by its own subsystem and is left untouched.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single CPU step against the bus.
    pub fn step(&mut self) -> u32 {
        self.cpu.step(&mut self.bus)
    }

    /// Run until at least `cycle_budget` T-cycles have been consumed or
    /// the CPU stops, and return the cycles actually consumed.
    ///
    /// The Stop latch is checked once per step; there is no preemption
    /// mid-instruction, so the consumed total may overshoot the budget
    /// by at most one instruction.
    pub fn run_for(&mut self, cycle_budget: u32) -> u32 {
        let mut consumed = 0u32;
        while consumed < cycle_budget && !self.cpu.is_stopped() {
            let taken = self.cpu.step(&mut self.bus);
            if taken == 0 {
                break;
            }
            consumed += taken;

            if let Some(bp) = self.breakpoint {
                if self.cpu.regs.pc == bp {
                    self.pause();
                    break;
                }
            }
        }
        consumed
    }

    /// Latch Stop so the run loop exits at the next step boundary.
    pub fn pause(&mut self) {
        self.cpu.request_stop();
    }

    /// Clear Stop: the explicit "run" request from the driver's caller.
    pub fn resume(&mut self) {
        self.cpu.clear_stop();
    }

    /// Pause execution when PC reaches the given address (checked after
    /// every step). `None` disables the breakpoint.
    pub fn set_breakpoint(&mut self, addr: Option<u16>) {
        self.breakpoint = addr;
    }
}
