use super::{Bus, Cpu};

/// T-cycle cost of one halted loop iteration: the CPU burns time at a
/// NOP-like rate without fetching.
const HALT_IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Perform one fetch-decode-execute step and return the T-cycles
    /// consumed.
    ///
    /// In order: a latched Stop makes no progress and costs nothing;
    /// then the interrupt controller is consulted (an interrupt entry
    /// counts as this step's work); then HALT is serviced at its fixed
    /// idle cost without fetching; otherwise one instruction is fetched
    /// and executed through the dispatch tables. The step's full cost
    /// is handed to `bus.tick` before returning, so bus-side
    /// peripherals advance exactly once per step.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.stopped {
            // Cleared only by reset or an explicit resume from the
            // driver; report no progress until then.
            return 0;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            bus.tick(cycles);
            return cycles;
        }

        if self.halted {
            bus.tick(HALT_IDLE_CYCLES);
            return HALT_IDLE_CYCLES;
        }

        let opcode = self.fetch8(bus);
        let cycles = self.exec_opcode(bus, opcode);
        bus.tick(cycles);
        cycles
    }
}
