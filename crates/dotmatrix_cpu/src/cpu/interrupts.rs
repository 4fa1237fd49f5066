use super::{Bus, Cpu};

/// T-cycle cost of an interrupt dispatch: the stack-push-and-jump body
/// of a CALL, net of its two immediate-fetch machine cycles.
const DISPATCH_CYCLES: u32 = 20;

impl Cpu {
    /// Consult the bus-owned enable ($FFFF) and request ($FF0F)
    /// registers and service the highest-priority pending interrupt.
    ///
    /// Priority is the lowest-numbered set bit of `IE & IF`: V-Blank
    /// ($40), then LCD-status ($48), Timer ($50), Serial ($58), Keypad
    /// ($60). Servicing clears that one request bit and IME, pushes PC,
    /// and jumps to the vector.
    ///
    /// Returns `Some(cycles)` when an interrupt was dispatched, `None`
    /// otherwise. A pending enabled interrupt always ends HALT, even
    /// when IME is clear and the request must wait to be serviced.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let ie = bus.read8(0xFFFF);
        let iflags = bus.read8(0xFF0F);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return None;
        }

        self.halted = false;

        if !self.ime {
            return None;
        }

        // The 0x1F mask above guarantees an index in 0..=4.
        let index = pending.trailing_zeros() as u8;
        let vector = 0x0040 + (index as u16) * 8;

        bus.write8(0xFF0F, iflags & !(1 << index));
        self.ime = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector;

        log::debug!(
            "interrupt dispatch: line={index} vector=0x{vector:04X} from pc=0x{pc:04X}",
            index = index,
            vector = vector,
            pc = pc,
        );

        Some(DISPATCH_CYCLES)
    }
}
