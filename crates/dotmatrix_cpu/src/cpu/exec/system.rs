use crate::cpu::{Bus, Cpu, OpcodeTrap};

impl Cpu {
    /// STOP. Officially a 2-byte instruction; the padding byte is
    /// fetched and discarded so PC matches hardware. The Stop latch is
    /// the cooperative pause signal the run loop polls; only a reset or
    /// an explicit resume clears it.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
    }

    /// HALT. The CPU stalls fetching until an enabled interrupt becomes
    /// pending, entering the halt state regardless of IME; whether the
    /// wake-up is then serviced depends on IME at that point.
    pub(super) fn exec_halt(&mut self) {
        self.halted = true;
    }

    /// DI: interrupt servicing off immediately.
    pub(super) fn exec_di(&mut self) {
        self.ime = false;
    }

    /// EI: interrupt servicing on immediately.
    pub(super) fn exec_ei(&mut self) {
        self.ime = true;
    }

    /// Opcode-hole trap: record and report the byte, latch Stop, and
    /// touch nothing else. The session cannot continue (there is no
    /// meaningful way to resume past an undefined instruction), but the
    /// host stays healthy.
    pub(super) fn trap_illegal(&mut self, opcode: u8) {
        let addr = self.regs.pc.wrapping_sub(1);
        log::error!(
            "illegal opcode 0x{opcode:02X} at 0x{addr:04X}, stopping \
             (AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X})",
            opcode = opcode,
            addr = addr,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            sp = self.regs.sp,
        );
        self.trap = Some(OpcodeTrap { opcode, addr });
        self.stopped = true;
    }
}
