use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            trap: None,
        };
        cpu.apply_boot_state();
        cpu
    }

    /// Reset the CPU to its post-boot state.
    ///
    /// The register file is the only thing the core owns; memory and
    /// peripherals are reset by their own owners.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.halted = false;
        self.stopped = false;
        self.trap = None;
        self.apply_boot_state();
        log::debug!("cpu reset");
    }

    /// Register values at the moment the boot ROM hands control to the
    /// cartridge entry point, as documented from hardware tests.
    fn apply_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // Interrupts come up master-enabled; the program disables them
        // with DI if it wants them off.
        self.ime = true;
    }
}
