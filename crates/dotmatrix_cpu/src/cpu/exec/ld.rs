use crate::cpu::opcodes::{Operand8, PtrReg, Reg16};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// LD r,r' / LD r,(HL) / LD (HL),r / LD r,d8 / LD (HL),d8.
    ///
    /// The source is read in full (including any immediate fetch)
    /// before the destination is written, so aliasing forms like
    /// `LD B,B` observe the pre-instruction value.
    pub(super) fn exec_ld8<B: Bus>(&mut self, bus: &mut B, dst: Operand8, src: Operand8) {
        let value = self.read_operand8(bus, src);
        self.write_operand8(bus, dst, value);
    }

    /// LD rr,d16.
    pub(super) fn exec_ld16_imm<B: Bus>(&mut self, bus: &mut B, reg: Reg16) {
        let value = self.fetch16(bus);
        self.write_reg16(reg, value);
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A.
    pub(super) fn exec_ld_ptr_a<B: Bus>(&mut self, bus: &mut B, ptr: PtrReg) {
        let addr = self.ptr_addr(ptr);
        bus.write8(addr, self.regs.a);
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-).
    pub(super) fn exec_ld_a_ptr<B: Bus>(&mut self, bus: &mut B, ptr: PtrReg) {
        let addr = self.ptr_addr(ptr);
        self.regs.a = bus.read8(addr);
    }

    /// LD (a16),A.
    pub(super) fn exec_ld_abs_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
    }

    /// LD A,(a16).
    pub(super) fn exec_ld_a_abs<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
    }

    /// LDH (a8),A: store A into the high page at $FF00 + a8.
    pub(super) fn exec_ldh_imm_a<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as u16;
        bus.write8(0xFF00u16.wrapping_add(offset), self.regs.a);
    }

    /// LDH A,(a8).
    pub(super) fn exec_ldh_a_imm<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as u16;
        self.regs.a = bus.read8(0xFF00u16.wrapping_add(offset));
    }

    /// LD ($FF00+C),A.
    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        bus.write8(addr, self.regs.a);
    }

    /// LD A,($FF00+C).
    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        self.regs.a = bus.read8(addr);
    }

    /// LD (a16),SP: store SP little-endian at the given address.
    pub(super) fn exec_ld_abs_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.sp);
    }

    /// LD SP,HL.
    pub(super) fn exec_ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl();
    }

    /// LD HL,SP+e8: signed immediate added to SP, result into HL.
    pub(super) fn exec_ld_hl_sp_imm<B: Bus>(&mut self, bus: &mut B) {
        let imm8 = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm8);
        self.regs.set_hl(result);
    }
}
