use crate::cpu::opcodes::{Operand8, Reg16};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// INC r / INC (HL).
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        let result = self.alu_inc8(value);
        self.write_operand8(bus, operand, result);
    }

    /// DEC r / DEC (HL).
    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        let result = self.alu_dec8(value);
        self.write_operand8(bus, operand, result);
    }

    /// INC rr. No flags; 16-bit counters wrap silently.
    pub(super) fn exec_inc16(&mut self, reg: Reg16) {
        let value = self.read_reg16(reg).wrapping_add(1);
        self.write_reg16(reg, value);
    }

    /// DEC rr. No flags.
    pub(super) fn exec_dec16(&mut self, reg: Reg16) {
        let value = self.read_reg16(reg).wrapping_sub(1);
        self.write_reg16(reg, value);
    }
}
