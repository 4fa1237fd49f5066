use crate::cpu::opcodes::{AccRot, AluOp, Operand8, Reg16};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// 8-bit accumulator arithmetic/logic against a register, (HL), or
    /// an immediate byte.
    pub(super) fn exec_alu<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: Operand8) {
        let value = self.read_operand8(bus, src);
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// ADD HL,rr.
    pub(super) fn exec_add_hl(&mut self, reg: Reg16) {
        let value = self.read_reg16(reg);
        self.alu_add16_hl(value);
    }

    /// ADD SP,e8.
    pub(super) fn exec_add_sp_imm<B: Bus>(&mut self, bus: &mut B) {
        let imm8 = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm8);
    }

    /// RLCA/RRCA/RLA/RRA.
    ///
    /// These reuse the generic rotate helpers and then force Z clear:
    /// the accumulator-only forms never report zero, unlike the same
    /// rotations through the extended table.
    pub(super) fn exec_rot_a(&mut self, rot: AccRot) {
        let a = self.regs.a;
        let result = match rot {
            AccRot::Rlca => self.alu_rlc(a),
            AccRot::Rrca => self.alu_rrc(a),
            AccRot::Rla => self.alu_rl(a),
            AccRot::Rra => self.alu_rr(a),
        };
        self.regs.a = result;
        self.set_flag(Flag::Z, false);
    }

    /// CPL: complement A. N and H set, Z and C untouched.
    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    /// SCF: set carry. N and H cleared, Z untouched.
    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    /// CCF: complement carry. N and H cleared, Z untouched.
    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }
}
