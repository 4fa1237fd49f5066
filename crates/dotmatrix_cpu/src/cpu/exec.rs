mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::opcodes::{Cond, Op, OPCODES};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Execute the table entry for a fetched opcode byte and return the
    /// T-cycles consumed.
    ///
    /// The entry supplies both the operation and its fixed costs; for
    /// conditional branches the interpreter picks between the taken and
    /// not-taken constants, it never computes a cost. Every one of the
    /// 256 slots resolves here, including the opcode holes, so this is
    /// a total function over the input byte.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, code: u8) -> u32 {
        let entry = &OPCODES[code as usize];
        let cycles = entry.cycles as u32;
        let cycles_taken = entry.cycles_taken as u32;

        match entry.op {
            Op::Nop => cycles,
            Op::Stop => {
                self.exec_stop(bus);
                cycles
            }
            Op::Halt => {
                self.exec_halt();
                cycles
            }
            Op::Di => {
                self.exec_di();
                cycles
            }
            Op::Ei => {
                self.exec_ei();
                cycles
            }
            Op::Prefix => self.exec_cb(bus),
            Op::Trap => {
                self.trap_illegal(code);
                cycles
            }

            Op::Ld8 { dst, src } => {
                self.exec_ld8(bus, dst, src);
                cycles
            }
            Op::Ld16Imm(reg) => {
                self.exec_ld16_imm(bus, reg);
                cycles
            }
            Op::LdPtrA(ptr) => {
                self.exec_ld_ptr_a(bus, ptr);
                cycles
            }
            Op::LdAPtr(ptr) => {
                self.exec_ld_a_ptr(bus, ptr);
                cycles
            }
            Op::LdAbsA => {
                self.exec_ld_abs_a(bus);
                cycles
            }
            Op::LdAAbs => {
                self.exec_ld_a_abs(bus);
                cycles
            }
            Op::LdhImmA => {
                self.exec_ldh_imm_a(bus);
                cycles
            }
            Op::LdhAImm => {
                self.exec_ldh_a_imm(bus);
                cycles
            }
            Op::LdhCA => {
                self.exec_ldh_c_a(bus);
                cycles
            }
            Op::LdhAC => {
                self.exec_ldh_a_c(bus);
                cycles
            }
            Op::LdAbsSp => {
                self.exec_ld_abs_sp(bus);
                cycles
            }
            Op::LdSpHl => {
                self.exec_ld_sp_hl();
                cycles
            }
            Op::LdHlSpImm => {
                self.exec_ld_hl_sp_imm(bus);
                cycles
            }

            Op::Push(reg) => {
                self.exec_push(bus, reg);
                cycles
            }
            Op::Pop(reg) => {
                self.exec_pop(bus, reg);
                cycles
            }

            Op::Alu { op, src } => {
                self.exec_alu(bus, op, src);
                cycles
            }
            Op::Inc8(operand) => {
                self.exec_inc8(bus, operand);
                cycles
            }
            Op::Dec8(operand) => {
                self.exec_dec8(bus, operand);
                cycles
            }
            Op::Inc16(reg) => {
                self.exec_inc16(reg);
                cycles
            }
            Op::Dec16(reg) => {
                self.exec_dec16(reg);
                cycles
            }
            Op::AddHl(reg) => {
                self.exec_add_hl(reg);
                cycles
            }
            Op::AddSpImm => {
                self.exec_add_sp_imm(bus);
                cycles
            }
            Op::RotA(rot) => {
                self.exec_rot_a(rot);
                cycles
            }
            Op::Daa => {
                self.alu_daa();
                cycles
            }
            Op::Cpl => {
                self.exec_cpl();
                cycles
            }
            Op::Scf => {
                self.exec_scf();
                cycles
            }
            Op::Ccf => {
                self.exec_ccf();
                cycles
            }

            Op::Jr(cond) => {
                if self.exec_jr(bus, self.cond_met(cond)) {
                    cycles_taken
                } else {
                    cycles
                }
            }
            Op::Jp(cond) => {
                if self.exec_jp(bus, self.cond_met(cond)) {
                    cycles_taken
                } else {
                    cycles
                }
            }
            Op::JpHl => {
                self.exec_jp_hl();
                cycles
            }
            Op::Call(cond) => {
                if self.exec_call(bus, self.cond_met(cond)) {
                    cycles_taken
                } else {
                    cycles
                }
            }
            Op::Ret(cond) => {
                if self.exec_ret(bus, self.cond_met(cond)) {
                    cycles_taken
                } else {
                    cycles
                }
            }
            Op::Reti => {
                self.exec_reti(bus);
                cycles
            }
            Op::Rst(vector) => {
                self.exec_rst(bus, vector);
                cycles
            }
        }
    }

    #[inline]
    fn cond_met(&self, cond: Option<Cond>) -> bool {
        match cond {
            None => true,
            Some(Cond::NZ) => !self.get_flag(Flag::Z),
            Some(Cond::Z) => self.get_flag(Flag::Z),
            Some(Cond::NC) => !self.get_flag(Flag::C),
            Some(Cond::C) => self.get_flag(Flag::C),
        }
    }
}
