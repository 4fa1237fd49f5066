use super::opcodes::{CbOp, CB_OPCODES};
use super::{Bus, Cpu};

impl Cpu {
    /// Handle the 0xCB prefix: fetch the extended opcode byte and
    /// execute its table entry (rotates, shifts, swap, and single-bit
    /// test/clear/set).
    ///
    /// Returns the entry's total T-cycle cost, prefix fetch included.
    /// The extended table is fully populated, so any second byte
    /// dispatches; there are no holes to trap here.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let code = self.fetch8(bus);
        let entry = &CB_OPCODES[code as usize];

        match entry.op {
            CbOp::Rlc => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_rlc(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Rrc => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_rrc(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Rl => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_rl(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Rr => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_rr(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Sla => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_sla(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Sra => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_sra(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Swap => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_swap(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Srl => {
                let value = self.read_operand8(bus, entry.target);
                let result = self.alu_srl(value);
                self.write_operand8(bus, entry.target, result);
            }
            CbOp::Bit(bit) => {
                // Read-only: flags change, the operand does not.
                let value = self.read_operand8(bus, entry.target);
                self.alu_bit(bit, value);
            }
            CbOp::Res(bit) => {
                let value = self.read_operand8(bus, entry.target);
                self.write_operand8(bus, entry.target, value & !(1 << bit));
            }
            CbOp::Set(bit) => {
                let value = self.read_operand8(bus, entry.target);
                self.write_operand8(bus, entry.target, value | (1 << bit));
            }
        }

        entry.cycles as u32
    }
}
