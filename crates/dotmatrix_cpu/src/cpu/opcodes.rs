//! Declarative opcode tables.
//!
//! Each of the 256 primary opcode bytes maps to one [`Opcode`] entry
//! describing the operation kind, its operands, and its fixed T-cycle
//! costs; the interpreter in `exec.rs` gives the entries their
//! behavior. The extended (0xCB-prefixed) table is built at compile
//! time from the regular bit-field layout of that opcode space.
//!
//! Keeping the costs in the table, per opcode, matters: conditional
//! jumps/calls/returns have two architecturally fixed costs each, and
//! downstream timing-sensitive software depends on both values.

/// 8-bit operand location: a register, memory at HL, or an immediate
/// byte at PC. The discriminant order matches the hardware register
/// encoding (0=B .. 7=A).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address in HL.
    HlInd,
    A,
    /// Immediate byte fetched at PC. Source position only.
    Imm,
}

/// 16-bit register operand for loads and arithmetic (`rp` encoding).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

/// 16-bit register operand for PUSH/POP (`rp2` encoding: AF replaces SP).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackReg {
    BC,
    DE,
    HL,
    AF,
}

/// Pointer register for the indirect accumulator loads, including the
/// post-increment/post-decrement HL forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PtrReg {
    BC,
    DE,
    HlInc,
    HlDec,
}

/// Branch condition codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

/// 8-bit accumulator arithmetic/logic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Accumulator-only rotate forms. Unlike their extended-table
/// counterparts these never set Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccRot {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

/// Operation kind and operands for one primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB prefix; the cost comes from the extended table entry.
    Prefix,
    /// Opcode hole: reports the byte and latches Stop.
    Trap,

    Ld8 { dst: Operand8, src: Operand8 },
    Ld16Imm(Reg16),
    LdPtrA(PtrReg),
    LdAPtr(PtrReg),
    LdAbsA,
    LdAAbs,
    LdhImmA,
    LdhAImm,
    LdhCA,
    LdhAC,
    LdAbsSp,
    LdSpHl,
    LdHlSpImm,

    Push(StackReg),
    Pop(StackReg),

    Alu { op: AluOp, src: Operand8 },
    Inc8(Operand8),
    Dec8(Operand8),
    Inc16(Reg16),
    Dec16(Reg16),
    AddHl(Reg16),
    AddSpImm,
    RotA(AccRot),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr(Option<Cond>),
    Jp(Option<Cond>),
    JpHl,
    Call(Option<Cond>),
    Ret(Option<Cond>),
    Reti,
    Rst(u16),
}

/// One primary-table entry: an operation plus its fixed T-cycle costs.
///
/// `cycles` is the cost when the instruction does not branch;
/// `cycles_taken` the cost when a conditional branch is taken. The two
/// are equal for everything unconditional.
#[derive(Clone, Copy, Debug)]
pub struct Opcode {
    pub op: Op,
    pub cycles: u8,
    pub cycles_taken: u8,
}

const fn fixed(op: Op, cycles: u8) -> Opcode {
    Opcode {
        op,
        cycles,
        cycles_taken: cycles,
    }
}

const fn branching(op: Op, not_taken: u8, taken: u8) -> Opcode {
    Opcode {
        op,
        cycles: not_taken,
        cycles_taken: taken,
    }
}

use self::Op::*;
use self::Operand8::*;

/// The primary dispatch table, indexed by the first fetched byte.
pub static OPCODES: [Opcode; 256] = [
    // 0x00
    fixed(Nop, 4),
    fixed(Ld16Imm(Reg16::BC), 12),
    fixed(LdPtrA(PtrReg::BC), 8),
    fixed(Inc16(Reg16::BC), 8),
    fixed(Inc8(B), 4),
    fixed(Dec8(B), 4),
    fixed(Ld8 { dst: B, src: Imm }, 8),
    fixed(RotA(AccRot::Rlca), 4),
    fixed(LdAbsSp, 20),
    fixed(AddHl(Reg16::BC), 8),
    fixed(LdAPtr(PtrReg::BC), 8),
    fixed(Dec16(Reg16::BC), 8),
    fixed(Inc8(C), 4),
    fixed(Dec8(C), 4),
    fixed(Ld8 { dst: C, src: Imm }, 8),
    fixed(RotA(AccRot::Rrca), 4),
    // 0x10
    fixed(Stop, 4),
    fixed(Ld16Imm(Reg16::DE), 12),
    fixed(LdPtrA(PtrReg::DE), 8),
    fixed(Inc16(Reg16::DE), 8),
    fixed(Inc8(D), 4),
    fixed(Dec8(D), 4),
    fixed(Ld8 { dst: D, src: Imm }, 8),
    fixed(RotA(AccRot::Rla), 4),
    fixed(Jr(None), 12),
    fixed(AddHl(Reg16::DE), 8),
    fixed(LdAPtr(PtrReg::DE), 8),
    fixed(Dec16(Reg16::DE), 8),
    fixed(Inc8(E), 4),
    fixed(Dec8(E), 4),
    fixed(Ld8 { dst: E, src: Imm }, 8),
    fixed(RotA(AccRot::Rra), 4),
    // 0x20
    branching(Jr(Some(Cond::NZ)), 8, 12),
    fixed(Ld16Imm(Reg16::HL), 12),
    fixed(LdPtrA(PtrReg::HlInc), 8),
    fixed(Inc16(Reg16::HL), 8),
    fixed(Inc8(H), 4),
    fixed(Dec8(H), 4),
    fixed(Ld8 { dst: H, src: Imm }, 8),
    fixed(Daa, 4),
    branching(Jr(Some(Cond::Z)), 8, 12),
    fixed(AddHl(Reg16::HL), 8),
    fixed(LdAPtr(PtrReg::HlInc), 8),
    fixed(Dec16(Reg16::HL), 8),
    fixed(Inc8(L), 4),
    fixed(Dec8(L), 4),
    fixed(Ld8 { dst: L, src: Imm }, 8),
    fixed(Cpl, 4),
    // 0x30
    branching(Jr(Some(Cond::NC)), 8, 12),
    fixed(Ld16Imm(Reg16::SP), 12),
    fixed(LdPtrA(PtrReg::HlDec), 8),
    fixed(Inc16(Reg16::SP), 8),
    fixed(Inc8(HlInd), 12),
    fixed(Dec8(HlInd), 12),
    fixed(Ld8 { dst: HlInd, src: Imm }, 12),
    fixed(Scf, 4),
    branching(Jr(Some(Cond::C)), 8, 12),
    fixed(AddHl(Reg16::SP), 8),
    fixed(LdAPtr(PtrReg::HlDec), 8),
    fixed(Dec16(Reg16::SP), 8),
    fixed(Inc8(A), 4),
    fixed(Dec8(A), 4),
    fixed(Ld8 { dst: A, src: Imm }, 8),
    fixed(Ccf, 4),
    // 0x40: LD B,r
    fixed(Ld8 { dst: B, src: B }, 4),
    fixed(Ld8 { dst: B, src: C }, 4),
    fixed(Ld8 { dst: B, src: D }, 4),
    fixed(Ld8 { dst: B, src: E }, 4),
    fixed(Ld8 { dst: B, src: H }, 4),
    fixed(Ld8 { dst: B, src: L }, 4),
    fixed(Ld8 { dst: B, src: HlInd }, 8),
    fixed(Ld8 { dst: B, src: A }, 4),
    // 0x48: LD C,r
    fixed(Ld8 { dst: C, src: B }, 4),
    fixed(Ld8 { dst: C, src: C }, 4),
    fixed(Ld8 { dst: C, src: D }, 4),
    fixed(Ld8 { dst: C, src: E }, 4),
    fixed(Ld8 { dst: C, src: H }, 4),
    fixed(Ld8 { dst: C, src: L }, 4),
    fixed(Ld8 { dst: C, src: HlInd }, 8),
    fixed(Ld8 { dst: C, src: A }, 4),
    // 0x50: LD D,r
    fixed(Ld8 { dst: D, src: B }, 4),
    fixed(Ld8 { dst: D, src: C }, 4),
    fixed(Ld8 { dst: D, src: D }, 4),
    fixed(Ld8 { dst: D, src: E }, 4),
    fixed(Ld8 { dst: D, src: H }, 4),
    fixed(Ld8 { dst: D, src: L }, 4),
    fixed(Ld8 { dst: D, src: HlInd }, 8),
    fixed(Ld8 { dst: D, src: A }, 4),
    // 0x58: LD E,r
    fixed(Ld8 { dst: E, src: B }, 4),
    fixed(Ld8 { dst: E, src: C }, 4),
    fixed(Ld8 { dst: E, src: D }, 4),
    fixed(Ld8 { dst: E, src: E }, 4),
    fixed(Ld8 { dst: E, src: H }, 4),
    fixed(Ld8 { dst: E, src: L }, 4),
    fixed(Ld8 { dst: E, src: HlInd }, 8),
    fixed(Ld8 { dst: E, src: A }, 4),
    // 0x60: LD H,r
    fixed(Ld8 { dst: H, src: B }, 4),
    fixed(Ld8 { dst: H, src: C }, 4),
    fixed(Ld8 { dst: H, src: D }, 4),
    fixed(Ld8 { dst: H, src: E }, 4),
    fixed(Ld8 { dst: H, src: H }, 4),
    fixed(Ld8 { dst: H, src: L }, 4),
    fixed(Ld8 { dst: H, src: HlInd }, 8),
    fixed(Ld8 { dst: H, src: A }, 4),
    // 0x68: LD L,r
    fixed(Ld8 { dst: L, src: B }, 4),
    fixed(Ld8 { dst: L, src: C }, 4),
    fixed(Ld8 { dst: L, src: D }, 4),
    fixed(Ld8 { dst: L, src: E }, 4),
    fixed(Ld8 { dst: L, src: H }, 4),
    fixed(Ld8 { dst: L, src: L }, 4),
    fixed(Ld8 { dst: L, src: HlInd }, 8),
    fixed(Ld8 { dst: L, src: A }, 4),
    // 0x70: LD (HL),r / HALT
    fixed(Ld8 { dst: HlInd, src: B }, 8),
    fixed(Ld8 { dst: HlInd, src: C }, 8),
    fixed(Ld8 { dst: HlInd, src: D }, 8),
    fixed(Ld8 { dst: HlInd, src: E }, 8),
    fixed(Ld8 { dst: HlInd, src: H }, 8),
    fixed(Ld8 { dst: HlInd, src: L }, 8),
    fixed(Halt, 4),
    fixed(Ld8 { dst: HlInd, src: A }, 8),
    // 0x78: LD A,r
    fixed(Ld8 { dst: A, src: B }, 4),
    fixed(Ld8 { dst: A, src: C }, 4),
    fixed(Ld8 { dst: A, src: D }, 4),
    fixed(Ld8 { dst: A, src: E }, 4),
    fixed(Ld8 { dst: A, src: H }, 4),
    fixed(Ld8 { dst: A, src: L }, 4),
    fixed(Ld8 { dst: A, src: HlInd }, 8),
    fixed(Ld8 { dst: A, src: A }, 4),
    // 0x80: ADD A,r
    fixed(Alu { op: AluOp::Add, src: B }, 4),
    fixed(Alu { op: AluOp::Add, src: C }, 4),
    fixed(Alu { op: AluOp::Add, src: D }, 4),
    fixed(Alu { op: AluOp::Add, src: E }, 4),
    fixed(Alu { op: AluOp::Add, src: H }, 4),
    fixed(Alu { op: AluOp::Add, src: L }, 4),
    fixed(Alu { op: AluOp::Add, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Add, src: A }, 4),
    // 0x88: ADC A,r
    fixed(Alu { op: AluOp::Adc, src: B }, 4),
    fixed(Alu { op: AluOp::Adc, src: C }, 4),
    fixed(Alu { op: AluOp::Adc, src: D }, 4),
    fixed(Alu { op: AluOp::Adc, src: E }, 4),
    fixed(Alu { op: AluOp::Adc, src: H }, 4),
    fixed(Alu { op: AluOp::Adc, src: L }, 4),
    fixed(Alu { op: AluOp::Adc, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Adc, src: A }, 4),
    // 0x90: SUB r
    fixed(Alu { op: AluOp::Sub, src: B }, 4),
    fixed(Alu { op: AluOp::Sub, src: C }, 4),
    fixed(Alu { op: AluOp::Sub, src: D }, 4),
    fixed(Alu { op: AluOp::Sub, src: E }, 4),
    fixed(Alu { op: AluOp::Sub, src: H }, 4),
    fixed(Alu { op: AluOp::Sub, src: L }, 4),
    fixed(Alu { op: AluOp::Sub, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Sub, src: A }, 4),
    // 0x98: SBC A,r
    fixed(Alu { op: AluOp::Sbc, src: B }, 4),
    fixed(Alu { op: AluOp::Sbc, src: C }, 4),
    fixed(Alu { op: AluOp::Sbc, src: D }, 4),
    fixed(Alu { op: AluOp::Sbc, src: E }, 4),
    fixed(Alu { op: AluOp::Sbc, src: H }, 4),
    fixed(Alu { op: AluOp::Sbc, src: L }, 4),
    fixed(Alu { op: AluOp::Sbc, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Sbc, src: A }, 4),
    // 0xA0: AND r
    fixed(Alu { op: AluOp::And, src: B }, 4),
    fixed(Alu { op: AluOp::And, src: C }, 4),
    fixed(Alu { op: AluOp::And, src: D }, 4),
    fixed(Alu { op: AluOp::And, src: E }, 4),
    fixed(Alu { op: AluOp::And, src: H }, 4),
    fixed(Alu { op: AluOp::And, src: L }, 4),
    fixed(Alu { op: AluOp::And, src: HlInd }, 8),
    fixed(Alu { op: AluOp::And, src: A }, 4),
    // 0xA8: XOR r
    fixed(Alu { op: AluOp::Xor, src: B }, 4),
    fixed(Alu { op: AluOp::Xor, src: C }, 4),
    fixed(Alu { op: AluOp::Xor, src: D }, 4),
    fixed(Alu { op: AluOp::Xor, src: E }, 4),
    fixed(Alu { op: AluOp::Xor, src: H }, 4),
    fixed(Alu { op: AluOp::Xor, src: L }, 4),
    fixed(Alu { op: AluOp::Xor, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Xor, src: A }, 4),
    // 0xB0: OR r
    fixed(Alu { op: AluOp::Or, src: B }, 4),
    fixed(Alu { op: AluOp::Or, src: C }, 4),
    fixed(Alu { op: AluOp::Or, src: D }, 4),
    fixed(Alu { op: AluOp::Or, src: E }, 4),
    fixed(Alu { op: AluOp::Or, src: H }, 4),
    fixed(Alu { op: AluOp::Or, src: L }, 4),
    fixed(Alu { op: AluOp::Or, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Or, src: A }, 4),
    // 0xB8: CP r
    fixed(Alu { op: AluOp::Cp, src: B }, 4),
    fixed(Alu { op: AluOp::Cp, src: C }, 4),
    fixed(Alu { op: AluOp::Cp, src: D }, 4),
    fixed(Alu { op: AluOp::Cp, src: E }, 4),
    fixed(Alu { op: AluOp::Cp, src: H }, 4),
    fixed(Alu { op: AluOp::Cp, src: L }, 4),
    fixed(Alu { op: AluOp::Cp, src: HlInd }, 8),
    fixed(Alu { op: AluOp::Cp, src: A }, 4),
    // 0xC0
    branching(Ret(Some(Cond::NZ)), 8, 20),
    fixed(Pop(StackReg::BC), 12),
    branching(Jp(Some(Cond::NZ)), 12, 16),
    fixed(Jp(None), 16),
    branching(Call(Some(Cond::NZ)), 12, 24),
    fixed(Push(StackReg::BC), 16),
    fixed(Alu { op: AluOp::Add, src: Imm }, 8),
    fixed(Rst(0x00), 16),
    branching(Ret(Some(Cond::Z)), 8, 20),
    fixed(Ret(None), 16),
    branching(Jp(Some(Cond::Z)), 12, 16),
    fixed(Prefix, 4),
    branching(Call(Some(Cond::Z)), 12, 24),
    fixed(Call(None), 24),
    fixed(Alu { op: AluOp::Adc, src: Imm }, 8),
    fixed(Rst(0x08), 16),
    // 0xD0
    branching(Ret(Some(Cond::NC)), 8, 20),
    fixed(Pop(StackReg::DE), 12),
    branching(Jp(Some(Cond::NC)), 12, 16),
    fixed(Trap, 4),
    branching(Call(Some(Cond::NC)), 12, 24),
    fixed(Push(StackReg::DE), 16),
    fixed(Alu { op: AluOp::Sub, src: Imm }, 8),
    fixed(Rst(0x10), 16),
    branching(Ret(Some(Cond::C)), 8, 20),
    fixed(Reti, 16),
    branching(Jp(Some(Cond::C)), 12, 16),
    fixed(Trap, 4),
    branching(Call(Some(Cond::C)), 12, 24),
    fixed(Trap, 4),
    fixed(Alu { op: AluOp::Sbc, src: Imm }, 8),
    fixed(Rst(0x18), 16),
    // 0xE0
    fixed(LdhImmA, 12),
    fixed(Pop(StackReg::HL), 12),
    fixed(LdhCA, 8),
    fixed(Trap, 4),
    fixed(Trap, 4),
    fixed(Push(StackReg::HL), 16),
    fixed(Alu { op: AluOp::And, src: Imm }, 8),
    fixed(Rst(0x20), 16),
    fixed(AddSpImm, 16),
    fixed(JpHl, 4),
    fixed(LdAbsA, 16),
    fixed(Trap, 4),
    fixed(Trap, 4),
    fixed(Trap, 4),
    fixed(Alu { op: AluOp::Xor, src: Imm }, 8),
    fixed(Rst(0x28), 16),
    // 0xF0
    fixed(LdhAImm, 12),
    fixed(Pop(StackReg::AF), 12),
    fixed(LdhAC, 8),
    fixed(Di, 4),
    fixed(Trap, 4),
    fixed(Push(StackReg::AF), 16),
    fixed(Alu { op: AluOp::Or, src: Imm }, 8),
    fixed(Rst(0x30), 16),
    fixed(LdHlSpImm, 12),
    fixed(LdSpHl, 8),
    fixed(LdAAbs, 16),
    fixed(Ei, 4),
    fixed(Trap, 4),
    fixed(Trap, 4),
    fixed(Alu { op: AluOp::Cp, src: Imm }, 8),
    fixed(Rst(0x38), 16),
];

/// Extended-table operation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit(u8),
    Res(u8),
    Set(u8),
}

/// One extended-table entry. `cycles` is the total cost including the
/// 0xCB prefix fetch.
#[derive(Clone, Copy, Debug)]
pub struct CbOpcode {
    pub op: CbOp,
    pub target: Operand8,
    pub cycles: u8,
}

const fn cb_target(code: u8) -> Operand8 {
    match code & 0x07 {
        0 => Operand8::B,
        1 => Operand8::C,
        2 => Operand8::D,
        3 => Operand8::E,
        4 => Operand8::H,
        5 => Operand8::L,
        6 => Operand8::HlInd,
        _ => Operand8::A,
    }
}

const fn cb_entry(code: u8) -> CbOpcode {
    let target = cb_target(code);
    let sel = (code >> 3) & 0x07;
    let op = match code >> 6 {
        0 => match sel {
            0 => CbOp::Rlc,
            1 => CbOp::Rrc,
            2 => CbOp::Rl,
            3 => CbOp::Rr,
            4 => CbOp::Sla,
            5 => CbOp::Sra,
            6 => CbOp::Swap,
            _ => CbOp::Srl,
        },
        1 => CbOp::Bit(sel),
        2 => CbOp::Res(sel),
        _ => CbOp::Set(sel),
    };
    // Register targets cost 8; (HL) targets 16, except BIT which only
    // reads memory and costs 12.
    let cycles = if matches!(target, Operand8::HlInd) {
        if matches!(op, CbOp::Bit(_)) {
            12
        } else {
            16
        }
    } else {
        8
    };
    CbOpcode { op, target, cycles }
}

const fn build_cb_table() -> [CbOpcode; 256] {
    let mut table = [CbOpcode {
        op: CbOp::Rlc,
        target: Operand8::B,
        cycles: 8,
    }; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = cb_entry(code as u8);
        code += 1;
    }
    table
}

/// The extended dispatch table, indexed by the byte following 0xCB.
/// Every slot is defined by construction; the extended space has no
/// opcode holes.
pub static CB_OPCODES: [CbOpcode; 256] = build_cb_table();
