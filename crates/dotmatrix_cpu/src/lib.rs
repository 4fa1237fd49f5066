pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Clocked, Cpu, Flag, FlatBus, OpcodeTrap, Registers};
pub use machine::Machine;

/// CPU clock rate in T-cycles per second (DMG).
///
/// An external frame scheduler typically runs the machine for
/// `CLOCK_HZ / frame_rate` cycles per displayed frame.
pub const CLOCK_HZ: u32 = 4_194_304;
