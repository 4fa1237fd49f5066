use std::path::PathBuf;

use anyhow::{Context, Result};
use dotmatrix_cpu::{FlatBus, Machine, CLOCK_HZ};

/// Headless harness: load a flat ROM image, run it for a number of
/// frame budgets (or until a breakpoint/stop), and print the register
/// file. Useful for eyeballing CPU behavior without any frontend.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: cpu_state_dump <image_path> [frames] [breakpoint_hex]");
        std::process::exit(2);
    });
    let frames: u32 = args
        .next()
        .unwrap_or_else(|| "60".to_string())
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Invalid frame count; expected an integer.");
            std::process::exit(2);
        });
    let breakpoint: Option<u16> = args.next().map(|raw| {
        u16::from_str_radix(raw.trim_start_matches("0x"), 16).unwrap_or_else(|_| {
            eprintln!("Invalid breakpoint; expected a hex address like 0x0150.");
            std::process::exit(2);
        })
    });

    let image = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read image '{}'", rom_path.display()))?;

    let mut bus = FlatBus::new();
    bus.load(&image);

    let mut machine = Machine::new(bus);
    machine.set_breakpoint(breakpoint);

    let frame_budget = CLOCK_HZ / 60;
    let mut total: u64 = 0;
    for _ in 0..frames {
        total += u64::from(machine.run_for(frame_budget));
        if machine.cpu.is_stopped() {
            break;
        }
    }

    let regs = &machine.cpu.regs;
    println!("cycles consumed: {total}");
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl()
    );
    println!("PC={:04X} SP={:04X}", regs.pc, regs.sp);
    println!(
        "IME={} HALT={} STOP={}",
        machine.cpu.ime,
        machine.cpu.halted,
        machine.cpu.is_stopped()
    );
    if let Some(trap) = machine.cpu.last_trap() {
        println!(
            "trapped on illegal opcode {:02X} at {:04X}",
            trap.opcode, trap.addr
        );
    }

    Ok(())
}
