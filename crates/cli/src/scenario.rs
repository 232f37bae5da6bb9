//! Trap scenario replay.
//!
//! A scenario is a JSON document describing one trap: the instruction word,
//! integer and floating-point register contents, and a sparse memory image.
//! Replaying it runs the real emulator against an in-process platform with no
//! hardware FPU and reports the final state.
//!
//! ```json
//! {
//!   "insn": 268570195,
//!   "gpr": { "5": 131072 },
//!   "fpr": { "0": 1065353216, "1": 1073741824 },
//!   "memory": { "131072": 4611686018427387904 }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fpemu_core::arch::TrapFrame;
use fpemu_core::common::constants::NUM_FPRS;
use fpemu_core::common::error::{ConfigError, EmulateError};
use fpemu_core::isa::disasm::disassemble;
use fpemu_core::mem::{EffectiveAddress, UserMemory};
use fpemu_core::platform::{FaultHandler, Privileged};
use fpemu_core::{Emulator, EmulatorConfig, FloatRegisterFile};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The instruction word argument did not parse.
    #[error("cannot parse instruction word {0:?}")]
    BadWord(String),

    /// The scenario file could not be read.
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario is not valid JSON, or the report failed to serialize.
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    /// The embedded emulator configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A register index in the scenario is out of range.
    #[error("register index {0} out of range")]
    BadRegister(usize),
}

/// One trap to replay.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Emulator settings; defaults apply when omitted.
    #[serde(default)]
    pub config: Option<EmulatorConfig>,
    /// The trapped instruction word.
    pub insn: u32,
    /// Faulting program counter.
    #[serde(default)]
    pub epc: u64,
    /// Integer register values by index.
    #[serde(default)]
    pub gpr: BTreeMap<usize, u64>,
    /// Raw floating-point register slots by index.
    #[serde(default)]
    pub fpr: BTreeMap<usize, u64>,
    /// Floating-point status word.
    #[serde(default)]
    pub fsr: u32,
    /// Little-endian 8-byte words by address.
    #[serde(default)]
    pub memory: BTreeMap<u64, u64>,
}

/// A fault delivered to the scenario's handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultRecord {
    /// Handler that was invoked.
    pub handler: &'static str,
    /// Rejected address.
    pub addr: u64,
}

/// Final state after replay.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Disassembly of the trapped word.
    pub disasm: String,
    /// `ok`, `unrecognized`, or `fault`.
    pub result: &'static str,
    /// Error text for non-`ok` results.
    pub error: Option<String>,
    /// Handlers invoked, in order.
    pub faults: Vec<FaultRecord>,
    /// Floating-point register slots.
    pub fpr: Vec<u64>,
    /// Floating-point status word.
    pub fsr: u32,
    /// Integer registers.
    pub gpr: Vec<u64>,
    /// Saved status register.
    pub sr: u64,
    /// Memory image as 8-byte words.
    pub memory: BTreeMap<u64, u64>,
}

/// Platform with no hardware floating-point unit.
#[derive(Debug, Default)]
struct SoftPlatform {
    status: u64,
}

impl Privileged for SoftPlatform {
    fn has_fpu(&self) -> bool {
        false
    }

    fn read_status(&self) -> u64 {
        self.status
    }

    fn write_status(&mut self, value: u64) {
        self.status = value;
    }

    fn save_fp_state(&mut self, _fpr: &mut [u64; NUM_FPRS]) -> u32 {
        0
    }

    fn restore_fp_state(&mut self, _fpr: &[u64; NUM_FPRS], _fsr: u32) {}
}

/// Byte-addressed memory image.
#[derive(Debug, Default)]
struct ImageMemory {
    bytes: BTreeMap<u64, u8>,
}

impl ImageMemory {
    fn read(&self, addr: u64, size: u64) -> u64 {
        (0..size).fold(0, |acc, i| {
            let byte = self.bytes.get(&addr.wrapping_add(i)).copied().unwrap_or(0);
            acc | (u64::from(byte) << (i * 8))
        })
    }

    fn write(&mut self, addr: u64, value: u64, size: u64) {
        for i in 0..size {
            let _ = self.bytes.insert(addr.wrapping_add(i), (value >> (i * 8)) as u8);
        }
    }

    /// Groups the image into aligned 8-byte words.
    fn words(&self) -> BTreeMap<u64, u64> {
        let mut bases: Vec<u64> = self.bytes.keys().map(|a| a & !7).collect();
        bases.dedup();
        bases.into_iter().map(|base| (base, self.read(base, 8))).collect()
    }
}

impl UserMemory for ImageMemory {
    fn load_u32(&mut self, addr: EffectiveAddress) -> u32 {
        self.read(addr.get(), 4) as u32
    }

    fn load_u64(&mut self, addr: EffectiveAddress) -> u64 {
        self.read(addr.get(), 8)
    }

    fn store_u32(&mut self, addr: EffectiveAddress, value: u32) {
        self.write(addr.get(), u64::from(value), 4);
    }

    fn store_u64(&mut self, addr: EffectiveAddress, value: u64) {
        self.write(addr.get(), value, 8);
    }
}

/// Fault handler that records each call.
#[derive(Debug, Default)]
struct RecordingFaults {
    records: Vec<FaultRecord>,
}

impl RecordingFaults {
    fn record(&mut self, handler: &'static str, addr: u64) {
        tracing::info!(handler, addr = format_args!("{addr:#x}"), "fault handler invoked");
        self.records.push(FaultRecord { handler, addr });
    }
}

impl FaultHandler for RecordingFaults {
    fn on_misaligned_load(&mut self, _tf: &mut TrapFrame, addr: u64) {
        self.record("misaligned_load", addr);
    }

    fn on_misaligned_store(&mut self, _tf: &mut TrapFrame, addr: u64) {
        self.record("misaligned_store", addr);
    }

    fn on_fault_load(&mut self, _tf: &mut TrapFrame, addr: u64) {
        self.record("fault_load", addr);
    }

    fn on_fault_store(&mut self, _tf: &mut TrapFrame, addr: u64) {
        self.record("fault_store", addr);
    }
}

impl Scenario {
    /// Reads a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Runs the scenario through the emulator.
    pub fn run(self) -> Result<Report, CliError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let mut tf = TrapFrame::new(self.insn);
        tf.epc = self.epc;
        for (&idx, &value) in &self.gpr {
            let slot = tf.gpr.get_mut(idx).ok_or(CliError::BadRegister(idx))?;
            *slot = value;
        }

        let mut slots = [0u64; NUM_FPRS];
        for (&idx, &value) in &self.fpr {
            let slot = slots.get_mut(idx).ok_or(CliError::BadRegister(idx))?;
            *slot = value;
        }
        let mut regs = FloatRegisterFile::from_parts(slots, self.fsr);

        let mut memory = ImageMemory::default();
        for (&addr, &value) in &self.memory {
            memory.write(addr, value, 8);
        }

        let mut emu = Emulator::new(
            config,
            SoftPlatform::default(),
            memory,
            RecordingFaults::default(),
        );
        let outcome = emu.emulate(&mut regs, &mut tf);
        let (result, error) = match &outcome {
            Ok(()) => ("ok", None),
            Err(e @ EmulateError::Unrecognized(_)) => ("unrecognized", Some(e.to_string())),
            Err(e @ EmulateError::Fault(_)) => ("fault", Some(e.to_string())),
        };
        let (_, memory, faults) = emu.into_parts();

        Ok(Report {
            disasm: disassemble(self.insn),
            result,
            error,
            faults: faults.records,
            fpr: regs.slots().to_vec(),
            fsr: regs.fsr(),
            gpr: tf.gpr.to_vec(),
            sr: tf.sr,
            memory: memory.words(),
        })
    }
}
