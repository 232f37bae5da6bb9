use fpemu_core::common::constants::NUM_FPRS;
use fpemu_core::platform::Privileged;

/// Privileged platform that records every interaction.
///
/// With `has_fpu` set, `unit_fpr`/`unit_fsr` play the role of the hardware
/// register file.
#[derive(Debug, Default)]
pub struct MockMachine {
    pub has_fpu: bool,
    pub status: u64,
    pub unit_fpr: [u64; NUM_FPRS],
    pub unit_fsr: u32,
    pub status_writes: usize,
    pub saves: usize,
    pub restores: usize,
}

impl MockMachine {
    pub fn soft() -> Self {
        Self::default()
    }

    pub fn with_fpu() -> Self {
        Self {
            has_fpu: true,
            ..Self::default()
        }
    }
}

impl Privileged for MockMachine {
    fn has_fpu(&self) -> bool {
        self.has_fpu
    }

    fn read_status(&self) -> u64 {
        self.status
    }

    fn write_status(&mut self, value: u64) {
        self.status = value;
        self.status_writes += 1;
    }

    fn save_fp_state(&mut self, fpr: &mut [u64; NUM_FPRS]) -> u32 {
        self.saves += 1;
        *fpr = self.unit_fpr;
        self.unit_fsr
    }

    fn restore_fp_state(&mut self, fpr: &[u64; NUM_FPRS], fsr: u32) {
        self.restores += 1;
        self.unit_fpr = *fpr;
        self.unit_fsr = fsr;
    }
}
