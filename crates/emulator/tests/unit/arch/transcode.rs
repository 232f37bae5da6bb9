use fpemu_core::arch::transcode::{SoftTranscoder, Transcode, select};
use proptest::prelude::*;

#[test]
fn soft_widen_zero_fills() {
    assert_eq!(SoftTranscoder.transcode_widen(0xffc0_0001), 0x0000_0000_ffc0_0001);
}

#[test]
fn soft_narrow_truncates() {
    assert_eq!(SoftTranscoder.transcode_narrow(0xdead_beef_3f80_0000), 0x3f80_0000);
}

#[test]
fn select_without_fpu_is_soft() {
    let t = select(false);
    assert_eq!(t.transcode_widen(0x1234_5678), 0x1234_5678);
    assert_eq!(format!("{t:?}"), "SoftTranscoder");
}

proptest! {
    #[test]
    fn soft_narrow_inverts_widen(bits in any::<u32>()) {
        prop_assert_eq!(SoftTranscoder.transcode_narrow(SoftTranscoder.transcode_widen(bits)), bits);
    }
}
