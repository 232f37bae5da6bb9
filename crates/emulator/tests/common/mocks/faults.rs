use fpemu_core::arch::TrapFrame;
use fpemu_core::platform::FaultHandler;
use mockall::mock;

mock! {
    pub Faults {}
    impl FaultHandler for Faults {
        fn on_misaligned_load(&mut self, tf: &mut TrapFrame, addr: u64);
        fn on_misaligned_store(&mut self, tf: &mut TrapFrame, addr: u64);
        fn on_fault_load(&mut self, tf: &mut TrapFrame, addr: u64);
        fn on_fault_store(&mut self, tf: &mut TrapFrame, addr: u64);
    }
}
