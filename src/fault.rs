/// Unrecoverable startup failure: log, mask interrupts and park the core.
pub fn halt(reason: &'static str) -> ! {
    defmt::error!("fatal: {}", reason);
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::nop();
    }
}
