//! keygate Kernel Entry Point
//!
//! Only meaningful on the bare-metal target; build the boot image with
//! `cargo bootimage --target x86_64-keygate.json`.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod bare_metal {
    use bootloader::{entry_point, BootInfo};
    use core::fmt::Write;
    use core::panic::PanicInfo;
    use keygate_kernel::arch::x86_64::{self, interrupts};
    use keygate_kernel::boot::banner;
    use keygate_kernel::config::TerminalConfig;
    use keygate_kernel::serial_println;

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        keygate_kernel::init();
        log::info!("keygate {}", env!("CARGO_PKG_VERSION"));

        interrupts::init_terminal(TerminalConfig::DEFAULT);
        interrupts::with_terminal(banner::print_banner);

        interrupts::init_idt();
        log::info!("boot complete, idling");

        x86_64::halt_loop()
    }

    /// Panic handler.
    ///
    /// Called when the kernel encounters an unrecoverable error.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);

        // The panic may have happened with the terminal locked.
        if let Some(mut terminal) = interrupts::TERMINAL.get().and_then(|t| t.try_lock()) {
            let screen = terminal.screen_mut();
            screen.newline();
            let _ = write!(screen, "KERNEL PANIC: {}", info);
        }

        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("keygate is a bare-metal kernel; build it with `cargo bootimage --target x86_64-keygate.json`");
}
