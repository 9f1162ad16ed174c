use core::fmt::Write;
use core::panic::PanicInfo;

use bare_metal::cpu;

use crate::config;
use crate::logging;
use crate::vga::{self, Terminal, VgaMem};

#[panic_handler]
fn panic(panic_info: &PanicInfo) -> ! {
    logging::emergency_write(format_args!("[PANIC] {}\r\n", panic_info));

    // The terminal owned by kernel_main is out of reach, so grab a new
    // instance of the VGA buffer and hope we get some info out.
    let vgabuf = unsafe { VgaMem::from_addr(vga::VGA_PHYS_ADDR.identity_mapping()) };
    let mut console = Terminal::with_colors(vgabuf, config::PANIC_FOREGROUND, config::PANIC_BACKGROUND);
    writeln!(console, "{}", panic_info).unwrap_or(());

    unsafe {
        cpu::disable_interrupts();
        cpu::hang()
    }
}
