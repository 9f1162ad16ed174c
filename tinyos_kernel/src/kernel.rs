//! Parts that are specific to this kernel and cannot be easily reused.

use crate::config;
use crate::logging;
use crate::vga::{self, Terminal, TextSurface, VgaMem};

/// Body of the kernel. Runs once, returning hands control back to the boot stub which halts.
pub fn main() {
    // only fails when a logger is installed already, which is fine as well
    logging::init().unwrap_or(());
    info!("[boot] entered kernel_main");

    // Initialize VGA buffer. Besides panics, this is the only place where this should happen.
    let vgabuf = unsafe { VgaMem::from_addr(vga::VGA_PHYS_ADDR.identity_mapping()) };
    debug!("[vga] text buffer at {:p}", vgabuf.base_addr());
    let mut terminal = Terminal::new(vgabuf);

    run(&mut terminal);

    let (row, column) = terminal.cursor();
    info!("[boot] done, cursor at row {} column {}", row, column);
}

/// Print the boot message.
pub fn run<S: TextSurface>(terminal: &mut Terminal<S>) {
    terminal.write_bytes(config::GREETING);
    terminal.write_bytes(config::MOTTO);
}
