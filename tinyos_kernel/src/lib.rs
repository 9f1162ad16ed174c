//! A tiny kernel that greets the world on the VGA text console.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;

pub mod config;
pub mod logging;
pub mod vga;

mod kernel;
#[cfg(not(test))]
mod panic;

/// This is the Rust entry point that is called exactly once by the assembly boot code.
#[no_mangle]
pub extern "C" fn kernel_main() {
    kernel::main()
}
