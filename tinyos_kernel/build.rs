// build.rs

extern crate nasm_rs;

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=src/bootcode/boot.asm");

    // Host builds (unit tests) have no use for the boot stub, and the 32 bit
    // objects could not be linked into a hosted binary anyway.
    if env::var("CARGO_CFG_TARGET_OS").map(|os| os != "none").unwrap_or(true) {
        return;
    }

    nasm_rs::compile_library_args(
        "libboot.a",
        &["src/bootcode/boot.asm"],
        &["-f", "elf32"],
    );
    println!("cargo:rustc-link-lib=static=boot");
}
