//! Thin, mostly unsafe wrappers around the x86 hardware the kernel talks to.

#![cfg_attr(not(test), no_std)]

mod addr;

pub mod cpu;

pub use self::addr::*;
