//! Newtype wrappers that make it harder to accidentally confuse physical and virtual addresses.

use core::fmt;

/// A virtual address. It's validity depends on the current page mapping.
#[repr(C)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct VirtAddr(pub usize);

/// A physical address. Whether it is accessible depends on the current page mapping.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
#[repr(C)]
pub struct PhysAddr(pub usize);

impl VirtAddr {
    /// Reinterpret the address as a mutable pointer to `T`.
    pub unsafe fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }
}

impl PhysAddr {
    /// Convert a physical address to a virtual address assuming identity mapping.
    ///
    /// Nothing else is available before paging is set up, so this is the only
    /// translation the boot environment knows.
    pub const fn identity_mapping(self) -> VirtAddr {
        VirtAddr(self.0)
    }
}

impl fmt::Pointer for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "VIRT_0x{:08x}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_mapping_keeps_address() {
        assert_eq!(PhysAddr(0xB8000).identity_mapping(), VirtAddr(0xB8000));
    }

    #[test]
    fn pointer_formatting() {
        assert_eq!(format!("{:p}", VirtAddr(0x100000)), "VIRT_0x00100000");
    }
}
