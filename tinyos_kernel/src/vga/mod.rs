//! This module provides a simple wrapper around the VGA text buffer.
//!
//! The buffer is a grid of 80x25 cells, each a 16 bit value holding the
//! character in the low byte and its color attribute in the high byte.
//! Output goes through the `TextSurface` trait, so that the terminal can be
//! driven against something other than the real memory mapped buffer.
//!
//! The creation of `VgaMem` is unsafe, because it would allow
//! concurrent modification of the same memory location, as there is
//! only one VGA buffer.

use bare_metal::{PhysAddr, VirtAddr};

mod terminal;
pub use self::terminal::Terminal;

/// Physical address of the VGA text buffer.
pub const VGA_PHYS_ADDR: PhysAddr = PhysAddr(0xB8000);

/// Number of character cells per row.
pub const WIDTH: usize = 80;
/// Number of rows.
pub const HEIGHT: usize = 25;
/// Total number of character cells.
pub const SIZE: usize = WIDTH * HEIGHT;

/// Compute the offset in the VGA buffer for accessing the character
/// at the given row and column.
#[inline]
pub fn offset_at(row: usize, column: usize) -> usize {
    row * WIDTH + column
}

/// The 16 VGA colors
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

/// All colors, indexed by their VGA code.
const PALETTE: [Color; 16] = [
    Color::Black,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Brown,
    Color::LightGray,
    Color::DarkGray,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightRed,
    Color::LightMagenta,
    Color::Yellow,
    Color::White,
];

impl Color {
    /// Return the color corresponding to the given VGA code.
    pub fn from_vga(idx: u8) -> Option<Color> {
        PALETTE.get(idx as usize).copied()
    }

    /// Return the VGA code of the given color.
    pub fn to_vga(self) -> u8 {
        self as u8
    }
}

/// A foreground and background color packed into one byte,
/// foreground in the low nibble.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    pub const fn new(fg: Color, bg: Color) -> Attribute {
        Attribute((fg as u8) | ((bg as u8) << 4))
    }

    /// Extract the foreground color.
    pub fn fg(self) -> Color {
        PALETTE[(self.0 & 0x0F) as usize]
    }

    /// Extract the background color.
    pub fn bg(self) -> Color {
        PALETTE[(self.0 >> 4) as usize]
    }

    /// The raw attribute byte as stored in the buffer.
    pub fn to_vga(self) -> u8 {
        self.0
    }
}

/// Entry in the VGA buffer consisting of an attribute and an 8 bit character.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[repr(transparent)]
pub struct VgaChar(u16);

assert_eq_size!(vga_char_size; VgaChar, u16);

impl VgaChar {
    /// Create a new VGA character representation from its attribute and a character.
    /// For example, a white R on a blue background:
    ///
    /// ```ignore
    /// let vc = VgaChar::new(Attribute::new(Color::White, Color::Blue), b'R');
    /// ```
    pub const fn new(attribute: Attribute, ch: u8) -> VgaChar {
        VgaChar((ch as u16) | ((attribute.0 as u16) << 8))
    }

    /// A space in the given colors.
    pub const fn blank(attribute: Attribute) -> VgaChar {
        VgaChar::new(attribute, b' ')
    }

    /// Reinterpret a raw buffer cell.
    pub const fn from_raw(raw: u16) -> VgaChar {
        VgaChar(raw)
    }

    /// The raw cell value, character in the low byte.
    pub fn to_raw(self) -> u16 {
        self.0
    }

    /// Extract the attribute.
    pub fn attribute(self) -> Attribute {
        Attribute((self.0 >> 8) as u8)
    }

    /// Extract the character.
    pub fn ch(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// A grid of `WIDTH` x `HEIGHT` character cells addressed by linear offset.
///
/// Offsets outside of `0..SIZE` are a bug in the caller and must panic.
pub trait TextSurface {
    /// Extract a colored character from the given offset.
    fn read(&self, off: usize) -> VgaChar;

    /// Set the colored character at the given offset.
    fn write(&mut self, off: usize, entry: VgaChar);

    /// Set every character to the same value.
    fn clear(&mut self, fill: VgaChar) {
        for off in 0..SIZE {
            self.write(off, fill);
        }
    }
}

/// Wrapper providing access to the VGA memory area.
/// Internally, it works with the virtual address of the VGA memory,
/// which the boot environment identity maps.
pub struct VgaMem {
    buffer: *mut u16,
}

impl VgaMem {
    /// Create a new wrapper for the VGA buffer. This is unsafe because it allows the
    /// creation of multiple instances, even though there is just one single VGA buffer.
    /// The caller must also guarantee that `SIZE` cells starting at the address are writable.
    pub unsafe fn from_addr(virt_vga_address: VirtAddr) -> Self {
        VgaMem {
            buffer: virt_vga_address.as_mut_ptr(),
        }
    }

    /// Address of the first cell.
    pub fn base_addr(&self) -> VirtAddr {
        VirtAddr(self.buffer as usize)
    }
}

impl TextSurface for VgaMem {
    #[inline]
    fn read(&self, off: usize) -> VgaChar {
        assert!(off < SIZE);
        unsafe { VgaChar(self.buffer.add(off).read_volatile()) }
    }

    #[inline]
    fn write(&mut self, off: usize, entry: VgaChar) {
        assert!(off < SIZE);
        unsafe { self.buffer.add(off).write_volatile(entry.0) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attribute_packing() {
        let attr = Attribute::new(Color::LightGray, Color::Black);
        assert_eq!(attr.to_vga(), 0x07);
        let attr = Attribute::new(Color::White, Color::Red);
        assert_eq!(attr.to_vga(), 0x4F);
        assert_eq!(attr.fg(), Color::White);
        assert_eq!(attr.bg(), Color::Red);
    }

    #[test]
    fn cell_layout() {
        let vc = VgaChar::new(Attribute::new(Color::White, Color::Blue), b'R');
        assert_eq!(vc.to_raw(), 0x1F52);
        assert_eq!(vc.ch(), b'R');
        assert_eq!(vc.attribute(), Attribute::new(Color::White, Color::Blue));
        assert_eq!(VgaChar::from_raw(0x1F52), vc);
    }

    #[test]
    fn color_codes() {
        for code in 0..16 {
            assert_eq!(Color::from_vga(code).map(Color::to_vga), Some(code));
        }
        assert_eq!(Color::from_vga(16), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(offset_at(0, 0), 0);
        assert_eq!(offset_at(1, 0), 80);
        assert_eq!(offset_at(24, 79), SIZE - 1);
    }

    #[test]
    fn vga_mem_over_host_array() {
        let mut cells = [0_u16; SIZE];
        let mut mem = unsafe { VgaMem::from_addr(VirtAddr(cells.as_mut_ptr() as usize)) };
        let entry = VgaChar::new(Attribute::new(Color::Green, Color::Black), b'x');
        mem.write(offset_at(3, 7), entry);
        assert_eq!(mem.read(offset_at(3, 7)), entry);

        mem.clear(VgaChar::blank(Attribute::new(Color::LightGray, Color::Black)));
        drop(mem);
        assert!(cells.iter().all(|&cell| cell == 0x0720));
    }

    #[test]
    #[should_panic]
    fn vga_mem_rejects_out_of_bounds() {
        let mut cells = [0_u16; SIZE];
        let mut mem = unsafe { VgaMem::from_addr(VirtAddr(cells.as_mut_ptr() as usize)) };
        mem.write(SIZE, VgaChar::from_raw(0));
    }
}
