use core::fmt::Write;

use crate::icons::{ICON_HEIGHT, ICON_WIDTH};

pub const GUARD: &str = "ICONS_H";

pub fn write_prologue(out: &mut impl Write) -> core::fmt::Result {
    write!(out, "#ifndef {GUARD}\n#define {GUARD}\n\n")?;
    out.write_str("#include <Arduino.h>\n\n")?;
    write!(
        out,
        "// Icons are {ICON_WIDTH}x{ICON_HEIGHT} pixels, 1-bit (monochrome)\n\n"
    )
}

/// Emits one flash-resident array declaration, all bytes on a single line.
pub fn write_array(out: &mut impl Write, identifier: &str, bytes: &[u8]) -> core::fmt::Result {
    write!(out, "const unsigned char {identifier}[] PROGMEM = {{\n  ")?;
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "0x{byte:02x}")?;
    }
    out.write_str("\n};\n")
}

pub fn write_epilogue(out: &mut impl Write) -> core::fmt::Result {
    out.write_str("\n#endif\n")
}
