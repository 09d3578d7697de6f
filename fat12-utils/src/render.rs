use std::io::{self, Write};

/// Printable ASCII as is, any other byte as `<xx>`, then a newline
pub fn escape<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    for &byte in bytes {
        match byte {
            b' '..=b'~' => writer.write_all(&[byte])?,
            _ => write!(writer, "<{:02x}>", byte)?,
        }
    }
    writeln!(writer)
}

pub fn hexdump<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    writeln!(writer, "{}", pretty_hex::pretty_hex(&bytes))
}
