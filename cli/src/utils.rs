use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Format bytes as a hexadecimal dump, 16 bytes per line.
///
/// Each line holds the offset, the bytes in hex and the printable ASCII
/// characters, like `xxd`. Bytes outside ASCII are shown as `.` even when
/// they belong to a valid multi-byte sequence.
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;
    let mut output = String::new();

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        output.push_str(&format!("{:08x}  ", line * BYTES_PER_LINE));

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => output.push_str(&format!("{byte:02x} ")),
                None => output.push_str("   "),
            }
            if i == 7 {
                output.push(' ');
            }
        }

        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        output.push_str(&format!(" |{ascii}|\n"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::format_hex_dump;

    #[test]
    fn test_format_hex_dump() {
        let dump = format_hex_dump("h\u{e9}".as_bytes());
        assert_eq!(
            "00000000  68 c3 a9                                          |h..|\n",
            dump
        );
    }

    #[test]
    fn test_format_hex_dump_two_lines() {
        let dump = format_hex_dump(&[b'a'; 17]);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].ends_with("|aaaaaaaaaaaaaaaa|"));
        assert!(lines[1].starts_with("00000010  61 "));
    }
}
