use chrono::NaiveDateTime;
use fat12::{DirectoryEntry, RootDirectory};

fn flag(set: bool, c: char) -> char {
    if set {
        c
    } else {
        '-'
    }
}

fn format(entry: &DirectoryEntry) -> String {
    let attrs = entry.attributes();
    let mut line = String::with_capacity(64);
    line.push(flag(attrs.directory(), 'd'));
    line.push(flag(attrs.read_only(), 'r'));
    line.push(flag(attrs.system(), 's'));
    line.push(flag(attrs.hidden(), 'h'));
    line.push(flag(attrs.archive(), 'a'));
    line.push_str(&format!(" {:8}", entry.size()));
    match NaiveDateTime::try_from(entry.last_modified_timestamp()) {
        Ok(datetime) => line.push_str(&format!(" {}", datetime.format("%Y-%m-%d %H:%M:%S"))),
        Err(_) => line.push_str(&format!(" {:19}", "-")),
    }
    line.push(' ');
    line.push_str(&entry.display_name());
    if attrs.directory() {
        line.push('/');
    }
    line
}

pub fn list(root: &RootDirectory) {
    for entry in root.entries() {
        println!("{}", format(entry));
    }
}

#[cfg(test)]
mod test {
    use fat12::DirectoryEntry;

    use super::format;

    fn entry(name: &[u8; 11], attributes: u8, size: u32, time: u16, date: u16) -> DirectoryEntry {
        let mut bytes = [0u8; 32];
        bytes[..11].copy_from_slice(name);
        bytes[11] = attributes;
        bytes[22..24].copy_from_slice(&time.to_le_bytes());
        bytes[24..26].copy_from_slice(&date.to_le_bytes());
        bytes[28..32].copy_from_slice(&size.to_le_bytes());
        DirectoryEntry::decode(&bytes)
    }

    #[test]
    fn test_format() {
        let file = entry(b"HELLO   TXT", 0x21, 5, 0x6DAF, 0x586F);
        assert_eq!(format(&file), format!("-r--a {:8} 2024-03-15 13:45:30 HELLO.TXT", 5));
        let directory = entry(b"BOOT       ", 0x10, 0, 0, 0);
        assert_eq!(format(&directory), format!("d---- {:8} {:19} BOOT/", 0, "-"));
    }
}
