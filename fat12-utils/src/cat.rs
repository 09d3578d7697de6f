use std::ffi::OsStr;
use std::io::{self, BufWriter, Write};

use fat12::io::std::FileIO;
use fat12::{RootDirectory, FAT, FAT12};

use super::failure::Failure;
use super::render;

pub fn cat(
    fat12: &mut FAT12<FileIO>,
    fat: &FAT,
    root: &RootDirectory,
    name: &OsStr,
    hexdump: bool,
) -> Result<(), Failure> {
    let entry = match root.find_bytes(name.as_encoded_bytes()) {
        Ok(Some(entry)) => entry,
        Ok(None) => return Err(Failure::NotFound(name.to_owned())),
        Err(e) => return Err(Failure::Name(name.to_owned(), e)),
    };
    let (cluster, size) = (entry.first_cluster(), entry.size());
    debug!("{} starts at cluster {} size {}", entry.display_name(), cluster, size);
    let bytes = fat12.read_file(fat, root, entry).map_err(Failure::file)?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    match hexdump {
        true => render::hexdump(&mut stdout, &bytes)?,
        false => render::escape(&mut stdout, &bytes)?,
    }
    stdout.flush()?;
    Ok(())
}
