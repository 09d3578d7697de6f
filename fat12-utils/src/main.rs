#[macro_use]
extern crate log;

mod cat;
mod failure;
mod list;
mod render;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fat12::io::std::FileIO;
use fat12::FAT12;

use failure::{Failure, USAGE_EXIT_CODE};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Print file as hex dump instead of escaped text
    #[clap(long)]
    hexdump: bool,
    /// Disk image formatted with FAT12
    image: PathBuf,
    /// File name in on-disk form like "KERNEL  BIN", list root directory if omitted
    name: Option<OsString>,
}

fn run(args: &Args) -> Result<(), Failure> {
    let path = args.image.clone();
    let io = FileIO::open(&args.image).map_err(|source| Failure::Open { path, source })?;
    let mut fat12 = FAT12::new(io).map_err(Failure::BootSector)?;
    let fat = fat12.fat().map_err(Failure::FAT)?;
    let root = fat12.root_directory().map_err(Failure::RootDirectory)?;
    match args.name.as_deref() {
        Some(name) => cat::cat(&mut fat12, &fat, &root, name, args.hexdump),
        None => {
            list::list(&root);
            Ok(())
        }
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // help and version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            e.print().ok();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stderr).init();

    if let Err(failure) = run(&args) {
        eprintln!("{}", failure);
        std::process::exit(failure.exit_code());
    }
}
