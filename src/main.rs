//! iNES header inspector entry point.
//!
//! Reads the header of a cartridge image, checks its signature and prints the report.
//! Usage: cartinfo [path/to/game.nes]

use std::env;
use std::process::ExitCode;

use ansi_term::Colour::{Green, Red};
use cartinfo::{Header, cartridge::header::INES_MAGIC};

fn main() -> ExitCode {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "test/nestest.nes".to_string());

    let header = match Header::load(&path) {
        Ok(header) => header,
        Err(err) => {
            eprintln!("{} {}", Red.bold().paint("ERROR"), err);
            return ExitCode::FAILURE;
        }
    };

    let valid = header.is_valid(INES_MAGIC);
    if valid {
        println!("{} {} is an iNES image", Green.bold().paint("OK"), path);
    } else {
        println!(
            "{} {} does not start with {}",
            Red.bold().paint("ERROR"),
            path,
            INES_MAGIC
        );
    }
    header.describe();

    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
