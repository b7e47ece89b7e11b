use clap::Parser;
use mididump::TraceWriter;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

/// Print the structure of a Standard MIDI File as a readable trace.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the MIDI file.
    file: PathBuf,
}

fn main() {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };
    let stdout = io::stdout();
    let mut sink = TraceWriter::new(BufWriter::new(stdout.lock()));
    let result = mididump::dump_path(&args.file, &mut sink);
    if let Err(e) = sink.flush() {
        eprintln!("{}", e);
        process::exit(3);
    }
    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}
