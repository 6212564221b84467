/*!
## Terminal host

Reads lines with `linefeed`, pumps the runtime, and renders its events.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
extern crate mortal;

mod disk;

pub use disk::DiskLibrary;

use crate::mach::{Event, Library, MemoryLibrary, Runtime, YIELD_INTERVAL};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const BANNER: &str = "MSX BASIC";

/// MSX flavored line-numbered BASIC.
#[derive(Parser, Debug)]
#[command(name = "msx", version, about)]
pub struct Options {
    /// Directory for SAVE, LOAD and FILES
    #[arg(long, default_value = "./programs")]
    pub dir: PathBuf,

    /// Keep saved programs in memory instead of on disk
    #[arg(long)]
    pub memory: bool,

    /// Program lines executed between checks for Ctrl-C
    #[arg(long, default_value_t = YIELD_INTERVAL)]
    pub slice: usize,

    /// Do not print the banner
    #[arg(long)]
    pub quiet: bool,
}

impl Options {
    fn library(&self) -> Box<dyn Library> {
        if self.memory {
            Box::new(MemoryLibrary::new())
        } else {
            Box::new(DiskLibrary::new(&self.dir))
        }
    }
}

pub fn main() {
    let options = Options::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    if let Err(error) = main_loop(&options, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(options: &Options, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::new(options.library());
    let command = Interface::new("MSX")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    let slice = options.slice.max(1);
    let mut print_ready = true;
    if !options.quiet {
        command.write_fmt(format_args!("{}\n", BANNER))?;
    }

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(slice) {
            Event::Stopped => {
                if print_ready {
                    print_ready = false;
                    command.write_fmt(format_args!("READY.\n"))?;
                }
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if !string.trim().is_empty() {
                    command.add_history_unique(string.clone());
                    print_ready = !string.trim_start().starts_with(|c: char| c.is_ascii_digit());
                }
                runtime.enter(&string);
            }
            Event::Input(prompt) => {
                input.set_prompt(&format!("{} ", prompt))?;
                match input.read_line()? {
                    ReadResult::Input(string) => runtime.enter(&string),
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.cancel_input();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?;
                print_ready = true;
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Cls => {
                clear_screen()?;
            }
            Event::Running => {
                print_ready = true;
            }
        }
    }
    Ok(())
}

fn clear_screen() -> std::io::Result<()> {
    mortal::Terminal::new()?.clear_screen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::parse_from(["msx"]);
        assert_eq!(options.dir, PathBuf::from("./programs"));
        assert_eq!(options.slice, YIELD_INTERVAL);
        assert!(!options.memory && !options.quiet);
    }

    #[test]
    fn test_options() {
        let options = Options::parse_from(["msx", "--memory", "--slice", "500", "--quiet"]);
        assert!(options.memory && options.quiet);
        assert_eq!(options.slice, 500);
    }

    #[test]
    fn test_clear_screen_signature() {
        let clear: fn() -> std::io::Result<()> = clear_screen;
        let _ = clear;
    }
}
