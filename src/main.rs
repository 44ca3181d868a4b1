use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bx0::error::Bx0Error;
use bx0::frontend::Source;
use clap::Parser;
use tracing::debug;

/// Interpreter for BX0, a language of 64-bit integer variables,
/// assignments and `print` statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Continue with the next file after a file fails instead of stopping.
    #[arg(short, long)]
    keep_going: bool,

    /// Print each file's syntax tree instead of running it.
    #[arg(long)]
    dump_ast: bool,

    /// Source files, processed in order with a fresh environment each.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn process_file(path: &Path, dump_ast: bool) -> Result<(), String> {
    let source = Source::load(path)
        .map_err(|e| format!("Error: cannot read {}: {}", path.display(), e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if dump_ast {
        bx0::parse(source.text())
            .map_err(Bx0Error::from)
            .and_then(|program| {
                write!(out, "{}", program)
                    .and_then(|()| out.flush())
                    .map_err(|e| Bx0Error::Runtime(e.into()))
            })
    } else {
        bx0::interpret(source.text(), &mut out)
    };

    result.map_err(|e| e.render(&source))
}

fn main() -> ExitCode {
    bx0::init_tracing();
    let args = Args::parse();

    let mut failed = false;
    for path in &args.files {
        println!("[[ processing {} ]]", path.display());
        debug!(file = %path.display(), "processing");

        if let Err(report) = process_file(path, args.dump_ast) {
            eprintln!("{}", report);
            failed = true;
            if !args.keep_going {
                break;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
