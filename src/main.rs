use anyhow::Result;
use argh::FromArgs;
use playback_commands::io_adapters::{EditorReader, PlainReader};
use playback_commands::{ExitCode, Interpreter};
use std::io;

#[derive(FromArgs)]
/// Read playback commands (play, pause, rewind, fast-forward, stop, quit)
/// from the terminal and print what was recognized.
struct Args {
    #[argh(switch)]
    /// read plain lines from standard input instead of using the line editor.
    plain: bool,

    #[argh(switch)]
    /// do not print the welcome banner.
    no_banner: bool,
}

fn run(args: &Args) -> Result<ExitCode> {
    let interpreter = Interpreter::default().with_banner(!args.no_banner);
    let mut stdout = io::stdout();

    if args.plain {
        let mut reader = PlainReader::new(io::stdin().lock(), io::stdout());
        interpreter.repl(&mut reader, &mut stdout)
    } else {
        let mut reader = EditorReader::new()?;
        interpreter.repl(&mut reader, &mut stdout)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();
    log::debug!("plain={} no_banner={}", args.plain, args.no_banner);

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
