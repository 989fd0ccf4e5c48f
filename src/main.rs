#[macro_use]
extern crate log;

mod args;

use std::env::args as env_args;
use std::io::stderr;
use std::io::stdin;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::process::exit;

use args::Args;
use args::Input;
use bmpunveil::decode_message_with;
use bmpunveil::Bitmap;
use bmpunveil::DecodeOptions;
use bmpunveil::Error;
use bmpunveil::Stage;

fn usage() {
    print!(
r#"
Bitmap LSB message reader
Options:
  -o, --output <destiny>     - sets the destiny output file.
                                 Default: stdout
  -i, --input <input_file>   - sets the input image.
                                 Default: stdin
  -p, --padded               - skip row padding while decoding
  -q, --quiet                - don't print headers before decoding
Commands:
  show                       - writes the message hidden in image
  info                       - prints the image headers

Usage:
  bmpunveil show [-i <input>] [-o <output>] [-p] [-q]
  bmpunveil info [-i <input>] [-o <output>]
"#
    )
}

fn read_bitmap(args: &mut Args) -> Result<Bitmap, Error> {
    match args.input {
        Input::File(ref mut file) => Bitmap::read(&mut BufReader::new(file)),
        Input::Stdin => {
            // stdin can't seek, keep the whole file in memory
            let mut data = Vec::new();
            stdin().read_to_end(&mut data).map_err(Error::Io)?;
            Bitmap::from_bytes(&data)
        }
    }
}

fn exec_command(command: &str, args: &mut Args) -> Result<(), Error> {
    match command {
        "show" => {
            args.check_input()?;
            let bitmap = read_bitmap(args)?;

            if !args.quiet {
                eprint!("{}", bitmap);
            }

            bitmap.check_decodable()?;

            let options = DecodeOptions { layout: args.layout };
            let message = decode_message_with(&bitmap, &options)?;
            info!("writing {} message bytes", message.len());

            args.output.write_all(&message).map_err(Error::Io)?;
            args.output.flush().map_err(Error::Io)?;
        }
        "info" => {
            args.check_input()?;
            let bitmap = read_bitmap(args)?;

            write!(args.output, "{}", bitmap).map_err(Error::Io)?;
            let verdict = match bitmap.check_decodable() {
                Ok(()) => writeln!(args.output, "Decodable: yes"),
                Err(Error::NotDecodable(reason)) => writeln!(args.output, "Decodable: no, {}", reason),
                Err(err) => return Err(err),
            };
            verdict.map_err(Error::Io)?;
        }
        _ => {
            return Err(Error::usage(
                "Invalid command, type `bmpunveil --help` for help",
            ))
        }
    };

    Ok(())
}

/// Exit status telling apart the stage that failed
fn exit_code(err: &Error) -> i32 {
    match err.stage() {
        Stage::HeaderRead => 2,
        Stage::FormatSupport => 3,
        Stage::Decodability => 4,
        Stage::Decode => 5,
        Stage::Io | Stage::Usage => 1,
    }
}

fn main() {
    env_logger::init();

    let mut args = match Args::from_env_args(env_args()) {
        Ok(args) => args,
        Err(err) => {
            let _ = writeln!(&mut stderr(), "Error: {}", err);
            exit(1);
        }
    };

    if args.help {
        usage();
        return;
    }

    let command = match args.command {
        Some(ref s) => s.clone(),
        None => {
            usage();
            exit(1);
        }
    };

    if let Err(err) = exec_command(&command, &mut args) {
        let _ = writeln!(&mut stderr(), "Error ({}): {}", err.stage(), err);
        exit(exit_code(&err));
    }
}
