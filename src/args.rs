use std::fs::File;
use std::io::stdout;
use std::io::Write;

use libc::isatty;
use libc::STDIN_FILENO;

use bmpunveil::Error;
use bmpunveil::RowLayout;

enum Reading {
    Output,
    Input,
}

/// Where the bitmap comes from
pub enum Input {
    Stdin,
    File(File),
}

pub struct Args {
    pub command: Option<String>,
    pub input: Input,
    pub output: Box<dyn Write>,
    pub layout: RowLayout,
    /// skip the header dump before decoding
    pub quiet: bool,
    pub help: bool,
}

impl Args {
    pub fn from_env_args<I>(env_args: I) -> Result<Args, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = Args {
            command: None,
            input: Input::Stdin,
            output: Box::new(stdout()),
            layout: RowLayout::Packed,
            quiet: false,
            help: false,
        };

        let mut reading: Option<Reading> = None;

        // first one is the program name
        for arg in env_args.into_iter().skip(1) {
            match reading.take() {
                Some(Reading::Input) => args.parse_input(&arg)?,
                Some(Reading::Output) => args.parse_output(&arg)?,
                None => match arg.as_str() {
                    "--output" | "-o" => reading = Some(Reading::Output),
                    "--input" | "-i" => reading = Some(Reading::Input),
                    "--padded" | "-p" => args.layout = RowLayout::Padded,
                    "--quiet" | "-q" => args.quiet = true,
                    "--help" | "-h" => args.help = true,
                    command @ "show" | command @ "info" => args.command = Some(String::from(command)),
                    other => {
                        return Err(Error::Usage(format!(
                            "Unknown argument `{}`, use `bmpunveil --help` for help",
                            other
                        )))
                    }
                },
            }
        }

        if reading.is_some() {
            return Err(Error::usage("Missing value for the last option"));
        }

        Ok(args)
    }

    /// Refuse to wait on a terminal for bitmap bytes
    pub fn check_input(&self) -> Result<(), Error> {
        match self.input {
            Input::Stdin => assert_stdin_is_piped(),
            Input::File(_) => Ok(()),
        }
    }

    fn parse_input(&mut self, arg: &str) -> Result<(), Error> {
        let file = File::open(arg).map_err(Error::Io)?;

        self.input = Input::File(file);
        Ok(())
    }

    fn parse_output(&mut self, arg: &str) -> Result<(), Error> {
        let file = File::create(arg).map_err(Error::Io)?;

        self.output = Box::new(file);
        Ok(())
    }
}

fn assert_stdin_is_piped() -> Result<(), Error> {
    // SAFETY: isatty only inspects the descriptor
    let is_terminal = unsafe { isatty(STDIN_FILENO) != 0 };
    if is_terminal {
        Err(Error::usage(
            "No input set, use `bmpunveil --help` for more information",
        ))
    } else {
        Ok(())
    }
}
