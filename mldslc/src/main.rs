mod cli;
mod dispatch;
mod repl;

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use clap::Parser;
use cli::{print_finished, print_parsed, print_parsing, print_running};
use dispatch::HostDispatcher;
use mldsl_core::{
    environment::prelude::Environment,
    interpret::run_from_stream,
    parser::prelude::parse_program,
    utils::prelude::Error
};

#[derive(Parser)]
enum Command {
    /// Runs a pipeline script
    Run {
        /// Path of source file
        path: PathBuf,
    },
    /// Parses a script and prints it back without running it
    Parse {
        /// Path of source file
        path: PathBuf,
        /// Do not print parsed source code
        #[arg(short, long, default_value_t = false)]
        no_output: bool,
        /// Print ast instead of parsed source code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs Read Eval Print Loop
    Repl
}

fn main() {
    match Command::parse() {
        Command::Run { path } => {
            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_running(path.to_str().unwrap_or("<source>"));
            let start = std::time::Instant::now();

            let env = Rc::new(RefCell::new(Environment::new()));
            let mut dispatcher = HostDispatcher;

            if let Err(err) = run_from_stream(path, env, &mut dispatcher) {
                err.pretty(&mut buf);
                buf_writer
                    .print(&buf)
                    .expect("Writing error to stderr");
            }

            print_finished(std::time::Instant::now() - start);
        },
        Command::Parse { path, no_output, print_ast } => {
            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_parsing(path.to_str().unwrap_or("<source>"));
            let start = std::time::Instant::now();

            let src = match std::fs::read_to_string(&path) {
                Ok(src) => src,
                Err(err) => {
                    let error = Error::StdIo { err: err.kind() };

                    error.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");

                    return;
                }
            };

            match parse_program(&src) {
                Ok(program) => {
                    if !no_output {
                        if print_ast {
                            println!("{program:#?}");
                        } else {
                            println!("{program}");
                        }
                    }
                },
                Err(error) => {
                    let error = Error::Parse { path, src, error };

                    error.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");
                }
            }

            print_parsed(std::time::Instant::now() - start);
        },
        Command::Repl => {
            let _ = repl::start();
        }
    }
}
