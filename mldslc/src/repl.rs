use std::{cell::RefCell, io::Write, path::PathBuf, rc::Rc};

use mldsl_core::{
    environment::prelude::Environment,
    interpret::run_source
};

use crate::dispatch::HostDispatcher;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
    let stdin = std::io::stdin();

    // one environment for the whole session, definitions persist
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut dispatcher = HostDispatcher;

    loop {
        let mut input = String::from("");

        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        if stdin.read_line(&mut input)? == 0 {
            return Ok(());
        }

        if let Some('\n') = input.chars().next_back() {
            input.pop();
        }
        if let Some('\r') = input.chars().next_back() {
            input.pop();
        }

        match input.as_str() {
            "" => {},
            ".exit" => return Ok(()),
            _ => {
                let result = run_source(
                    PathBuf::from("<repl>"),
                    &input,
                    env.clone(),
                    &mut dispatcher
                );

                if let Err(err) = result {
                    let buf_writer = crate::cli::stderr_buffer_writer();
                    let mut buf = buf_writer.buffer();

                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");
                }
            }
        }
    }
}
