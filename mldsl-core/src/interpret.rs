use std::{cell::RefCell, path::PathBuf, rc::Rc};

use utf8_chars::BufReadCharsExt;

use crate::{
    builtin::prelude::BuiltinDispatcher,
    environment::prelude::Environment,
    eval::eval,
    parser::prelude::{parse_program, parse_program_from_stream},
    utils::prelude::Error
};

pub fn run_source(
    path: PathBuf,
    src: &str,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), Error> {
    let program = match parse_program(src) {
        Ok(program) => program,
        Err(error) => {
            return Err(Error::Parse { path, src: src.into(), error })
        }
    };

    eval(&program, env, dispatcher)
        .map_err(|error| Error::Runtime { path, src: src.into(), error })
}

pub fn run(
    path: PathBuf,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), Error> {
    let src = match std::fs::read_to_string(path.clone()) {
        Ok(src) => src,
        Err(err) => {
            return Err(Error::StdIo { err: err.kind() })
        }
    };

    run_source(path, &src, env, dispatcher)
}

pub fn run_from_stream(
    path: PathBuf,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), Error> {
    let file = match std::fs::File::open(path.clone()) {
        Ok(file) => file,
        Err(err) => {
            return Err(Error::StdIo { err: err.kind() })
        }
    };

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    // keep a copy of everything read so errors can still show source
    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);
    let stream = reader.chars()
        .map_while(|c| c.ok())
        .map(|c| {
            src.push(c);
            c
        });

    let program = match parse_program_from_stream(stream) {
        Ok(program) => program,
        Err(error) => {
            return Err(Error::Parse { path, src, error })
        }
    };

    eval(&program, env, dispatcher)
        .map_err(|error| Error::Runtime { path, src, error })
}
