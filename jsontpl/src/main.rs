use std::io::{self, Write};

use anyhow::Error;
use jsontpl::{decode, Renderer};
use minijinja::Error as MError;

mod cli;
mod config;

use crate::config::Config;

fn execute() -> Result<i32, Error> {
    let matches = cli::make_command().get_matches();
    let config = Config::from_matches(&matches)?;

    let root = decode(config.data())?;
    let source = config.load_template()?;
    let mut renderer = Renderer::new(&source, config.undefined_behavior())?;
    renderer.set_fuel(config.fuel());

    let mut out = io::stdout().lock();
    renderer.execute(&root, &mut out)?;

    Ok(0)
}

pub fn print_error(err: &Error) {
    eprintln!("error: {err}");
    let mut source_opt = err.source();
    while let Some(source) = source_opt {
        eprintln!();
        eprintln!("caused by: {source}");
        if let Some(source) = source.downcast_ref::<MError>() {
            if source.name().is_some() {
                eprintln!("{}", source.display_debug_info());
            }
        }
        source_opt = source.source();
    }
}

fn main() {
    let code = match execute() {
        Ok(code) => code,
        Err(err) => {
            print_error(&err);
            1
        }
    };
    // best effort: whatever was rendered before a failure still goes out
    io::stdout().flush().ok();
    std::process::exit(code);
}
