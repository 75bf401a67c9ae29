use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{bail, Context, Error};
use clap::ArgMatches;
use minijinja::UndefinedBehavior;

const STDIN: &str = "-";

/// Where the template source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Inline(String),
    File(PathBuf),
}

/// Holds the resolved invocation.
#[derive(Debug, Clone)]
pub struct Config {
    template: TemplateSource,
    data: String,
    lenient: bool,
    fuel: u64,
}

impl Config {
    /// Resolves the positional arguments.
    ///
    /// Without `--file` exactly a template and a data argument are expected,
    /// with it only the data argument.
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, Error> {
        // clap fills positionals left to right, so with --file the data
        // argument ends up in the template slot.
        let mut positional = ["template", "data"]
            .into_iter()
            .filter_map(|id| matches.get_one::<String>(id).cloned());
        let file = matches.get_one::<PathBuf>("file");
        let (template, data) = match (file, positional.next(), positional.next()) {
            (Some(path), Some(data), None) => (TemplateSource::File(path.clone()), data),
            (Some(_), _, _) => {
                bail!("invalid arguments: expected exactly one data argument with --file")
            }
            (None, Some(template), Some(data)) => (TemplateSource::Inline(template), data),
            (None, _, _) => {
                bail!("invalid arguments: expected a template and a data argument, try --help")
            }
        };
        Ok(Config {
            template,
            data,
            lenient: matches.get_flag("lenient"),
            fuel: matches.get_one::<u64>("fuel").copied().unwrap_or(0),
        })
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn undefined_behavior(&self) -> UndefinedBehavior {
        if self.lenient {
            UndefinedBehavior::Lenient
        } else {
            UndefinedBehavior::Strict
        }
    }

    pub fn fuel(&self) -> Option<u64> {
        if self.fuel > 0 {
            Some(self.fuel)
        } else {
            None
        }
    }

    /// Returns the template source, reading it from disk or stdin if needed.
    pub fn load_template(&self) -> Result<Cow<'_, str>, Error> {
        match self.template {
            TemplateSource::Inline(ref source) => Ok(Cow::Borrowed(source.as_str())),
            TemplateSource::File(ref path) if path == Path::new(STDIN) => Ok(Cow::Owned(
                io::read_to_string(io::stdin()).context("unable to read template from stdin")?,
            )),
            TemplateSource::File(ref path) => Ok(Cow::Owned(
                fs::read_to_string(path)
                    .with_context(|| format!("unable to read template file '{}'", path.display()))?,
            )),
        }
    }
}
