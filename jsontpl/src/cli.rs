/// This module defines the command-line interface for the CLI.
/// It is separated into its own file because it is used both by the main
/// application and by build.rs to generate shell completions.
use std::path::PathBuf;

use clap::{arg, command, value_parser, ArgAction, Command};

const BEHAVIOR: &str = "Template Behavior";

pub(super) fn make_command() -> Command {
    command!()
        .disable_help_flag(true)
        .max_term_width(120)
        .override_usage(
            "jsontpl [OPTIONS] <TEMPLATE> <DATA>\n       \
             jsontpl [OPTIONS] -f <PATH> <DATA>",
        )
        .args([
            arg!(-f --file <PATH> "Read the template from a file")
                .long_help("\
                    Reads the template from a file instead of the first argument.\n\n\
                    \
                    When this is given only the data argument is passed on the command line.  \
                    Use '-' to read the template from stdin.\n\n\
                    \
                    Example: jsontpl -f hello.txt '{\"name\": \"World\"}'")
                .value_parser(value_parser!(PathBuf)),
            arg!(--lenient "Render missing values as empty strings")
                .long_help("\
                    Render missing values as empty strings instead of failing.\n\n\
                    \
                    By default referring to a missing key, an out of range index or an unknown \
                    variable aborts rendering with an error.  In lenient mode such a value renders \
                    as an empty string and is false in conditions.  Accessing an attribute of a \
                    missing value is still an error.")
                .help_heading(BEHAVIOR),
            arg!(--fuel <AMOUNT> "Limit the number of instructions a render may run")
                .long_help("\
                    Sets the maximum fuel the template can consume.\n\n\
                    \
                    Every instruction the engine executes consumes fuel, usually 1.  Once the fuel is \
                    used up rendering fails.  0, the default, disables the limit.")
                .value_parser(value_parser!(u64))
                .help_heading(BEHAVIOR),
            arg!(-h --help "Print help")
                .action(ArgAction::Help),
            arg!(template: [TEMPLATE] "The template source")
                .long_help("\
                    The template source in MiniJinja/Jinja2 syntax.\n\n\
                    \
                    The decoded data is available as 'this'.  If the data is an object, its keys \
                    are available as variables too.\n\n\
                    \
                    Example: jsontpl '{% for x in items %}{{ x }},{% endfor %}' '{\"items\": [1, 2]}'")
                .allow_hyphen_values(true),
            arg!(data: [DATA] "The JSON data to render the template with")
                .long_help("\
                    The JSON document that is decoded and used as the template's data.\n\n\
                    \
                    When --file is used this is the only positional argument.")
                .allow_hyphen_values(true),
        ])
        .about("Renders a template against JSON data and writes the result to stdout.")
}
