use std::io;

use minijinja::value::ValueKind;
use minijinja::{context, AutoEscape, Environment, Output, State, UndefinedBehavior, Value};

use crate::error::{Error, ErrorKind};

/// The name the template is registered under.
///
/// It shows up in error messages and in the debug output of failed renders.
pub const TEMPLATE_NAME: &str = "<template>";

/// Decodes a JSON document into a value tree.
///
/// The whole input must be a single well formed JSON value; trailing
/// characters other than whitespace are rejected.
pub fn decode(source: &str) -> Result<serde_json::Value, Error> {
    Ok(serde_json::from_str(source)?)
}

/// A compiled template ready to be executed against decoded data.
///
/// Templates use the MiniJinja syntax.  The decoded root value is always
/// available as `this`.  If it is an object, its keys are also available
/// as top level variables:
///
/// ```rust
/// use jsontpl::Renderer;
/// use minijinja::UndefinedBehavior;
///
/// let root = jsontpl::decode(r#"{"name": "Ada"}"#).unwrap();
/// let renderer = Renderer::new("{{ name }}/{{ this.name }}", UndefinedBehavior::Strict).unwrap();
/// let mut out = Vec::new();
/// renderer.execute(&root, &mut out).unwrap();
/// assert_eq!(out, b"Ada/Ada");
/// ```
pub struct Renderer<'source> {
    env: Environment<'source>,
}

impl<'source> Renderer<'source> {
    /// Compiles the template source.
    ///
    /// `undefined` controls what happens when the template refers to a
    /// missing key, an out of range index or an unknown variable.
    pub fn new(
        source: &'source str,
        undefined: UndefinedBehavior,
    ) -> Result<Renderer<'source>, Error> {
        let mut env = Environment::new();
        env.set_debug(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(undefined);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_formatter(format_value);
        env.add_template(TEMPLATE_NAME, source)
            .map_err(|err| Error::new(ErrorKind::TemplateSyntax, err))?;
        Ok(Renderer { env })
    }

    /// Limits the number of instructions a single execution may run.
    ///
    /// `None` removes the limit.  Running out of fuel fails the execution.
    pub fn set_fuel(&mut self, fuel: Option<u64>) {
        self.env.set_fuel(fuel);
    }

    /// Renders the template with `root` as data into `w`.
    ///
    /// Output is written while the template evaluates, so a failure midway
    /// leaves everything rendered up to that point in `w`.  The writer is
    /// flushed after a successful render; a failing flush is an `Output`
    /// error.
    pub fn execute<W: io::Write>(&self, root: &serde_json::Value, mut w: W) -> Result<(), Error> {
        let tmpl = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|err| Error::new(ErrorKind::Execution, err))?;
        let root = Value::from_serialize(root);
        tmpl.render_to_write(context!(this => root, ..root.clone()), &mut w)
            .map(|_| ())
            .map_err(|err| {
                let kind = if err.kind() == minijinja::ErrorKind::WriteFailure {
                    ErrorKind::Output
                } else {
                    ErrorKind::Execution
                };
                Error::new(kind, err)
            })?;
        w.flush().map_err(|err| Error::new(ErrorKind::Output, err))
    }
}

/// Writes a value emitted by `{{ ... }}`.
///
/// Strings and numbers are written as is.  Booleans, `null`, arrays and
/// objects are written as compact JSON, so `true` stays `true` and `null`
/// stays `null` at any depth.
fn format_value(out: &mut Output, _state: &State, value: &Value) -> Result<(), minijinja::Error> {
    match value.kind() {
        ValueKind::Undefined => Ok(()),
        ValueKind::None | ValueKind::Bool | ValueKind::Seq | ValueKind::Map => {
            let json = serde_json::to_string(value).map_err(|err| {
                minijinja::Error::new(
                    minijinja::ErrorKind::BadSerialization,
                    "unable to format value as JSON",
                )
                .with_source(err)
            })?;
            out.write_str(&json).map_err(minijinja::Error::from)
        }
        _ => write!(out, "{value}").map_err(minijinja::Error::from),
    }
}

/// Decodes `json_source`, compiles `template_source` and renders the
/// result into `w`.
///
/// The stages run in that order and the first failure aborts the run, so
/// broken JSON is reported even if the template is broken as well.
pub fn render<W: io::Write>(
    template_source: &str,
    json_source: &str,
    undefined: UndefinedBehavior,
    w: W,
) -> Result<(), Error> {
    let root = decode(json_source)?;
    Renderer::new(template_source, undefined)?.execute(&root, w)
}
