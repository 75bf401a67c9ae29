//! Renders [MiniJinja](https://docs.rs/minijinja) templates against JSON data.
//!
//! Rendering is a three stage pipeline: the JSON document is decoded into a
//! value tree, the template source is compiled and the template is executed
//! with the decoded value as its data.  The first stage that fails aborts
//! the run with an [`Error`] naming the stage.
//!
//! ```rust
//! use minijinja::UndefinedBehavior;
//!
//! let mut out = Vec::new();
//! jsontpl::render(
//!     "{% for x in items %}{{ x }},{% endfor %}",
//!     r#"{"items": [1, 2, 3]}"#,
//!     UndefinedBehavior::Strict,
//!     &mut out,
//! )
//! .unwrap();
//! assert_eq!(out, b"1,2,3,");
//! ```
//!
//! # Data
//!
//! The decoded root value is available as `this`.  If the root is an object,
//! its keys are available as top level variables as well, so `{{ name }}`
//! and `{{ this.name }}` are the same thing unless the data has a key called
//! `this`.
//!
//! # Output
//!
//! Strings and numbers are written as they are.  Booleans, `null`, arrays
//! and objects are written as compact JSON, so `{{ this }}` with `[true, null]`
//! renders `[true,null]`.  The decoder keeps numbers as 64 bit integers or
//! floats, so integers outside the 64 bit range lose precision and render
//! as floats.
//!
//! # Undefined values
//!
//! What happens on a missing key or an out of range index is controlled by
//! the [`UndefinedBehavior`](minijinja::UndefinedBehavior) passed in.  The
//! command line tool uses [`Strict`](minijinja::UndefinedBehavior::Strict)
//! unless `--lenient` is given.
mod error;
mod render;

pub use self::error::{Error, ErrorKind};
pub use self::render::{decode, render, Renderer, TEMPLATE_NAME};
