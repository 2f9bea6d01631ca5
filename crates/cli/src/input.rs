//! Gathers the three simulation inputs.
//!
//! Each field is taken from the first source that provides it: a flag (or
//! its environment variable), then the parameter file, then an interactive
//! prompt. Flag and file values that fail validation end the run. Prompted
//! values are asked for again until they pass.

use std::io::{BufRead, Write};

use slide_core::{
    Parameters,
    validate::{self, Field},
};
use tracing::{debug, warn};

use crate::{cli::Cli, config::ParameterFile, error::Error};

/// Asks for values on `output` and reads answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts until a valid value for `field` is entered.
    ///
    /// Non-numeric and out-of-range answers are reported and the question is
    /// repeated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if input ends first, or [`Error::Io`] if
    /// the terminal cannot be read or written.
    pub fn ask(&mut self, field: Field) -> Result<f64, Error> {
        loop {
            write!(self.output, "{} ", question(field))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed(field));
            }

            match validate::parse_and_check(field, &line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(%err, "rejected input");
                    writeln!(self.output, "Invalid input: {err}. Please try again.")?;
                }
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

fn question(field: Field) -> &'static str {
    match field {
        Field::InitialVelocity => "Enter the initial velocity of the object in m/s.",
        Field::FrictionCoefficient => "Enter the coefficient of friction (must be between 0 and 1)",
        Field::Gravity => "Enter the value of acceleration due to gravity.",
    }
}

fn flag(cli: &Cli, field: Field) -> Option<&str> {
    match field {
        Field::InitialVelocity => cli.v0.as_deref(),
        Field::FrictionCoefficient => cli.mu.as_deref(),
        Field::Gravity => cli.g.as_deref(),
    }
}

/// Resolves validated [`Parameters`] from flags, the parameter file, and prompts.
///
/// # Errors
///
/// Returns [`Error::Validation`] for an invalid flag or file value, or any
/// error from [`Prompter::ask`].
pub fn resolve<R: BufRead, W: Write>(
    cli: &Cli,
    file: &ParameterFile,
    prompter: &mut Prompter<R, W>,
) -> Result<Parameters, Error> {
    let mut values = [0.0; 3];

    for (value, field) in values.iter_mut().zip(Field::ALL) {
        *value = if let Some(text) = flag(cli, field) {
            debug!(%field, text, "value from command line");
            validate::parse_and_check(field, text)?
        } else if let Some(number) = file.get(field) {
            debug!(%field, number, "value from parameter file");
            field.check(number)?
        } else {
            prompter.ask(field)?
        };
    }

    let [v0, mu, g] = values;
    Ok(validate::validate(v0, mu, g)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use clap::Parser;
    use slide_core::validate::ValidationError;

    fn prompter(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("slide").chain(args.iter().copied()))
            .expect("should parse")
    }

    #[test]
    fn reprompts_until_value_is_valid() {
        let mut p = prompter("abc\n1.5\n0.3\n");

        let value = p.ask(Field::FrictionCoefficient).expect("should succeed");
        assert_eq!(value, 0.3);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Enter the coefficient of friction").count(), 3);
        assert_eq!(output.matches("Invalid input").count(), 2);
        assert!(output.contains("is not a number"));
        assert!(output.contains("out of range"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("nope\n");
        let err = p.ask(Field::Gravity).unwrap_err();
        assert!(matches!(err, Error::InputClosed(Field::Gravity)));
    }

    #[test]
    fn prompts_for_every_missing_value() {
        let mut p = prompter("10\n0.3\n9.81\n");
        let params = resolve(&cli(&[]), &ParameterFile::default(), &mut p).expect("should resolve");
        assert_eq!(params, Parameters::new(10.0, 0.3, 9.81));
    }

    #[test]
    fn flags_take_precedence_over_file() {
        let file = ParameterFile {
            initial_velocity: Some(3.0),
            friction_coefficient: Some(0.9),
            gravity: None,
        };
        let mut p = prompter("9.810\n");

        let params = resolve(&cli(&["--mu", "0.2"]), &file, &mut p).expect("should resolve");

        assert_eq!(params, Parameters::new(3.0, 0.2, 9.81));
        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("acceleration due to gravity"));
        assert!(!output.contains("initial velocity"));
    }

    #[test]
    fn invalid_flag_is_not_reprompted() {
        let mut p = prompter("10\n0.3\n");
        let err = resolve(&cli(&["--g", "1.62"]), &ParameterFile::default(), &mut p).unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange {
                field: Field::Gravity,
                ..
            })
        ));
    }

    #[test]
    fn invalid_file_value_is_rejected() {
        let file = ParameterFile {
            initial_velocity: Some(-2.0),
            ..ParameterFile::default()
        };
        let mut p = prompter("");
        let err = resolve(&cli(&[]), &file, &mut p).unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange {
                field: Field::InitialVelocity,
                ..
            })
        ));
    }
}
