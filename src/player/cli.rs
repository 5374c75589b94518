#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use rand::rngs::SmallRng;

use crate::engine::{Coordinate, InputError, MoveError};

use super::Combatant;

/// Human player typing "row column", both one-based.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse two one-based integers into a zero-based coordinate.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(zero_based(row)?, zero_based(col)?))
}

/// Integers too large for a coordinate are clamped, so they end up off the
/// grid rather than being reported as garbage.
fn zero_based(token: &str) -> Result<i32, InputError> {
    let value = match token.parse::<i64>() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(InputError::NotANumber),
        },
    };
    let clamped = value.saturating_sub(1).clamp(i32::MIN.into(), i32::MAX.into());
    Ok(clamped as i32)
}

impl<R: BufRead, W: Write> Combatant for CliPlayer<R, W> {
    fn choose_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Result<Coordinate, MoveError> {
        write!(self.output, "Your move: ").map_err(|_| InputError::Closed)?;
        self.output.flush().map_err(|_| InputError::Closed)?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputError::Closed.into()),
            Ok(_) => Ok(parse_target(&line)?),
        }
    }

    fn report_error(&mut self, err: &MoveError) {
        if let Err(e) = writeln!(self.output, "{}", err) {
            log::warn!("could not show error to player: {}", e);
        }
    }
}
