//! Console input collection with per-prompt validation

use std::io::{BufRead, Write};

use crop_core::{CropProfile, Error, FieldReading, Result, DEFAULT_LOCATION};

/// Consecutive end-of-input reads tolerated on one prompt before giving up
pub const MAX_CONSECUTIVE_EOF: usize = 3;

pub const MIN_FIELDS: i64 = 1;
pub const MAX_FIELDS: i64 = 10;

/// Reads the crop choice and field readings, re-prompting until each value is valid
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show the crop menu until a valid choice is made
    pub fn select_crop(&mut self) -> Result<CropProfile> {
        loop {
            writeln!(self.output, "\nChoose a crop type:")?;
            for (idx, profile) in CropProfile::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", idx + 1, profile.name)?;
            }

            let raw = self.prompt_text("Enter number (1-3): ")?;
            if raw.is_empty() {
                writeln!(self.output, "Input cannot be empty. Please try again.")?;
                continue;
            }

            match parse_whole_number(&raw) {
                Some(choice) => match CropProfile::from_choice(choice) {
                    Some(profile) => return Ok(profile),
                    None => writeln!(self.output, "Please enter a number between 1 and 3.")?,
                },
                None => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    /// Ask how many fields will be assessed
    pub fn field_count(&mut self) -> Result<usize> {
        loop {
            let raw = self.prompt_text("How many fields to assess (1-10)? ")?;
            if raw.is_empty() {
                writeln!(self.output, "Input cannot be empty. Please try again.")?;
                continue;
            }

            match parse_whole_number(&raw) {
                Some(count) if (MIN_FIELDS..=MAX_FIELDS).contains(&count) => {
                    return Ok(count as usize);
                }
                Some(_) => writeln!(
                    self.output,
                    "Please enter a value between {} and {}.",
                    MIN_FIELDS, MAX_FIELDS
                )?,
                None => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    /// Collect 1-10 validated field readings
    pub fn collect_readings(&mut self) -> Result<Vec<FieldReading>> {
        let count = self.field_count()?;
        let mut readings = Vec::with_capacity(count);

        for index in 0..count {
            writeln!(self.output, "\nField {} Data:", index + 1)?;

            let name = self
                .prompt_text("Enter field name (e.g., North Field) or press Enter for default: ")?;
            let field_name = if name.is_empty() {
                FieldReading::default_name(index)
            } else {
                name
            };

            let moisture = self.read_number("Enter soil moisture level (0-100%): ", 0.0, 100.0)?;
            let temperature =
                self.read_number("Enter average temperature (in Celsius, -50 to 50): ", -50.0, 50.0)?;
            let vegetation_score =
                self.read_number("Enter vegetation score (0-10, from remote sensing): ", 0.0, 10.0)?;

            let location = self.prompt_text(
                "Enter field location (e.g., 'West Farm') or press Enter for default: ",
            )?;
            let location = if location.is_empty() {
                DEFAULT_LOCATION.to_string()
            } else {
                location
            };

            tracing::debug!(field = %field_name, moisture, temperature, vegetation_score, "reading collected");
            readings.push(FieldReading {
                field_name,
                location,
                moisture,
                temperature,
                vegetation_score,
            });
        }

        Ok(readings)
    }

    /// Read a number within `[min, max]`, re-prompting on anything else
    pub fn read_number(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64> {
        loop {
            let raw = self.prompt_text(prompt)?;
            if raw.is_empty() {
                writeln!(self.output, "Input cannot be empty. Please try again.")?;
                continue;
            }

            match raw.parse::<f64>() {
                Ok(value) if min <= value && value <= max => return Ok(value),
                Ok(_) => writeln!(self.output, "Please enter a value between {} and {}.", min, max)?,
                Err(_) => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    /// Show a prompt and return the trimmed reply. End of input is retried a
    /// few times, then reported as [`Error::EndOfInput`].
    fn prompt_text(&mut self, prompt: &str) -> Result<String> {
        let mut eof_count = 0;
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? > 0 {
                return Ok(line.trim().to_string());
            }

            eof_count += 1;
            writeln!(self.output, "\nUnexpected end of input. Please try again.")?;
            if eof_count >= MAX_CONSECUTIVE_EOF {
                return Err(Error::EndOfInput);
            }
        }
    }
}

/// Parse a menu number; decimals are accepted and truncated (`2.7` is 2)
fn parse_whole_number(raw: &str) -> Option<i64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
}
