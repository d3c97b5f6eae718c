//! Sectioned input file: an optional frequency table, phrases to encode and
//! codes to decode.
//!
//! ```text
//! FREQUENCY TABLE
//! A 19
//! B 16
//! ENCODE
//! Sally sells sea shells
//! DECODE
//! 0110101
//! ```

use crate::frequency::{self, FrequencyTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Frequency,
    Encode,
    Decode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabInput {
    pub frequencies: FrequencyTable,
    pub phrases: Vec<String>,
    pub codes: Vec<String>,
    /// Frequency-section lines that could not be used, with the reason.
    pub rejected: Vec<(String, String)>,
}

impl LabInput {
    pub fn parse(contents: &str) -> Self {
        let mut input = LabInput::default();
        let mut section = None;

        for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match line.to_uppercase().as_str() {
                "FREQUENCY TABLE" => section = Some(Section::Frequency),
                "ENCODE" => section = Some(Section::Encode),
                "DECODE" => section = Some(Section::Decode),
                _ => match section {
                    Some(Section::Frequency) => input.push_entry(line),
                    Some(Section::Encode) => input.phrases.push(line.to_string()),
                    Some(Section::Decode) => input.codes.push(line.to_string()),
                    None => {}
                },
            }
        }

        input
    }

    fn push_entry(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let &[symbol, weight] = parts.as_slice() else {
            return;
        };
        if !weight.chars().all(|c| c.is_ascii_digit()) {
            return;
        }

        match frequency::parse_entry(symbol, weight) {
            Ok((symbol, weight)) => {
                self.frequencies.insert(symbol, weight);
            }
            Err(e) => self.rejected.push((line.to_string(), e.to_string())),
        }
    }
}
