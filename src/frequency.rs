//! Frequency tables: counting symbols in text and validating raw entries.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Symbol to occurrence count. Keys are single uppercase characters.
pub type FrequencyTable = BTreeMap<char, u64>;

/// English letter frequencies used when no table is supplied.
pub const STANDARD_FREQUENCIES: [(char, u64); 26] = [
    ('A', 19),
    ('B', 16),
    ('C', 17),
    ('D', 11),
    ('E', 42),
    ('F', 12),
    ('G', 14),
    ('H', 17),
    ('I', 16),
    ('J', 5),
    ('K', 10),
    ('L', 20),
    ('M', 19),
    ('N', 24),
    ('O', 18),
    ('P', 13),
    ('Q', 1),
    ('R', 25),
    ('S', 35),
    ('T', 25),
    ('U', 15),
    ('V', 5),
    ('W', 21),
    ('X', 2),
    ('Y', 8),
    ('Z', 3),
];

pub fn standard_table() -> FrequencyTable {
    STANDARD_FREQUENCIES.into_iter().collect()
}

/// Counts alphabetic characters of `text`, folded to uppercase.
pub fn count_symbols(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for symbol in text.chars().filter(|c| c.is_alphabetic()) {
        *table.entry(to_upper(symbol)).or_default() += 1;
    }
    table
}

/// Parses one textual `symbol weight` pair into a table entry.
pub fn parse_entry(symbol: &str, weight: &str) -> Result<(char, u64)> {
    let mut chars = symbol.chars();
    let (Some(first), None) = (chars.next(), chars.next()) else {
        return Err(Error::InvalidSymbol {
            symbol: symbol.to_string(),
        });
    };
    let key = to_upper(first);
    check_symbol(key)?;

    let weight: i64 = weight.trim().parse().map_err(|_| Error::InvalidWeight {
        symbol: symbol.to_string(),
        weight: weight.to_string(),
    })?;

    match weight {
        w if w < 0 => Err(Error::NegativeWeight {
            symbol: key,
            weight: w,
        }),
        0 => Err(Error::ZeroWeight { symbol: key }),
        w => Ok((key, w as u64)),
    }
}

/// Rejects any entry outside the uppercase single-symbol key space, with
/// zero weight, or whose weights sum past `u64::MAX`.
///
/// Every merged node weighs at most the table total, so a table that passes
/// can be built without overflow.
pub fn validate(table: &FrequencyTable) -> Result<()> {
    let mut total: u64 = 0;
    for (&symbol, &weight) in table {
        check_symbol(symbol)?;
        if weight == 0 {
            return Err(Error::ZeroWeight { symbol });
        }
        total = total
            .checked_add(weight)
            .ok_or(Error::WeightOverflow { symbol })?;
    }
    Ok(())
}

fn check_symbol(symbol: char) -> Result<()> {
    if symbol.is_whitespace() || symbol.is_control() || to_upper(symbol) != symbol {
        return Err(Error::InvalidSymbol {
            symbol: symbol.to_string(),
        });
    }
    Ok(())
}

// Single-char uppercase mapping; characters whose uppercase form expands to
// several chars (e.g. 'ß') are kept as-is.
pub(crate) fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
