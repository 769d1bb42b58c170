/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Numeric literal parsing: the supported radices and the `%hi`/`%lo`
//! relocation-like operators.

/// Parses a bare numeric literal (no `%hi`/`%lo` wrapper) in any of the
/// four supported radices: `0b…`/`0B…` binary, `0x…`/`0X…` hexadecimal,
/// a non-empty leading-zero run octal, otherwise signed decimal.
pub fn parse_number(token: &str) -> Option<i32> {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if unsigned.is_empty() {
        return None;
    }

    let value = if let Some(bin) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).ok()?
    } else if let Some(hex) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        i64::from_str_radix(&unsigned[1..], 8).ok()?
    } else {
        unsigned.parse::<i64>().ok()?
    };

    let signed = if negative { -value } else { value };
    i32::try_from(signed).ok()
}

/// Parses a full immediate token, including the `%hi(expr)` and `%lo(expr)`
/// operators: `%hi(expr)` yields `expr >> 7` (arithmetic shift), `%lo(expr)`
/// yields `expr & 0x7F`.
pub fn parse_immediate(token: &str) -> Option<i32> {
    if let Some(inner) = strip_wrapper(token, "%hi(") {
        return Some(parse_number(inner)? >> 7);
    }
    if let Some(inner) = strip_wrapper(token, "%lo(") {
        return Some(parse_number(inner)? & 0x7F);
    }
    parse_number(token)
}

fn strip_wrapper<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = token.strip_prefix(prefix)?;
    rest.strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        assert_eq!(parse_immediate("42"), Some(42));
        assert_eq!(parse_immediate("-7"), Some(-7));
    }

    #[test]
    fn octal() {
        assert_eq!(parse_immediate("052"), Some(0o52));
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(parse_immediate("0x2A"), Some(0x2A));
        assert_eq!(parse_immediate("0X2a"), Some(0x2A));
    }

    #[test]
    fn binary() {
        assert_eq!(parse_immediate("0b101010"), Some(0b101010));
        assert_eq!(parse_immediate("0B101010"), Some(0b101010));
    }

    #[test]
    fn hi_lo_operators() {
        assert_eq!(parse_immediate("%hi(0x1234)"), Some(0x1234 >> 7));
        assert_eq!(parse_immediate("%lo(0x1234)"), Some(0x1234 & 0x7F));
    }

    #[test]
    fn malformed_is_none() {
        assert_eq!(parse_immediate("0xzz"), None);
        assert_eq!(parse_immediate(""), None);
    }
}
