//! Parsing of single hex tokens the way `scanf("%x")` reads them: an optional
//! sign, an optional `0x` prefix and then as many hex digits as there are.
//! Trailing garbage after the digits is ignored.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexTokenError {
    #[error("empty token")]
    Empty,
    #[error("token {0:?} does not start with a hex digit")]
    NoHexDigits(String),
}

/// Splits on the same bytes C's `isspace` accepts.
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|byte| is_separator(*byte)).filter(|token| !token.is_empty())
}

/// Like glibc, the digits are read into a 64-bit value that saturates at `u64::MAX` on
/// overflow, and the result is truncated to 32 bits.
pub fn parse_hex_token(token: &[u8]) -> Result<u32, HexTokenError> {
    if token.is_empty() {
        return Err(HexTokenError::Empty);
    }

    let (negative, rest) = match token[0] {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };

    let digits = match rest {
        [b'0', b'x' | b'X', after @ ..] if after.first().map_or(false, u8::is_ascii_hexdigit) => {
            after
        }
        _ => rest,
    };

    let digit_count = digits.iter().take_while(|byte| byte.is_ascii_hexdigit()).count();
    if digit_count == 0 {
        return Err(HexTokenError::NoHexDigits(String::from_utf8_lossy(token).into_owned()));
    }

    let value = digits[..digit_count].iter().try_fold(0u64, |acc, byte| {
        acc.checked_mul(16).map(|shifted| shifted | nibble(*byte) as u64)
    });

    Ok(match value {
        Some(value) if negative => value.wrapping_neg() as u32,
        Some(value) => value as u32,
        None => u64::MAX as u32,
    })
}

fn nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}
