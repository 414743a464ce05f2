use percent_encoding::percent_encode as encode_set;

use crate::constants::OAUTH1_ENCODE_SET;

/// Percent encode `input` per RFC 3986.
///
/// Every byte other than ASCII letters, digits, `-`, `.`, `_` and `~` becomes `%XX`
/// with uppercase hex digits. Total over any input, including empty input and
/// control bytes.
pub fn percent_encode(input: impl AsRef<[u8]>) -> String {
    encode_set(input.as_ref(), &OAUTH1_ENCODE_SET).to_string()
}
