use thiserror::Error;

/// Reason a document was rejected by [`parse`](crate::parse).
///
/// Exactly one variant is produced per failed parse; the grammar is
/// scanned left to right and the first violation wins. All variants are
/// terminal for the call, nothing of the partially built tree survives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a value")]
    ExpectValue,
    #[error("invalid value")]
    InvalidValue,
    #[error("unexpected characters after the root value")]
    RootNotSingular,
    #[error("number magnitude out of range")]
    NumberTooBig,
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    #[error("unescaped control character in string")]
    InvalidStringChar,
    #[error("expected four hexadecimal digits after \\u")]
    InvalidUnicodeHex,
    #[error("invalid surrogate pair")]
    InvalidUnicodeSurrogate,
    #[error("expected ',' or ']' in array")]
    MissCommaOrSquareBracket,
    #[error("expected a string key in object")]
    MissKey,
    #[error("expected ':' after object key")]
    MissColon,
    #[error("expected ',' or '}}' in object")]
    MissCommaOrCurlyBracket,
}
