//! The stable error-code table: texts, significant arguments, and message
//! formatting.

use flatjson::{AllocationStrategy, ErrorCode, parse_str};

const ALL_CODES: [ErrorCode; 22] = [
    ErrorCode::Success,
    ErrorCode::OutOfMemory,
    ErrorCode::UnexpectedEnd,
    ErrorCode::MissingRootElement,
    ErrorCode::BadRoot,
    ErrorCode::ExpectedComma,
    ErrorCode::MissingObjectKey,
    ErrorCode::ExpectedColon,
    ErrorCode::ExpectedEndOfInput,
    ErrorCode::UnexpectedComma,
    ErrorCode::ExpectedValue,
    ErrorCode::ExpectedNull,
    ErrorCode::ExpectedFalse,
    ErrorCode::ExpectedTrue,
    ErrorCode::MssingExponent,
    ErrorCode::IllegalCodepoint,
    ErrorCode::InvalidUnicodeEscape,
    ErrorCode::UnexpectedEndOfUtf16,
    ErrorCode::ExpectedU,
    ErrorCode::InvalidUtf16TrailSurrogate,
    ErrorCode::UnknownEscape,
    ErrorCode::InvalidUtf8,
];

#[test]
fn test_error_texts_are_stable() {
    assert_eq!(ErrorCode::Success.text(), "no error");
    assert_eq!(ErrorCode::OutOfMemory.text(), "out of memory");
    assert_eq!(ErrorCode::UnexpectedEnd.text(), "unexpected end of input");
    assert_eq!(ErrorCode::MissingRootElement.text(), "missing root element");
    assert_eq!(
        ErrorCode::BadRoot.text(),
        "document root must be object or array"
    );
    assert_eq!(ErrorCode::ExpectedComma.text(), "expected ,");
    assert_eq!(ErrorCode::MissingObjectKey.text(), "missing object key");
    assert_eq!(ErrorCode::ExpectedColon.text(), "expected :");
    assert_eq!(ErrorCode::ExpectedEndOfInput.text(), "expected end of input");
    assert_eq!(ErrorCode::UnexpectedComma.text(), "unexpected comma");
    assert_eq!(ErrorCode::ExpectedValue.text(), "expected value");
    assert_eq!(ErrorCode::ExpectedNull.text(), "expected 'null'");
    assert_eq!(ErrorCode::ExpectedFalse.text(), "expected 'false'");
    assert_eq!(ErrorCode::ExpectedTrue.text(), "expected 'true'");
    assert_eq!(ErrorCode::MssingExponent.text(), "missing exponent");
    assert_eq!(
        ErrorCode::IllegalCodepoint.text(),
        "illegal unprintable codepoint in string"
    );
    assert_eq!(
        ErrorCode::InvalidUnicodeEscape.text(),
        "invalid character in unicode escape"
    );
    assert_eq!(
        ErrorCode::UnexpectedEndOfUtf16.text(),
        "unexpected end of input during UTF-16 surrogate pair"
    );
    assert_eq!(ErrorCode::ExpectedU.text(), "expected \\u");
    assert_eq!(
        ErrorCode::InvalidUtf16TrailSurrogate.text(),
        "invalid UTF-16 trail surrogate"
    );
    assert_eq!(ErrorCode::UnknownEscape.text(), "unknown escape");
    assert_eq!(ErrorCode::InvalidUtf8.text(), "invalid UTF-8");
}

#[test]
fn test_only_illegal_codepoint_has_significant_arg() {
    for code in ALL_CODES {
        assert_eq!(
            code.has_significant_arg(),
            code == ErrorCode::IllegalCodepoint,
            "for {code:?}"
        );
    }
}

#[test]
fn test_message_appends_significant_arg() {
    let err = parse_str(AllocationStrategy::Dynamic, "[ \"\u{19}\" ]").unwrap_err();
    assert_eq!(err.code(), ErrorCode::IllegalCodepoint);
    assert_eq!(err.arg(), 25);
    assert_eq!(
        err.to_string(),
        "illegal unprintable codepoint in string: 25"
    );
}

#[test]
fn test_message_without_arg_is_bare_text() {
    let err = parse_str(AllocationStrategy::Dynamic, "[01]").unwrap_err();
    assert_eq!(err.to_string(), "expected ,");
}

#[test]
fn test_parse_error_is_std_error() {
    fn message(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    let err = parse_str(AllocationStrategy::Dynamic, "").unwrap_err();
    assert_eq!(message(&err), "missing root element");
}
