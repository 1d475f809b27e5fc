use ssr_control::http::parser::{ParseError, find_headers_end, parse_request};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /status HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/status");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.normalized_path(), "status");
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_does_not_validate_the_method() {
    let req = b"BREW /record/start HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, "BREW");
    assert_eq!(parsed.normalized_path(), "record/start");
}

#[test]
fn test_parse_header_keys_are_case_folded_and_values_trimmed() {
    let req = b"GET / HTTP/1.1\r\nContent-Type:  application/json \r\nX-CUSTOM: value\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(
        parsed.headers.get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(parsed.headers.get("x-custom").unwrap(), "value");

    // lookup folds the caller's spelling too
    assert_eq!(parsed.header("Content-Type"), Some("application/json"));
    assert_eq!(parsed.header("x-CusToM"), Some("value"));
}

#[test]
fn test_parse_header_line_without_colon_is_ignored() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: localhost\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("host"), Some("localhost"));
}

#[test]
fn test_parse_body_is_everything_after_the_terminator() {
    // No Content-Length handling: the rest of the buffer is the body.
    let req = b"POST /api/record/save HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"a\":1}";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.body, b"{\"a\":1}".to_vec());
}

#[test]
fn test_parse_request_line_with_too_few_tokens_is_rejected() {
    let req = b"GARBAGE\r\n\r\n";
    assert!(matches!(
        parse_request(req),
        Err(ParseError::InvalidRequestLine)
    ));

    let req = b"GET /status\r\n\r\n";
    assert!(matches!(
        parse_request(req),
        Err(ParseError::InvalidRequestLine)
    ));
}

#[test]
fn test_parse_without_terminator_is_incomplete() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost\r\n";
    assert!(matches!(parse_request(req), Err(ParseError::Incomplete)));
}

#[test]
fn test_find_headers_end() {
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\nbody"), Some(14));
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
}

#[test]
fn test_normalized_path_strips_a_single_leading_slash() {
    let parsed = parse_request(b"GET //double HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.normalized_path(), "/double");

    let parsed = parse_request(b"GET noslash HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.normalized_path(), "noslash");
}

#[test]
fn test_query_strings_are_not_interpreted() {
    let parsed = parse_request(b"GET /status?verbose=1 HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.normalized_path(), "status?verbose=1");
}
