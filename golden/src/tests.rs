use crate::{Document, Modifier, ParseError, Section, SectionId};

fn parse(input: &str) -> Document {
    input.parse().unwrap()
}

#[test]
fn test_scenario_request_sections_in_order() {
    shared::init_test_logging();

    let document =
        parse("::c0\nReqMethod::POST\nReqPath::/x\nHeader::A: 1\nHeader::B: 2\nBody::{\"k\":1}\n");

    let ids: Vec<_> = document.sections().iter().map(Section::id).collect();
    assert_eq!(
        ids,
        [
            SectionId::Comment,
            SectionId::ReqMethod,
            SectionId::ReqPath,
            SectionId::Header,
            SectionId::Body,
        ]
    );
    assert_eq!(document.section_count(), 5);

    let header = document.section(SectionId::Header).unwrap();
    assert_eq!(header.lines(), ["A: 1", "B: 2"]);
    assert_eq!(header.joined(), "A: 1\nB: 2");

    assert_eq!(document.joined(SectionId::Body).unwrap(), "{\"k\":1}");
    assert_eq!(document.section(SectionId::Comment).unwrap().lines(), ["c0"]);
}

#[test]
fn test_section_count_is_distinct_identifiers() {
    let document = parse("Header::A: 1\nHeader::B: 2\nHeader::C: 3\nReqPath::/x\n");

    assert_eq!(document.section_count(), 2);
    assert_eq!(document.section(SectionId::Header).unwrap().line_count(), 3);
}

#[test]
fn test_merge_modifier_body() {
    let document = parse("Body+::ab\ncd\n");

    let body = document.section(SectionId::Body).unwrap();
    assert_eq!(body.modifier(), Modifier::Merge);
    assert_eq!(body.lines(), ["ab", "cd"]);
    assert_eq!(body.joined(), "abcd");
}

#[test]
fn test_merge_law() {
    let lines = || vec!["a".to_string(), "b".to_string(), "c".to_string()];

    let merged = Section::new(SectionId::ReqQuery, Modifier::Merge, lines());
    let plain = Section::new(SectionId::ReqQuery, Modifier::None, lines());
    let other = Section::new(SectionId::ReqQuery, Modifier::Other('*'), lines());

    assert_eq!(merged.joined(), "abc");
    assert_eq!(plain.joined(), "a\nb\nc");
    assert_eq!(other.to_string(), "a\nb\nc");
}

#[test]
fn test_merge_query_across_lines() {
    let document = parse("ReqMethod::GET\nReqQuery+::\nkey0=val0\n&key1=val1\nReqPath::/x\n");

    assert_eq!(
        document.joined(SectionId::ReqQuery).unwrap(),
        "key0=val0&key1=val1"
    );
    assert_eq!(document.joined(SectionId::ReqPath).unwrap(), "/x");
}

#[test]
fn test_body_swallows_section_lines() {
    let document = parse("ReqMethod::POST\nBody::first\nHeader::X\n::not a comment\n\nReqPath::/y\n");

    assert_eq!(document.section_count(), 2);
    assert!(document.section(SectionId::Header).is_none());
    assert!(document.section(SectionId::ReqPath).is_none());
    assert_eq!(
        document.section(SectionId::Body).unwrap().lines(),
        ["first", "Header::X", "::not a comment", "", "ReqPath::/y"]
    );
}

#[test]
fn test_blank_lines_elided_outside_body() {
    let document = parse("Header::A: 1\n\n\nHeader::B: 2\n\nBody::\n\nline\n\n");

    assert_eq!(
        document.section(SectionId::Header).unwrap().lines(),
        ["A: 1", "B: 2"]
    );
    assert_eq!(
        document.section(SectionId::Body).unwrap().lines(),
        ["", "", "line", ""]
    );
}

#[test]
fn test_comment_after_header_fails() {
    shared::init_test_logging();

    let err = "ReqPath::/x\n::oops\n".parse::<Document>().unwrap_err();

    assert_eq!(
        err,
        ParseError::CommentAfterHeader {
            line: 2,
            content: "::oops".to_string(),
        }
    );
    assert!(err.to_string().contains("::oops"));
}

#[test]
fn test_orphan_line_fails() {
    let err = "\nplain text\nReqPath::/x\n".parse::<Document>().unwrap_err();

    assert_eq!(
        err,
        ParseError::OrphanLine {
            line: 2,
            content: "plain text".to_string(),
        }
    );
}

#[test]
fn test_comment_block_with_continuation() {
    let document = parse(":: Comment line 0.\n:: Comment line 1.\n::\ncontinued\nReqMethod::GET\n");

    assert_eq!(
        document.section(SectionId::Comment).unwrap().lines(),
        [" Comment line 0.", " Comment line 1.", "", "continued"]
    );
    assert_eq!(document.section_count(), 2);
}

#[test]
fn test_continuation_lines_append_to_current_section() {
    let document = parse("Header::A: 1\nB: 2\nReqPath::/x\n/y\nHeader::C: 3\nD: 4\n");

    assert_eq!(
        document.section(SectionId::Header).unwrap().lines(),
        ["A: 1", "B: 2", "C: 3", "D: 4"]
    );
    assert_eq!(document.section(SectionId::ReqPath).unwrap().lines(), ["/x", "/y"]);
}

#[test]
fn test_explicitly_empty_section() {
    let document = parse("ReqQuery::\nReqPath::/x\n");

    let query = document.section(SectionId::ReqQuery).unwrap();
    assert_eq!(query.lines(), [""]);
    assert_eq!(query.joined(), "");
    assert!(document.section(SectionId::Header).is_none());
}

#[test]
fn test_crlf_line_endings() {
    let document = parse("ReqMethod::GET\r\nHeader::A: 1\r\n\r\nBody::x\r\ny\r\n");

    assert_eq!(document.joined(SectionId::ReqMethod).unwrap(), "GET");
    assert_eq!(document.section(SectionId::Header).unwrap().lines(), ["A: 1"]);
    assert_eq!(document.joined(SectionId::Body).unwrap(), "x\ny");
}

#[test]
fn test_empty_input() {
    let document = parse("");
    assert_eq!(document.section_count(), 0);
    assert_eq!(document.to_wire(), "");
}

#[test]
fn test_invalid_utf8() {
    let err = Document::parse(b"Body::\xff\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidUtf8(_)));
}

#[test]
fn test_first_modifier_wins_on_repeated_opener() {
    let document = parse("Header+::X-Long: a\nHeader::bc\n");

    let header = document.section(SectionId::Header).unwrap();
    assert_eq!(header.modifier(), Modifier::Merge);
    assert_eq!(header.joined(), "X-Long: abc");
}

#[test]
fn test_round_trip() {
    let input = ":: Comment\nReqMethod::POST\nReqPath::/some/path\nReqQuery::a=1\n\
                 Header::Authorization: Bearer token\nContent-Type: application/json\n\
                 Body::\n{\n\n    \"key2\": \"val2\"\n}\n";

    let document = parse(input);
    let reparsed = parse(&document.to_wire());

    assert_eq!(reparsed, document);
    assert_eq!(document.to_wire(), input);
}

#[test]
fn test_section_to_wire() {
    let empty = Section::new(SectionId::Body, Modifier::None, Vec::new());
    assert_eq!(empty.to_wire(), "Body::\n");

    let lines = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let plain = Section::new(SectionId::Body, Modifier::None, lines.clone());
    assert_eq!(plain.to_wire(), "Body::A\nB\nC\n");

    let merged = Section::new(SectionId::Body, Modifier::Merge, lines);
    assert_eq!(merged.to_wire(), "Body+::A\nB\nC\n");

    assert_eq!(Section::comment(" Comment").to_wire(), ":: Comment\n");

    let comment = Section::new(
        SectionId::Comment,
        Modifier::None,
        vec![" one".to_string(), String::new(), "two".to_string()],
    );
    assert_eq!(comment.to_wire(), ":: one\n::\n::two\n");
}

#[test]
fn test_section_write_to_reports_bytes() {
    let section = Section::new(
        SectionId::Body,
        Modifier::Merge,
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
    );
    let mut buf = Vec::new();

    let written = section.write_to(&mut buf).unwrap();

    assert_eq!(written, 13);
    assert_eq!(buf, b"Body+::A\nB\nC\n");
}

#[test]
fn test_section_open() {
    let section = Section::open("Body+:: body").unwrap();
    assert_eq!(section.id(), SectionId::Body);
    assert_eq!(section.modifier(), Modifier::Merge);
    assert_eq!(section.lines(), [" body"]);

    let comment = Section::open("::  Comment").unwrap();
    assert_eq!(comment.id(), SectionId::Comment);
    assert_eq!(comment.modifier(), Modifier::None);
    assert_eq!(comment.lines(), ["  Comment"]);

    assert!(Section::open("not a section").is_none());
}

#[test]
fn test_builder_orders_comments_first_and_body_last() {
    let document = Document::builder()
        .section(SectionId::Body, Modifier::None, ["{}"])
        .line(SectionId::ReqMethod, "GET")
        .comment(" recorded")
        .line(SectionId::Header, "A: 1")
        .line(SectionId::Header, "B: 2")
        .build();

    assert_eq!(
        document.to_wire(),
        ":: recorded\nReqMethod::GET\nHeader::A: 1\nB: 2\nBody::{}\n"
    );
    assert_eq!(parse(&document.to_wire()), document);
}

#[test]
fn test_from_reader() {
    let document = Document::from_reader("RspCode::200\n".as_bytes()).unwrap();
    assert_eq!(document.joined(SectionId::RspCode).unwrap(), "200");
}
