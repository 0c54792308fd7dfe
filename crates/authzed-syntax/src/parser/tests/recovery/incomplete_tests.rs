use crate::{ParseConfig, ParseLimit, parse_with_config};

#[test]
fn exec_fuel_exhaustion_keeps_the_rest_as_incomplete() {
    let input = "definition a {}\ndefinition b {}";
    let config = ParseConfig::default().with_exec_fuel(Some(3));

    let tree = parse_with_config(input, config);

    assert!(tree.is_incomplete());
    assert_eq!(tree.parse_limit(), Some(ParseLimit::ExecFuel));
    assert!(!tree.has_errors());
    assert_eq!(tree.text(), input);
    insta::assert_snapshot!(tree.printer().with_spans(true).dump(), @r#"
    SourceFile [0..31]
      ObjectDef [0..14]
        KwDefinition [0..10] "definition"
        Ident [11..12] "a"
        BraceOpen [13..14] "{"
      Incomplete [14..31]
        BraceClose [14..15] "}"
        KwDefinition [16..26] "definition"
        Ident [27..28] "b"
        BraceOpen [29..30] "{"
        BraceClose [30..31] "}"
    "#);
}

#[test]
fn exec_fuel_exhaustion_is_a_warning() {
    let input = "definition a {}\ndefinition b {}";
    let config = ParseConfig::default().with_exec_fuel(Some(3));

    let tree = parse_with_config(input, config);

    assert!(!tree.diagnostics().has_errors());
    insta::assert_snapshot!(tree.diagnostics().printer(input).plain(true).render(), @"warning at 14..31: parse limit reached: execution fuel exhausted");
}

#[test]
fn recursion_limit_stops_nesting() {
    let input = "definition d { permission p = (((a))) }";
    let config = ParseConfig::default().with_recursion_fuel(Some(2));

    let tree = parse_with_config(input, config);

    assert!(tree.is_incomplete());
    assert_eq!(tree.parse_limit(), Some(ParseLimit::RecursionDepth));
    assert!(!tree.has_errors());
    assert_eq!(tree.text(), input);
    insta::assert_snapshot!(tree.diagnostics().printer(input).plain(true).render(), @"warning at 32..39: parse limit reached: nesting too deep");
}

#[test]
fn unlimited_config_never_halts() {
    let body = "permission p = a + b\n".repeat(2_000);
    let input = format!("definition d {{\n{body}}}");

    let tree = parse_with_config(&input, ParseConfig::unlimited());

    assert!(!tree.is_incomplete());
    assert!(!tree.has_errors());
    assert_eq!(tree.text(), input);
}

#[test]
fn zero_fuel_wraps_everything() {
    let input = "definition a {}";
    let tree = parse_with_config(input, ParseConfig::default().with_exec_fuel(Some(0)));

    assert!(tree.is_incomplete());
    assert_eq!(tree.text(), input);
    insta::assert_snapshot!(tree.printer().dump(), @r#"
    SourceFile
      Incomplete
        KwDefinition "definition"
        Ident "a"
        BraceOpen "{"
        BraceClose "}"
    "#);
}
