use crate::test_utils::{expect_invalid, expect_invalid_cst, expect_invalid_rendered};

#[test]
fn missing_closing_brace() {
    let res = expect_invalid("definition d {\n  relation r: user\n");

    insta::assert_snapshot!(res, @"error at 13..33: missing closing `}` (related: definition starts here at 13..14)");
}

#[test]
fn missing_closing_brace_keeps_members() {
    let res = expect_invalid_cst("definition d {\n  relation r: user\n");

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..34]
      ObjectDef [0..33]
        KwDefinition [0..10] "definition"
        Ident [11..12] "d"
        BraceOpen [13..14] "{"
        Relation [17..33]
          KwRelation [17..25] "relation"
          Ident [26..27] "r"
          Colon [27..28] ":"
          TypeRef [29..33]
            Ident [29..33] "user"
        Missing [33..33]
    "#);
}

#[test]
fn unclosed_definition_before_next_definition() {
    let input = "definition a {\ndefinition b {}";

    let res = expect_invalid(input);

    insta::assert_snapshot!(res, @"error at 13..14: missing closing `}` (related: definition starts here at 13..14)");
}

#[test]
fn missing_closing_paren() {
    let res = expect_invalid("definition d { permission p = (a }");

    insta::assert_snapshot!(res, @"error at 30..32: missing closing `)` (related: parenthesized expression starts here at 30..31)");
}

#[test]
fn missing_closing_paren_rendered() {
    let res = expect_invalid_rendered("definition d { permission p = (a }");

    insta::assert_snapshot!(res, @r"
    error: missing closing `)`
      |
    1 | definition d { permission p = (a }
      |                               -^
      |                               |
      |                               parenthesized expression starts here
    ");
}

#[test]
fn missing_closing_parameter_list() {
    let res = expect_invalid("caveat c(a int { a }");

    insta::assert_snapshot!(res, @"error at 8..14: missing closing `)` (related: parameter list starts here at 8..9)");
}

#[test]
fn missing_closing_type_arguments() {
    let res = expect_invalid("caveat c(a list<int) { a }");

    insta::assert_snapshot!(res, @"error at 15..19: missing closing `>` (related: type argument list starts here at 15..16)");
}

#[test]
fn missing_closing_caveat_body() {
    let res = expect_invalid("caveat c(a int) { a > 1\ndefinition user {}");

    insta::assert_snapshot!(res, @"error at 16..23: missing closing `}` (related: caveat body starts here at 16..17)");
}
