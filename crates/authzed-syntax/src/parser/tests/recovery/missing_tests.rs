use crate::test_utils::{expect_invalid, expect_invalid_cst};

#[test]
fn missing_definition_name() {
    let input = "definition { relation viewer: user }";

    let res = expect_invalid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..36]
      ObjectDef [0..36]
        KwDefinition [0..10] "definition"
        Missing [10..10]
        BraceOpen [11..12] "{"
        Relation [13..34]
          KwRelation [13..21] "relation"
          Ident [22..28] "viewer"
          Colon [28..29] ":"
          TypeRef [30..34]
            Ident [30..34] "user"
        BraceClose [35..36] "}"
    "#);
}

#[test]
fn missing_definition_name_diagnostic() {
    let res = expect_invalid("definition { relation viewer: user }");

    insta::assert_snapshot!(res, @"error at 10..10: expected definition name");
}

#[test]
fn missing_definition_name_is_a_name_field() {
    let tree = crate::parse("definition { relation viewer: user }");

    insta::assert_snapshot!(tree.to_sexp(), @"(source_file (object_definition name: (MISSING) (relation_declaration name: (identifier) types: (type_reference type: (identifier)))))");
}

#[test]
fn missing_relation_name() {
    let res = expect_invalid("definition d { relation : user }");

    insta::assert_snapshot!(res, @"error at 23..23: expected relation name");
}

#[test]
fn missing_equals_in_permission() {
    let res = expect_invalid("definition d { permission p viewer }");

    insta::assert_snapshot!(res, @r"
    error at 28..34: unexpected token: expected `=` after permission name
    error at 34..34: expected `=` after permission name
    ");
}

#[test]
fn trailing_operator() {
    let res = expect_invalid("definition d { permission p = a + }");

    insta::assert_snapshot!(res, @"error at 34..34: `+` has no right operand");
}

#[test]
fn missing_left_operand_still_builds_the_operator_node() {
    let tree = crate::parse("definition d { permission p = + b }");

    assert_eq!(tree.error_count(), 1);
    insta::assert_snapshot!(tree.to_sexp(), @"(source_file (object_definition name: (identifier) (permission_declaration name: (identifier) expression: (union_expression left: (MISSING) right: (name_reference (identifier))))))");
}

#[test]
fn missing_expression() {
    let res = expect_invalid("definition d { permission p = }");

    insta::assert_snapshot!(res, @"error at 30..30: expected an expression");
}

#[test]
fn missing_type_reference() {
    let res = expect_invalid("definition d { relation r: }");

    insta::assert_snapshot!(res, @"error at 26..26: expected a type reference");
}

#[test]
fn missing_wildcard_star() {
    let res = expect_invalid("definition d { relation r: user: }");

    insta::assert_snapshot!(res, @"error at 32..32: expected `*` after `:`");
}

#[test]
fn missing_parameter_type() {
    let res = expect_invalid("caveat c(a) { a }");

    insta::assert_snapshot!(res, @"error at 10..10: expected a parameter type");
}

#[test]
fn empty_parentheses() {
    let res = expect_invalid("definition d { permission p = () }");

    insta::assert_snapshot!(res, @"error at 31..31: expected an expression inside parentheses");
}
