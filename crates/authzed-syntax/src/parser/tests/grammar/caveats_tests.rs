use crate::test_utils::{expect_valid_cst, expect_valid_sexp};
use indoc::indoc;

#[test]
fn simple_caveat() {
    let input = "caveat is_tuesday(day string) { day == 'tuesday' }";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      CaveatDef
        KwCaveat "caveat"
        Ident "is_tuesday"
        ParamList
          ParenOpen "("
          Param
            Ident "day"
            TypeExpr
              Ident "string"
          ParenClose ")"
        BraceOpen "{"
        CaveatExpr
          Ident "day"
          EqEq "=="
          StringLit "'tuesday'"
        BraceClose "}"
    "#);
}

#[test]
fn generic_parameter_types() {
    let input = "caveat c(m map<list<int>>, u uint,) { true }";

    let res = expect_valid_sexp(input);

    insta::assert_snapshot!(res, @"(source_file (caveat_definition name: (identifier) parameters: (parameter_list parameter: (parameter name: (identifier) type: (type_expression name: (identifier) argument: (type_expression name: (identifier) argument: (type_expression name: (identifier))))) parameter: (parameter name: (identifier) type: (type_expression name: (identifier)))) expression: (caveat_expression (identifier))))");
}

#[test]
fn caveat_body_keeps_nested_braces() {
    let input = indoc! {r#"
    caveat c(m map<int>) {
        {"a": 1}.a == m["a"] && (1 + 2) > 0
    }
    "#};

    let tree = crate::parse(input);

    assert!(!tree.has_errors());
    let text = tree
        .root()
        .descendants()
        .find(|n| n.kind() == crate::SyntaxKind::CaveatExpr)
        .map(|n| n.text().to_string());
    assert_eq!(
        text.as_deref(),
        Some(r#"{"a": 1}.a == m["a"] && (1 + 2) > 0"#)
    );
}

#[test]
fn caveat_followed_by_definition() {
    let input = indoc! {r#"
    caveat c(a int) {
        a > 1
    }

    definition user {}
    "#};

    let res = expect_valid_sexp(input);

    insta::assert_snapshot!(res, @"(source_file (caveat_definition name: (identifier) parameters: (parameter_list parameter: (parameter name: (identifier) type: (type_expression name: (identifier)))) expression: (caveat_expression (identifier) (number))) (object_definition name: (identifier)))");
}
