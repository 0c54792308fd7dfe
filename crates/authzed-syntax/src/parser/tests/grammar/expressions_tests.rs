use crate::test_utils::{expect_valid_cst, expect_valid_sexp};

fn permission(expr: &str) -> String {
    format!("definition d {{ permission p = {expr} }}")
}

#[test]
fn union_then_exclusion_is_left_associative() {
    let res = expect_valid_cst("permission p = a + b - c");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "p"
        Equals "="
        ExclusionExpr
          UnionExpr
            NameRef
              Ident "a"
            Plus "+"
            NameRef
              Ident "b"
          Minus "-"
          NameRef
            Ident "c"
    "#);
}

#[test]
fn arrow_binds_tighter_than_intersection() {
    let res = expect_valid_cst("permission p = a -> b & c");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "p"
        Equals "="
        IntersectionExpr
          ArrowExpr
            NameRef
              Ident "a"
            Arrow "->"
            NameRef
              Ident "b"
          Amp "&"
          NameRef
            Ident "c"
    "#);
}

#[test]
fn arrow_then_exclusion() {
    let res = expect_valid_sexp("permission view = viewer->owner - banned");

    insta::assert_snapshot!(res, @"(source_file (permission_declaration name: (identifier) expression: (exclusion_expression left: (arrow_expression relation: (name_reference (identifier)) permission: (name_reference (identifier))) right: (name_reference (identifier)))))");
}

#[test]
fn intersection_binds_tighter_than_union() {
    let res = expect_valid_sexp(&permission("a + b & c"));

    insta::assert_snapshot!(res, @"(source_file (object_definition name: (identifier) (permission_declaration name: (identifier) expression: (union_expression left: (name_reference (identifier)) right: (intersection_expression left: (name_reference (identifier)) right: (name_reference (identifier)))))))");
}

#[test]
fn exclusion_then_union_is_left_associative() {
    let res = expect_valid_cst("permission p = a - b + c");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "p"
        Equals "="
        UnionExpr
          ExclusionExpr
            NameRef
              Ident "a"
            Minus "-"
            NameRef
              Ident "b"
          Plus "+"
          NameRef
            Ident "c"
    "#);
}

#[test]
fn chained_arrows_are_left_associative() {
    let res = expect_valid_cst("permission p = a->b->c");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "p"
        Equals "="
        ArrowExpr
          ArrowExpr
            NameRef
              Ident "a"
            Arrow "->"
            NameRef
              Ident "b"
          Arrow "->"
          NameRef
            Ident "c"
    "#);
}

#[test]
fn parentheses_override_precedence() {
    let res = expect_valid_cst("permission p = (a + b) & c");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "p"
        Equals "="
        IntersectionExpr
          ParenExpr
            ParenOpen "("
            UnionExpr
              NameRef
                Ident "a"
              Plus "+"
              NameRef
                Ident "b"
            ParenClose ")"
          Amp "&"
          NameRef
            Ident "c"
    "#);
}

#[test]
fn wildcard_and_nil_primaries() {
    let res = expect_valid_cst("permission p = nil + *");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "p"
        Equals "="
        UnionExpr
          NilExpr
            KwNil "nil"
          Plus "+"
          WildcardExpr
            Star "*"
    "#);
}

#[test]
fn nested_parentheses() {
    let res = expect_valid_sexp(&permission("((a))"));

    insta::assert_snapshot!(res, @"(source_file (object_definition name: (identifier) (permission_declaration name: (identifier) expression: (parenthesized_expression inner: (parenthesized_expression inner: (name_reference (identifier)))))))");
}

#[test]
fn deep_nesting_within_budget() {
    let depth = 200;
    let expr = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let tree = crate::parse(&permission(&expr));

    assert!(!tree.has_errors());
    assert!(!tree.is_incomplete());
}
