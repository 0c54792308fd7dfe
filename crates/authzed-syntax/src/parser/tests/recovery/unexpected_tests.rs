use crate::test_utils::{expect_invalid, expect_invalid_cst, expect_invalid_rendered};

#[test]
fn garbage_in_definition_body() {
    let res = expect_invalid("definition d { $ relation r: user }");

    insta::assert_snapshot!(res, @"error at 15..16: invalid character `$`");
}

#[test]
fn garbage_at_start() {
    let res = expect_invalid_cst("$$ definition user {}");

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..21]
      Error [0..2]
        Garbage [0..1] "$"
        Garbage [1..2] "$"
      ObjectDef [3..21]
        KwDefinition [3..13] "definition"
        Ident [14..18] "user"
        BraceOpen [19..20] "{"
        BraceClose [20..21] "}"
    "#);
}

#[test]
fn garbage_rendered() {
    let res = expect_invalid_rendered("definition d { $ }");

    insta::assert_snapshot!(res, @r"
    error: invalid character `$`
      |
    1 | definition d { $ }
      |                ^
    ");
}

#[test]
fn error_does_not_stop_later_definitions() {
    let tree = crate::parse("definition a { relation r: user user2 }\ndefinition b {}");

    assert_eq!(tree.error_count(), 1);
    insta::assert_snapshot!(tree.to_sexp(), @"(source_file (object_definition name: (identifier) (relation_declaration name: (identifier) types: (type_reference type: (identifier)) (ERROR (identifier)))) (object_definition name: (identifier)))");
}

#[test]
fn stray_semicolon_in_body() {
    let res = expect_invalid("definition d { ; }");

    insta::assert_snapshot!(res, @"error at 15..16: unexpected token: stray `;`");
}

#[test]
fn stray_closing_brace_at_root() {
    let res = expect_invalid("definition d {} }");

    insta::assert_snapshot!(res, @"error at 16..17: unexpected token: expected `definition` or `caveat`");
}

#[test]
fn extra_token_after_permission_expression() {
    let input = "definition d { permission p = a b\n relation r: user }";

    let res = expect_invalid(input);

    insta::assert_snapshot!(res, @"error at 32..33: unexpected token: expected an operator or the end of the permission");
}

#[test]
fn extra_token_is_not_absorbed_into_expression() {
    let input = "definition d { permission p = a b\n relation r: user }";

    let res = expect_invalid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..53]
      ObjectDef [0..53]
        KwDefinition [0..10] "definition"
        Ident [11..12] "d"
        BraceOpen [13..14] "{"
        Permission [15..33]
          KwPermission [15..25] "permission"
          Ident [26..27] "p"
          Equals [28..29] "="
          NameRef [30..31]
            Ident [30..31] "a"
          Error [32..33]
            Ident [32..33] "b"
        Relation [35..51]
          KwRelation [35..43] "relation"
          Ident [44..45] "r"
          Colon [45..46] ":"
          TypeRef [47..51]
            Ident [47..51] "user"
        BraceClose [52..53] "}"
    "#);
}

#[test]
fn unexpected_token_in_name_slot() {
    let res = expect_invalid_cst("definition 42 {}");

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..16]
      ObjectDef [0..16]
        KwDefinition [0..10] "definition"
        Error [11..13]
          Number [11..13] "42"
        BraceOpen [14..15] "{"
        BraceClose [15..16] "}"
    "#);
}

#[test]
fn keyword_in_type_position() {
    let res = expect_invalid("definition d { relation r: nil }");

    insta::assert_snapshot!(res, @"error at 27..30: expected a type reference");
}

#[test]
fn garbage_before_trailing_newline() {
    let res = expect_invalid("definition a {}\n$\n");

    insta::assert_snapshot!(res, @"error at 16..17: invalid character `$`");
}

#[test]
fn stray_words_before_trailing_newline() {
    let res = expect_invalid_cst("definition a {}\nfoo bar\n");

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..24]
      ObjectDef [0..15]
        KwDefinition [0..10] "definition"
        Ident [11..12] "a"
        BraceOpen [13..14] "{"
        BraceClose [14..15] "}"
      Error [16..23]
        Ident [16..19] "foo"
        Ident [20..23] "bar"
    "#);
}

#[test]
fn junk_after_type_at_end_of_unclosed_definition() {
    let res = expect_invalid_cst("definition a {\n  relation r: user foo\n");

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..38]
      ObjectDef [0..37]
        KwDefinition [0..10] "definition"
        Ident [11..12] "a"
        BraceOpen [13..14] "{"
        Relation [17..37]
          KwRelation [17..25] "relation"
          Ident [26..27] "r"
          Colon [27..28] ":"
          TypeRef [29..33]
            Ident [29..33] "user"
          Error [34..37]
            Ident [34..37] "foo"
        Missing [37..37]
    "#);
}
