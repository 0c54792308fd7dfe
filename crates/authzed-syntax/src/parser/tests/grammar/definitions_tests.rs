use crate::test_utils::{expect_valid_cst, expect_valid_cst_with_spans, expect_valid_sexp};
use indoc::indoc;

#[test]
fn empty_source() {
    let res = expect_valid_cst("");

    insta::assert_snapshot!(res, @"SourceFile");
}

#[test]
fn empty_definition() {
    let input = "definition user {}";

    let res = expect_valid_cst_with_spans(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile [0..18]
      ObjectDef [0..18]
        KwDefinition [0..10] "definition"
        Ident [11..15] "user"
        BraceOpen [16..17] "{"
        BraceClose [17..18] "}"
    "#);
}

#[test]
fn empty_definition_sexp() {
    let res = expect_valid_sexp("definition user {}");

    insta::assert_snapshot!(res, @"(source_file (object_definition name: (identifier)))");
}

#[test]
fn definition_with_relation() {
    let input = "definition document { relation viewer: user }";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ObjectDef
        KwDefinition "definition"
        Ident "document"
        BraceOpen "{"
        Relation
          KwRelation "relation"
          Ident "viewer"
          Colon ":"
          TypeRef
            Ident "user"
        BraceClose "}"
    "#);
}

#[test]
fn definition_with_relation_sexp() {
    let res = expect_valid_sexp("definition document { relation viewer: user }");

    insta::assert_snapshot!(res, @"(source_file (object_definition name: (identifier) (relation_declaration name: (identifier) types: (type_reference type: (identifier)))))");
}

#[test]
fn namespaced_definition_name() {
    let input = "definition acme/user {}";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ObjectDef
        KwDefinition "definition"
        Ident "acme/user"
        BraceOpen "{"
        BraceClose "}"
    "#);
}

#[test]
fn several_definitions() {
    let input = indoc! {r#"
    definition user {}

    definition document {
        relation owner: user
        permission edit = owner;
    }
    "#};

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ObjectDef
        KwDefinition "definition"
        Ident "user"
        BraceOpen "{"
        BraceClose "}"
      ObjectDef
        KwDefinition "definition"
        Ident "document"
        BraceOpen "{"
        Relation
          KwRelation "relation"
          Ident "owner"
          Colon ":"
          TypeRef
            Ident "user"
        Permission
          KwPermission "permission"
          Ident "edit"
          Equals "="
          NameRef
            Ident "owner"
          Semicolon ";"
        BraceClose "}"
    "#);
}

#[test]
fn top_level_permission_is_a_warning_only() {
    let tree = crate::parse("permission view = viewer + editor");

    assert!(!tree.has_errors());
    assert!(!tree.diagnostics().has_errors());
    insta::assert_snapshot!(tree.diagnostics().printer(tree.source()).plain(true).render(), @"warning at 0..33: member outside of a definition: wrap it in `definition name { ... }`");
}

#[test]
fn top_level_permission() {
    let res = expect_valid_cst("permission view = viewer + editor");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Permission
        KwPermission "permission"
        Ident "view"
        Equals "="
        UnionExpr
          NameRef
            Ident "viewer"
          Plus "+"
          NameRef
            Ident "editor"
    "#);
}
