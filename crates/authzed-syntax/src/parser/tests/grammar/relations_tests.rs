use crate::test_utils::{expect_valid_cst, expect_valid_sexp};

#[test]
fn relation_with_several_types() {
    let input = "definition doc { relation viewer: user | group#member | user:* }";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r##"
    SourceFile
      ObjectDef
        KwDefinition "definition"
        Ident "doc"
        BraceOpen "{"
        Relation
          KwRelation "relation"
          Ident "viewer"
          Colon ":"
          TypeRef
            Ident "user"
          Pipe "|"
          TypeRef
            Ident "group"
            Hash "#"
            Ident "member"
          Pipe "|"
          TypeRef
            Ident "user"
            Colon ":"
            Star "*"
        BraceClose "}"
    "##);
}

#[test]
fn type_reference_fields() {
    let input = "definition doc { relation viewer: group#member with on_weekdays | user:* }";

    let res = expect_valid_sexp(input);

    insta::assert_snapshot!(res, @"(source_file (object_definition name: (identifier) (relation_declaration name: (identifier) types: (type_reference type: (identifier) relation: (identifier) caveat: (identifier)) types: (type_reference type: (identifier)))))");
}

#[test]
fn relation_with_caveat() {
    let input = "definition doc { relation viewer: user with ip_allowed; }";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ObjectDef
        KwDefinition "definition"
        Ident "doc"
        BraceOpen "{"
        Relation
          KwRelation "relation"
          Ident "viewer"
          Colon ":"
          TypeRef
            Ident "user"
            KwWith "with"
            Ident "ip_allowed"
          Semicolon ";"
        BraceClose "}"
    "#);
}

#[test]
fn namespaced_type_reference() {
    let input = "definition acme/doc { relation owner: acme/user }";

    let res = expect_valid_sexp(input);

    insta::assert_snapshot!(res, @"(source_file (object_definition name: (identifier) (relation_declaration name: (identifier) types: (type_reference type: (identifier)))))");
}
