use crate::parse;

#[test]
fn comments_between_tokens_stay_in_the_node() {
    let tree = parse("definition user { // c\n}");

    insta::assert_snapshot!(tree.printer().with_trivia(true).dump(), @r#"
    SourceFile
      ObjectDef
        KwDefinition "definition"
        Whitespace " "
        Ident "user"
        Whitespace " "
        BraceOpen "{"
        Whitespace " "
        LineComment "// c"
        Newline "\n"
        BraceClose "}"
    "#);
}

#[test]
fn leading_and_trailing_trivia_belong_to_the_root() {
    let tree = parse("/** doc */\ndefinition user {}\n");

    insta::assert_snapshot!(tree.printer().with_trivia(true).with_spans(true).dump(), @r#"
    SourceFile [0..30]
      BlockComment [0..10] "/** doc */"
      Newline [10..11] "\n"
      ObjectDef [11..29]
        KwDefinition [11..21] "definition"
        Whitespace [21..22] " "
        Ident [22..26] "user"
        Whitespace [26..27] " "
        BraceOpen [27..28] "{"
        BraceClose [28..29] "}"
      Newline [29..30] "\n"
    "#);
}

#[test]
fn comments_show_in_sexp() {
    let tree = parse("// note\ndefinition user {}");

    insta::assert_snapshot!(tree.to_sexp(), @"(source_file (line_comment) (object_definition name: (identifier)))");
}

#[test]
fn trivia_only_source() {
    let tree = parse("  // nothing here\n");

    assert!(!tree.has_errors());
    assert_eq!(tree.text(), "  // nothing here\n");
    insta::assert_snapshot!(tree.printer().with_trivia(true).dump(), @r#"
    SourceFile
      Whitespace "  "
      LineComment "// nothing here"
      Newline "\n"
    "#);
}
