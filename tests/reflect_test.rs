//! Integration tests for reflective rendering.

use helpmark::{
    help_text, reflect_to_html, render_class, render_module, to_json, DescriptorKind, Error,
    JsonFormat, MemberDescriptor, ObjectDescriptor, RenderOptions,
};

fn math_module() -> ObjectDescriptor {
    ObjectDescriptor::new("math")
        .with_docstring("Arithmetic helpers.")
        .with_member(MemberDescriptor::function(
            "add",
            &["a", "b"],
            Some("Adds two numbers"),
        ))
        .with_member(MemberDescriptor::data("PI", "3.14159", "float"))
}

#[test]
fn test_function_member_renders_signature_and_docs() {
    let html = render_module(&math_module(), "math").unwrap();
    assert!(html.contains("add (args=['a', 'b'])"));
    assert!(html.contains("Adds two numbers"));
}

#[test]
fn test_docstring_formatter_headings_and_code() {
    let html = help_text::format("Usage\n-----\n>>> add(1,2)\n3", "\n");

    assert!(html.contains("<h3>Usage</h3>"));
    assert_eq!(html.matches("<pre>").count(), 1);

    // the code block opens at the prompt line and closes before `3`
    let pre_open = html.find("<pre>").unwrap();
    let prompt = html.find("&gt;&gt;&gt; add(1,2)").unwrap();
    let pre_close = html.find("</pre>").unwrap();
    let plain = html.find("3<br>").unwrap();
    assert!(pre_open < prompt);
    assert!(prompt < pre_close);
    assert!(pre_close < plain);
}

#[test]
fn test_module_and_class_summaries_differ() {
    let desc = ObjectDescriptor::new("config")
        .with_member(MemberDescriptor::data("retries", "5", "int"))
        .with_member(MemberDescriptor::property("verbose"));

    let module = render_module(&desc, "config").unwrap();
    assert!(module.contains("<table"));
    assert!(module.contains("<td>5</td>"));
    assert!(module.contains("<td>int</td>"));

    let class = render_class(&desc, "config").unwrap();
    assert!(!class.contains("<table"));
    assert!(class.contains("retries"));
    assert!(class.contains("verbose"));
    assert!(!class.contains("<td>5</td>"));
}

#[test]
fn test_missing_function_name_fails_fast() {
    let desc = ObjectDescriptor::new("broken")
        .with_member(MemberDescriptor::function("ok", &[], None))
        .with_member(MemberDescriptor::function("", &["x"], None));

    let err = render_module(&desc, "broken").unwrap_err();
    assert!(matches!(err, Error::MissingMember(_)));
}

#[test]
fn test_nested_type_recurses_as_class() {
    let point = ObjectDescriptor::new("Point")
        .with_docstring("A 2D point.")
        .with_member(MemberDescriptor::function("norm", &["self"], None))
        .with_member(MemberDescriptor::property("x"))
        .with_member(MemberDescriptor::property("y"));
    let geo = ObjectDescriptor::new("geo")
        .with_member(MemberDescriptor::nested("Point", point))
        .with_member(MemberDescriptor::data("ORIGIN", "(0, 0)", "tuple"));

    let html = render_module(&geo, "geo").unwrap();

    // the nested class is spliced inline, with its own heading and the
    // class-style name-only property list
    assert!(html.contains("<h2>class Point</h2>"));
    assert!(html.contains("norm (args=['self'])"));
    assert!(html.contains("<h3>Properties</h3>"));

    // the module's own scalars still get the value/type table
    assert!(html.contains("<td>(0, 0)</td>"));
    assert!(html.contains("<td>tuple</td>"));
}

#[test]
fn test_docstring_is_verbatim_in_pre_block() {
    let desc = ObjectDescriptor::new("raw").with_docstring("keeps *stars* and ++markers++");
    let html = render_module(&desc, "raw").unwrap();
    assert!(html.contains("<pre>keeps *stars* and ++markers++</pre>"));
}

#[test]
fn test_duplicate_members_are_not_merged() {
    let desc = ObjectDescriptor::new("m")
        .with_member(MemberDescriptor::function("f", &["x"], None))
        .with_member(MemberDescriptor::function("f", &["y"], None));
    let html = render_module(&desc, "m").unwrap();
    let first = html.find("f (args=['x'])").unwrap();
    let second = html.find("f (args=['y'])").unwrap();
    assert!(first < second);
}

#[test]
fn test_render_is_idempotent() {
    let desc = math_module();
    let first = render_module(&desc, "math").unwrap();
    let second = render_module(&desc, "math").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_line_separator_reaches_the_formatter() {
    let desc = ObjectDescriptor::new("m").with_member(MemberDescriptor::function(
        "f",
        &[],
        Some("Usage\r\n-----\r\ndetails"),
    ));
    let options = RenderOptions::new().with_line_separator("\r\n");
    let html = reflect_to_html(&desc, "m", DescriptorKind::Module, &options).unwrap();
    assert!(html.contains("<h3>Usage</h3>"));
}

#[test]
fn test_descriptor_json_round_trip() {
    let desc = math_module();
    let json = to_json(&desc, JsonFormat::Pretty).unwrap();
    let back: ObjectDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, "math");
    assert_eq!(back.member_count(), 2);

    let compact = to_json(&desc, JsonFormat::Compact).unwrap();
    assert!(!compact.contains('\n'));
}
