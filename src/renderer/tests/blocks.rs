use pretty_assertions::assert_eq;
use serde_json::json;

use crate::context::Context;
use crate::options::RenderOptions;
use crate::renderer::try_render;

use super::Record;

fn render_template(content: &str, context: &Context) -> String {
    try_render(content, context, &RenderOptions::default()).unwrap()
}

fn context(value: serde_json::Value) -> Context {
    Context::from_value(value).unwrap()
}

#[test]
fn loop_concatenates_items() {
    let ctx = context(json!({"a": ["x", "y", "z"]}));
    assert_eq!(render_template("{{#a}}{{.}}{{/a}}", &ctx), "xyz");
}

#[test]
fn loop_metadata() {
    let ctx = context(json!({"a": ["p", "q"]}));
    assert_eq!(render_template("{{#a}}{{@index}}:{{@first}};{{/a}}", &ctx), "0:true;1:false;");
    assert_eq!(
        render_template("{{#a}}{{@number}}/{{@length}} {{@odd}} {{@even}} {{@last}}|{{/a}}", &ctx),
        "1/2 true false false|2/2 false true true|"
    );
}

#[test]
fn loop_over_objects_exposes_fields() {
    let ctx = Context::from_serialize(Record::new()).unwrap();
    let inputs = vec![
        ("{{#author}}{{family}}{{#given}}, {{given}}{{/given}}; {{/author}}", "Sun, Tzu; Giles; "),
        ("{{#author}}{{.family}}{{/author}}", "SunGiles"),
        ("{{#author}}{{title|titleword}}{{/author}}", "artart"),
    ];

    for (input, expected) in inputs {
        println!("{:?} -> {:?}", input, expected);
        assert_eq!(render_template(input, &ctx), expected);
    }
}

#[test]
fn nested_loops_use_their_own_frames() {
    let ctx = context(json!({
        "groups": [
            {"name": "g1", "members": ["a", "b"]},
            {"name": "g2", "members": ["c"]},
        ]
    }));
    let template = "{{#groups}}{{name}}[{{#members}}{{name}}{{.}}{{@index}}{{/members}}]{{@index}} {{/groups}}";
    assert_eq!(render_template(template, &ctx), "g1[g1a0g1b1]0 g2[g2c0]1 ");
}

#[test]
fn loop_frames_do_not_leak() {
    let ctx = context(json!({"a": [{"x": 1}], "x": "outer"}));
    assert_eq!(render_template("{{#a}}{{x}}{{/a}}-{{x}}-{{@index}}-{{.}}", &ctx), "1-outer--");
}

#[test]
fn truthy_scalar_renders_once_with_outer_context() {
    let ctx = context(json!({"doi": "10.1000/xyz", "title": "T"}));
    assert_eq!(render_template("{{#doi}}doi: {{doi}} ({{title}}){{/doi}}", &ctx), "doi: 10.1000/xyz (T)");
    assert_eq!(render_template("{{#doi}}{{@index}}{{.}}{{/doi}}", &ctx), "");
}

#[test]
fn truthy_object_renders_once() {
    let ctx = context(json!({"container": {"title": "Journal"}}));
    assert_eq!(render_template("{{#container}}In {{container.title}}{{/container}}", &ctx), "In Journal");
}

#[test]
fn falsy_values_hide_positive_blocks() {
    let ctx = context(json!({
        "null": null, "no": false, "zero": 0, "empty": "", "none": [],
    }));

    for key in ["null", "no", "zero", "empty", "none", "missing"] {
        let positive = format!("{{{{#{k}}}}}shown{{{{/{k}}}}}", k = key);
        let negative = format!("{{{{^{k}}}}}shown{{{{/{k}}}}}", k = key);
        assert_eq!(render_template(&positive, &ctx), "", "positive block on {}", key);
        assert_eq!(render_template(&negative, &ctx), "shown", "negative block on {}", key);
    }
}

#[test]
fn arrays_of_falsy_items_are_truthy() {
    let ctx = context(json!({"a": [false, null, ""], "o": {}}));
    assert_eq!(render_template("{{^a}}empty{{/a}}", &ctx), "");
    assert_eq!(render_template("{{#a}}-{{/a}}", &ctx), "---");
    assert_eq!(render_template("{{#o}}yes{{/o}}{{^o}}no{{/o}}", &ctx), "yes");
}

#[test]
fn absent_key_consistency() {
    let ctx = Context::new();
    assert_eq!(render_template("{{k}}", &ctx), "");
    assert_eq!(render_template("{{#k}}in{{/k}}", &ctx), "");
    assert_eq!(render_template("{{^k}}in{{/k}}", &ctx), "in");
}

#[test]
fn negative_blocks_inside_loops_see_the_frame() {
    let ctx = context(json!({"a": ["x", "y", "z"]}));
    assert_eq!(render_template("{{#a}}{{.}}{{^@last}}, {{/@last}}{{/a}}", &ctx), "x, y, z");
}

#[test]
fn blocks_nest_with_different_keys() {
    let ctx = context(json!({"a": true, "b": ["1", "2"], "c": ""}));
    assert_eq!(
        render_template("{{#a}}<{{#b}}{{.}}{{^c}}!{{/c}}{{/b}}>{{/a}}", &ctx),
        "<1!2!>"
    );
}

#[test]
fn same_key_blocks_do_not_nest() {
    let ctx = context(json!({"a": true}));
    assert_eq!(render_template("{{#a}}{{#a}}x{{/a}}{{/a}}", &ctx), "{{#a}}x{{/a}}");
}

#[test]
fn positive_and_negative_blocks_side_by_side() {
    let ctx = context(json!({"doi": "", "url": "https://example.org"}));
    let template = "{{#doi}}doi:{{doi}}{{/doi}}{{^doi}}{{#url}}<{{url}}>{{/url}}{{/doi}}";
    assert_eq!(render_template(template, &ctx), "<https://example.org>");
}

#[test]
fn empty_array_renders_nothing() {
    let ctx = context(json!({"a": []}));
    assert_eq!(render_template("[{{#a}}{{.}}{{/a}}]", &ctx), "[]");
}

#[test]
fn block_keys_can_be_paths() {
    let ctx = context(json!({"record": {"authors": [{"family": "Smith"}, {"family": "Jones"}]}}));
    assert_eq!(
        render_template("{{#record.authors}}{{family}}{{^@last}} & {{/@last}}{{/record.authors}}", &ctx),
        "Smith & Jones"
    );
}
