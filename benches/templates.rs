#![feature(test)]
extern crate test;

use citemark::{Context, Engine, RenderOptions};
use serde_derive::Serialize;

#[bench]
pub fn big_table(b: &mut test::Bencher) {
    let size = 50;
    let mut table = Vec::with_capacity(size);
    for _ in 0..size {
        let mut inner = Vec::with_capacity(size);
        for i in 0..size {
            inner.push(i);
        }
        table.push(inner);
    }

    let mut engine = Engine::new();
    engine.add_raw_template("big-table", BIG_TABLE_TEMPLATE);
    let mut ctx = Context::new();
    ctx.insert("table", &table);

    let _ = engine.render("big-table", &ctx).unwrap();
    b.iter(|| engine.render("big-table", &ctx));
}

static BIG_TABLE_TEMPLATE: &str = "<table>
{{#table}}<tr>{{#.}}<td>{{.}}</td>{{/.}}</tr>
{{/table}}</table>";

#[derive(Serialize)]
struct Author {
    family: String,
    given: String,
}

#[derive(Serialize)]
struct Item {
    title: String,
    author: Vec<Author>,
    year: u16,
    keyword: Vec<String>,
}

fn items_context(count: usize) -> Vec<Context> {
    (0..count)
        .map(|i| {
            let item = Item {
                title: format!("On the Electrodynamics of Moving Bodies, part {}", i),
                author: vec![
                    Author { family: "Einstein".into(), given: "Albert".into() },
                    Author { family: "Grossmann".into(), given: "Marcel".into() },
                ],
                year: 1905,
                keyword: vec!["relativity".into(), "physics".into(), "electrodynamics".into()],
            };
            Context::from_serialize(item).unwrap()
        })
        .collect()
}

#[bench]
pub fn citekeys(b: &mut test::Bencher) {
    let mut engine = Engine::new();
    engine.add_template("citekey", CITEKEY_TEMPLATE, RenderOptions::identifier());
    let contexts = items_context(100);

    b.iter(|| {
        contexts.iter().map(|ctx| engine.render("citekey", ctx).unwrap()).collect::<Vec<_>>()
    });
}

static CITEKEY_TEMPLATE: &str =
    "{{#author}}{{#@first}}{{family|lower}}{{/@first}}{{/author}}{{year}}{{title|titleword:2}}";

#[bench]
pub fn note_header(b: &mut test::Bencher) {
    let mut engine = Engine::new();
    engine.add_raw_template("header", NOTE_HEADER_TEMPLATE);
    engine.add_template("tags", "[{{#keyword}}\"{{.|slug}}\",{{/keyword}}]", RenderOptions::structured());
    let contexts = items_context(100);

    b.iter(|| {
        for ctx in &contexts {
            engine.render("header", ctx).unwrap();
            engine.render("tags", ctx).unwrap();
        }
    });
}

static NOTE_HEADER_TEMPLATE: &str = "# {{title}}
{{#author}}{{given|initials}}. {{family}}{{^@last}}, {{/@last}}{{/author}} ({{year}})
{{#keyword}}#{{.|slug}} {{/keyword}}";
