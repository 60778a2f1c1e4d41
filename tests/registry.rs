//! Integration tests for the registry against in-memory and injected sheets.

use std::cell::RefCell;
use std::rc::Rc;

use loudo_styled::{
    Document, Registry, SheetError, StyleElement, StyleError, StyleSheet, STYLE_ELEMENT_ID,
};
use proptest::prelude::*;

/// A sheet that stores rule text verbatim.
#[derive(Debug, Default)]
struct RawSheet {
    rules: Vec<String>,
}

impl StyleSheet for RawSheet {
    fn len(&self) -> usize {
        self.rules.len()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<usize, SheetError> {
        if index > self.rules.len() {
            return Err(SheetError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        self.rules.insert(index, rule.to_string());
        Ok(index)
    }

    fn rule_text(&self, index: usize) -> Option<String> {
        self.rules.get(index).cloned()
    }

    fn delete_rule(&mut self, index: usize) -> Result<(), SheetError> {
        if index >= self.rules.len() {
            return Err(SheetError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        self.rules.remove(index);
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Call {
    Styled(String),
    Named(String),
    Keyframed(String),
    Rule,
}

fn call_strategy() -> impl Strategy<Value = Call> {
    let ident = "[a-z][a-z0-9]{0,6}";
    prop_oneof![
        ident.prop_map(Call::Styled),
        ident.prop_map(Call::Named),
        ident.prop_map(Call::Keyframed),
        Just(Call::Rule),
    ]
}

/// Runs `calls`, returning the generated names.
fn run(registry: &mut Registry, calls: &[Call]) -> Vec<String> {
    let mut names = Vec::new();
    for call in calls {
        match call {
            Call::Styled(tag) => {
                let styled = registry.styled(tag, "color: red").unwrap();
                styled.with(registry, ":hover", "color: blue").unwrap();
                names.push(styled.class_name().to_string());
            }
            Call::Named(name) => {
                let styled = registry.styled_named("div", name, "margin: 0").unwrap();
                names.push(styled.class_name().to_string());
            }
            Call::Keyframed(name) => {
                let anim = format!("1s linear {}", name);
                names.push(registry.keyframed(&anim, "to{opacity:1}").unwrap());
            }
            Call::Rule => registry.add_rule("body", "margin: 0").unwrap(),
        }
    }
    names
}

fn suffix(name: &str) -> u64 {
    name.rsplit('-').next().unwrap().parse().unwrap()
}

proptest! {
    #[test]
    fn test_names_are_unique_and_consecutive(calls in prop::collection::vec(call_strategy(), 0..24)) {
        let mut doc = Document::new();
        let mut registry = Registry::attach(&mut doc);
        let names = run(&mut registry, &calls);

        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(suffix(name), i as u64 + 1);
        }
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_clear_makes_replays_deterministic(calls in prop::collection::vec(call_strategy(), 0..16)) {
        let mut doc = Document::new();
        let mut registry = Registry::attach(&mut doc);

        let first_names = run(&mut registry, &calls);
        let first_rules = registry.element().css_rules();

        registry.clear();
        prop_assert!(registry.element().css_rules().is_empty());

        let second_names = run(&mut registry, &calls);
        prop_assert_eq!(first_names, second_names);
        prop_assert_eq!(first_rules, registry.element().css_rules());
    }
}

#[test]
fn test_rules_follow_call_order_across_handles() {
    let mut doc = Document::new();
    let mut registry = Registry::attach(&mut doc);

    let card = registry.styled("div", "padding: 1px").unwrap();
    registry.add_rule("html", "font-size: 16px").unwrap();
    let title = registry.styled_named("h1", "title", "margin: 0").unwrap();
    card.with(&mut registry, " > p", "margin: 2px").unwrap();
    let spin = registry.keyframed("2s spin", "to{rotate:1turn}").unwrap();
    title
        .with(&mut registry, ":first-child", "margin-top: 0")
        .unwrap();

    assert_eq!(spin, "spin-3");
    assert_eq!(
        doc.style_by_id(STYLE_ELEMENT_ID).unwrap().css_rules(),
        vec![
            ".div-1 {padding: 1px;}",
            "html {font-size: 16px;}",
            ".title-2 {margin: 0;}",
            ".div-1 > p {margin: 2px;}",
            "@keyframes spin-3 { to {rotate: 1turn;} }",
            ".spin-3 {animation: 2s spin-3;}",
            ".title-2:first-child {margin-top: 0;}",
        ]
    );
}

#[test]
fn test_injected_sheet_receives_rules_verbatim() {
    let element = StyleElement::new(STYLE_ELEMENT_ID, RawSheet::default());
    let mut registry = Registry::new(element.clone());

    let div = registry.styled("div", "border: none;").unwrap();
    div.with(&mut registry, ".dark", "color:white").unwrap();
    registry.add_rule("body", "background: black").unwrap();
    registry
        .keyframed("1s ease-out fadeOut", "from{opacity:0}")
        .unwrap();

    assert_eq!(
        element.css_rules(),
        vec![
            ".div-1 { border: none;}",
            ".div-1.dark { color:white}",
            "body { background: black}",
            "@keyframes fadeOut-2 {from{opacity:0}}",
            ".fadeOut-2 { animation: 1s ease-out fadeOut-2; }",
        ]
    );
}

#[test]
fn test_log_uses_sheet_read_back() {
    let element = StyleElement::new(STYLE_ELEMENT_ID, RawSheet::default());
    let mut registry = Registry::new(element);
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    registry.set_log_sink(move |line| sink.borrow_mut().push(line.to_string()));
    registry.set_log(true);

    registry.add_rule("p", "x:y").unwrap();
    assert_eq!(*lines.borrow(), vec!["loudo-styled: p { x:y}".to_string()]);
}

#[test]
fn test_clear_drains_injected_sheet() {
    let mut doc: Document<RawSheet> = Document::default();
    let mut registry = Registry::attach(&mut doc);
    for i in 0..5 {
        registry.add_rule(&format!(".r{}", i), "").unwrap();
    }
    registry.clear();
    let element = doc.style_by_id(STYLE_ELEMENT_ID).unwrap();
    assert!(element.with_sheet(|sheet| sheet.is_empty()).unwrap());
    assert!(element.is_attached());
}

#[test]
fn test_registries_share_one_container_per_document() {
    let mut doc = Document::new();
    let mut a = Registry::attach(&mut doc);
    let mut b = Registry::attach(&mut doc);
    assert_eq!(doc.style_count(), 1);

    a.add_rule(".a", "x: 1").unwrap();
    b.add_rule(".b", "x: 2").unwrap();
    assert_eq!(a.element().css_rules(), vec![".a {x: 1;}", ".b {x: 2;}"]);
}

#[test]
fn test_detached_container_fails_loudly_but_clears_quietly() {
    let mut doc = Document::new();
    let mut registry = Registry::attach(&mut doc);
    registry.styled("div", "").unwrap();
    doc.remove_style(STYLE_ELEMENT_ID);

    assert_eq!(
        registry.keyframed("1s k", "").unwrap_err(),
        StyleError::Unavailable
    );
    registry.clear();
    assert_eq!(registry.counter(), 0);
}

#[test]
fn test_bracketed_selectors_survive_the_registry() {
    let mut doc = Document::new();
    let mut registry = Registry::attach(&mut doc);

    let input = registry.styled("input", "color: red").unwrap();
    input
        .with(&mut registry, ":not(.x)", "color: blue")
        .unwrap();
    registry
        .add_rule("a[href]", "text-decoration: none")
        .unwrap();
    registry
        .add_rule("@supports (display: grid)", ".grid { display: grid }")
        .unwrap();

    assert_eq!(
        doc.style_by_id(STYLE_ELEMENT_ID).unwrap().css_rules(),
        vec![
            ".input-1 {color: red;}",
            ".input-1:not(.x) {color: blue;}",
            "a[href] {text-decoration: none;}",
            "@supports (display: grid) { .grid {display: grid;} }",
        ]
    );
}
