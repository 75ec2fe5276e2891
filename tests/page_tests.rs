// Host-side tests for the host page markup the web glue drives.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod i18n {
    include!("../src/core/i18n.rs");
}

use constants::*;
use i18n::{Language, Translator};

const PAGE: &str = include_str!("../index.html");

/// Body of the single-line CSS rule whose selector list is exactly `selector`.
fn css_rule(selector: &str) -> &'static str {
    let head = format!("{selector} {{");
    let line = PAGE
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with(&head))
        .unwrap_or_else(|| panic!("no CSS rule for {selector}"));
    &line[head.len()..line.len() - 1]
}

fn z_index(selector: &str) -> i32 {
    css_rule(selector)
        .split(';')
        .filter_map(|decl| decl.trim().strip_prefix("z-index:"))
        .map(|v| v.trim().parse().expect("numeric z-index"))
        .next()
        .unwrap_or_else(|| panic!("{selector} has no z-index"))
}

fn attr_values(attr: &str) -> Vec<&'static str> {
    let needle = format!(" {attr}=\"");
    PAGE.match_indices(needle.as_str())
        .map(|(at, _)| {
            let start = at + needle.len();
            let end = start + PAGE[start..].find('"').expect("closed attribute");
            &PAGE[start..end]
        })
        .collect()
}

#[test]
fn text_overlay_lets_pointer_drags_reach_the_canvas() {
    assert!(css_rule("main").contains("pointer-events: none"));
    // Links, buttons and inputs inside the overlay opt back in
    assert!(css_rule("main a, main button, main input").contains("pointer-events: auto"));
    assert!(z_index("main") > z_index("#scene-canvas"));
}

#[test]
fn open_mobile_menu_leaves_the_menu_toggle_reachable() {
    assert!(z_index("nav") > z_index("#mobile-menu"));
    // The loader covers everything until init finishes
    assert!(z_index("#loader") > z_index("nav"));
}

#[test]
fn glue_ids_exist_in_the_page() {
    for id in [
        CANVAS_ID,
        NAV_ID,
        MENU_TOGGLE_ID,
        MOBILE_MENU_ID,
        CONTACT_NAME_ID,
        CONTACT_EMAIL_ID,
        CONTACT_SUBMIT_ID,
        LOADER_ID,
    ] {
        assert_eq!(PAGE.matches(&format!("id=\"{id}\"")).count(), 1, "id {id}");
    }
    assert!(PAGE.contains(&format!("id=\"{MOBILE_MENU_ID}\" class=\"{HIDDEN_CLASS}\"")));
}

#[test]
fn language_markers_cover_both_languages() {
    let class = LANG_SWITCH_SELECTOR.trim_start_matches('.');
    let switches = PAGE.matches(&format!("class=\"{class}\"")).count();
    assert!(switches >= 1);
    let markers = attr_values(LANG_MARKER_ATTR);
    assert_eq!(markers.len(), switches * Language::ALL.len());
    for lang in Language::ALL {
        assert!(markers.contains(&lang.to_string().as_str()));
    }
}

#[test]
fn every_page_key_has_a_translation() {
    let t = Translator::new(Language::En);
    let mut keys = attr_values(I18N_TEXT_ATTR);
    keys.extend(attr_values(I18N_PLACEHOLDER_ATTR));
    assert!(!keys.is_empty());
    for key in keys {
        for lang in Language::ALL {
            assert_ne!(t.translate_in(lang, key), key, "{lang} misses {key}");
        }
    }
}
