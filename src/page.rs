//! Applies the active language to the static page markup.

use crate::constants::{
    ACTIVE_CLASS, I18N_PLACEHOLDER_ATTR, I18N_TEXT_ATTR, LANG_MARKER_ATTR, LANG_SWITCH_SELECTOR,
};
use crate::core::{Language, Translator};
use crate::dom;
use web_sys as web;

/// Rewrite every `data-i18n` text node and `data-i18n-placeholder` attribute,
/// then mark the active language in the switchers and on `<html lang>`.
pub fn apply_language(document: &web::Document, translator: &Translator) {
    let text_selector = format!("[{}]", I18N_TEXT_ATTR);
    for el in dom::query_all(document, &text_selector) {
        if let Some(key) = el.get_attribute(I18N_TEXT_ATTR) {
            el.set_text_content(Some(translator.translate(&key)));
        }
    }
    let placeholder_selector = format!("[{}]", I18N_PLACEHOLDER_ATTR);
    for el in dom::query_all(document, &placeholder_selector) {
        if let Some(key) = el.get_attribute(I18N_PLACEHOLDER_ATTR) {
            _ = el.set_attribute("placeholder", translator.translate(&key));
        }
    }

    let lang = translator.current_language();
    mark_switchers(document, lang);
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", lang.html_lang());
    }
}

fn mark_switchers(document: &web::Document, lang: Language) {
    let selector = format!("{} [{}]", LANG_SWITCH_SELECTOR, LANG_MARKER_ATTR);
    for marker in dom::query_all(document, &selector) {
        let is_active = marker.get_attribute(LANG_MARKER_ATTR).as_deref() == Some(lang.tag());
        dom::set_class(&marker, ACTIVE_CLASS, is_active);
    }
    for switch in dom::query_all(document, LANG_SWITCH_SELECTOR) {
        let label = match lang.other() {
            Language::En => "Switch to English",
            Language::Fr => "Switch to French",
        };
        _ = switch.set_attribute("aria-label", label);
    }
}
