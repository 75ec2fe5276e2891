use crate::constants::*;
use crate::core::i18n::COMPANY_NAME;
use crate::core::Translator;
use crate::dom;
use crate::page;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every `.lang-switch` button flips between EN and FR and re-renders the text.
pub fn wire_language_switch(document: &web::Document, translator: Rc<RefCell<Translator>>) {
    for switch in dom::query_all(document, LANG_SWITCH_SELECTOR) {
        let translator_c = translator.clone();
        let document_c = document.clone();
        dom::add_element_click_listener(&switch, move |_| {
            let lang = translator_c.borrow_mut().toggle();
            page::apply_language(&document_c, &translator_c.borrow());
            log::info!("[i18n] language={}", lang);
        });
    }
}

/// Adds the `scrolled` class to the nav once the page scrolls past the threshold.
pub fn wire_nav_scroll(window: &web::Window, document: &web::Document) {
    let Some(nav) = document.get_element_by_id(NAV_ID) else {
        return;
    };
    let window_c = window.clone();
    let update = move || {
        let y = window_c.scroll_y().unwrap_or(0.0);
        dom::set_class(&nav, NAV_SCROLLED_CLASS, y > NAV_SCROLL_THRESHOLD_PX);
    };
    update();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Menu button shows/hides the mobile menu; following a link closes it.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) else {
        return;
    };
    let menu_t = menu.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        _ = menu_t.class_list().toggle(HIDDEN_CLASS);
    });
    for link in dom::query_all(document, &format!("#{} a", MOBILE_MENU_ID)) {
        let menu_l = menu.clone();
        dom::add_element_click_listener(&link, move |_| {
            dom::set_class(&menu_l, HIDDEN_CLASS, true);
        });
    }
}

/// Contact submit opens the visitor's mail client; nothing is sent from the page.
pub fn wire_contact_submit(document: &web::Document) {
    let Some(button) = document.get_element_by_id(CONTACT_SUBMIT_ID) else {
        return;
    };
    let document_c = document.clone();
    dom::add_element_click_listener(&button, move |ev| {
        ev.prevent_default();
        let name = input_value(&document_c, CONTACT_NAME_ID);
        let email = input_value(&document_c, CONTACT_EMAIL_ID);
        let href = mailto_href(&name, &email);
        if let Some(w) = web::window() {
            if let Err(e) = w.location().set_href(&href) {
                log::error!("[contact] could not open mail client: {:?}", e);
            }
        }
    });
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

fn mailto_href(name: &str, email: &str) -> String {
    let mut href = format!("mailto:{}", CONTACT_EMAIL);
    if name.is_empty() && email.is_empty() {
        return href;
    }
    let subject = format!("{} / {}", COMPANY_NAME, name);
    let body = format!("{}\n{}", name, email);
    href.push_str(&format!(
        "?subject={}&body={}",
        String::from(js_sys::encode_uri_component(&subject)),
        String::from(js_sys::encode_uri_component(&body))
    ));
    href
}
