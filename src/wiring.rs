use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{Function, Reflect};
use web_sys::{
    Document, Event, EventTarget, HtmlElement, HtmlFormElement, MediaQueryList, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::contact::ContactForm;
use crate::controller::{PageController, PageElements};
use crate::scroll::{fragment_id, AnchorScroll, ANIMATE_ATTRIBUTE};
use crate::storage::BrowserStorage;
use crate::theme::{scheme_subscription, SchemeSubscription, Theme, DARK_SCHEME_QUERY};

const THEME_TOGGLE_ID: &str = "theme-toggle";
const MENU_TOGGLE_ID: &str = "menu-toggle";
const NAV_LINKS_ID: &str = "nav-links";
const BANNER_ID: &str = "theme-banner";
const BANNER_ENABLE_ID: &str = "banner-enable";
const BANNER_DISMISS_ID: &str = "banner-dismiss";
const CONTACT_FORM_ID: &str = "contactForm";

type BrowserController = PageController<BrowserStorage, HtmlElement>;

thread_local! {
    static PAGE: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

/// Looks up the page's elements once and attaches every listener.
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| JsValue::from_str("no document element"))?;

    let config = PageConfig::from_document(&document);
    for element in query_all(&document, &config.animated_selector) {
        let _ = element.set_attribute(ANIMATE_ATTRIBUTE, "");
    }

    let theme_toggle = element_by_id(&document, THEME_TOGGLE_ID);
    let menu_button = element_by_id(&document, MENU_TOGGLE_ID);
    let elements = PageElements {
        theme_toggle: theme_toggle.clone(),
        banner: element_by_id(&document, BANNER_ID),
        menu_button: menu_button.clone(),
        nav_panel: element_by_id(&document, NAV_LINKS_ID),
        header: query_one(&document, "header"),
        animated: query_all(&document, &format!("[{}]", ANIMATE_ATTRIBUTE)),
        ..PageElements::new(root)
    };
    let storage = BrowserStorage::from_window(&window);
    let controller = Rc::new(PageController::new(config, storage, elements));

    let color_scheme = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
    controller.init_theme(system_theme(color_scheme.as_ref()));

    if let Some(toggle) = theme_toggle {
        let controller = controller.clone();
        listen(&toggle, "click", move |_| {
            let theme = controller.toggle_theme();
            debug!("theme toggled to {}", theme);
        });
    }
    if let Some(query) = color_scheme {
        watch_color_scheme(&query, &controller);
    }

    wire_banner(&document, &controller);
    if let Some(button) = menu_button.filter(|_| controller.has_menu_button()) {
        let controller = controller.clone();
        listen(&button, "click", move |_| controller.toggle_menu());
    }
    for link in query_all(&document, &controller.config().nav_link_selector) {
        let controller = controller.clone();
        listen(&link, "click", move |_| controller.close_menu());
    }
    wire_contact_form(&window, &document, &controller.config().contact_acknowledgement);
    wire_anchors(&window, &document, &controller);
    {
        let controller = controller.clone();
        let scroll_window = window.clone();
        listen(&window, "scroll", move |_| scroll_pass(&scroll_window, &controller));
    }
    after_load(&window, &document, &controller);

    info!("page behavior wired, {} theme", controller.current_theme());
    PAGE.with(|page| *page.borrow_mut() = Some(controller));
    Ok(())
}

/// Forgets the stored theme choice so the page follows the system again.
#[wasm_bindgen]
pub fn reset_theme_preference() {
    PAGE.with(|page| {
        if let Some(controller) = page.borrow().as_ref() {
            let query = web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
            let theme = controller.clear_theme_preference(system_theme(query.as_ref()));
            info!("theme preference cleared, following system ({})", theme);
        }
    });
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        warn!("failed to listen for {}: {:?}", event, err);
    }
    // Listeners stay for the lifetime of the page
    callback.forget();
}

fn system_theme(query: Option<&MediaQueryList>) -> Theme {
    Theme::from_dark(query.is_some_and(MediaQueryList::matches))
}

fn watch_color_scheme(query: &MediaQueryList, controller: &Rc<BrowserController>) {
    let controller = controller.clone();
    let on_change = Closure::wrap(Box::new(move |change: JsValue| {
        // Modern browsers pass a MediaQueryListEvent, older ones the list itself.
        // Both carry `matches`.
        let Some(is_dark) = Reflect::get(&change, &JsValue::from_str("matches"))
            .ok()
            .and_then(|matches| matches.as_bool())
        else {
            return;
        };
        controller.system_theme_changed(Theme::from_dark(is_dark));
    }) as Box<dyn FnMut(JsValue)>);

    let supports =
        |method: &str| Reflect::has(query, &JsValue::from_str(method)).unwrap_or(false);
    let callback: &Function = on_change.as_ref().unchecked_ref();
    let subscription = scheme_subscription(supports("addEventListener"), supports("addListener"));
    let attached = match subscription {
        Some(SchemeSubscription::ChangeEvent) => {
            query.add_event_listener_with_callback("change", callback)
        }
        Some(SchemeSubscription::LegacyListener) => {
            query.add_listener_with_opt_callback(Some(callback))
        }
        None => {
            debug!("no color scheme change notifications in this browser");
            return;
        }
    };
    if let Err(err) = attached {
        warn!("failed to watch color scheme: {:?}", err);
    }
    on_change.forget();
}

fn wire_banner(document: &Document, controller: &Rc<BrowserController>) {
    if let Some(enable) = element_by_id(document, BANNER_ENABLE_ID) {
        let controller = controller.clone();
        listen(&enable, "click", move |_| controller.enable_dark_from_banner());
    }
    if let Some(dismiss) = element_by_id(document, BANNER_DISMISS_ID) {
        let controller = controller.clone();
        listen(&dismiss, "click", move |_| controller.dismiss_banner());
    }
}

fn wire_contact_form(window: &Window, document: &Document, acknowledgement: &str) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let contact = ContactForm::new(form.clone(), acknowledgement.to_string());
    let window = window.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        contact.submit(|message| {
            let _ = window.alert_with_message(message);
        });
    });
}

fn wire_anchors(window: &Window, document: &Document, controller: &Rc<BrowserController>) {
    for anchor in query_all(document, "a[href^=\"#\"]") {
        let link = anchor.clone();
        let window = window.clone();
        let document = document.clone();
        let controller = controller.clone();
        listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // Any element kind is a valid target, SVG included
            let target_top = fragment_id(&href)
                .and_then(|id| document.get_element_by_id(id))
                .map(|target| target.get_bounding_client_rect().top());
            let scroll_y = window.scroll_y().unwrap_or(0.0);

            match controller.anchor_click(&href, target_top, scroll_y) {
                AnchorScroll::PassThrough => {}
                AnchorScroll::Suppress => {
                    event.prevent_default();
                    debug!("no element for {}, ignoring click", href);
                }
                AnchorScroll::To(top) => {
                    event.prevent_default();
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            }
        });
    }
}

fn scroll_pass(window: &Window, controller: &BrowserController) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    controller.on_scroll(scroll_y, viewport_height(window));
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .filter(|height| *height > 0.0)
        .or_else(|| {
            window
                .document()
                .and_then(|doc| doc.document_element())
                .map(|el| el.client_height() as f64)
        })
        .unwrap_or(0.0)
}

/// First header/reveal pass plus the delayed banner gate. Runs right away when
/// the script starts after the page already finished loading.
fn after_load(window: &Window, document: &Document, controller: &Rc<BrowserController>) {
    let on_load = {
        let window = window.clone();
        let controller = controller.clone();
        move || {
            scroll_pass(&window, &controller);
            schedule_banner(controller.clone());
        }
    };

    if document.ready_state() == "complete" {
        on_load();
    } else {
        listen(window, "load", move |_| on_load());
    }
}

fn schedule_banner(controller: Rc<BrowserController>) {
    spawn_local(async move {
        TimeoutFuture::new(controller.config().banner_delay_ms).await;
        if controller.reveal_banner_if_needed() {
            info!("showing theme banner");
            // Let the unhidden banner render before animating it in
            TimeoutFuture::new(controller.config().banner_transition_delay_ms).await;
            controller.play_banner_transition();
        }
    });
}

fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            warn!("bad selector {}: {:?}", selector, err);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
