//! Small browser utilities shared by the components.
//!
//! - **User feedback**: toast notifications and the blocking confirm dialog.
//! - **Local clock**: today's date and hour from the browser's time zone,
//!   which is what the calendar and the upcoming panel compare against.
//! - **Form input**: reading values out of input events.
//! - **Navigation**: smooth scrolling to the landing page sections.

use chrono::{Local, NaiveDate, Timelike};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

/// Displays a temporary notification at the bottom of the screen.
///
/// Used for write failures that happen after the triggering dialog is gone
/// (for example a rejected cancellation), where there is no form to show an
/// inline error in.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking `window.confirm`. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Smoothly scrolls the element with `id` into view, if it exists.
pub fn scroll_to(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Today's date on the patient's wall clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn local_hour() -> u32 {
    Local::now().hour()
}

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Loading indicator with a caption.
pub fn spinner(label: &str) -> Html {
    html! {
        <div class="loading">
            <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
            <p>{ label.to_string() }</p>
            <style>{"@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }"}</style>
        </div>
    }
}
