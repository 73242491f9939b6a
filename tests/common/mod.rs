#![allow(dead_code)]

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

use dioxus::dioxus_core::ElementId;
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

use navbar_dropdown::NavbarConfig;

/// A mounted VirtualDom that can be rendered to HTML and clicked.
pub struct Harness {
    dom: VirtualDom,
}

impl Harness {
    pub fn new(root: fn() -> Element) -> Self {
        Self::mount(VirtualDom::new(root))
    }

    pub fn with_config(root: fn() -> Element, config: NavbarConfig) -> Self {
        Self::mount(VirtualDom::new(root).with_root_context(config))
    }

    fn mount(mut dom: VirtualDom) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        dom.rebuild_in_place();
        Self { dom }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Click the `nth` element whose class list is exactly `class`.
    pub fn click(&mut self, class: &str, nth: usize) {
        let id = self.element_id(class, nth);
        let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, id);
        let _ = self.dom.render_immediate_to_vec();
    }

    /// Let the runtime run effects and timers for `duration` of (paused) time.
    pub async fn advance(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            let woke = tokio::select! {
                _ = self.dom.wait_for_work() => true,
                _ = tokio::time::sleep_until(deadline) => false,
            };
            if !woke {
                break;
            }
            let _ = self.dom.render_immediate_to_vec();
        }
        let _ = self.dom.render_immediate_to_vec();
    }

    /// Element ids only show up in hydration markers, so read them from a
    /// pre-rendered copy of the page.
    fn element_id(&self, class: &str, nth: usize) -> ElementId {
        let mut renderer = dioxus_ssr::Renderer::new();
        renderer.pre_render = true;
        let html = renderer.render(&self.dom);

        let needle = format!(r#"class="{class}""#);
        let tag = html
            .split('<')
            .filter_map(|chunk| chunk.split('>').next())
            .filter(|tag| tag.contains(&needle))
            .nth(nth)
            .unwrap_or_else(|| panic!("no element #{nth} with class {class:?} in {html}"));

        let marker = r#"data-node-hydration=""#;
        let start = tag
            .find(marker)
            .unwrap_or_else(|| panic!("element has no hydration id: <{tag}>"))
            + marker.len();
        let digits: String = tag[start..].chars().take_while(char::is_ascii_digit).collect();
        // The SSR counter starts at 0, but the runtime reserves ElementId(0)
        // for the root, so live ids are shifted by one.
        ElementId(digits.parse::<usize>().unwrap() + 1)
    }
}
