//! Full-screen sheet used by the auth dialog and the calendar modal.
//!
//! The sheet is mounted closed and receives the `show` class one tick after
//! opening so the CSS transition runs. Clicking the backdrop or the close
//! button emits `on_close`; the parent decides whether to unmount it.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SHOW_DELAY_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub struct ModalSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Show,
}

pub struct ModalSheet {
    shown: bool,
    _show_timer: Option<Timeout>,
}

impl Component for ModalSheet {
    type Message = Msg;
    type Properties = ModalSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            shown: false,
            _show_timer: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show => {
                self.shown = true;
                self._show_timer = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_backdrop = {
            let on_close = ctx.props().on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_button = on_backdrop.clone();
        let class = classes!("top-sheet", self.shown.then_some("show"));

        html! {
            <div {class}>
                <div class="top-sheet-backdrop" onclick={on_backdrop}
                     style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9998;"></div>
                <div class="top-sheet-panel" role="dialog" aria-modal="true"
                     style="position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);max-height:90vh;overflow:auto;background:#fff;border-radius:8px;z-index:9999;min-width:320px;">
                    <button class="top-sheet-close" aria-label="Cerrar" onclick={on_button}
                            style="position:absolute;top:12px;right:16px;padding:0.25rem 0.75rem;font-size:1.25rem;background:#fff;border:none;cursor:pointer;">
                        { "✕" }
                    </button>
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            self._show_timer = Some(Timeout::new(SHOW_DELAY_MS, move || {
                link.send_message(Msg::Show)
            }));
        }
    }
}
