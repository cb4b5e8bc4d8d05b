use yew::{html, Children, Classes, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct DayGridProps {
    #[prop_or(7)]
    pub columns: usize,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fixed-column CSS grid used for the weekday header row and the day cells.
pub struct DayGrid;

impl Component for DayGrid {
    type Message = ();
    type Properties = DayGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DayGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 4px;",
            props.columns
        );

        html! {
            <div class={props.class.clone()} style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
