use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ResultsGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays result cards out in equal-width columns.
pub struct ResultsGrid;

impl Component for ResultsGrid {
    type Message = ();
    type Properties = ResultsGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResultsGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 16px;
             width: 100%;
             max-width: 1200px;
             margin: 24px auto;",
            props.columns.max(1)
        );

        html! {
            <div class="results-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
