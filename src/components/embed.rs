use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AspectFrameProps {
    pub children: Children,
}

/// 16:9 box that sizes embedded players from the available width alone.
#[function_component(AspectFrame)]
pub fn aspect_frame(props: &AspectFrameProps) -> Html {
    html! {
        <div style="position: relative; width: 100%; padding-top: 56.25%;">
            <div style="position: absolute; inset: 0;">
                { for props.children.iter() }
            </div>
        </div>
    }
}
