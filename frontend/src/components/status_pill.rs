use shared::display::is_positive_status;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusPillProps {
    pub value: AttrValue,
}

/// Green for positive statuses, red for everything else
#[function_component(StatusPill)]
pub fn status_pill(props: &StatusPillProps) -> Html {
    let tone = if is_positive_status(&props.value) {
        classes!("bg-green-50", "text-green-700", "border-green-200")
    } else {
        classes!("bg-red-50", "text-red-700", "border-red-200")
    };

    html! {
        <span class={classes!("px-3", "py-1", "text-xs", "font-semibold", "rounded-full", "border", tone)}>
            {props.value.clone()}
        </span>
    }
}
