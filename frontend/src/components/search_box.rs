use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    #[prop_or(AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

/// Controlled text input; emits the raw value on every keystroke
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            type="text"
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            {oninput}
            class={classes!(
                "w-72", "max-w-full", "border", "border-gray-200", "rounded-lg", "px-3", "py-2",
                "text-sm", "outline-none", "focus:ring-2", "focus:ring-amber-200"
            )}
        />
    }
}
