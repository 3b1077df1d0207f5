use shared::StatCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardViewProps {
    pub card: StatCard,
}

#[function_component(StatCardView)]
pub fn stat_card_view(props: &StatCardViewProps) -> Html {
    let card = &props.card;
    html! {
        <div class={classes!(
            "flex", "items-center", "gap-3", "bg-white", "rounded-xl", "shadow-sm",
            "border", "border-gray-200", "px-5", "py-4"
        )}>
            <div class={classes!("h-11", "w-11", "rounded-full", "bg-gray-100", "flex", "items-center", "justify-center")}>
                <div class={classes!("h-5", "w-5", "bg-gray-300", "rounded")} />
            </div>
            <div class="flex-1">
                <div class={classes!("text-xs", "text-gray-500")}>{card.label.clone()}</div>
                <div class={classes!("text-xl", "font-bold", "text-gray-900", "leading-tight")}>{card.value.clone()}</div>
                <div class={classes!("text-xs", "text-green-600")}>{card.sub.clone()}</div>
            </div>
        </div>
    }
}
