use yew::prelude::*;
use yew_router::prelude::*;
use crate::config::Config;
use crate::Route;

const NAV_ITEMS: [(&str, Route); 3] = [
    ("Alumni Management", Route::AlumniManagement),
    ("Content Management", Route::ContentManagement),
    ("Analytics & Report", Route::AnalyticsAndReport),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_section = use_route::<Route>()
        .map(|route| route.section())
        .unwrap_or(Route::AlumniManagement);

    html! {
        <aside class={classes!(
            "w-64", "shrink-0", "bg-white", "border-r", "border-gray-200", "min-h-screen"
        )}>
            <div class={classes!("px-6", "py-5", "border-b", "border-gray-200")}>
                <span class={classes!("text-lg", "font-bold", "text-gray-900")}>{Config::app_title()}</span>
            </div>
            <nav class={classes!("flex", "flex-col", "gap-1", "p-3")}>
                { for NAV_ITEMS.iter().map(|(label, route)| {
                    let active = *route == current_section;
                    html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!(
                                "px-4", "py-2", "rounded-lg", "text-sm", "font-semibold",
                                "transition-colors", "duration-200",
                                if active {
                                    classes!("bg-[#C7A600]", "text-white")
                                } else {
                                    classes!("text-gray-700", "hover:bg-gray-50")
                                }
                            )}
                        >
                            {*label}
                        </Link<Route>>
                    }
                }) }
            </nav>
        </aside>
    }
}
