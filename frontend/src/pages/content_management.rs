use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Sub-pages reachable from the content management hub
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentView {
    CreateJobPost,
    ManageJobPost,
    EditJobPost,
    CreateEvents,
    ManageEvents,
    EditEvents,
}

impl ContentView {
    pub const ALL: [ContentView; 6] = [
        ContentView::CreateJobPost,
        ContentView::ManageJobPost,
        ContentView::EditJobPost,
        ContentView::CreateEvents,
        ContentView::ManageEvents,
        ContentView::EditEvents,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ContentView::CreateJobPost => "Create Job Post",
            ContentView::ManageJobPost => "Manage Job Post",
            ContentView::EditJobPost => "Edit Job Post",
            ContentView::CreateEvents => "Create Events",
            ContentView::ManageEvents => "Manage Events",
            ContentView::EditEvents => "Edit Events",
        }
    }

    pub fn group(&self) -> &'static str {
        match self {
            ContentView::CreateJobPost | ContentView::ManageJobPost | ContentView::EditJobPost => {
                "Job Posts"
            }
            ContentView::CreateEvents | ContentView::ManageEvents | ContentView::EditEvents => {
                "Events"
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ContentView::CreateJobPost => Route::CreateJobPost,
            ContentView::ManageJobPost => Route::ManageJobPost,
            ContentView::EditJobPost => Route::EditJobPost,
            ContentView::CreateEvents => Route::CreateEvents,
            ContentView::ManageEvents => Route::ManageEvents,
            ContentView::EditEvents => Route::EditEvents,
        }
    }
}

#[function_component(ContentManagement)]
pub fn content_management() -> Html {
    let groups = ["Job Posts", "Events"];

    html! {
        <div class="p-6">
            <div class={classes!("bg-white", "border", "border-gray-200", "rounded-xl", "px-5", "py-3", "shadow-sm")}>
                <div class={classes!("text-sm", "text-gray-500")}>
                    {"Dashboard / Admin Management / "}
                    <span class={classes!("text-amber-600", "font-semibold")}>{"Content Management"}</span>
                </div>
            </div>

            <div class={classes!("mt-5", "grid", "grid-cols-1", "md:grid-cols-2", "gap-4")}>
                { for groups.iter().map(|group| html! {
                    <div class={classes!("bg-white", "border", "border-gray-200", "rounded-2xl", "shadow-sm", "p-5")}>
                        <div class={classes!("text-lg", "font-bold", "text-gray-900")}>{*group}</div>
                        <div class={classes!("mt-3", "flex", "flex-col", "gap-2")}>
                            { for ContentView::ALL.iter().filter(|view| view.group() == *group).map(|view| html! {
                                <Link<Route>
                                    to={view.route()}
                                    classes={classes!(
                                        "px-4", "py-2", "text-sm", "rounded-lg", "border",
                                        "border-gray-200", "hover:bg-gray-50"
                                    )}
                                >
                                    {view.title()}
                                </Link<Route>>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentPageProps {
    pub view: ContentView,
}

/// Title and navigation shell for a content sub-page
#[function_component(ContentPage)]
pub fn content_page(props: &ContentPageProps) -> Html {
    let view = props.view;

    html! {
        <div class="p-6">
            <div class={classes!(
                "bg-white", "border", "border-gray-200", "rounded-xl", "px-5", "py-3",
                "shadow-sm", "flex", "items-center", "justify-between", "gap-3"
            )}>
                <div class={classes!("text-sm", "text-gray-500")}>
                    {format!("Dashboard / Admin Management / Content Management / {} / ", view.group())}
                    <span class={classes!("text-amber-600", "font-semibold")}>{view.title()}</span>
                </div>
                <Link<Route>
                    to={Route::ContentManagement}
                    classes={classes!("px-4", "py-2", "text-sm", "rounded-lg", "border", "border-gray-200", "hover:bg-gray-50")}
                >
                    {"Back"}
                </Link<Route>>
            </div>

            <div class={classes!("mt-5", "bg-white", "border", "border-gray-200", "rounded-2xl", "shadow-sm", "p-6")}>
                <div class={classes!("text-lg", "font-bold", "text-gray-900")}>{view.title()}</div>
            </div>
        </div>
    }
}
