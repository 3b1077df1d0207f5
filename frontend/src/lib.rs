use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::nav::Nav;
use crate::directory::DirectoryProvider;

pub mod components;
pub mod config;
pub mod directory;
pub mod state;
pub mod pages {
    pub mod alumni_management;
    pub mod analytics_and_report;
    pub mod certification_credentials;
    pub mod content_management;
}

use pages::{
    alumni_management::AlumniManagement,
    analytics_and_report::AnalyticsAndReport,
    certification_credentials::CertificationCredentials,
    content_management::{ContentManagement, ContentPage, ContentView},
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/alumni-management")]
    AlumniManagement,
    #[at("/content-management")]
    ContentManagement,
    #[at("/content-management/create-job-post")]
    CreateJobPost,
    #[at("/content-management/manage-job-post")]
    ManageJobPost,
    #[at("/content-management/edit-job-post")]
    EditJobPost,
    #[at("/content-management/create-events")]
    CreateEvents,
    #[at("/content-management/manage-events")]
    ManageEvents,
    #[at("/content-management/edit-events")]
    EditEvents,
    #[at("/analytics-and-report")]
    AnalyticsAndReport,
    #[at("/analytics-and-report/certifications/:id")]
    CertificationCredentials { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Top-level sidebar entry this route belongs to
    pub fn section(&self) -> Route {
        match self {
            Route::ContentManagement
            | Route::CreateJobPost
            | Route::ManageJobPost
            | Route::EditJobPost
            | Route::CreateEvents
            | Route::ManageEvents
            | Route::EditEvents => Route::ContentManagement,
            Route::AnalyticsAndReport | Route::CertificationCredentials { .. } => {
                Route::AnalyticsAndReport
            }
            Route::Home | Route::AlumniManagement | Route::NotFound => Route::AlumniManagement,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <DirectoryProvider>
            <BrowserRouter>
                <div class={classes!("flex", "min-h-screen", "bg-gray-50")}>
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </DirectoryProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home | Route::NotFound => {
            debug!("Redirecting to alumni management");
            html! { <Redirect<Route> to={Route::AlumniManagement} /> }
        },
        Route::AlumniManagement => html! { <AlumniManagement /> },
        Route::ContentManagement => html! { <ContentManagement /> },
        Route::CreateJobPost => html! { <ContentPage view={ContentView::CreateJobPost} /> },
        Route::ManageJobPost => html! { <ContentPage view={ContentView::ManageJobPost} /> },
        Route::EditJobPost => html! { <ContentPage view={ContentView::EditJobPost} /> },
        Route::CreateEvents => html! { <ContentPage view={ContentView::CreateEvents} /> },
        Route::ManageEvents => html! { <ContentPage view={ContentView::ManageEvents} /> },
        Route::EditEvents => html! { <ContentPage view={ContentView::EditEvents} /> },
        Route::AnalyticsAndReport => html! { <AnalyticsAndReport /> },
        Route::CertificationCredentials { id } => {
            debug!("Rendering credentials for certification id: {}", id);
            html! { <CertificationCredentials id={id} /> }
        },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(config::Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Logger and panic hook initialized");

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
