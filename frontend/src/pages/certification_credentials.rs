use log::debug;
use shared::display::initials;
use shared::{resolve_applicant, ApplicantLookup, ApplicantProfile, Credential};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::search_box::SearchBox;
use crate::directory::use_directory;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CertificationCredentialsProps {
    /// Raw `:id` segment from the URL
    pub id: String,
}

fn credential_item(credential: &Credential, last: bool) -> Html {
    html! {
        <div class={classes!("p-4", "flex", "gap-4", (!last).then_some(classes!("border-b", "border-gray-100")))}>
            <div class={classes!(
                "h-14", "w-12", "rounded-lg", "bg-gray-100", "border", "border-gray-200",
                "flex", "items-center", "justify-center", "text-[10px]", "text-gray-500"
            )}>
                {"CERT"}
            </div>
            <div class="flex-1">
                <div class={classes!("flex", "items-center", "justify-between", "gap-2")}>
                    <div class={classes!("font-semibold", "text-gray-900", "text-sm")}>{credential.title.clone()}</div>
                    <div class={classes!("text-xs", "text-gray-500")}>{credential.date.clone()}</div>
                </div>
                <div class={classes!("text-xs", "text-gray-500")}>{credential.issuer.clone()}</div>
                <div class={classes!("text-xs", "text-gray-600", "mt-1")}>{credential.desc.clone()}</div>
            </div>
        </div>
    }
}

fn detail_line(label: &'static str, value: String) -> Html {
    html! {
        <div class={classes!("flex", "justify-between")}>
            <span class="text-gray-500">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}

fn profile_card(profile: &ApplicantProfile) -> Html {
    let applicant = &profile.applicant;
    html! {
        <div class={classes!("bg-white", "rounded-2xl", "border", "border-gray-200", "shadow-sm", "overflow-hidden")}>
            <div class={classes!("h-24", "bg-gradient-to-r", "from-[#C7A600]/25", "to-gray-50")} />
            <div class="p-5">
                <div class={classes!("-mt-12", "flex", "items-end", "justify-between")}>
                    <div class={classes!(
                        "h-12", "w-12", "rounded-full", "bg-gray-200", "flex", "items-center",
                        "justify-center", "font-bold", "text-gray-700"
                    )}>
                        {initials(&applicant.name)}
                    </div>
                    <span class={classes!(
                        "text-xs", "px-3", "py-1", "rounded-full", "border", "bg-green-50",
                        "text-green-700", "border-green-200", "font-semibold"
                    )}>
                        {"ACTIVE"}
                    </span>
                </div>

                <div class="mt-3">
                    <div class={classes!("text-sm", "font-bold", "text-gray-900")}>{applicant.name.clone()}</div>
                    <div class={classes!("text-xs", "text-gray-500")}>{applicant.email.clone()}</div>
                </div>

                <div class={classes!("mt-4", "space-y-2", "text-xs", "text-gray-600")}>
                    { detail_line("Applied Date", applicant.applied_date.clone()) }
                    { detail_line("Category", applicant.category.to_string()) }
                    { detail_line("Completed", applicant.completed.to_string()) }
                </div>
            </div>
        </div>
    }
}

#[function_component(CertificationCredentials)]
pub fn certification_credentials(props: &CertificationCredentialsProps) -> Html {
    let directory = use_directory();
    let navigator = use_navigator();
    let search = use_state(String::new);

    let lookup = use_memo((directory, props.id.clone()), |(directory, id)| {
        debug!("Resolving applicant for id {:?}", id);
        let records = directory.certifications();
        resolve_applicant(id, &records, |email| directory.credentials_for(email))
    });

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let profile = match &*lookup {
        ApplicantLookup::Found(profile) => profile,
        ApplicantLookup::NotFound => {
            let on_back = Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::AnalyticsAndReport);
                }
            });
            return html! {
                <div class="p-6">
                    <button
                        onclick={on_back}
                        class={classes!("px-4", "py-2", "text-sm", "rounded-lg", "border", "border-gray-200", "hover:bg-gray-50")}
                    >
                        {"Back"}
                    </button>
                    <div class={classes!("mt-4", "bg-white", "border", "border-gray-200", "rounded-2xl", "p-6")}>
                        <div class={classes!("text-lg", "font-bold", "text-gray-900")}>{"Applicant not found"}</div>
                        <div class={classes!("text-sm", "text-gray-500")}>{"Invalid certification id."}</div>
                    </div>
                </div>
            };
        }
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    let credentials = profile.filtered_credentials(&search);
    let last = credentials.len().saturating_sub(1);

    html! {
        <div class="p-6">
            <div class={classes!(
                "bg-white", "border", "border-gray-200", "rounded-xl", "px-5", "py-3", "shadow-sm",
                "flex", "items-center", "justify-between", "gap-3"
            )}>
                <div class={classes!("text-sm", "text-gray-500")}>
                    {"Dashboard/Admin Management/Analytics & Report/Certifications/"}
                    <span class={classes!("text-[#C7A600]", "font-semibold")}>{" Credential"}</span>
                </div>
                <button
                    onclick={on_back}
                    class={classes!("px-4", "py-2", "text-sm", "rounded-lg", "border", "border-gray-200", "hover:bg-gray-50")}
                >
                    {"Back"}
                </button>
            </div>

            <div class={classes!("mt-5", "grid", "grid-cols-1", "lg:grid-cols-12", "gap-5")}>
                <div class="lg:col-span-4">
                    { profile_card(profile) }
                </div>

                <div class="lg:col-span-8">
                    <div class={classes!("bg-white", "rounded-2xl", "border", "border-gray-200", "shadow-sm", "p-5")}>
                        <div class={classes!("flex", "items-center", "justify-between", "gap-3", "flex-wrap")}>
                            <div class={classes!("text-lg", "font-bold", "text-gray-900")}>{"Certifications"}</div>
                            <SearchBox value={(*search).clone()} placeholder="Search" on_change={on_search} />
                        </div>

                        <div class={classes!("mt-4", "rounded-2xl", "border", "border-gray-200", "overflow-hidden")}>
                            if credentials.is_empty() {
                                <div class={classes!("p-6", "text-sm", "text-gray-500")}>{"No credentials found."}</div>
                            } else {
                                { for credentials.iter().enumerate().map(|(idx, credential)| credential_item(credential, idx == last)) }
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
