use log::{debug, warn};
use shared::display::entries_summary;
use shared::{
    filter_records, ActiveUser, CertificationCategory, CertificationEdit, CertificationRecord,
    CompletedInput, DashboardTab, EngagementRowDto,
};
use yew::prelude::*;
use yew::functional::use_reducer_eq;
use yew_router::prelude::*;

use crate::components::search_box::SearchBox;
use crate::components::stat_card::StatCardView;
use crate::components::status_pill::StatusPill;
use crate::directory::use_directory;
use crate::state::CertificationBoard;
use crate::Route;

fn header_cell(label: &'static str) -> Html {
    html! { <th class={classes!("text-left", "font-semibold", "px-6", "py-3")}>{label}</th> }
}

fn cell(content: Html) -> Html {
    html! { <td class={classes!("px-6", "py-4")}>{content}</td> }
}

fn active_users_table(rows: &[&ActiveUser]) -> Html {
    html! {
        <table class={classes!("w-full", "text-sm")}>
            <thead class={classes!("text-gray-500", "border-t", "border-b", "border-gray-200")}>
                <tr>
                    { header_cell("Customer Name") }
                    { header_cell("Company") }
                    { header_cell("Phone Number") }
                    { header_cell("Email") }
                    { header_cell("Country") }
                    { header_cell("Status") }
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|user| html! {
                    <tr key={user.email.clone()} class={classes!("border-b", "border-gray-100")}>
                        { cell(html! { {user.name.clone()} }) }
                        { cell(html! { {user.company.clone()} }) }
                        { cell(html! { {user.phone.clone()} }) }
                        { cell(html! { {user.email.clone()} }) }
                        { cell(html! { {user.country.clone()} }) }
                        { cell(html! { <StatusPill value={user.status.as_str()} /> }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn engagement_table(rows: &[EngagementRowDto]) -> Html {
    html! {
        <table class={classes!("w-full", "text-sm")}>
            <thead class={classes!("text-gray-500", "border-t", "border-b", "border-gray-200")}>
                <tr>
                    { header_cell("Name") }
                    { header_cell("Email ID") }
                    { header_cell("Applied Date") }
                    { header_cell("Department") }
                    { header_cell("Engagement Rate") }
                    { header_cell("Status") }
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|row| {
                    let record = &row.record;
                    html! {
                        <tr key={format!("{}-{}", record.email, record.applied_date)} class={classes!("border-b", "border-gray-100")}>
                            { cell(html! { {record.name.clone()} }) }
                            { cell(html! { {record.email.clone()} }) }
                            { cell(html! { {record.applied_date.clone()} }) }
                            { cell(html! { {record.department.clone()} }) }
                            { cell(html! { {record.engagement_rate.clone()} }) }
                            { cell(html! { <StatusPill value={row.status.as_str()} /> }) }
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn certification_row(
    record: &CertificationRecord,
    board: &UseReducerHandle<CertificationBoard>,
    navigator: &Option<Navigator>,
) -> Html {
    let id = record.id;

    let on_category = {
        let board = board.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<CertificationCategory>() {
                Ok(category) => board.dispatch(CertificationEdit::SetCategory { id, category }),
                Err(err) => warn!("Ignoring category change for {}: {}", id, err),
            }
        })
    };

    let on_completed = {
        let board = board.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            board.dispatch(CertificationEdit::SetCompleted {
                id,
                input: CompletedInput::from(input.value().as_str()),
            });
        })
    };

    let on_view = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Opening credentials for certification {}", id);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CertificationCredentials { id: id.to_string() });
            }
        })
    };

    let field = classes!(
        "border", "border-gray-200", "rounded-lg", "px-3", "py-2", "text-sm",
        "outline-none", "focus:ring-2", "focus:ring-amber-200"
    );

    html! {
        <tr key={id.to_string()} class={classes!("border-b", "border-gray-100")}>
            { cell(html! { {record.name.clone()} }) }
            { cell(html! { {record.email.clone()} }) }
            { cell(html! { {record.applied_date.clone()} }) }
            { cell(html! {
                <select onchange={on_category} class={classes!("w-44", "bg-white", field.clone())}>
                    { for CertificationCategory::ALL.iter().map(|category| html! {
                        <option value={category.as_str()} selected={*category == record.category}>
                            {category.as_str()}
                        </option>
                    }) }
                </select>
            }) }
            { cell(html! {
                <input
                    type="number"
                    min="0"
                    value={record.completed.to_string()}
                    oninput={on_completed}
                    class={classes!("w-28", field)}
                />
            }) }
            { cell(html! {
                <button
                    onclick={on_view}
                    class={classes!("px-6", "py-2", "text-xs", "rounded-lg", "bg-[#C7A600]", "text-white", "hover:opacity-90")}
                >
                    {"View"}
                </button>
            }) }
        </tr>
    }
}

fn certifications_table(
    rows: &[&CertificationRecord],
    board: &UseReducerHandle<CertificationBoard>,
    navigator: &Option<Navigator>,
) -> Html {
    html! {
        <table class={classes!("w-full", "text-sm")}>
            <thead class={classes!("text-gray-500", "border-t", "border-b", "border-gray-200")}>
                <tr>
                    { header_cell("Name") }
                    { header_cell("Email ID") }
                    { header_cell("Applied Date") }
                    { header_cell("Certification Category") }
                    { header_cell("Certification Completed") }
                    { header_cell("Credentials") }
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|record| certification_row(record, board, navigator)) }
            </tbody>
        </table>
    }
}

#[function_component(AnalyticsAndReport)]
pub fn analytics_and_report() -> Html {
    let directory = use_directory();
    let navigator = use_navigator();
    let tab = use_state(DashboardTab::default);
    let query = use_state(String::new);
    let board = {
        let directory = directory.clone();
        use_reducer_eq(move || CertificationBoard::new(directory.certifications()))
    };
    let stat_cards = use_memo(directory.clone(), |directory| directory.stat_cards());
    let active_users = use_memo(directory.clone(), |directory| directory.active_users());
    let engagement = use_memo(directory.clone(), |directory| directory.engagement_records());

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let q = query.as_str();
    let (table, count) = match *tab {
        DashboardTab::ActiveUsers => {
            let rows = filter_records(q, active_users.as_slice());
            (active_users_table(&rows), rows.len())
        }
        DashboardTab::Engagement => {
            let rows: Vec<EngagementRowDto> = filter_records(q, engagement.as_slice())
                .into_iter()
                .map(EngagementRowDto::from)
                .collect();
            (engagement_table(&rows), rows.len())
        }
        DashboardTab::Certifications => {
            let rows = filter_records(q, board.records.as_slice());
            (certifications_table(&rows, &board, &navigator), rows.len())
        }
    };

    html! {
        <div class="p-6">
            <div class={classes!("bg-white", "border", "border-gray-200", "rounded-xl", "px-5", "py-3", "shadow-sm")}>
                <div class={classes!("text-sm", "text-gray-500")}>
                    {"Dashboard / Admin Management / Analytics & Report / "}
                    <span class={classes!("text-amber-600", "font-semibold")}>{tab.label()}</span>
                </div>
            </div>

            <div class={classes!("mt-5", "grid", "grid-cols-1", "md:grid-cols-3", "gap-4")}>
                { for stat_cards.iter().map(|card| html! {
                    <StatCardView key={card.label.clone()} card={card.clone()} />
                }) }
            </div>

            <div class={classes!("mt-5", "flex", "flex-wrap", "gap-2")}>
                { for DashboardTab::ALL.iter().map(|&candidate| {
                    let onclick = {
                        let tab = tab.clone();
                        Callback::from(move |_: MouseEvent| {
                            debug!("Switching analytics tab to {:?}", candidate);
                            tab.set(candidate);
                        })
                    };
                    html! {
                        <button
                            {onclick}
                            class={classes!(
                                "px-4", "py-2", "rounded-lg", "text-sm", "font-semibold", "border",
                                if *tab == candidate {
                                    classes!("bg-[#C7A600]", "text-white", "border-[#C7A600]")
                                } else {
                                    classes!("bg-white", "text-gray-700", "border-gray-200", "hover:bg-gray-50")
                                }
                            )}
                        >
                            {candidate.label()}
                        </button>
                    }
                }) }
            </div>

            <div class={classes!("mt-5", "bg-white", "border", "border-gray-200", "rounded-2xl", "shadow-sm")}>
                <div class={classes!("px-6", "py-4", "flex", "flex-col", "md:flex-row", "md:items-center", "md:justify-between", "gap-3")}>
                    <div>
                        <div class={classes!("text-lg", "font-bold", "text-gray-900")}>{tab.table_title()}</div>
                        if *tab == DashboardTab::ActiveUsers {
                            <div class={classes!("text-sm", "text-emerald-600")}>{"Active Members"}</div>
                        }
                    </div>
                    <SearchBox value={(*query).clone()} on_change={on_search} />
                </div>

                <div class="overflow-x-auto">
                    {table}
                </div>

                <div class={classes!("px-6", "py-4", "text-xs", "text-gray-500")}>
                    {entries_summary(count)}
                </div>
            </div>
        </div>
    }
}
