use shared::display::entries_summary;
use shared::filter_records;
use yew::prelude::*;

use crate::components::search_box::SearchBox;
use crate::components::status_pill::StatusPill;
use crate::directory::use_directory;

#[function_component(AlumniManagement)]
pub fn alumni_management() -> Html {
    let directory = use_directory();
    let query = use_state(String::new);
    let users = use_memo(directory.clone(), |directory| directory.active_users());

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let visible = filter_records(query.as_str(), users.as_slice());

    html! {
        <div class="p-6">
            <div class={classes!("bg-white", "border", "border-gray-200", "rounded-xl", "px-5", "py-3", "shadow-sm")}>
                <div class={classes!("text-sm", "text-gray-500")}>
                    {"Dashboard / Admin Management / "}
                    <span class={classes!("text-amber-600", "font-semibold")}>{"Alumni Management"}</span>
                </div>
            </div>

            <div class={classes!("mt-5", "bg-white", "border", "border-gray-200", "rounded-2xl", "shadow-sm")}>
                <div class={classes!("px-6", "py-4", "flex", "flex-col", "md:flex-row", "md:items-center", "md:justify-between", "gap-3")}>
                    <div>
                        <div class={classes!("text-lg", "font-bold", "text-gray-900")}>{"Alumni Directory"}</div>
                        <div class={classes!("text-sm", "text-emerald-600")}>{"Registered Members"}</div>
                    </div>
                    <SearchBox value={(*query).clone()} on_change={on_search} />
                </div>

                <div class="overflow-x-auto">
                    <table class={classes!("w-full", "text-sm")}>
                        <thead class={classes!("text-gray-500", "border-t", "border-b", "border-gray-200")}>
                            <tr>
                                <th class={classes!("text-left", "font-semibold", "px-6", "py-3")}>{"Name"}</th>
                                <th class={classes!("text-left", "font-semibold", "px-6", "py-3")}>{"Company"}</th>
                                <th class={classes!("text-left", "font-semibold", "px-6", "py-3")}>{"Email"}</th>
                                <th class={classes!("text-left", "font-semibold", "px-6", "py-3")}>{"Country"}</th>
                                <th class={classes!("text-left", "font-semibold", "px-6", "py-3")}>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|user| html! {
                                <tr key={user.email.clone()} class={classes!("border-b", "border-gray-100")}>
                                    <td class={classes!("px-6", "py-4")}>{user.name.clone()}</td>
                                    <td class={classes!("px-6", "py-4")}>{user.company.clone()}</td>
                                    <td class={classes!("px-6", "py-4")}>{user.email.clone()}</td>
                                    <td class={classes!("px-6", "py-4")}>{user.country.clone()}</td>
                                    <td class={classes!("px-6", "py-4")}>
                                        <StatusPill value={user.status.as_str()} />
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>

                <div class={classes!("px-6", "py-4", "text-xs", "text-gray-500")}>
                    {entries_summary(visible.len())}
                </div>
            </div>
        </div>
    }
}
