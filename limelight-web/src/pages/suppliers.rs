use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use limelight_shared::models::{Supplier, SupplierFilter, unique_locations};
use limelight_shared::sample;

use crate::components::supplier_table::SupplierTable;

const ALL_COUNTRIES: &str = "all_countries";

/// Suppliers page: searchable, location-filterable contact table.
#[function_component(SuppliersPage)]
pub fn suppliers_page() -> Html {
    let filter = use_state(SupplierFilter::default);

    let suppliers = sample::suppliers();
    let locations = unique_locations(&suppliers);
    let filtered: Vec<Supplier> = filter.apply(&suppliers);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(SupplierFilter {
                    search: input.value(),
                    ..(*filter).clone()
                });
            }
        })
    };

    let on_location = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                let location = (value != ALL_COUNTRIES).then_some(value);
                filter.set(SupplierFilter {
                    location,
                    ..(*filter).clone()
                });
            }
        })
    };

    html! {
        <div class="p-6">
            <div class="mb-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{ "Suppliers" }</h1>
                    <p class="text-base-content/70 mt-1">{ "Manage your product suppliers and contacts" }</p>
                </div>
                <button class="btn btn-primary">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                    { "Add Supplier" }
                </button>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-4 border-b border-base-300 flex items-center gap-3 flex-wrap">
                        <label class="input input-bordered flex items-center gap-2 flex-1">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-60" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search suppliers..."
                                value={filter.search.clone()}
                                oninput={on_search}
                            />
                        </label>
                        <select class="select select-bordered min-w-[180px]" onchange={on_location}>
                            <option value={ALL_COUNTRIES} selected={filter.location.is_none()}>
                                { "All Countries" }
                            </option>
                            {
                                locations.iter().map(|location| html! {
                                    <option
                                        key={location.clone()}
                                        value={location.clone()}
                                        selected={filter.location.as_ref() == Some(location)}
                                    >
                                        { location.clone() }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>

                    <SupplierTable suppliers={filtered.clone()} />

                    {
                        if filtered.is_empty() {
                            html! {
                                <div class="text-center py-8 text-base-content/60">
                                    { "No suppliers found matching your search." }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}
