use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use limelight_shared::models::{
    Product, ProductFilter, ProductSort, page_count, page_slice, unique_brands,
};
use limelight_shared::sample;

use crate::components::product_card::ProductCard;

const PRODUCTS_PER_PAGE: usize = 6;
const ALL_BRANDS: &str = "all_brands";

fn sort_from_key(key: &str) -> ProductSort {
    match key {
        "name_desc" => ProductSort::NameDesc,
        "price_asc" => ProductSort::PriceAsc,
        "price_desc" => ProductSort::PriceDesc,
        _ => ProductSort::NameAsc,
    }
}

/// Product catalog page: search, brand filter, sorting, and pagination over
/// the in-memory catalog.
#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let filter = use_state(ProductFilter::default);
    let page = use_state(|| 1_usize);

    let products = sample::products();
    let brands = unique_brands(&products);
    let filtered: Vec<Product> = filter.apply(&products);
    let total_pages = page_count(filtered.len(), PRODUCTS_PER_PAGE);
    let visible = page_slice(&filtered, *page, PRODUCTS_PER_PAGE);

    let on_search = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(ProductFilter {
                    search: input.value(),
                    ..(*filter).clone()
                });
                page.set(1);
            }
        })
    };

    let on_brand = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                let brand = (value != ALL_BRANDS).then_some(value);
                filter.set(ProductFilter {
                    brand,
                    ..(*filter).clone()
                });
                page.set(1);
            }
        })
    };

    let on_sort = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                filter.set(ProductFilter {
                    sort: sort_from_key(&select.value()),
                    ..(*filter).clone()
                });
                page.set(1);
            }
        })
    };

    let on_clear = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |_| {
            filter.set(ProductFilter::default());
            page.set(1);
        })
    };

    let pagination = (total_pages > 0).then(|| {
        let previous = {
            let page = page.clone();
            Callback::from(move |_| page.set((*page).saturating_sub(1).max(1)))
        };
        let next = {
            let page = page.clone();
            Callback::from(move |_| page.set((*page + 1).min(total_pages)))
        };
        let numbers = (1..=total_pages)
            .map(|number| {
                let class = if number == *page {
                    "join-item btn btn-sm btn-primary"
                } else {
                    "join-item btn btn-sm"
                };
                let go = {
                    let page = page.clone();
                    Callback::from(move |_| page.set(number))
                };
                html! {
                    <button key={number.to_string()} {class} onclick={go}>
                        { number.to_string() }
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <div class="mt-8 flex justify-between items-center">
                <div class="text-sm text-base-content/70">
                    { format!(
                        "Showing {} of {} products",
                        visible.len(),
                        filtered.len(),
                    ) }
                </div>
                <div class="join">
                    <button class="join-item btn btn-sm" onclick={previous} disabled={*page == 1}>
                        { "Previous" }
                    </button>
                    { numbers }
                    <button class="join-item btn btn-sm" onclick={next} disabled={*page == total_pages}>
                        { "Next" }
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <div class="p-6">
            <div class="mb-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{ "Product Catalog" }</h1>
                    <p class="text-base-content/70 mt-1">{ "Manage your luxury handbag inventory" }</p>
                </div>

                <div class="flex flex-col sm:flex-row gap-3">
                    <label class="input input-bordered flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-60" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Search products..."
                            value={filter.search.clone()}
                            oninput={on_search}
                        />
                    </label>

                    <select class="select select-bordered" onchange={on_brand}>
                        <option value={ALL_BRANDS} selected={filter.brand.is_none()}>{ "All Brands" }</option>
                        {
                            brands.iter().map(|brand| html! {
                                <option
                                    key={brand.clone()}
                                    value={brand.clone()}
                                    selected={filter.brand.as_ref() == Some(brand)}
                                >
                                    { brand.clone() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <select class="select select-bordered" onchange={on_sort}>
                        <option value="name_asc" selected={filter.sort == ProductSort::NameAsc}>{ "Name (A-Z)" }</option>
                        <option value="name_desc" selected={filter.sort == ProductSort::NameDesc}>{ "Name (Z-A)" }</option>
                        <option value="price_asc" selected={filter.sort == ProductSort::PriceAsc}>{ "Price (Low-High)" }</option>
                        <option value="price_desc" selected={filter.sort == ProductSort::PriceDesc}>{ "Price (High-Low)" }</option>
                    </select>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                {
                    visible.iter().map(|product| html! {
                        <ProductCard key={product.id.to_string()} product={product.clone()} />
                    }).collect::<Html>()
                }
            </div>

            { pagination.unwrap_or_default() }

            {
                if filtered.is_empty() {
                    html! {
                        <div class="card bg-base-200 mt-6">
                            <div class="card-body items-center">
                                <p class="text-base-content/70 my-8">
                                    { "No products found matching your filters." }
                                </p>
                                <button class="btn btn-primary" onclick={on_clear}>
                                    { "Clear Filters" }
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
