use yew::prelude::*;

use limelight_shared::format::format_price;
use limelight_shared::models::Product;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

/// One catalog entry in the product grid.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <div class="card bg-base-200 shadow-xl overflow-hidden">
            {
                product.image.as_ref().map_or_else(|| html! {}, |image| html! {
                    <figure class="h-48">
                        <img src={image.clone()} alt={product.name.clone()} class="w-full h-full object-cover" />
                    </figure>
                })
            }
            <div class="card-body p-4">
                <div class="flex justify-between items-start">
                    <h2 class="card-title text-base">{ &product.name }</h2>
                    <span class="font-semibold text-primary">{ format_price(&product.price) }</span>
                </div>
                <p class="text-sm text-base-content/70">{ &product.brand }{ " · " }{ &product.kind }</p>
                {
                    product.description.as_ref().map_or_else(|| html! {}, |description| html! {
                        <p class="text-sm text-base-content/80">{ description }</p>
                    })
                }
                <div class="card-actions justify-between items-center mt-2">
                    {
                        product.source_chat.as_ref().map_or_else(|| html! {}, |chat| html! {
                            <span class="badge badge-ghost badge-sm">{ chat }</span>
                        })
                    }
                    {
                        product.condition.as_ref().map_or_else(|| html! {}, |condition| html! {
                            <span class="badge badge-outline badge-sm">{ condition }</span>
                        })
                    }
                </div>
            </div>
        </div>
    }
}
