use yew::prelude::*;

use limelight_shared::format::initials;
use limelight_shared::models::Supplier;

#[derive(Properties, PartialEq)]
pub struct SupplierTableProps {
    pub suppliers: Vec<Supplier>,
}

/// The supplier table with status badges and a count footer.
#[function_component(SupplierTable)]
pub fn supplier_table(props: &SupplierTableProps) -> Html {
    let rows = props
        .suppliers
        .iter()
        .map(|supplier| {
            let status_class = if supplier.status == "Active" {
                "badge badge-success badge-outline"
            } else {
                "badge badge-warning badge-outline"
            };
            html! {
                <tr key={supplier.id.to_string()} class="hover">
                    <td>
                        <div class="flex items-center gap-3">
                            <div class="avatar placeholder">
                                <div class="bg-info/20 text-info rounded-full w-10">
                                    <span class="text-sm">{ initials(&supplier.name) }</span>
                                </div>
                            </div>
                            <div>
                                <div class="font-medium">{ &supplier.name }</div>
                                <div class="text-sm text-base-content/70">
                                    { supplier.specialty.clone().unwrap_or_default() }
                                </div>
                            </div>
                        </div>
                    </td>
                    <td>{ supplier.location.clone().unwrap_or_default() }</td>
                    <td>{ &supplier.phone_number }</td>
                    <td>{ format!("{} products", supplier.product_count) }</td>
                    <td><span class={status_class}>{ &supplier.status }</span></td>
                    <td class="text-right">
                        <button class="btn btn-ghost btn-xs">{ "Edit" }</button>
                        <button class="btn btn-ghost btn-xs">{ "View" }</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead class="bg-base-200">
                    <tr>
                        <th>{ "Supplier" }</th>
                        <th>{ "Location" }</th>
                        <th>{ "WhatsApp Number" }</th>
                        <th>{ "Products" }</th>
                        <th>{ "Status" }</th>
                        <th class="text-right">{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { rows }
                </tbody>
            </table>
            {
                if props.suppliers.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="px-6 py-4 border-t border-base-300 text-sm text-base-content/70">
                            { format!("Showing {} of {} suppliers", props.suppliers.len(), props.suppliers.len()) }
                        </div>
                    }
                }
            }
        </div>
    }
}
