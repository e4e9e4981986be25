use crate::domain::a001_product::store::{ProductState, ProductStore};
use crate::shared::components::table::{format_percent, TableCellMoney};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

/// What the list shows for a given store state
#[derive(Debug, Clone, PartialEq)]
pub enum ListDisplay {
    /// A fetch or mutation is in flight; rows are hidden
    Loading,
    Failed(String),
    Rows(Vec<Product>),
}

impl ListDisplay {
    pub fn from_state(state: &ProductState) -> Self {
        if state.loading {
            ListDisplay::Loading
        } else if let Some(error) = &state.error {
            ListDisplay::Failed(error.clone())
        } else {
            ListDisplay::Rows(state.products.clone())
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList(
    /// Row "Edit" action, handled by the owner of the modal
    on_edit: Callback<Product>,
) -> impl IntoView {
    let store = use_context::<ProductStore>().expect("ProductStore not found in context");
    let state = store.state();

    // Load once when the list is created
    store.spawn_fetch_all();

    view! {
        <div class="page product-list">
            {move || match state.with(ListDisplay::from_state) {
                ListDisplay::Loading => view! {
                    <div class="loading">
                        {icon("spinner")}
                        <p class="loading__text">{"Loading..."}</p>
                    </div>
                }.into_any(),
                ListDisplay::Failed(error) => view! {
                    <p class="error">{format!("Error: {}", error)}</p>
                }.into_any(),
                ListDisplay::Rows(products) => {
                    let store = store.clone();
                    view! {
                        <h2 class="page__title">{"Product List"}</h2>
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Name"}</th>
                                        <th class="table__header-cell">{"Category"}</th>
                                        <th class="table__header-cell">{"Price"}</th>
                                        <th class="table__header-cell">{"Discount"}</th>
                                        <th class="table__header-cell">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {products.into_iter().map(|product| {
                                        let store = store.clone();
                                        let id = product.id.clone();
                                        let for_edit = product.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{product.product_name}</td>
                                                <td class="table__cell">{product.category}</td>
                                                <TableCellMoney value=product.price />
                                                <td class="table__cell">{format_percent(product.discount)}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <Button
                                                        size="sm"
                                                        on_click=Callback::new(move |_| on_edit.run(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                        {"Edit"}
                                                    </Button>
                                                    <Button
                                                        variant="danger"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| store.spawn_remove(id.clone()))
                                                    >
                                                        {icon("delete")}
                                                        {"Delete"}
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
