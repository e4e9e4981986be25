use crate::domain::a001_product::api::HttpProductGateway;
use crate::domain::a001_product::store::ProductStore;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a001_product::ui::modal::ProductModal;
use crate::layout::ModalService;
use crate::shared::components::ui::Button;
use crate::shared::config::load_config;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let api_base_url = config.api_base_url();
    log::info!("Product API at {}", api_base_url);

    // Provide the product store to the whole app via context.
    provide_context(ProductStore::new(Arc::new(HttpProductGateway::new(
        api_base_url,
    ))));

    // Provide ModalService for the add/edit dialog
    let modal = ModalService::new();
    provide_context(modal);

    view! {
        <div class="container">
            <h1 class="container__title">{"Product Management"}</h1>
            <div class="container__actions">
                <Button on_click=Callback::new(move |_| modal.open(None))>
                    {icon("plus")}
                    {"Add New Product"}
                </Button>
            </div>
            <ProductList on_edit=Callback::new(move |product: Product| modal.open(Some(product))) />
            <ProductModal
                product=Signal::derive(move || modal.selected())
                edit_mode=Signal::derive(move || modal.edit_mode())
                is_open=Signal::derive(move || modal.is_open())
                on_close=Callback::new(move |_| modal.close())
            />
        </div>
    }
}
