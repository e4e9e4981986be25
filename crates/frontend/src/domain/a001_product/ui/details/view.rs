use super::model::FormField;
use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_product::store::ProductStore;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    edit_mode: bool,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = use_context::<ProductStore>().expect("ProductStore not found in context");
    let vm = ProductDetailsViewModel::new(product, edit_mode);
    let is_edit = vm.is_edit_mode();

    let handle_submit = {
        let vm = vm.clone();
        let store = store.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit_command(&store, on_close);
        }
    };

    view! {
        <form class="details-container product-details" on:submit=handle_submit>
            <div class="details-header">
                <h3>{if is_edit { "Edit Product" } else { "Add New Product" }}</h3>
            </div>

            <div class="details-form">
                <Input
                    id="product_name"
                    label="Product Name"
                    placeholder="Product Name"
                    value=Signal::derive({
                        let vm = vm.clone();
                        move || vm.form.with(|f| f.product_name.clone())
                    })
                    on_input=Callback::new({
                        let vm = vm.clone();
                        move |value: String| vm.form.update(|f| f.product_name = value)
                    })
                    error=Signal::derive({
                        let vm = vm.clone();
                        move || vm.field_error(FormField::ProductName)
                    })
                />

                <Input
                    id="category"
                    label="Category"
                    placeholder="Category"
                    value=Signal::derive({
                        let vm = vm.clone();
                        move || vm.form.with(|f| f.category.clone())
                    })
                    on_input=Callback::new({
                        let vm = vm.clone();
                        move |value: String| vm.form.update(|f| f.category = value)
                    })
                    error=Signal::derive({
                        let vm = vm.clone();
                        move || vm.field_error(FormField::Category)
                    })
                />

                <Input
                    id="price"
                    label="Price"
                    placeholder="Price"
                    value=Signal::derive({
                        let vm = vm.clone();
                        move || vm.form.with(|f| f.price_text())
                    })
                    on_input=Callback::new({
                        let vm = vm.clone();
                        move |value: String| vm.form.update(|f| f.set_price_input(&value))
                    })
                    error=Signal::derive({
                        let vm = vm.clone();
                        move || vm.field_error(FormField::Price)
                    })
                />

                <Input
                    id="discount"
                    label="Discount"
                    placeholder="Discount"
                    inputmode="decimal"
                    value=Signal::derive({
                        let vm = vm.clone();
                        move || vm.form.with(|f| f.discount_text.clone())
                    })
                    on_input=Callback::new({
                        let vm = vm.clone();
                        move |value: String| vm.form.update(|f| f.set_discount_input(&value))
                    })
                />
            </div>

            <div class="details-actions">
                <Button
                    button_type="submit"
                    class=Signal::derive({
                        let vm = vm.clone();
                        move || vm.submit_class()
                    })
                    on_mouse_enter=Callback::new({
                        let vm = vm.clone();
                        move |_| vm.pointer_enter()
                    })
                    on_mouse_leave=Callback::new({
                        let vm = vm.clone();
                        move |_| vm.pointer_leave()
                    })
                >
                    {icon("save")}
                    {if is_edit { "Update Product" } else { "Add Product" }}
                </Button>

                {is_edit.then(|| {
                    let vm = vm.clone();
                    let store = store.clone();
                    view! {
                        <Button
                            variant="danger"
                            on_click=Callback::new(move |_| vm.delete_command(&store, on_close))
                        >
                            {icon("delete")}
                            {"Delete"}
                        </Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| on_close.run(()))
                        >
                            {icon("cancel")}
                            {"Cancel"}
                        </Button>
                    }
                })}
            </div>
        </form>
    }
}
