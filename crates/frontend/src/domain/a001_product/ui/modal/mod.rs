use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

/// Overlay around the product form; renders nothing while closed
#[component]
pub fn ProductModal(
    #[prop(into)] product: Signal<Option<Product>>,
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <Modal on_close=on_close>
                <ProductDetails
                    product=product.get_untracked()
                    edit_mode=edit_mode.get_untracked()
                    on_close=on_close
                />
            </Modal>
        </Show>
    }
}
