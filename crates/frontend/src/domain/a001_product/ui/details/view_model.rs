use super::model::{
    delete_target, FieldErrors, FormCommand, FormField, FormMode, ProductForm, SubmitMotion,
    DELETED_NOTICE, RETURN_ANIMATION_MS,
};
use crate::domain::a001_product::store::ProductStore;
use contracts::domain::a001_product::aggregate::Product;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// ViewModel for the product form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<FieldErrors>,
    pub motion: RwSignal<SubmitMotion>,
    mode: FormMode,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<Product>, edit_mode: bool) -> Self {
        Self {
            form: RwSignal::new(ProductForm::from_product(product.as_ref())),
            errors: RwSignal::new(FieldErrors::new()),
            motion: RwSignal::new(SubmitMotion::default()),
            mode: FormMode::new(edit_mode, product.as_ref()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.is_valid())
    }

    pub fn field_error(&self, field: FormField) -> Option<String> {
        self.errors.with(|errors| errors.get(&field).cloned())
    }

    /// Validate, dispatch create or update, then close
    pub fn submit_command(&self, store: &ProductStore, on_close: Callback<()>) {
        self.errors.set(FieldErrors::new());

        match self.form.get_untracked().submit(&self.mode) {
            Err(errors) => {
                log::debug!("Product form rejected: {} field error(s)", errors.len());
                self.errors.set(errors);
            }
            Ok(FormCommand::Create(product)) => {
                store.spawn_create(product);
                on_close.run(());
            }
            Ok(FormCommand::Update { id, product }) => {
                store.spawn_update(id, product);
                on_close.run(());
            }
        }
    }

    /// Ask for confirmation, then delete and close
    pub fn delete_command(&self, store: &ProductStore, on_close: Callback<()>) {
        log::debug!("Delete button clicked");
        match delete_target(&self.mode, confirm) {
            Some(id) => {
                log::debug!("User confirmed deletion of {}", id);
                store.spawn_remove(id);
                notify(DELETED_NOTICE);
                on_close.run(());
            }
            None => log::debug!("User canceled deletion"),
        }
    }

    pub fn pointer_enter(&self) {
        let valid = self.is_form_valid();
        self.motion.update(|m| m.pointer_enter(valid));
    }

    pub fn pointer_leave(&self) {
        let valid = self.is_form_valid();
        let mut schedule_return = false;
        self.motion.update(|m| schedule_return = m.pointer_leave(valid));

        if schedule_return {
            let motion = self.motion;
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(RETURN_ANIMATION_MS).await;
                motion.try_update(|m| m.finish_return());
            });
        }
    }

    pub fn submit_class(&self) -> String {
        let valid = self.is_form_valid();
        self.motion.with(|m| m.class(valid))
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
