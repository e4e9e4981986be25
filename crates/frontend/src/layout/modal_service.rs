use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

/// Состояние модального окна товара: открыто ли, режим и выбранный товар
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSelection {
    pub is_open: bool,
    pub edit_mode: bool,
    pub selected: Option<Product>,
}

impl ModalSelection {
    /// Without a product the modal opens in create mode
    pub fn open(&mut self, product: Option<Product>) {
        self.edit_mode = product.is_some();
        self.selected = product;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Сервис для централизованного управления модальным окном товара
#[derive(Clone, Copy)]
pub struct ModalService {
    selection: RwSignal<ModalSelection>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(ModalSelection::default()),
        }
    }

    /// Показать модальное окно
    pub fn open(&self, product: Option<Product>) {
        self.selection.update(|s| s.open(product));
    }

    /// Скрыть модальное окно
    pub fn close(&self) {
        self.selection.update(|s| s.close());
    }

    pub fn is_open(&self) -> bool {
        self.selection.with(|s| s.is_open)
    }

    pub fn edit_mode(&self) -> bool {
        self.selection.with(|s| s.edit_mode)
    }

    pub fn selected(&self) -> Option<Product> {
        self.selection.with(|s| s.selected.clone())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}
