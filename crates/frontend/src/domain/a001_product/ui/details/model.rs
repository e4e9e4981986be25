use crate::shared::components::table::{format_rupiah, parse_digits};
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use std::collections::BTreeMap;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";
pub const DELETED_NOTICE: &str = "Your product has been deleted.";

/// How long the submit button keeps its "return" class after the pointer leaves
pub const RETURN_ANIMATION_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    ProductName,
    Category,
    Price,
}

/// Field-keyed validation messages
pub type FieldErrors = BTreeMap<FormField, String>;

/// Whether the form creates a new product or edits an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

impl FormMode {
    /// Edit mode needs both the flag and the product being edited
    pub fn new(edit_mode: bool, product: Option<&Product>) -> Self {
        match (edit_mode, product) {
            (true, Some(p)) => FormMode::Edit(p.id.clone()),
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// What a successful submit asks the store to do
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Create(ProductDto),
    Update { id: ProductId, product: ProductDto },
}

/// Editable copy of the product fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub product_name: String,
    pub category: String,
    pub price: i64,
    /// Discount as typed; partial numbers like `-` or `12.` stay as they are
    pub discount_text: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            category: String::new(),
            price: 0,
            discount_text: "0".into(),
        }
    }
}

impl ProductForm {
    pub fn from_product(product: Option<&Product>) -> Self {
        match product {
            Some(p) => Self {
                product_name: p.product_name.clone(),
                category: p.category.clone(),
                price: p.price,
                discount_text: p.discount.to_string(),
            },
            None => Self::default(),
        }
    }

    /// Text shown in the price input
    pub fn price_text(&self) -> String {
        format_rupiah(self.price)
    }

    /// Keystrokes are reduced to digits; an empty result becomes 0.
    /// A digit run too long for `i64` leaves the previous price in place.
    pub fn set_price_input(&mut self, text: &str) {
        if let Some(price) = parse_digits(text) {
            self.price = price;
        }
    }

    pub fn set_discount_input(&mut self, text: &str) {
        self.discount_text = text.to_string();
    }

    /// Discount sent to the server; text that is not a finite number becomes 0
    pub fn discount(&self) -> f64 {
        self.discount_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.product_name.is_empty() {
            errors.insert(FormField::ProductName, "Product Name is required.".into());
        }
        if self.category.is_empty() {
            errors.insert(FormField::Category, "Category is required.".into());
        }
        if self.price <= 0 {
            errors.insert(FormField::Price, "Price must be greater than 0.".into());
        }
        // discount has no bounds

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and build the store command; nothing is submitted on error
    pub fn submit(&self, mode: &FormMode) -> Result<FormCommand, FieldErrors> {
        self.validate()?;

        let product = ProductDto {
            product_name: self.product_name.clone(),
            category: self.category.clone(),
            price: self.price,
            discount: self.discount(),
        };

        Ok(match mode {
            FormMode::Create => FormCommand::Create(product),
            FormMode::Edit(id) => FormCommand::Update {
                id: id.clone(),
                product,
            },
        })
    }
}

/// Decide whether a delete should be dispatched.
///
/// Only edit mode can delete, and only after `confirm` accepts the prompt.
pub fn delete_target(mode: &FormMode, confirm: impl FnOnce(&str) -> bool) -> Option<ProductId> {
    match mode {
        FormMode::Edit(id) if confirm(DELETE_CONFIRMATION) => Some(id.clone()),
        _ => None,
    }
}

/// Decorative nudge of the submit button while the form is invalid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitMotion {
    pub hovered: bool,
    pub returning: bool,
}

impl SubmitMotion {
    pub fn pointer_enter(&mut self, form_valid: bool) {
        if !form_valid {
            self.hovered = true;
        }
    }

    /// Returns true when the caller should schedule [`SubmitMotion::finish_return`]
    pub fn pointer_leave(&mut self, form_valid: bool) -> bool {
        self.hovered = false;
        if !form_valid {
            self.returning = true;
        }
        self.returning
    }

    pub fn finish_return(&mut self) {
        self.returning = false;
    }

    pub fn class(&self, form_valid: bool) -> String {
        let mut classes = Vec::new();
        if self.hovered && !form_valid {
            classes.push("move-right");
        }
        if self.returning {
            classes.push("move-left");
        }
        classes.join(" ")
    }
}
