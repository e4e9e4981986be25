//! Client-side product store
//!
//! State changes go through [`ProductState::apply`]; the async actions on
//! [`ProductStore`] follow the same three phases: mark pending, call the
//! gateway, then commit the result or record the error. Nothing is applied
//! optimistically and in-flight requests are neither deduplicated nor
//! cancelled, so the last response to arrive wins.

use super::api::{GatewayError, ProductGateway};
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    /// Products in the order the server returned them
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    Pending,
    Loaded(Vec<Product>),
    Created(Product),
    Updated(Product),
    Deleted(ProductId),
    Failed(String),
}

impl ProductState {
    pub fn apply(&mut self, action: ProductAction) {
        match action {
            ProductAction::Pending => {
                self.loading = true;
                self.error = None;
            }
            ProductAction::Loaded(products) => {
                self.loading = false;
                self.products = products;
            }
            ProductAction::Created(product) => {
                self.loading = false;
                self.products.push(product);
            }
            ProductAction::Updated(product) => {
                self.loading = false;
                if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *existing = product;
                }
            }
            ProductAction::Deleted(id) => {
                self.loading = false;
                self.products.retain(|p| p.id != id);
            }
            ProductAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

/// Shared store handle, provided through the Leptos context
#[derive(Clone)]
pub struct ProductStore {
    state: RwSignal<ProductState>,
    gateway: Arc<dyn ProductGateway>,
}

impl ProductStore {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self {
            state: RwSignal::new(ProductState::default()),
            gateway,
        }
    }

    pub fn state(&self) -> RwSignal<ProductState> {
        self.state
    }

    fn dispatch(&self, action: ProductAction) {
        self.state.update(|state| state.apply(action));
    }

    fn fail(&self, operation: &str, error: GatewayError) {
        log::error!("{} failed: {}", operation, error);
        self.dispatch(ProductAction::Failed(error.to_string()));
    }

    /// Replace the whole collection with the server's list
    pub async fn fetch_all(&self) {
        log::debug!("Fetching products");
        self.dispatch(ProductAction::Pending);
        match self.gateway.list().await {
            Ok(products) => {
                log::debug!("Fetched {} products", products.len());
                self.dispatch(ProductAction::Loaded(products));
            }
            Err(e) => self.fail("Fetch products", e),
        }
    }

    pub async fn create(&self, product: ProductDto) {
        log::debug!("Creating product {:?}", product.product_name);
        self.dispatch(ProductAction::Pending);
        match self.gateway.create(&product).await {
            Ok(created) => {
                log::debug!("Created product {}", created.id);
                self.dispatch(ProductAction::Created(created));
            }
            Err(e) => self.fail("Create product", e),
        }
    }

    pub async fn update(&self, id: ProductId, product: ProductDto) {
        log::debug!("Updating product {}", id);
        self.dispatch(ProductAction::Pending);
        match self.gateway.update(&id, &product).await {
            Ok(updated) => self.dispatch(ProductAction::Updated(updated)),
            Err(e) => self.fail("Update product", e),
        }
    }

    pub async fn remove(&self, id: ProductId) {
        log::debug!("Deleting product {}", id);
        self.dispatch(ProductAction::Pending);
        match self.gateway.delete(&id).await {
            Ok(()) => self.dispatch(ProductAction::Deleted(id)),
            Err(e) => self.fail("Delete product", e),
        }
    }

    pub fn spawn_fetch_all(&self) {
        let store = self.clone();
        wasm_bindgen_futures::spawn_local(async move { store.fetch_all().await });
    }

    pub fn spawn_create(&self, product: ProductDto) {
        let store = self.clone();
        wasm_bindgen_futures::spawn_local(async move { store.create(product).await });
    }

    pub fn spawn_update(&self, id: ProductId, product: ProductDto) {
        let store = self.clone();
        wasm_bindgen_futures::spawn_local(async move { store.update(id, product).await });
    }

    pub fn spawn_remove(&self, id: ProductId) {
        let store = self.clone();
        wasm_bindgen_futures::spawn_local(async move { store.remove(id).await });
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory gateway used by the store and form tests

    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum GatewayCall {
        List,
        Create(ProductDto),
        Update(ProductId, ProductDto),
        Delete(ProductId),
    }

    #[derive(Default)]
    pub struct FakeGateway {
        pub products: Mutex<Vec<Product>>,
        pub calls: Mutex<Vec<GatewayCall>>,
        pub failure: Mutex<Option<GatewayError>>,
        next_id: Mutex<u32>,
    }

    impl FakeGateway {
        pub fn with_products(products: Vec<Product>) -> Self {
            Self {
                products: Mutex::new(products),
                next_id: Mutex::new(100),
                ..Default::default()
            }
        }

        pub fn fail_with(&self, error: GatewayError) {
            *self.failure.lock().unwrap() = Some(error);
        }

        pub fn calls(&self) -> Vec<GatewayCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: GatewayCall) -> Result<(), GatewayError> {
            self.calls.lock().unwrap().push(call);
            match self.failure.lock().unwrap().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProductGateway for FakeGateway {
        async fn list(&self) -> Result<Vec<Product>, GatewayError> {
            self.record(GatewayCall::List)?;
            Ok(self.products.lock().unwrap().clone())
        }

        async fn create(&self, product: &ProductDto) -> Result<Product, GatewayError> {
            self.record(GatewayCall::Create(product.clone()))?;
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let created = Product::from_dto(ProductId::new(next_id.to_string()), product.clone());
            self.products.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: &ProductId,
            product: &ProductDto,
        ) -> Result<Product, GatewayError> {
            self.record(GatewayCall::Update(id.clone(), product.clone()))?;
            Ok(Product::from_dto(id.clone(), product.clone()))
        }

        async fn delete(&self, id: &ProductId) -> Result<(), GatewayError> {
            self.record(GatewayCall::Delete(id.clone()))?;
            self.products.lock().unwrap().retain(|p| &p.id != id);
            Ok(())
        }
    }

    pub fn product(id: &str, name: &str, category: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            product_name: name.to_string(),
            category: category.to_string(),
            price,
            discount: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{product, FakeGateway, GatewayCall};
    use super::*;
    use futures::executor::block_on;

    fn store_with(products: Vec<Product>) -> (ProductStore, Arc<FakeGateway>) {
        let gateway = Arc::new(FakeGateway::with_products(products));
        (ProductStore::new(gateway.clone()), gateway)
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ProductState::default();
        assert!(state.products.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_pending_sets_loading_and_clears_error() {
        let mut state = ProductState {
            error: Some("HTTP 500".into()),
            ..Default::default()
        };
        state.apply(ProductAction::Pending);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_loaded_replaces_collection_in_server_order() {
        let mut state = ProductState {
            products: vec![product("1", "Old", "Misc", 1)],
            loading: true,
            error: None,
        };
        state.apply(ProductAction::Loaded(vec![
            product("3", "Lamp", "Lighting", 300),
            product("2", "Desk", "Furniture", 200),
        ]));
        assert!(!state.loading);
        let ids: Vec<&str> = state.products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }

    #[test]
    fn test_updated_replaces_matching_record_only() {
        let mut state = ProductState {
            products: vec![product("1", "Chair", "Furniture", 100), product("2", "Desk", "Furniture", 200)],
            ..Default::default()
        };
        state.apply(ProductAction::Updated(product("2", "Big Desk", "Office", 250)));
        assert_eq!(state.products[0].product_name, "Chair");
        assert_eq!(state.products[1].product_name, "Big Desk");

        state.apply(ProductAction::Updated(product("9", "Ghost", "None", 1)));
        assert_eq!(state.products.len(), 2);
        assert!(state.find(&ProductId::new("9")).is_none());
    }

    #[test]
    fn test_failed_keeps_collection_and_records_message() {
        let mut state = ProductState {
            products: vec![product("1", "Chair", "Furniture", 100)],
            loading: true,
            error: None,
        };
        state.apply(ProductAction::Failed("HTTP 503".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("HTTP 503"));
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn test_fetch_all_loads_server_collection() {
        let (store, gateway) = store_with(vec![product("1", "Chair", "Furniture", 15000)]);
        block_on(store.fetch_all());

        let state = store.state().get_untracked();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.products, vec![product("1", "Chair", "Furniture", 15000)]);
        assert_eq!(gateway.calls(), vec![GatewayCall::List]);
    }

    #[test]
    fn test_fetch_failure_surfaces_message_and_clears_loading() {
        let (store, gateway) = store_with(vec![]);
        gateway.fail_with(GatewayError::Http {
            status: 502,
            status_text: "Bad Gateway".into(),
        });
        block_on(store.fetch_all());

        let state = store.state().get_untracked();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("HTTP 502 Bad Gateway"));
    }

    #[test]
    fn test_create_appends_exactly_one_record() {
        let (store, _gateway) = store_with(vec![product("1", "Desk", "Furniture", 200)]);
        block_on(store.fetch_all());

        let dto = ProductDto {
            product_name: "Chair".into(),
            category: "Furniture".into(),
            price: 15000,
            discount: 0.0,
        };
        block_on(store.create(dto.clone()));

        let state = store.state().get_untracked();
        assert_eq!(state.products.len(), 2);
        let matching: Vec<&Product> = state
            .products
            .iter()
            .filter(|p| p.to_dto() == dto)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(state.products.last().map(|p| p.product_name.as_str()), Some("Chair"));
    }

    #[test]
    fn test_update_replaces_by_id() {
        let (store, gateway) = store_with(vec![
            product("1", "Chair", "Furniture", 100),
            product("2", "Desk", "Furniture", 200),
        ]);
        block_on(store.fetch_all());

        let dto = ProductDto {
            product_name: "Armchair".into(),
            category: "Furniture".into(),
            price: 175,
            discount: 5.0,
        };
        block_on(store.update(ProductId::new("1"), dto.clone()));

        let state = store.state().get_untracked();
        let updated = state.find(&ProductId::new("1")).unwrap();
        assert_eq!(updated.to_dto(), dto);
        assert_eq!(state.products[1].product_name, "Desk");
        assert_eq!(
            gateway.calls().last(),
            Some(&GatewayCall::Update(ProductId::new("1"), dto))
        );
    }

    #[test]
    fn test_delete_removes_record() {
        let (store, _gateway) = store_with(vec![
            product("1", "Chair", "Furniture", 100),
            product("2", "Desk", "Furniture", 200),
        ]);
        block_on(store.fetch_all());
        block_on(store.remove(ProductId::new("1")));

        let state = store.state().get_untracked();
        assert!(state.find(&ProductId::new("1")).is_none());
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn test_failed_delete_leaves_collection_unchanged() {
        let (store, gateway) = store_with(vec![product("1", "Chair", "Furniture", 100)]);
        block_on(store.fetch_all());
        gateway.fail_with(GatewayError::Network("offline".into()));
        block_on(store.remove(ProductId::new("1")));

        let state = store.state().get_untracked();
        assert!(state.find(&ProductId::new("1")).is_some());
        assert_eq!(state.error.as_deref(), Some("Failed to send request: offline"));
    }
}
