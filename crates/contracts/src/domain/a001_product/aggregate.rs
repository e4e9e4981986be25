use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара, назначаемый сервером.
///
/// Сервер может прислать его как строку или как целое число; на клиенте
/// он хранится как непрозрачный текст и никогда не разбирается.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ProductId(s),
            RawId::Signed(n) => ProductId(n.to_string()),
            RawId::Unsigned(n) => ProductId(n.to_string()),
        })
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога
///
/// Ограничения (непустые name/category, price > 0) проверяются только формой
/// при отправке; здесь принимается всё, что вернул сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub product_name: String,

    pub category: String,

    /// Цена в минимальных единицах валюты (для IDR — рупии)
    pub price: i64,

    /// Скидка в процентах, диапазон не ограничен
    #[serde(default)]
    pub discount: f64,
}

impl Product {
    /// Собрать товар из DTO и идентификатора, выданного сервером
    pub fn from_dto(id: ProductId, dto: ProductDto) -> Self {
        Self {
            id,
            product_name: dto.product_name,
            category: dto.category,
            price: dto.price,
            discount: dto.discount,
        }
    }

    /// Поля товара без идентификатора
    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            product_name: self.product_name.clone(),
            category: self.category.clone(),
            price: self.price,
            discount: self.discount,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запросов POST/PUT `/products`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    pub product_name: String,
    pub category: String,
    pub price: i64,
    #[serde(default)]
    pub discount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_accepts_string_and_number() {
        let from_text: ProductId = serde_json::from_value(json!("a-17")).unwrap();
        assert_eq!(from_text, ProductId::new("a-17"));

        let from_number: ProductId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(from_number.value(), "42");
    }

    #[test]
    fn test_product_decodes_server_payload() {
        let payload = json!({
            "id": 3,
            "product_name": "Chair",
            "category": "Furniture",
            "price": 15000,
            "discount": 12.5
        });
        let product: Product = serde_json::from_value(payload).unwrap();
        assert_eq!(product.id, ProductId::new("3"));
        assert_eq!(product.product_name, "Chair");
        assert_eq!(product.price, 15000);
        assert_eq!(product.discount, 12.5);
    }

    #[test]
    fn test_missing_discount_defaults_to_zero() {
        let payload = json!({
            "id": "x",
            "product_name": "Lamp",
            "category": "Lighting",
            "price": 250000
        });
        let product: Product = serde_json::from_value(payload).unwrap();
        assert_eq!(product.discount, 0.0);
    }

    #[test]
    fn test_dto_wire_shape() {
        let dto = ProductDto {
            product_name: "Chair".into(),
            category: "Furniture".into(),
            price: 15000,
            discount: 0.0,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "product_name": "Chair",
                "category": "Furniture",
                "price": 15000,
                "discount": 0.0
            })
        );
    }

    #[test]
    fn test_dto_conversion_keeps_fields() {
        let product = Product {
            id: ProductId::new("9"),
            product_name: "Desk".into(),
            category: "Furniture".into(),
            price: 1_200_000,
            discount: -5.0,
        };
        let rebuilt = Product::from_dto(product.id.clone(), product.to_dto());
        assert_eq!(rebuilt, product);
    }
}
