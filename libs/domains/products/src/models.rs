use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// Largest number of digits allowed left of the decimal point
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 16;
/// Scale every stored price is normalized to
pub const PRICE_SCALE: u32 = 2;

/// Product as held by the store.
///
/// `id` is `None` until the first save assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category: String,
}

impl Product {
    /// Build an unsaved product from request data. The incoming `id` is ignored.
    pub fn from_view(view: ProductView) -> ProductResult<Self> {
        let price = required_price(view.price)?;

        Ok(Self {
            id: None,
            name: view.name,
            description: view.description,
            price: normalize_price(price),
            quantity: view.quantity.unwrap_or(0),
            category: view.category,
        })
    }

    /// Overwrite every mutable field from `view`, keeping `id`.
    pub fn apply_update(&mut self, view: ProductView) -> ProductResult<()> {
        self.price = normalize_price(required_price(view.price)?);
        self.name = view.name;
        self.description = view.description;
        self.quantity = view.quantity.unwrap_or(0);
        self.category = view.category;
        Ok(())
    }
}

fn required_price(price: Option<Decimal>) -> ProductResult<Decimal> {
    price.ok_or_else(|| ProductError::InvalidInput(PRICE_REQUIRED.to_string()))
}

/// Round to two fraction digits, ties to even, and pin the scale at 2.
///
/// `329.987 -> 329.99`, `329.985 -> 329.98`, `10 -> 10.00`.
pub fn normalize_price(price: Decimal) -> Decimal {
    let mut rounded = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(PRICE_SCALE);
    rounded
}

const PRICE_REQUIRED: &str = "O preço é obrigatório";
const PRICE_POSITIVE: &str = "O preço deve ser positivo";
const PRICE_DIGITS: &str = "O preço deve ter no máximo 16 dígitos inteiros e 2 decimais";

/// Product as sent and received over HTTP.
///
/// Field names are English; the Portuguese names are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductView {
    /// Assigned by the server, ignored on input
    #[serde(default)]
    #[schema(read_only, example = 1)]
    pub id: Option<i64>,

    #[serde(default, alias = "nome")]
    #[validate(
        custom(function = "not_blank", message = "O nome é obrigatório!"),
        length(max = 100, message = "O nome não pode exceder 100 caracteres")
    )]
    #[schema(example = "Notebook", max_length = 100)]
    pub name: String,

    #[serde(default, alias = "descricao")]
    #[validate(custom(function = "not_blank", message = "A descrição é obrigatória"))]
    #[schema(example = "Notebook 16GB RAM, SSD 512GB")]
    pub description: String,

    /// Accepted as a JSON number or numeric string, written as an exact number
    #[serde(
        default,
        alias = "preco",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    #[validate(
        required(message = "O preço é obrigatório"),
        custom(function = "validate_price")
    )]
    #[schema(value_type = f64, example = 3299.99)]
    pub price: Option<Decimal>,

    /// Defaults to 0 when omitted or null
    #[serde(default, alias = "quantidade")]
    #[validate(range(min = 0, message = "A quantidade não pode ser negativa"))]
    #[schema(example = 10, minimum = 0)]
    pub quantity: Option<i32>,

    #[serde(default, alias = "categoria")]
    #[validate(
        custom(function = "not_blank", message = "A categoria é obrigatória"),
        length(max = 50, message = "A categoria não pode exceder 50 caracteres")
    )]
    #[schema(example = "Eletrônicos", max_length = 50)]
    pub category: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: Some(product.price),
            quantity: Some(product.quantity),
            category: product.category,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("positive").with_message(PRICE_POSITIVE.into()));
    }

    let normalized = price.normalize();
    let integer_digits = normalized.trunc().abs().to_string().trim_start_matches('0').len() as u32;
    if normalized.scale() > PRICE_SCALE || integer_digits > PRICE_MAX_INTEGER_DIGITS {
        return Err(ValidationError::new("digits").with_message(PRICE_DIGITS.into()));
    }

    Ok(())
}
