//! Cart mutation operations
//!
//! 数量语义：加购/改量时把请求数量收敛 (clamp) 到当前可售库存，
//! 收敛到 0 等价于移除该行。库存的硬校验发生在结账时刻，而不是
//! 这里 —— 加购之后别的买家仍可能先把货买走。

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use shared::models::{Cart, Discount, LineItem, ShippingRate, Totals};
use shared::util::{new_token, now_millis};

use crate::core::Config;
use crate::pricing::money::to_decimal;
use crate::pricing::{compute_totals, validate_discount};
use crate::store::MemoryStore;
use crate::utils::{AppError, AppResult};

/// Cart service, shared by the cart and checkout route handlers
#[derive(Clone)]
pub struct CartService {
    store: Arc<MemoryStore>,
    config: Config,
}

impl CartService {
    pub fn new(store: Arc<MemoryStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Issue a new cart with a fresh opaque token
    pub fn create_cart(&self) -> Cart {
        let cart = Cart::new(new_token());
        self.store.insert_cart(cart.clone());
        cart
    }

    pub fn cart(&self, token: &str) -> AppResult<Cart> {
        self.store.cart_required(token)
    }

    /// Add a product to the cart, merging into an existing line
    ///
    /// The resulting line quantity is clamped to available inventory.
    pub fn add_item(&self, token: &str, product_id: &str, quantity: u32) -> AppResult<Cart> {
        if quantity == 0 {
            return Err(AppError::Validation("quantity must be positive".into()));
        }

        let mut cart = self.store.cart_required(token)?;
        let product = self
            .store
            .product(product_id)
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))?;

        let available = self.store.available(product_id);
        let existing = cart
            .line_for_product(product_id)
            .map(|l| l.quantity)
            .unwrap_or(0);
        let clamped = (u64::from(existing) + u64::from(quantity)).min(available.max(0) as u64) as u32;

        if clamped == 0 {
            // Nothing sellable — drop the line if it exists
            cart.items.retain(|l| l.product_id != product_id);
        } else if let Some(line) = cart.items.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = clamped;
        } else {
            cart.items.push(LineItem {
                id: new_token(),
                product_id: product.id.clone(),
                title: product.title.clone(),
                image: product.image.clone(),
                unit_price: product.price,
                quantity: clamped,
            });
        }

        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    /// Set a line's quantity; zero removes the line
    pub fn update_quantity(&self, token: &str, line_id: &str, quantity: u32) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;

        let Some(pos) = cart.items.iter().position(|l| l.id == line_id) else {
            return Err(AppError::Validation(format!(
                "no line item with id {line_id}"
            )));
        };

        if quantity == 0 {
            cart.items.remove(pos);
        } else {
            let product_id = cart.items[pos].product_id.clone();
            let available = self.store.available(&product_id).max(0) as u64;
            let clamped = u64::from(quantity).min(available) as u32;
            if clamped == 0 {
                cart.items.remove(pos);
            } else {
                cart.items[pos].quantity = clamped;
            }
        }

        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    pub fn remove_item(&self, token: &str, line_id: &str) -> AppResult<Cart> {
        self.update_quantity(token, line_id, 0)
    }

    /// Empty the cart, keeping the token valid
    pub fn clear(&self, token: &str) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;
        cart.items.clear();
        cart.discount_codes.clear();
        cart.shipping_rate_id = None;
        cart.note = None;
        cart.attributes.clear();
        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    /// Apply a discount code after validating it against the current subtotal
    pub fn apply_discount_code(&self, token: &str, code: &str) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;

        let normalized = code.trim().to_uppercase();
        let discount = self
            .store
            .discount_by_code(&normalized)
            .ok_or_else(|| AppError::InvalidDiscount(normalized.clone()))?;
        validate_discount(&discount, self.subtotal(&cart), now_millis())?;

        if !cart.discount_codes.contains(&normalized) {
            cart.discount_codes.push(normalized);
        }
        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    pub fn remove_discount_code(&self, token: &str, code: &str) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;
        let normalized = code.trim().to_uppercase();
        cart.discount_codes.retain(|c| c != &normalized);
        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    /// Select a shipping rate; unknown ids are a validation error, not a
    /// silent free-shipping fallback
    pub fn set_shipping_rate(&self, token: &str, rate_id: &str) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;
        let rate = self
            .store
            .shipping_rate(rate_id)
            .ok_or_else(|| AppError::ShippingRateNotFound(rate_id.to_string()))?;
        cart.shipping_rate_id = Some(rate.id);
        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    pub fn set_note(&self, token: &str, note: Option<String>) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;
        cart.note = note.filter(|n| !n.trim().is_empty());
        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    pub fn merge_attributes(
        &self,
        token: &str,
        attributes: BTreeMap<String, String>,
    ) -> AppResult<Cart> {
        let mut cart = self.store.cart_required(token)?;
        cart.attributes.extend(attributes);
        cart.touch();
        self.store.save_cart(cart.clone());
        Ok(cart)
    }

    /// Price the cart as it stands
    ///
    /// Resolves the applied discount (first code wins) and the selected
    /// shipping rate; stale references are hard errors here too.
    pub fn totals(&self, cart: &Cart) -> AppResult<Totals> {
        let discount = self.resolve_discount(cart)?;
        let rate = self.resolve_shipping_rate(cart)?;
        Ok(compute_totals(
            &cart.items,
            discount.as_ref(),
            rate.as_ref(),
            self.config.tax_rate_percent,
            &self.config.currency,
        ))
    }

    /// Resolve and re-validate the cart's applied discount, if any
    pub fn resolve_discount(&self, cart: &Cart) -> AppResult<Option<Discount>> {
        let Some(code) = cart.discount_codes.first() else {
            return Ok(None);
        };
        let discount = self
            .store
            .discount_by_code(code)
            .ok_or_else(|| AppError::InvalidDiscount(code.clone()))?;
        validate_discount(&discount, self.subtotal(cart), now_millis())?;
        Ok(Some(discount))
    }

    /// Resolve the cart's selected shipping rate, if any
    pub fn resolve_shipping_rate(&self, cart: &Cart) -> AppResult<Option<ShippingRate>> {
        let Some(rate_id) = &cart.shipping_rate_id else {
            return Ok(None);
        };
        let rate = self
            .store
            .shipping_rate(rate_id)
            .ok_or_else(|| AppError::ShippingRateNotFound(rate_id.clone()))?;
        Ok(Some(rate))
    }

    fn subtotal(&self, cart: &Cart) -> Decimal {
        cart.items
            .iter()
            .map(|item| to_decimal(item.unit_price) * Decimal::from(item.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DiscountKind, InventoryRecord, Product};

    fn service() -> CartService {
        let store = Arc::new(MemoryStore::new());
        store.insert_product(Product {
            id: "p1".to_string(),
            title: "Camp Mug".to_string(),
            description: String::new(),
            image: String::new(),
            price: 12.0,
            category: "gear".to_string(),
            is_active: true,
        });
        store.insert_inventory(InventoryRecord {
            product_id: "p1".to_string(),
            quantity: 5,
            reserved: 0,
        });
        let config = Config {
            http_port: 0,
            environment: "test".to_string(),
            shop_name: "Test Shop".to_string(),
            currency: "USD".to_string(),
            tax_rate_percent: 8.0,
        };
        CartService::new(store, config)
    }

    #[test]
    fn test_create_and_fetch_cart() {
        let svc = service();
        let cart = svc.create_cart();
        assert!(cart.is_empty());
        assert_eq!(svc.cart(&cart.token).unwrap().token, cart.token);
    }

    #[test]
    fn test_unknown_token_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.cart("ghost"),
            Err(AppError::CartNotFound(_))
        ));
    }

    #[test]
    fn test_add_item_snapshots_product() {
        let svc = service();
        let cart = svc.create_cart();
        let cart = svc.add_item(&cart.token, "p1", 2).unwrap();

        assert_eq!(cart.items.len(), 1);
        let line = &cart.items[0];
        assert_eq!(line.title, "Camp Mug");
        assert_eq!(line.unit_price, 12.0);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let svc = service();
        let cart = svc.create_cart();
        svc.add_item(&cart.token, "p1", 2).unwrap();
        let cart = svc.add_item(&cart.token, "p1", 1).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn test_add_clamps_to_available_inventory() {
        let svc = service();
        let cart = svc.create_cart();
        let cart = svc.add_item(&cart.token, "p1", 99).unwrap();
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_add_unknown_product() {
        let svc = service();
        let cart = svc.create_cart();
        assert!(matches!(
            svc.add_item(&cart.token, "ghost", 1),
            Err(AppError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let svc = service();
        let cart = svc.create_cart();
        assert!(matches!(
            svc.add_item(&cart.token, "p1", 0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let svc = service();
        let cart = svc.create_cart();
        let cart = svc.add_item(&cart.token, "p1", 2).unwrap();
        let line_id = cart.items[0].id.clone();

        let cart = svc.update_quantity(&cart.token, &line_id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps() {
        let svc = service();
        let cart = svc.create_cart();
        let cart = svc.add_item(&cart.token, "p1", 1).unwrap();
        let line_id = cart.items[0].id.clone();

        let cart = svc.update_quantity(&cart.token, &line_id, 50).unwrap();
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_clear_resets_everything() {
        let svc = service();
        let cart = svc.create_cart();
        svc.add_item(&cart.token, "p1", 2).unwrap();
        svc.set_note(&cart.token, Some("gift wrap".into())).unwrap();

        let cart = svc.clear(&cart.token).unwrap();
        assert!(cart.is_empty());
        assert!(cart.note.is_none());
        assert!(cart.discount_codes.is_empty());
    }

    #[test]
    fn test_apply_discount_normalizes_case() {
        let svc = service();
        svc.store.insert_discount(Discount {
            code: "SAVE10".to_string(),
            kind: DiscountKind::FixedAmount,
            value: 10.0,
            min_purchase: None,
            max_uses: None,
            used_count: 0,
            starts_at: None,
            ends_at: None,
            is_active: true,
        });
        let cart = svc.create_cart();
        svc.add_item(&cart.token, "p1", 2).unwrap();

        let cart = svc.apply_discount_code(&cart.token, "  save10 ").unwrap();
        assert_eq!(cart.discount_codes, vec!["SAVE10".to_string()]);

        // Applying twice does not duplicate
        let cart = svc.apply_discount_code(&cart.token, "SAVE10").unwrap();
        assert_eq!(cart.discount_codes.len(), 1);
    }

    #[test]
    fn test_apply_unknown_discount_is_hard_error() {
        let svc = service();
        let cart = svc.create_cart();
        assert!(matches!(
            svc.apply_discount_code(&cart.token, "NOPE"),
            Err(AppError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_apply_discount_below_minimum() {
        let svc = service();
        svc.store.insert_discount(Discount {
            code: "BIG50".to_string(),
            kind: DiscountKind::FixedAmount,
            value: 50.0,
            min_purchase: Some(100.0),
            max_uses: None,
            used_count: 0,
            starts_at: None,
            ends_at: None,
            is_active: true,
        });
        let cart = svc.create_cart();
        svc.add_item(&cart.token, "p1", 2).unwrap(); // subtotal 24

        assert!(matches!(
            svc.apply_discount_code(&cart.token, "BIG50"),
            Err(AppError::MinimumNotMet { .. })
        ));
    }

    #[test]
    fn test_set_unknown_shipping_rate_is_error() {
        let svc = service();
        let cart = svc.create_cart();
        assert!(matches!(
            svc.set_shipping_rate(&cart.token, "teleport"),
            Err(AppError::ShippingRateNotFound(_))
        ));
    }

    #[test]
    fn test_totals_for_plain_cart() {
        let svc = service();
        let cart = svc.create_cart();
        let cart = svc.add_item(&cart.token, "p1", 2).unwrap();

        let totals = svc.totals(&cart).unwrap();
        assert_eq!(totals.subtotal, 24.0);
        assert_eq!(totals.tax, 1.92);
        assert_eq!(totals.total, 25.92);
    }
}
