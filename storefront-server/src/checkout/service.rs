//! Checkout order creation
//!
//! `complete` 的库存复检、扣减和建单在 [`MemoryStore::checkout_gate`]
//! 内串行执行：两个并发请求争抢最后一件库存时，恰好一个成功，
//! 另一个收到 INSUFFICIENT_INVENTORY。

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use validator::Validate;

use shared::models::{
    Cart, FinancialStatus, Order, OrderStatus, ShippingRate, Totals,
};
use shared::util::{new_token, now_millis};

use crate::cart::CartService;
use crate::core::Config;
use crate::pricing::compute_totals;
use crate::store::MemoryStore;
use crate::utils::{AppError, AppResult};

use super::CheckoutRequest;

/// Checkout session view (`action=create`): everything the checkout page
/// needs to render
#[derive(Debug, Serialize)]
pub struct CheckoutSession {
    pub cart: Cart,
    pub totals: Totals,
    pub shipping_rates: Vec<ShippingRate>,
}

/// Checkout service
#[derive(Clone)]
pub struct CheckoutService {
    store: Arc<MemoryStore>,
    carts: CartService,
    config: Config,
}

impl CheckoutService {
    pub fn new(store: Arc<MemoryStore>, config: Config) -> Self {
        let carts = CartService::new(store.clone(), config.clone());
        Self {
            store,
            carts,
            config,
        }
    }

    /// Begin a checkout: current cart, its totals and the available rates
    pub fn session(&self, token: &str) -> AppResult<CheckoutSession> {
        let cart = self.store.cart_required(token)?;
        let totals = self.carts.totals(&cart)?;
        Ok(CheckoutSession {
            cart,
            totals,
            shipping_rates: self.store.shipping_rates(),
        })
    }

    /// Price the cart without persisting anything
    ///
    /// An empty cart yields an all-zero breakdown — display is allowed,
    /// only `complete` refuses it.
    pub fn calculate(&self, token: &str) -> AppResult<Totals> {
        let cart = self.store.cart_required(token)?;
        self.carts.totals(&cart)
    }

    /// Finalize the order
    pub async fn complete(&self, token: &str, request: CheckoutRequest) -> AppResult<Order> {
        let cart = self.store.cart_required(token)?;
        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        request.validate().map_err(AppError::from)?;

        // Serializing boundary: availability re-check, decrement, order
        // creation and discount usage bump happen under one gate.
        let _gate = self.store.checkout_gate().lock().await;

        let discount = self.carts.resolve_discount(&cart)?;
        let rate = self.carts.resolve_shipping_rate(&cart)?;

        let lines: Vec<(String, i64)> = cart
            .items
            .iter()
            .map(|l| (l.product_id.clone(), i64::from(l.quantity)))
            .collect();
        self.store.reserve(&lines)?;

        let totals = compute_totals(
            &cart.items,
            discount.as_ref(),
            rate.as_ref(),
            self.config.tax_rate_percent,
            &self.config.currency,
        );

        let now = now_millis();
        let order = Order {
            id: new_token(),
            number: self.store.next_order_number(),
            email: request.email.trim().to_lowercase(),
            items: cart.items.clone(),
            totals,
            discount_code: discount.as_ref().map(|d| d.code.clone()),
            shipping_rate_id: rate.as_ref().map(|r| r.id.clone()),
            shipping_rate_name: rate.as_ref().map(|r| r.name.clone()),
            shipping_address: request.shipping_address.into(),
            status: OrderStatus::Pending,
            // Demo checkout charges immediately
            financial_status: FinancialStatus::Paid,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_order(order.clone());

        if let Some(d) = &discount {
            self.store.increment_discount_usage(&d.code);
        }
        self.store.record_customer_purchase(
            &order.email,
            &order.shipping_address.first_name,
            &order.shipping_address.last_name,
            order.totals.total,
        );

        // Cart is spent; keep the token alive with a fresh cart
        self.store.save_cart(Cart::new(token));

        info!(
            order = order.number,
            email = %order.email,
            total = order.totals.total,
            "Order created"
        );
        Ok(order)
    }

    /// Move an order to a new fulfillment status
    ///
    /// Cancelling restores the order's units to stock and refunds it.
    pub fn update_status(&self, order_id: &str, next: OrderStatus) -> AppResult<Order> {
        let mut order = self
            .store
            .order(order_id)
            .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

        if !order.status.can_transition(next) {
            return Err(AppError::InvalidStatusTransition {
                from: order.status,
                to: next,
            });
        }

        if next == OrderStatus::Cancelled {
            let lines: Vec<(String, i64)> = order
                .items
                .iter()
                .map(|l| (l.product_id.clone(), i64::from(l.quantity)))
                .collect();
            self.store.release(&lines);
            if order.financial_status == FinancialStatus::Paid {
                order.financial_status = FinancialStatus::Refunded;
            }
        }

        order.status = next;
        order.updated_at = now_millis();
        self.store.save_order(order.clone());
        Ok(order)
    }
}
