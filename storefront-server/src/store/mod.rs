//! In-memory data store
//!
//! 进程内数据仓库，取代传统数据库：所有实体保存在 [`DashMap`] 中，
//! 启动时通过 [`seed`] 播种示例数据，进程重启后全部丢失（设计如此）。
//!
//! # 并发模型
//!
//! 单个 map 的读写由 DashMap 分片锁保护。跨多条记录的
//! "检查库存 → 扣减 → 建单" 序列不是单 key 操作，必须持有
//! [`MemoryStore::checkout_gate`] 串行执行，否则两个并发结账都能
//! 通过库存检查造成超卖（经典 check-then-act 竞争）。

pub mod seed;

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::Mutex;

use shared::models::{
    Cart, Customer, Discount, InventoryRecord, Order, Product, ShippingRate,
};
use shared::util::now_millis;

use crate::utils::{AppError, AppResult};

/// 首个订单号
const FIRST_ORDER_NUMBER: u64 = 1001;

/// In-memory repository, constructed once at startup and passed by
/// dependency injection into request handlers.
#[derive(Debug)]
pub struct MemoryStore {
    products: DashMap<String, Product>,
    /// Keyed by upper-cased code
    discounts: DashMap<String, Discount>,
    shipping_rates: DashMap<String, ShippingRate>,
    inventory: DashMap<String, InventoryRecord>,
    /// Keyed by cart token
    carts: DashMap<String, Cart>,
    orders: DashMap<String, Order>,
    /// Keyed by lower-cased email
    customers: DashMap<String, Customer>,
    order_number_seq: AtomicU64,
    /// Serializing boundary for checkout finalization
    checkout_gate: Mutex<()>,
}

impl MemoryStore {
    /// 创建空存储 (测试常用)
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            discounts: DashMap::new(),
            shipping_rates: DashMap::new(),
            inventory: DashMap::new(),
            carts: DashMap::new(),
            orders: DashMap::new(),
            customers: DashMap::new(),
            order_number_seq: AtomicU64::new(FIRST_ORDER_NUMBER),
            checkout_gate: Mutex::new(()),
        }
    }

    /// 创建并播种示例数据
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::populate(&store);
        store
    }

    // ==================== Catalog ====================

    pub fn insert_product(&self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.products.get(id).map(|p| p.clone())
    }

    /// 所有在售商品，按标题排序
    pub fn products(&self) -> Vec<Product> {
        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.clone())
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        items
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // ==================== Discounts ====================

    pub fn insert_discount(&self, discount: Discount) {
        self.discounts.insert(discount.code.clone(), discount);
    }

    /// 折扣码查找，大小写不敏感
    pub fn discount_by_code(&self, code: &str) -> Option<Discount> {
        self.discounts
            .get(&code.trim().to_uppercase())
            .map(|d| d.clone())
    }

    pub fn discount_count(&self) -> usize {
        self.discounts.len()
    }

    /// 结账成功后递增使用次数
    pub fn increment_discount_usage(&self, code: &str) {
        if let Some(mut d) = self.discounts.get_mut(&code.trim().to_uppercase()) {
            d.used_count += 1;
        }
    }

    // ==================== Shipping ====================

    pub fn insert_shipping_rate(&self, rate: ShippingRate) {
        self.shipping_rates.insert(rate.id.clone(), rate);
    }

    pub fn shipping_rate(&self, id: &str) -> Option<ShippingRate> {
        self.shipping_rates.get(id).map(|r| r.clone())
    }

    pub fn shipping_rates(&self) -> Vec<ShippingRate> {
        let mut rates: Vec<ShippingRate> =
            self.shipping_rates.iter().map(|r| r.clone()).collect();
        rates.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rates
    }

    // ==================== Inventory ====================

    pub fn insert_inventory(&self, record: InventoryRecord) {
        self.inventory.insert(record.product_id.clone(), record);
    }

    pub fn inventory(&self, product_id: &str) -> Option<InventoryRecord> {
        self.inventory.get(product_id).map(|r| r.clone())
    }

    /// 可售数量；无库存记录的商品视为 0
    pub fn available(&self, product_id: &str) -> i64 {
        self.inventory
            .get(product_id)
            .map(|r| r.available())
            .unwrap_or(0)
    }

    /// Check availability for every line, then decrement — all or nothing.
    ///
    /// Callers MUST hold [`checkout_gate`](Self::checkout_gate) across this
    /// call; the gate is what makes concurrent checkouts of the last unit
    /// resolve to exactly one winner.
    pub fn reserve(&self, lines: &[(String, i64)]) -> AppResult<()> {
        for (product_id, qty) in lines {
            let available = self.available(product_id);
            if available < *qty {
                return Err(AppError::InsufficientInventory {
                    product_id: product_id.clone(),
                    requested: *qty,
                    available,
                });
            }
        }
        for (product_id, qty) in lines {
            if let Some(mut rec) = self.inventory.get_mut(product_id) {
                rec.quantity -= qty;
            }
        }
        Ok(())
    }

    /// Return previously reserved units to stock (order cancellation)
    pub fn release(&self, lines: &[(String, i64)]) {
        for (product_id, qty) in lines {
            if let Some(mut rec) = self.inventory.get_mut(product_id) {
                rec.quantity += qty;
            }
        }
    }

    /// 结账串行化闸门
    pub fn checkout_gate(&self) -> &Mutex<()> {
        &self.checkout_gate
    }

    // ==================== Carts ====================

    pub fn insert_cart(&self, cart: Cart) {
        self.carts.insert(cart.token.clone(), cart);
    }

    pub fn cart(&self, token: &str) -> Option<Cart> {
        self.carts.get(token).map(|c| c.clone())
    }

    /// 按令牌取购物车，不存在时返回 CART_NOT_FOUND
    pub fn cart_required(&self, token: &str) -> AppResult<Cart> {
        self.cart(token)
            .ok_or_else(|| AppError::CartNotFound(token.to_string()))
    }

    pub fn save_cart(&self, cart: Cart) {
        self.carts.insert(cart.token.clone(), cart);
    }

    // ==================== Orders ====================

    pub fn next_order_number(&self) -> u64 {
        self.order_number_seq.fetch_add(1, Ordering::SeqCst)
    }

    pub fn insert_order(&self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    pub fn order(&self, id: &str) -> Option<Order> {
        self.orders.get(id).map(|o| o.clone())
    }

    pub fn save_order(&self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    /// 按邮箱查询历史订单，新单在前
    pub fn orders_by_email(&self, email: &str) -> Vec<Order> {
        let email = email.trim().to_lowercase();
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.email.to_lowercase() == email)
            .map(|o| o.clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    // ==================== Customers ====================

    pub fn customer(&self, email: &str) -> Option<Customer> {
        self.customers
            .get(&email.trim().to_lowercase())
            .map(|c| c.clone())
    }

    /// 结账完成后更新客户统计，不存在时创建
    pub fn record_customer_purchase(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        amount: f64,
    ) {
        let key = email.trim().to_lowercase();
        let now = now_millis();
        self.customers
            .entry(key.clone())
            .and_modify(|c| {
                c.orders_count += 1;
                c.total_spent += amount;
                c.updated_at = now;
            })
            .or_insert_with(|| Customer {
                email: key,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                orders_count: 1,
                total_spent: amount,
                created_at: now,
                updated_at: now,
            });
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
