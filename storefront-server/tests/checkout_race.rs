//! 并发结账测试 - 争抢最后的库存
//!
//! 两个（以及 N 个）并发 complete 请求同时争抢同一商品的剩余库存，
//! 结账闸门必须保证成功数恰好等于库存数，其余请求收到
//! INSUFFICIENT_INVENTORY，绝不超卖。

use std::sync::Arc;

use futures::future::join_all;

use shared::models::{InventoryRecord, Product, ShippingRate};
use storefront_server::checkout::{AddressInput, CheckoutRequest};
use storefront_server::{AppError, CartService, CheckoutService, Config, MemoryStore};

fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "test".to_string(),
        shop_name: "Test Shop".to_string(),
        currency: "USD".to_string(),
        tax_rate_percent: 8.0,
    }
}

fn store_with_stock(stock: i64) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.insert_product(Product {
        id: "prod-last-unit".to_string(),
        title: "Limited Run Jacket".to_string(),
        description: String::new(),
        image: String::new(),
        price: 129.0,
        category: "apparel".to_string(),
        is_active: true,
    });
    store.insert_inventory(InventoryRecord {
        product_id: "prod-last-unit".to_string(),
        quantity: stock,
        reserved: 0,
    });
    store.insert_shipping_rate(ShippingRate {
        id: "standard".to_string(),
        name: "Standard Shipping".to_string(),
        price: 5.99,
        min_order_amount: None,
        delivery_estimate: "5-7 business days".to_string(),
    });
    store
}

fn checkout_request(n: usize) -> CheckoutRequest {
    CheckoutRequest {
        email: format!("buyer{n}@example.com"),
        shipping_address: AddressInput {
            first_name: "Buyer".to_string(),
            last_name: format!("Number{n}"),
            address1: "1 Main St".to_string(),
            address2: None,
            city: "Portland".to_string(),
            province: Some("OR".to_string()),
            country: "US".to_string(),
            zip: "97201".to_string(),
            phone: None,
        },
    }
}

/// 为每个买家建一个已装满的购物车，返回令牌
///
/// 加购发生在库存充足的时候；随后把库存压回 `stock`，
/// 制造"检查时有货、结账时缺货"的竞争窗口。
fn prepare_carts(store: &Arc<MemoryStore>, buyers: usize, stock: i64) -> Vec<String> {
    let carts = CartService::new(store.clone(), test_config());

    // 临时抬高库存，让每个购物车都能装进 1 件
    store.insert_inventory(InventoryRecord {
        product_id: "prod-last-unit".to_string(),
        quantity: buyers as i64,
        reserved: 0,
    });

    let tokens: Vec<String> = (0..buyers)
        .map(|_| {
            let cart = carts.create_cart();
            carts.add_item(&cart.token, "prod-last-unit", 1).unwrap();
            cart.token
        })
        .collect();

    // 压回真实库存
    store.insert_inventory(InventoryRecord {
        product_id: "prod-last-unit".to_string(),
        quantity: stock,
        reserved: 0,
    });

    tokens
}

#[tokio::test]
async fn two_buyers_one_unit_exactly_one_wins() {
    let store = store_with_stock(1);
    let tokens = prepare_carts(&store, 2, 1);
    let service = CheckoutService::new(store.clone(), test_config());

    let tasks = tokens.into_iter().enumerate().map(|(n, token)| {
        let service = service.clone();
        tokio::spawn(async move { service.complete(&token, checkout_request(n)).await })
    });
    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let oversold_rejections = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::InsufficientInventory { .. })))
        .count();

    assert_eq!(successes, 1, "exactly one buyer gets the last unit");
    assert_eq!(oversold_rejections, 1, "the other gets INSUFFICIENT_INVENTORY");
    assert_eq!(store.available("prod-last-unit"), 0, "stock never goes negative");
}

#[tokio::test]
async fn eight_buyers_three_units_no_oversell() {
    const BUYERS: usize = 8;
    const STOCK: i64 = 3;

    let store = store_with_stock(STOCK);
    let tokens = prepare_carts(&store, BUYERS, STOCK);
    let service = CheckoutService::new(store.clone(), test_config());

    let tasks = tokens.into_iter().enumerate().map(|(n, token)| {
        let service = service.clone();
        tokio::spawn(async move { service.complete(&token, checkout_request(n)).await })
    });
    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let rejections = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::InsufficientInventory { .. })))
        .count();

    assert_eq!(successes as i64, STOCK);
    assert_eq!(rejections, BUYERS - STOCK as usize);
    assert_eq!(store.available("prod-last-unit"), 0);

    // 每个成功订单都扣到了真实库存，订单号连续且互不相同
    let mut numbers: Vec<u64> = results
        .iter()
        .filter_map(|r| r.as_ref().ok().map(|o| o.number))
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers.len() as i64, STOCK);
}
