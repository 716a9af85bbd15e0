//! Seed data
//!
//! 启动时写入的示例目录/折扣/运费数据。进程重启后回到这份初始状态。

use shared::models::{Discount, DiscountKind, InventoryRecord, Product, ShippingRate};
use shared::util::now_millis;

use super::MemoryStore;

/// 约 30 天的毫秒数，用于构造演示折扣的活动窗口
const THIRTY_DAYS_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Populate the store with demo data
pub fn populate(store: &MemoryStore) {
    let now = now_millis();

    // ==================== Products ====================
    let products = [
        ("prod-waxed-jacket", "Waxed Canvas Field Jacket", "Water-resistant waxed canvas with corduroy collar.", "apparel", 129.00, 12),
        ("prod-merino-beanie", "Merino Wool Beanie", "Midweight merino knit, one size.", "apparel", 24.99, 40),
        ("prod-trail-flask", "Insulated Trail Flask", "Keeps drinks hot for 12 hours, 750ml.", "gear", 34.50, 25),
        ("prod-camp-mug", "Enamel Camp Mug", "Classic speckled enamelware, 350ml.", "gear", 12.00, 60),
        ("prod-field-notebook", "Field Notebook 3-Pack", "Weatherproof paper, dot grid.", "stationery", 9.75, 80),
        ("prod-leather-belt", "Bridle Leather Belt", "Full-grain bridle leather, brass buckle.", "apparel", 58.00, 18),
        ("prod-daypack", "Rolltop Daypack 22L", "Waterproof rolltop with laptop sleeve.", "gear", 98.00, 10),
        ("prod-wool-socks", "Ragg Wool Socks", "Heavy ragg wool, made to be darned.", "apparel", 16.50, 55),
    ];

    for (id, title, description, category, price, stock) in products {
        store.insert_product(Product {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: format!("/images/{id}.jpg"),
            price,
            category: category.to_string(),
            is_active: true,
        });
        store.insert_inventory(InventoryRecord {
            product_id: id.to_string(),
            quantity: stock,
            reserved: 0,
        });
    }

    // ==================== Discounts ====================
    store.insert_discount(Discount {
        code: "BLESSED30".to_string(),
        kind: DiscountKind::Percentage,
        value: 30.0,
        min_purchase: None,
        max_uses: None,
        used_count: 0,
        starts_at: None,
        ends_at: None,
        is_active: true,
    });

    store.insert_discount(Discount {
        code: "WELCOME10".to_string(),
        kind: DiscountKind::FixedAmount,
        value: 10.0,
        min_purchase: Some(50.0),
        max_uses: Some(500),
        used_count: 0,
        starts_at: None,
        ends_at: None,
        is_active: true,
    });

    store.insert_discount(Discount {
        code: "FREESHIP".to_string(),
        kind: DiscountKind::FreeShipping,
        value: 0.0,
        min_purchase: Some(25.0),
        max_uses: None,
        used_count: 0,
        starts_at: None,
        ends_at: None,
        is_active: true,
    });

    // 已过期的演示码，保留用于演示 DISCOUNT_EXPIRED 路径
    store.insert_discount(Discount {
        code: "SOLSTICE20".to_string(),
        kind: DiscountKind::Percentage,
        value: 20.0,
        min_purchase: None,
        max_uses: None,
        used_count: 0,
        starts_at: Some(now - 2 * THIRTY_DAYS_MS),
        ends_at: Some(now - THIRTY_DAYS_MS),
        is_active: true,
    });

    // ==================== Shipping Rates ====================
    store.insert_shipping_rate(ShippingRate {
        id: "standard".to_string(),
        name: "Standard Shipping".to_string(),
        price: 5.99,
        min_order_amount: Some(75.0),
        delivery_estimate: "5-7 business days".to_string(),
    });

    store.insert_shipping_rate(ShippingRate {
        id: "express".to_string(),
        name: "Express Shipping".to_string(),
        price: 14.99,
        min_order_amount: None,
        delivery_estimate: "2-3 business days".to_string(),
    });

    store.insert_shipping_rate(ShippingRate {
        id: "overnight".to_string(),
        name: "Overnight Shipping".to_string(),
        price: 24.99,
        min_order_amount: None,
        delivery_estimate: "next business day".to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_catalog() {
        let store = MemoryStore::seeded();
        assert_eq!(store.product_count(), 8);
        assert_eq!(store.discount_count(), 4);
        assert_eq!(store.shipping_rates().len(), 3);
    }

    #[test]
    fn test_seeded_products_have_inventory() {
        let store = MemoryStore::seeded();
        for product in store.products() {
            assert!(
                store.available(&product.id) > 0,
                "product {} should be in stock",
                product.id
            );
        }
    }

    #[test]
    fn test_blessed30_is_live() {
        let store = MemoryStore::seeded();
        let d = store.discount_by_code("BLESSED30").unwrap();
        assert_eq!(d.kind, DiscountKind::Percentage);
        assert_eq!(d.value, 30.0);
        assert!(d.is_active);
    }
}
