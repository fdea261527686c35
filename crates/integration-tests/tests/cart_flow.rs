//! Integration tests for adding products to the cart.

use reqwest::StatusCode;
use vitrine_integration_tests::TestContext;

#[tokio::test]
async fn test_repeat_add_increments_quantity() {
    let ctx = TestContext::start().await;

    ctx.post_form("/cart/add", &[("product_id", "1")]).await;
    let (status, html) = ctx.post_form("/cart/add", &[("product_id", "1")]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<li>").count(), 1);
    assert!(html.contains("Fjallraven Backpack - R$ 109.95 x 2"));
    assert!(html.contains("Total: R$ 219.90"));
}

#[tokio::test]
async fn test_every_add_fetches_product() {
    let ctx = TestContext::start().await;

    for _ in 0..3 {
        ctx.post_form("/cart/add", &[("product_id", "2")]).await;
    }

    assert_eq!(ctx.upstreams.product_hits(), 3);
}

#[tokio::test]
async fn test_cache_avoids_refetch() {
    let ctx = TestContext::start_with(&[("CATALOG_CACHE_TTL_SECS", "60")]).await;

    for _ in 0..3 {
        ctx.post_form("/cart/add", &[("product_id", "2")]).await;
    }

    assert_eq!(ctx.upstreams.product_hits(), 1);
    let (_, html) = ctx.get("/cart").await;
    assert!(html.contains("Mens Casual T-Shirt - R$ 22.30 x 3"));
}

#[tokio::test]
async fn test_entries_keep_first_insertion_order() {
    let ctx = TestContext::start().await;

    ctx.post_form("/cart/add", &[("product_id", "5")]).await;
    ctx.post_form("/cart/add", &[("product_id", "2")]).await;
    ctx.post_form("/cart/add", &[("product_id", "5")]).await;
    let (_, html) = ctx.get("/cart").await;

    let bracelet = html.find("Dragon Station Chain Bracelet - R$ 695.00 x 2");
    let shirt = html.find("Mens Casual T-Shirt - R$ 22.30 x 1");
    assert!(bracelet.is_some() && shirt.is_some());
    assert!(bracelet < shirt);
    assert!(html.contains("Total: R$ 1412.30"));
}

#[tokio::test]
async fn test_failed_add_leaves_cart() {
    let ctx = TestContext::start().await;
    ctx.post_form("/cart/add", &[("product_id", "1")]).await;

    ctx.upstreams.set_catalog_down(true);
    let (status, html) = ctx.post_form("/cart/add", &[("product_id", "2")]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Não foi possível adicionar o produto ao carrinho."));
    assert!(html.contains("Fjallraven Backpack - R$ 109.95 x 1"));
    assert!(!html.contains("Mens Casual T-Shirt"));
}

#[tokio::test]
async fn test_concurrent_adds_each_count() {
    let ctx = TestContext::start().await;

    let mut requests = tokio::task::JoinSet::new();
    for i in 0..8 {
        let client = ctx.client.clone();
        let url = ctx.url("/cart/add");
        let id = if i % 2 == 0 { "1" } else { "2" };
        requests.spawn(async move {
            client
                .post(url)
                .form(&[("product_id", id)])
                .send()
                .await
                .map(|resp| resp.status())
        });
    }
    while let Some(joined) = requests.join_next().await {
        let status = joined.expect("Task panicked").expect("Request failed");
        assert_eq!(status, StatusCode::OK);
    }

    let cart = ctx.state.cart().lock().await;
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item_count(), 8);
    assert_eq!(cart.total().formatted_amount(), "529.00");
}
