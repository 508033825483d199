//! End-to-end flows through the store and its derivation, driven by the
//! scripted in-memory remote catalog.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use storefront_core::{Product, ProductDraft};
use storefront_remote::{InMemoryRemoteCatalog, PageRequest, RemoteCatalog, RemoteError};
use storefront_store::{MostExpensiveDerivation, MostExpensiveStream, ProductStore};

fn product(id: i64, price: f64) -> Product {
    Product {
        id,
        name: format!("product-{id}"),
        price,
        modified_date: Utc::now(),
    }
}

async fn next_derived(sub: &mut MostExpensiveStream) -> Product {
    tokio::time::timeout(Duration::from_secs(1), sub.changed())
        .await
        .expect("expected a derived emission")
        .unwrap();
    sub.latest().unwrap()
}

#[tokio::test]
async fn paging_updates_list_and_derived_maximum() {
    storefront_observability::init();

    let remote = Arc::new(InMemoryRemoteCatalog::new());
    remote.push_page(vec![product(1, 5.0), product(2, 9.0)]);
    remote.push_page(vec![product(3, 20.0)]);

    let store = ProductStore::new(remote.clone() as Arc<dyn RemoteCatalog>);
    let derivation = MostExpensiveDerivation::spawn(store.subscribe());
    let mut products = store.subscribe();
    let mut derived = derivation.subscribe();

    assert!(products.current().is_empty());
    assert_eq!(derived.current(), None);

    store.load_next_page(PageRequest::new(0, 2)).await.unwrap();
    let list = products.latest();
    assert_eq!(list.len(), 2);
    let max = next_derived(&mut derived).await;
    assert_eq!((max.id, max.price), (2, 9.0));

    store.load_next_page(PageRequest::new(2, 2)).await.unwrap();
    let list = products.latest();
    assert_eq!(list.len(), 3);
    let max = next_derived(&mut derived).await;
    assert_eq!((max.id, max.price), (3, 20.0));
}

#[tokio::test]
async fn failed_page_load_rejects_only_that_call() {
    storefront_observability::init();

    let remote = Arc::new(InMemoryRemoteCatalog::new());
    remote.push_page(vec![product(1, 5.0)]);
    remote.push_failure(RemoteError::Api {
        status: 503,
        message: "unavailable".into(),
    });
    remote.push_page(vec![product(2, 9.0)]);

    let store = ProductStore::new(remote.clone() as Arc<dyn RemoteCatalog>);
    let mut products = store.subscribe();

    store.load_next_page(PageRequest::default()).await.unwrap();
    let before = products.latest();
    assert_eq!(before.len(), 1);

    let err = store.load_next_page(PageRequest::new(1, 10)).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(products.current(), before);

    // The store is perfectly usable afterwards; retrying is a fresh call.
    store.load_next_page(PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(products.latest().len(), 2);
}

#[tokio::test]
async fn insert_then_reload_is_the_commit_refresh_split() {
    storefront_observability::init();

    let remote = Arc::new(InMemoryRemoteCatalog::new());
    remote.push_page(vec![product(10, 5.0)]);

    let store = ProductStore::new(remote.clone() as Arc<dyn RemoteCatalog>);
    store.load_next_page(PageRequest::default()).await.unwrap();

    // Commit: the remote knows about the product, the held list does not.
    let draft = ProductDraft::new("Gravel Bike", 2400.0).unwrap();
    let created = store.insert_product(&draft).await.unwrap();
    assert_eq!(store.products().len(), 1);

    // Refresh: the caller decides to clear and reload, and the new product
    // comes back as part of the fresh first page.
    remote.push_page(vec![created.clone(), product(10, 5.0)]);
    store.clear_and_reload().await.unwrap();

    let list = store.products();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, created.id);
}
