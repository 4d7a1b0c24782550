//! Integration tests for katalog-core: the submission → listing → detail
//! flow against an in-memory fake store.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use katalog_core::{
    application::{ApplicationError, CatalogService, Submission, SubmissionService},
    domain::{Product, ProductField, ProductId},
    error::KatalogResult,
    prelude::{IdGenerator, ProductStore},
};

#[derive(Clone, Default)]
struct FakeStore {
    records: Arc<Mutex<Vec<Product>>>,
    fail_writes: bool,
}

impl ProductStore for FakeStore {
    fn load(&self) -> Vec<Product> {
        self.records.lock().unwrap().clone()
    }

    fn append(&self, record: Product) -> KatalogResult<()> {
        if self.fail_writes {
            return Err(ApplicationError::PersistenceFailed {
                path: "fake".into(),
                reason: "writes disabled".into(),
            }
            .into());
        }
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

#[derive(Default)]
struct CountingIds(AtomicU64);

impl IdGenerator for CountingIds {
    fn generate(&self) -> ProductId {
        let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        ProductId::with_suffix(n).unwrap()
    }
}

fn fill(form: &mut katalog_core::domain::ProductForm, name: &str, price: &str, discounted: &str) {
    form.set(ProductField::ProductName, name);
    form.set(ProductField::SellerInfo, "Gümüş Kuyumcu");
    form.set(ProductField::StockQuantity, "5");
    form.set(ProductField::Price, price);
    form.set(ProductField::DiscountedPrice, discounted);
    form.set(ProductField::Category, "Jewelry");
    form.set(
        ProductField::ProductImages,
        "https://img.example/ring-1.jpg, https://img.example/ring-2.jpg",
    );
}

#[test]
fn test_submit_then_list_and_show() {
    let store = FakeStore::default();
    let submissions = SubmissionService::new(Box::new(store.clone()), Box::new(CountingIds::default()));
    let catalog = CatalogService::new(Box::new(store.clone()));

    let mut form = submissions.open_form().unwrap();
    let id = form.product_id().clone();
    fill(&mut form, "Silver Ring", "200,00", "150");

    let outcome = submissions.submit(form).unwrap();
    assert!(outcome.is_accepted());

    let cards = catalog.list();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].product_id, id);
    assert_eq!(cards[0].image.as_deref(), Some("https://img.example/ring-1.jpg"));
    assert_eq!(cards[0].pricing.badge(), Some(25));

    let detail = catalog.find(&id).unwrap();
    assert_eq!(detail.product.price(), "200.00");
    assert_eq!(detail.images.len(), 2);
}

#[test]
fn test_read_back_matches_normalized_record() {
    let store = FakeStore::default();
    let submissions = SubmissionService::new(Box::new(store.clone()), Box::new(CountingIds::default()));

    let mut form = submissions.open_form().unwrap();
    fill(&mut form, "Gold Chain", "1500,5", "1200,25");

    let Submission::Accepted(saved) = submissions.submit(form).unwrap() else {
        panic!("expected the draft to be accepted");
    };

    let loaded = store.load();
    assert_eq!(loaded, vec![saved.clone()]);
    assert_eq!(loaded[0].price(), "1500.5");
    assert_eq!(loaded[0].discounted_price(), Some("1200.25"));
}

#[test]
fn test_rejected_submission_leaves_store_untouched() {
    let store = FakeStore::default();
    let submissions = SubmissionService::new(Box::new(store.clone()), Box::new(CountingIds::default()));

    let mut form = submissions.open_form().unwrap();
    fill(&mut form, "Bracelet", "100", "100");
    form.set(ProductField::ProductImages, "https://a.jpg, http://b.jpg");

    match submissions.submit(form).unwrap() {
        Submission::Rejected(errors) => {
            assert!(errors.contains(ProductField::DiscountedPrice));
            assert!(errors.contains(ProductField::ProductImages));
            assert_eq!(errors.len(), 2);
        }
        Submission::Accepted(_) => panic!("draft should have been rejected"),
    }
    assert!(store.load().is_empty());
}

#[test]
fn test_write_failure_surfaces_as_error() {
    let store = FakeStore {
        fail_writes: true,
        ..FakeStore::default()
    };
    let submissions = SubmissionService::new(Box::new(store.clone()), Box::new(CountingIds::default()));

    let mut form = submissions.open_form().unwrap();
    fill(&mut form, "Earrings", "80", "");

    assert!(submissions.submit(form).is_err());
    assert!(store.load().is_empty());
}

#[test]
fn test_each_form_gets_a_distinct_id() {
    let store = FakeStore::default();
    let submissions = SubmissionService::new(Box::new(store.clone()), Box::new(CountingIds::default()));

    let mut first = submissions.open_form().unwrap();
    fill(&mut first, "Pendant", "40", "");
    let first_id = first.product_id().clone();
    submissions.submit(first).unwrap();

    let second = submissions.open_form().unwrap();
    assert_ne!(second.product_id(), &first_id);
}
