use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::dto::BookDto;
use crate::cart::domain::CartService;
use crate::cart::domain::model::Cart;
use crate::cart::dto::{CartLineDto, CartSummaryDto};
use crate::core::events::DomainEvent;
use crate::core::library::{AddToCartOutcome, ShopError, ShopResult};
use crate::gateway::events::EventPublisher;

pub struct CartServiceImpl {
    cart: Mutex<Cart>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CartServiceImpl {
    pub fn new(events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            cart: Mutex::new(Cart::new()),
            events_publisher,
        }
    }

    async fn publish(&self, event: serde_json::Result<DomainEvent>) -> ShopResult<()> {
        self.events_publisher.publish(&event?).await?;
        Ok(())
    }

    fn lock(&self) -> ShopResult<MutexGuard<'_, Cart>> {
        self.cart.lock()
            .map_err(|err| ShopError::runtime(format!("cart lock poisoned {:?}", err).as_str(), None))
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn add_to_cart(&self, book: &BookDto) -> ShopResult<AddToCartOutcome> {
        let (outcome, line) = {
            let mut cart = self.lock()?;
            let outcome = cart.add(book);
            (outcome, cart.find(book.isbn.as_str()).map(CartLineDto::from))
        };
        // The cart has already changed at this point, so a failed publish is logged and not returned.
        let published = match (outcome, line) {
            (AddToCartOutcome::Unchanged, _) | (_, None) => {
                debug!(isbn = book.isbn.as_str(), stock = book.stock, "cart already holds all copies");
                Ok(())
            }
            (AddToCartOutcome::Added, Some(line)) => {
                info!(isbn = book.isbn.as_str(), quantity = line.quantity, "book added to cart");
                self.publish(DomainEvent::added(
                    "cart_item_added", "cart", book.isbn.as_str(), &HashMap::new(), &line)).await
            }
            (AddToCartOutcome::Incremented, Some(line)) => {
                info!(isbn = book.isbn.as_str(), quantity = line.quantity, "cart quantity incremented");
                self.publish(DomainEvent::updated(
                    "cart_item_added", "cart", book.isbn.as_str(), &HashMap::new(), &line)).await
            }
        };
        if let Err(err) = published {
            warn!(isbn = book.isbn.as_str(), outcome = %outcome, error = %err, "failed to publish cart event");
        }
        Ok(outcome)
    }

    async fn cart_quantity(&self, isbn: &str) -> ShopResult<u32> {
        Ok(self.lock()?.quantity(isbn))
    }

    async fn summary(&self) -> ShopResult<CartSummaryDto> {
        Ok(CartSummaryDto::from(&*self.lock()?))
    }

    async fn lines(&self) -> ShopResult<Vec<CartLineDto>> {
        Ok(self.lock()?.lines.iter().map(CartLineDto::from).collect())
    }

    async fn snapshot(&self) -> ShopResult<Cart> {
        Ok(self.lock()?.clone())
    }
}


#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::cart::domain::CartService;
    use crate::cart::domain::service::CartServiceImpl;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use async_trait::async_trait;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::{AddToCartOutcome, ShopError};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    struct UnreachablePublisher;

    #[async_trait]
    impl EventPublisher for UnreachablePublisher {
        async fn publish(&self, _event: &DomainEvent) -> Result<(), ShopError> {
            Err(ShopError::runtime("broker down", None))
        }
    }

    lazy_static! {
        static ref CATALOG: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                create_catalog_service()
            });
    }

    async fn find(isbn: &str) -> BookDto {
        CATALOG.get().await.find_book_by_isbn(isbn).await.expect("should return book")
    }

    #[tokio::test]
    async fn test_should_add_until_stock_is_exhausted() {
        let cart_svc = CartServiceImpl::new(Box::new(MemoryPublisher::new()));
        let dune = find("9780441172719").await;
        for _ in 0..12 {
            assert!(cart_svc.add_to_cart(&dune).await.expect("should add").changed());
        }
        assert_eq!(12, cart_svc.cart_quantity(dune.isbn.as_str()).await.expect("should return quantity"));
        let lines = cart_svc.lines().await.expect("should return lines");
        assert_eq!(0, lines[0].remaining_stock);

        let outcome = cart_svc.add_to_cart(&dune).await.expect("should not fail");
        assert_eq!(AddToCartOutcome::Unchanged, outcome);
        assert_eq!(12, cart_svc.cart_quantity(dune.isbn.as_str()).await.expect("should return quantity"));
    }

    #[tokio::test]
    async fn test_should_return_zero_for_missing_line() {
        let cart_svc = CartServiceImpl::new(Box::new(MemoryPublisher::new()));
        assert_eq!(0, cart_svc.cart_quantity("9780441172719").await.expect("should return quantity"));
    }

    #[tokio::test]
    async fn test_should_summarize_cart() {
        let cart_svc = CartServiceImpl::new(Box::new(MemoryPublisher::new()));
        let summary = cart_svc.summary().await.expect("should summarize");
        assert_eq!(0, summary.item_count);
        assert_eq!("0.00", summary.total.as_str());

        cart_svc.add_to_cart(&find("9780743273565").await).await.expect("should add");
        cart_svc.add_to_cart(&find("9780062316097").await).await.expect("should add");
        let summary = cart_svc.summary().await.expect("should summarize");
        assert_eq!(2, summary.item_count);
        assert_eq!("28.49", summary.total.as_str());
    }

    #[tokio::test]
    async fn test_should_keep_lines_in_insertion_order() {
        let cart_svc = CartServiceImpl::new(Box::new(MemoryPublisher::new()));
        cart_svc.add_to_cart(&find("9780441172719").await).await.expect("should add");
        cart_svc.add_to_cart(&find("9780743273565").await).await.expect("should add");
        cart_svc.add_to_cart(&find("9780441172719").await).await.expect("should add");
        let isbns: Vec<String> = cart_svc.lines().await.expect("should return lines")
            .into_iter().map(|l| l.book.isbn).collect();
        assert_eq!(vec!["9780441172719", "9780743273565"], isbns);
    }

    #[tokio::test]
    async fn test_should_publish_events_only_on_change() {
        let publisher = MemoryPublisher::new();
        let cart_svc = CartServiceImpl::new(Box::new(publisher.clone()));
        let mut book = find("9780441172719").await;
        book.stock = 1;
        cart_svc.add_to_cart(&book).await.expect("should add");
        cart_svc.add_to_cart(&book).await.expect("should not fail");
        let events = publisher.events().expect("should return events");
        assert_eq!(1, events.len());
        assert_eq!(DomainEventType::Added, events[0].kind);
        assert_eq!("9780441172719", events[0].key.as_str());
    }

    #[tokio::test]
    async fn test_should_keep_add_when_publish_fails() {
        let cart_svc = CartServiceImpl::new(Box::new(UnreachablePublisher));
        let dune = find("9780441172719").await;
        assert_eq!(AddToCartOutcome::Added, cart_svc.add_to_cart(&dune).await.expect("should add"));
        assert_eq!(AddToCartOutcome::Incremented, cart_svc.add_to_cart(&dune).await.expect("should add"));
        assert_eq!(2, cart_svc.cart_quantity(dune.isbn.as_str()).await.expect("should return quantity"));
        assert_eq!(2, cart_svc.summary().await.expect("should summarize").item_count);
    }
}
