use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::ShopResult;

// Read-only access to a fixed set of entities; the catalog is compiled in and never written.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // get an entity
    async fn get(&self, id: &str) -> ShopResult<Entity>;

    // all entities in stored order
    async fn all(&self) -> ShopResult<Vec<Entity>>;

    // find entities whose attributes equal every predicate value
    async fn query(&self, predicate: &HashMap::<String, String>) -> ShopResult<Vec<Entity>>;
}
