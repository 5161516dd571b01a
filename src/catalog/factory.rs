use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;

pub fn create_catalog_service() -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Box::new(CatalogServiceImpl::new(book_repo))
}
