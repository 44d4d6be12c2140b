use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::controller::AppState;

pub fn create_catalog_service(state: &AppState) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(&state.config, state.store);
    Box::new(CatalogServiceImpl::new(book_repo))
}
