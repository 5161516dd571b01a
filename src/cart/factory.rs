use crate::cart::domain::CartService;
use crate::cart::domain::service::CartServiceImpl;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_cart_service(via: GatewayPublisherVia) -> Box<dyn CartService> {
    let publisher = create_publisher(via);
    Box::new(CartServiceImpl::new(publisher))
}
