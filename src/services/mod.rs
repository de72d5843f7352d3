pub mod analytics_service;
pub mod catalog_service;
pub mod color_service;
pub mod order_service;
pub mod product_service;
pub mod rating_service;
pub mod view_service;
