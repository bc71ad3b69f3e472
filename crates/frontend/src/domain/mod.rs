pub mod a001_offer;
pub mod a002_product;
pub mod a003_order;
