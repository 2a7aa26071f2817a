//! catalog-service - 商品与变体目录服务

pub mod api;
pub mod application;
pub mod bootstrap;

#[cfg(test)]
mod test_support;
