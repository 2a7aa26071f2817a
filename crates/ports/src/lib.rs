//! ports - 抽象 trait 层
//!
//! 定义目录领域记录与存储接口

mod filter;
mod model;
mod repository;

pub use filter::*;
pub use model::*;
pub use repository::*;
