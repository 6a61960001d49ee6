//! 内置数据目录（种子供应商、logo）

mod logos;
mod seed;

pub use logos::*;
pub use seed::*;
