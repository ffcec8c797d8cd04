//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量来源处理器
//! - 管理应用生命周期（初始化、运行）
//! - 按配置顺序处理所有来源
//! - 组装目录并写出
//! - 输出全局统计信息
//!
//! ### `source_processor` - 单个来源处理器
//! - 读取文本、选择解析策略、分组
//! - 输出单个来源的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SourceSpec>)
//!     ↓
//! source_processor (处理单个来源)
//!     ↓
//! parser / catalogue (纯函数：解析、分组、组装)
//!     ↓
//! services (能力层：写 JSON / 写 warn.txt)
//! ```

pub mod batch_processor;
pub mod source_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunSummary};
pub use source_processor::{process_source, process_text, SourceOutcome, SourceStats};
