//! mes-console - MES 管理控制台核心库
//!
//! 模块结构：
//! - models: 数据模型（Principal, ProgramId, MenuNode）
//! - kernel: 无头状态核心（Store, Action, Effect, 菜单/工作区/程序解析）
//! - kernel::services: 端口与适配器（存储、目录服务、异步运行时）
//! - app: 应用层（AppContext, 控制台命令）

pub mod app;
pub mod kernel;
pub mod models;
