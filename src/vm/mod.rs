//! VM层：连接核心逻辑与外部界面的通知通道

pub mod notify;
