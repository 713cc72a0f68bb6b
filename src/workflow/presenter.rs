//! 展示层接口
//!
//! 流程层只通过这个 trait 与界面交互：错误提示、四个结果面板、下载。

/// 面板样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Info,
    Warning,
    Success,
}

pub trait Presenter {
    /// 错误提示
    fn error(&mut self, message: &str);

    /// 长时间操作开始（如等待模型）
    fn busy(&mut self, _message: &str) {}

    /// 带标题的文字面板
    fn panel(&mut self, kind: PanelKind, title: &str, body: &str);

    /// 指标（分数）
    fn metric(&mut self, label: &str, value: &str);

    /// 提供文件下载
    fn offer_download(&mut self, file_name: &str, mime: &str, bytes: Vec<u8>);
}
