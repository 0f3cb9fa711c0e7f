use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelType {
    Topbar,
    Problem,
    Credential,
    Banner,
    SingleResult,
    Divider,
    MultiResult,
    Samples,
    Footer,
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub panel_type: PanelType,
    pub rect: Rect,
}
