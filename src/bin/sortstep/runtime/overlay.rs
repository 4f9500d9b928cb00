#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OverlayState {
    #[default]
    None,
    Help,
}
