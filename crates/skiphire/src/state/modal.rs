/// Modal dialogs shown on top of the screen

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    None,
    Message(MessageModal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
