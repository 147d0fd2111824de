//! Gallery lightbox state

/// Where a click inside the open lightbox landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around the image
    Backdrop,
    /// The close button
    CloseButton,
    /// The image itself
    Content,
}

/// Open/closed state of the gallery lightbox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { image: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn current_image(&self) -> Option<&str> {
        match self {
            ModalState::Closed => None,
            ModalState::Open { image } => Some(image),
        }
    }

    pub fn open(image: impl Into<String>) -> Self {
        ModalState::Open {
            image: image.into(),
        }
    }

    pub fn close(&self) -> Self {
        ModalState::Closed
    }

    /// Clicks on the backdrop or the close button close the lightbox.
    pub fn click(&self, target: ModalClick) -> Self {
        match target {
            ModalClick::Backdrop | ModalClick::CloseButton => self.close(),
            ModalClick::Content => self.clone(),
        }
    }
}
