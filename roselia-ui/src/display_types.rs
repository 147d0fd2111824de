//! Display types for UI components

/// Load state of a section fed by a manifest fetch
#[derive(Clone, Debug, PartialEq)]
pub enum SectionLoad<T> {
    Loading,
    Loaded(T),
    /// Message shown in place of the section content
    Failed(String),
}

impl<T> SectionLoad<T> {
    pub fn from_result(result: Option<&Result<T, String>>) -> Self
    where
        T: Clone,
    {
        match result {
            None => SectionLoad::Loading,
            Some(Ok(value)) => SectionLoad::Loaded(value.clone()),
            Some(Err(message)) => SectionLoad::Failed(message.clone()),
        }
    }
}
