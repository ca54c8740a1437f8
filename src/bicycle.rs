use crate::color::Color;
use crate::drive::Drive;

/// Plain data with value semantics: every copy owns its own state.
#[derive(Debug, Clone, PartialEq)]
pub struct Bicycle {
    pub name: String,
    pub color: Option<Color>,
}

impl Bicycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Returns a repainted copy. `self` is left as it was.
    pub fn change_color(&self, to: Option<Color>) -> Bicycle {
        Bicycle {
            color: to,
            ..self.clone()
        }
    }
}

impl Drive for Bicycle {
    fn drive_description(&self) -> String {
        format!("Driving a {}", self.name)
    }
}
