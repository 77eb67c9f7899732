use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

/// A one-shot banner shown at the top of the report page. Carried across the
/// reload redirect as a short code in the query string.
#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: &str) -> Self {
        Flash {
            level: FlashLevel::Success,
            message: message.to_string(),
        }
    }

    pub fn warning(message: &str) -> Self {
        Flash {
            level: FlashLevel::Warning,
            message: message.to_string(),
        }
    }

    pub fn danger(message: &str) -> Self {
        Flash {
            level: FlashLevel::Danger,
            message: message.to_string(),
        }
    }

    /// Decode a flash code from the `?flash=` query parameter.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "reloaded" => Some(Flash::success("Data reloaded successfully!")),
            "reload-failed" => Some(Flash::danger(
                "Failed to reload data. Check server logs.",
            )),
            _ => None,
        }
    }
}

pub fn flash_banner(flash: &Flash) -> Markup {
    let class = match flash.level {
        FlashLevel::Success => "flash flash-success",
        FlashLevel::Warning => "flash flash-warning",
        FlashLevel::Danger => "flash flash-danger",
    };
    html! {
        div class=(class) { (flash.message) }
    }
}
