use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A transient message telling the user how a submission went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn forwarded(product_name: &str, recipient_email: &str) -> Self {
        Self {
            title: "Email forwarded successfully! 📧".to_string(),
            description: format!(
                "Order confirmation for {} has been sent to {}",
                product_name, recipient_email
            ),
            variant: NoticeVariant::Default,
        }
    }

    pub fn missing_fields() -> Self {
        Self {
            title: "Missing required fields".to_string(),
            description: "Please fill in all required fields.".to_string(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn forwarding_failed() -> Self {
        Self {
            title: "Failed to forward email".to_string(),
            description: "Something went wrong. Please try again.".to_string(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.variant {
            NoticeVariant::Default => "[ok]",
            NoticeVariant::Destructive => "[!!]",
        };
        write!(f, "{} {}\n     {}", marker, self.title, self.description)
    }
}
