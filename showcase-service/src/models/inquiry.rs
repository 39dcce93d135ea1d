use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Collection that holds contact inquiries.
pub const INQUIRY_COLLECTION: &str = "inquiry";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InquiryInput {
    #[validate(
        required(message = "Field required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Field required"),
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    pub email: Option<String>,

    pub company: Option<String>,

    #[validate(
        required(message = "Field required"),
        length(min = 1, message = "Message must not be empty")
    )]
    pub message: Option<String>,
}

/// A validated inquiry. Never modified after it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl TryFrom<InquiryInput> for Inquiry {
    type Error = ValidationErrors;

    fn try_from(input: InquiryInput) -> Result<Self, Self::Error> {
        input.validate()?;

        Ok(Inquiry {
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            company: input.company,
            message: input.message.unwrap_or_default(),
        })
    }
}

/// The domain part must have at least two non-empty labels (`example.com`).
/// Address literals such as `[127.0.0.1]` are not accepted.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let dotted = email
        .rsplit_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && !domain.starts_with('[')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        })
        .unwrap_or(false);

    if dotted {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_domain");
        err.message = Some("Email domain must be a dotted host name".into());
        Err(err)
    }
}
