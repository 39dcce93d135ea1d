use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Collection that holds product apps.
pub const PRODUCT_COLLECTION: &str = "productapp";

/// Unvalidated product app as it arrives from a caller.
///
/// Every field is optional here so that validation can report all missing
/// fields at once instead of stopping at the first.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductAppInput {
    #[validate(
        required(message = "Field required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Field required"),
        length(min = 1, message = "Tagline must not be empty")
    )]
    pub tagline: Option<String>,

    #[validate(
        required(message = "Field required"),
        length(min = 1, message = "Description must not be empty")
    )]
    pub description: Option<String>,

    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub pricing: Option<String>,
}

/// A validated product app, in the shape it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductApp {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub pricing: Option<String>,
}

impl TryFrom<ProductAppInput> for ProductApp {
    type Error = ValidationErrors;

    fn try_from(input: ProductAppInput) -> Result<Self, Self::Error> {
        input.validate()?;

        Ok(ProductApp {
            name: input.name.unwrap_or_default(),
            tagline: input.tagline.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            link: input.link,
            image: input.image,
            tags: input.tags.unwrap_or_default(),
            pricing: input.pricing,
        })
    }
}
