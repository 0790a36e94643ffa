use super::aggregate::{Inventory, Product, ProductStatus, Rating};
use super::sanitize::strip_markup;
use std::fmt;

// ============================================================================
// Draft form state
// ============================================================================

/// Staging state of the product creation form. All entry fields stay strings
/// until commit; ownership of the data transfers to the shared collection
/// only on a successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub rating_rate: String,
    pub rating_count: String,
    pub category: String,
    pub inventory: String,
    pub product_type: String,
    pub vendor: String,
    pub price: String,
    pub status: ProductStatus,
}

impl ProductDraft {
    /// Field checks in fixed order; the first failure wins and is the only
    /// message surfaced for the attempt. Numeric parse checks run after every
    /// presence check has passed.
    pub fn validate(&self, staged_images: usize) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Please enter a product title");
        }
        if self.description.trim().is_empty() {
            return Err("Please enter a product description");
        }
        if staged_images == 0 {
            return Err("Please upload at least one image");
        }
        if self.rating_rate.trim().is_empty() {
            return Err("Please enter a rating rate");
        }
        if self.rating_count.trim().is_empty() {
            return Err("Please enter a rating count");
        }
        if self.category.trim().is_empty() {
            return Err("Please select a category");
        }
        if self.inventory.trim().is_empty() {
            return Err("Please select an inventory");
        }
        if self.product_type.trim().is_empty() {
            return Err("Please select a type");
        }
        if self.vendor.trim().is_empty() {
            return Err("Please select a vendor");
        }
        if self.price.trim().is_empty() {
            return Err("Please enter a product price");
        }
        if self.rating_rate.trim().parse::<f64>().is_err() {
            return Err("Invalid rating rate");
        }
        if self.rating_count.trim().parse::<u32>().is_err() {
            return Err("Invalid rating count");
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price > 0.0 => {}
            _ => return Err("Invalid product price"),
        }
        Ok(())
    }

    /// Assemble the committed record from a validated draft, the resolved
    /// image URLs in upload order and a fresh epoch-millisecond id. The
    /// description is sanitized here, immediately before storage.
    pub fn assemble(&self, image_urls: Vec<String>, id: i64) -> Result<Product, &'static str> {
        let rate = self
            .rating_rate
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid rating rate")?;
        let count = self
            .rating_count
            .trim()
            .parse::<u32>()
            .map_err(|_| "Invalid rating count")?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid product price")?;

        Ok(Product {
            id,
            title: self.title.trim().to_string(),
            description: strip_markup(&self.description),
            price,
            category: self.category.clone(),
            product_type: self.product_type.clone(),
            vendor: self.vendor.clone(),
            inventory: Inventory::from_input(&self.inventory),
            status: self.status,
            image: image_urls,
            rating: Rating { rate, count },
            availability: None,
        })
    }
}

// ============================================================================
// Submission state machine
// ============================================================================

/// Explicit workflow state. Linear, no branching back: failures return to
/// `Idle` with the entered values intact; only success resets the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Uploading,
    Committing,
}

impl SubmissionState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmissionState::Idle)
    }
}

/// Failure taxonomy of one submission attempt. Validation failures mutate
/// nothing; upload and commit failures share the generic retry message and
/// leave any already-uploaded sibling assets behind.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Validation(&'static str),
    Upload(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(message) => f.write_str(message),
            SubmitError::Upload(_) => f.write_str("Error adding product. Please try again."),
        }
    }
}

// ============================================================================
// Image staging
// ============================================================================

/// MIME allow-set for staged images
pub const VALID_IMAGE_TYPES: [&str; 3] = ["image/gif", "image/jpeg", "image/png"];

pub fn is_valid_image_type(mime: &str) -> bool {
    VALID_IMAGE_TYPES.contains(&mime)
}

/// What to do with a batch that mixes valid and invalid files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Any invalid file rejects the whole batch; nothing is staged
    RejectBatch,
    /// Stage the valid subset, report only the invalid files
    KeepValid,
}

/// Outcome of screening one dropped batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchScreening {
    /// Indices into the batch that may be staged
    pub accepted: Vec<usize>,
    /// MIME types of the rejected files, in batch order
    pub rejected_types: Vec<String>,
}

impl BatchScreening {
    /// One combined message per batch, naming every rejected type
    pub fn error_message(&self) -> Option<String> {
        if self.rejected_types.is_empty() {
            return None;
        }
        Some(format!(
            "Invalid file type(s): {}. Please upload only images.",
            self.rejected_types.join(", ")
        ))
    }
}

/// Screen a dropped batch of MIME types against the image allow-set under the
/// given policy.
pub fn screen_image_batch(mime_types: &[String], policy: BatchPolicy) -> BatchScreening {
    let rejected_types: Vec<String> = mime_types
        .iter()
        .filter(|mime| !is_valid_image_type(mime))
        .cloned()
        .collect();

    let accepted = if !rejected_types.is_empty() && policy == BatchPolicy::RejectBatch {
        Vec::new()
    } else {
        mime_types
            .iter()
            .enumerate()
            .filter(|(_, mime)| is_valid_image_type(mime))
            .map(|(index, _)| index)
            .collect()
    };

    BatchScreening {
        accepted,
        rejected_types,
    }
}

/// Splice one staged entry out by index, keeping the relative order of the
/// rest. Returns false when the index is out of bounds.
pub fn remove_staged_at<T>(staged: &mut Vec<T>, index: usize) -> bool {
    if index < staged.len() {
        staged.remove(index);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::INVENTORY_NOT_TRACKED;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            title: "Mug".to_string(),
            description: "A mug".to_string(),
            rating_rate: "4.5".to_string(),
            rating_count: "10".to_string(),
            category: "Drinkware".to_string(),
            inventory: "20".to_string(),
            product_type: "Accessory".to_string(),
            vendor: "Acme".to_string(),
            price: "9.99".to_string(),
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn empty_draft_reports_title_first() {
        let draft = ProductDraft::default();
        assert_eq!(draft.validate(0), Err("Please enter a product title"));
    }

    #[test]
    fn validation_order_is_fixed() {
        let mut draft = filled_draft();
        draft.vendor.clear();
        draft.price.clear();
        assert_eq!(draft.validate(1), Err("Please select a vendor"));

        draft.vendor = "Acme".to_string();
        assert_eq!(draft.validate(1), Err("Please enter a product price"));
    }

    #[test]
    fn missing_image_fails_after_description() {
        let draft = filled_draft();
        assert_eq!(draft.validate(0), Err("Please upload at least one image"));
        assert_eq!(draft.validate(1), Ok(()));
    }

    #[test]
    fn parse_checks_run_after_presence_checks() {
        let mut draft = filled_draft();
        draft.rating_rate = "four".to_string();
        draft.price.clear();
        // presence failure on price precedes the rate parse failure
        assert_eq!(draft.validate(1), Err("Please enter a product price"));

        draft.price = "9.99".to_string();
        assert_eq!(draft.validate(1), Err("Invalid rating rate"));

        draft.rating_rate = "4.5".to_string();
        draft.price = "-1".to_string();
        assert_eq!(draft.validate(1), Err("Invalid product price"));
    }

    #[test]
    fn assemble_builds_committed_product() {
        let draft = filled_draft();
        let product = draft
            .assemble(vec!["http://storage.local/products/1_0_mug.png".to_string()], 1_700_000_000_000)
            .unwrap();
        assert_eq!(product.id, 1_700_000_000_000);
        assert_eq!(product.price, 9.99);
        assert_eq!(product.rating, Rating { rate: 4.5, count: 10 });
        assert_eq!(product.inventory, Inventory::Count(20));
        assert_eq!(product.image.len(), 1);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn assemble_strips_description_markup() {
        let mut draft = filled_draft();
        draft.description = "<p>A <b>mug</b></p>".to_string();
        draft.inventory = INVENTORY_NOT_TRACKED.to_string();
        let product = draft.assemble(vec!["u".to_string()], 1).unwrap();
        assert_eq!(product.description, "A mug");
        assert!(product.inventory.is_not_tracked());
    }

    #[test]
    fn reject_batch_policy_stages_nothing_on_mixed_input() {
        let batch = vec!["image/png".to_string(), "application/pdf".to_string()];
        let screening = screen_image_batch(&batch, BatchPolicy::RejectBatch);
        assert!(screening.accepted.is_empty());
        assert_eq!(screening.rejected_types, vec!["application/pdf".to_string()]);
        let message = screening.error_message().unwrap();
        assert!(message.contains("application/pdf"));
    }

    #[test]
    fn keep_valid_policy_stages_the_valid_subset() {
        let batch = vec![
            "image/png".to_string(),
            "application/pdf".to_string(),
            "image/gif".to_string(),
        ];
        let screening = screen_image_batch(&batch, BatchPolicy::KeepValid);
        assert_eq!(screening.accepted, vec![0, 2]);
        assert_eq!(screening.rejected_types, vec!["application/pdf".to_string()]);
    }

    #[test]
    fn clean_batch_screens_without_errors() {
        let batch = vec!["image/jpeg".to_string(), "image/png".to_string()];
        let screening = screen_image_batch(&batch, BatchPolicy::RejectBatch);
        assert_eq!(screening.accepted, vec![0, 1]);
        assert!(screening.error_message().is_none());
    }

    #[test]
    fn remove_staged_preserves_relative_order() {
        let mut staged = vec!["a", "b", "c"];
        assert!(remove_staged_at(&mut staged, 1));
        assert_eq!(staged, vec!["a", "c"]);
        assert!(!remove_staged_at(&mut staged, 5));
        assert_eq!(staged.len(), 2);
    }
}
