use serde::{Deserialize, Serialize};

use crate::choices::{ActivityType, Category, LocationType};
use crate::draft::{ActivityDraft, LocationDraft};

/// Union of both drafts, handed to a submission sink once every step validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub activity_name: String,
    pub category: Option<Category>,
    pub other_category: String,
    pub about_activity: String,
    pub activity_type: Option<ActivityType>,
    pub location_type: Option<LocationType>,
    pub min_members: String,
    pub max_members: String,
    pub address_line1: String,
    pub address_line2: String,
    pub zip_code: String,
    pub city: String,
    pub state: Option<String>,
    pub contact_number: String,
    pub contact_name: String,
    pub country_code: String,
}

impl SubmissionRecord {
    pub fn from_drafts(activity: &ActivityDraft, location: &LocationDraft) -> Self {
        Self {
            activity_name: activity.activity_name.clone(),
            category: activity.category,
            other_category: activity.other_category.clone(),
            about_activity: activity.about_activity.clone(),
            activity_type: activity.activity_type,
            location_type: activity.location_type,
            min_members: activity.min_members.clone(),
            max_members: activity.max_members.clone(),
            address_line1: location.address_line1.clone(),
            address_line2: location.address_line2.clone(),
            zip_code: location.zip_code.clone(),
            city: location.city.clone(),
            state: location.state.clone(),
            contact_number: location.contact_number.clone(),
            contact_name: location.contact_name.clone(),
            country_code: location.country_code.clone(),
        }
    }

    /// Category as the submitter described it, resolving the `Other` override.
    pub fn category_label(&self) -> Option<&str> {
        match self.category {
            Some(Category::Other) => Some(self.other_category.trim()),
            Some(category) => Some(crate::choices::Choice::label(category)),
            None => None,
        }
    }
}
