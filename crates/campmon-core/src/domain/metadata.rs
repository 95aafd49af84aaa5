//! CRM metadata types and the field/view selection rules.
//!
//! [`AttributeMetadata`] and [`SavedView`] come from the CRM; [`SyncField`]
//! and [`SyncView`] are the transient, serializable projections shown to the
//! user when choosing what to synchronize.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::configuration::CampaignMonitorConfiguration;

/// Logical name of the CRM contact entity.
pub const CONTACT_ENTITY: &str = "contact";

/// Contact attributes pre-selected when the user has made no explicit choice.
pub const RECOMMENDED_FIELDS: &[&str] = &[
    "address1_city",
    "address1_country",
    "address1_primarycontactname",
    "anniversary",
    "annualincome",
    "birthdate",
    "parentcustomerid",
    "department",
    "donotemail",
    "emailaddress1",
    "emailaddress2",
    "emailaddress3",
    "firstname",
    "fullname",
    "gendercode",
    "jobtitle",
    "lastusedincampaign",
    "lastname",
    "familystatuscode",
    "numberofchildren",
    "preferredcontactmethodcode",
    "statecode",
];

/// Attribute metadata for a CRM entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    pub logical_name: String,
    /// User-localized display label, if the attribute has one.
    pub display_name: Option<String>,
    pub is_valid_for_advanced_find: bool,
}

/// A CRM saved (system) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedView {
    pub id: Uuid,
    pub name: Option<String>,
}

/// CRM `statecode` of an active saved query.
pub const VIEW_STATE_ACTIVE: i32 = 0;

/// CRM `querytype` of a public application view, the only kind offered for sync.
pub const QUERY_TYPE_PUBLIC_VIEW: i32 = 0;

/// Filter for listing saved views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedViewFilter {
    /// Logical name of the entity the view returns.
    pub entity: String,
    /// `statecode` the view must have.
    pub state_code: i32,
    /// `querytype` the view must have.
    pub query_type: i32,
}

impl SavedViewFilter {
    /// Active public application views of the contact entity.
    pub fn contact_views() -> Self {
        Self {
            entity: CONTACT_ENTITY.to_string(),
            state_code: VIEW_STATE_ACTIVE,
            query_type: QUERY_TYPE_PUBLIC_VIEW,
        }
    }
}

/// A contact field offered for synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyncField {
    pub display_name: String,
    pub logical_name: String,
    pub is_checked: bool,
    pub is_recommended: bool,
}

/// A contact view offered as the synchronization source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyncView {
    pub view_id: Uuid,
    pub view_name: Option<String>,
    pub is_selected: bool,
}

/// Decide whether a field starts out checked.
///
/// An explicit selection always wins. Only when nothing was selected do the
/// recommended fields count as checked. An empty explicit selection is
/// treated the same as "never selected".
pub fn is_field_checked<S: AsRef<str>>(explicit: &[S], recommended: &[&str], field: &str) -> bool {
    explicit.iter().any(|name| name.as_ref() == field)
        || (explicit.is_empty() && recommended.contains(&field))
}

/// Project contact attribute metadata into sync fields sorted by display name.
///
/// Attributes without a display label or not valid for advanced find are
/// dropped.
pub fn build_sync_fields(
    attributes: Vec<AttributeMetadata>,
    config: &CampaignMonitorConfiguration,
) -> Vec<SyncField> {
    let mut fields: Vec<SyncField> = attributes
        .into_iter()
        .filter(|a| a.is_valid_for_advanced_find)
        .filter_map(|a| {
            let display_name = a.display_name?;
            Some(SyncField {
                is_checked: is_field_checked(
                    &config.sync_fields,
                    RECOMMENDED_FIELDS,
                    &a.logical_name,
                ),
                is_recommended: RECOMMENDED_FIELDS.contains(&a.logical_name.as_str()),
                display_name,
                logical_name: a.logical_name,
            })
        })
        .collect();

    fields.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    fields
}

/// Project saved views into sync views sorted by name, marking the configured one.
pub fn build_sync_views(
    views: Vec<SavedView>,
    config: &CampaignMonitorConfiguration,
) -> Vec<SyncView> {
    let mut result: Vec<SyncView> = views
        .into_iter()
        .map(|v| SyncView {
            is_selected: config.sync_view_id == Some(v.id),
            view_id: v.id,
            view_name: v.name,
        })
        .collect();

    // None sorts first, matching a null-first ordering of names
    result.sort_by(|a, b| a.view_name.cmp(&b.view_name));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(name: &str, label: Option<&str>, advanced_find: bool) -> AttributeMetadata {
        AttributeMetadata {
            logical_name: name.to_string(),
            display_name: label.map(str::to_string),
            is_valid_for_advanced_find: advanced_find,
        }
    }

    #[test]
    fn test_recommended_fields_checked_without_explicit_selection() {
        let explicit: Vec<String> = Vec::new();
        assert!(is_field_checked(&explicit, RECOMMENDED_FIELDS, "firstname"));
        assert!(!is_field_checked(&explicit, RECOMMENDED_FIELDS, "telephone1"));
    }

    #[test]
    fn test_explicit_selection_overrides_recommendation() {
        let explicit = vec!["telephone1".to_string()];
        assert!(is_field_checked(&explicit, RECOMMENDED_FIELDS, "telephone1"));
        assert!(!is_field_checked(&explicit, RECOMMENDED_FIELDS, "firstname"));
    }

    #[test]
    fn test_build_sync_fields_filters_and_sorts() {
        let attributes = vec![
            attribute("lastname", Some("Last Name"), true),
            attribute("firstname", Some("First Name"), true),
            attribute("versionnumber", None, true),
            attribute("importsequencenumber", Some("Import Sequence"), false),
            attribute("telephone1", Some("Business Phone"), true),
        ];
        let config = CampaignMonitorConfiguration::default();

        let fields = build_sync_fields(attributes, &config);
        let names: Vec<&str> = fields.iter().map(|f| f.logical_name.as_str()).collect();
        assert_eq!(names, vec!["telephone1", "firstname", "lastname"]);

        let phone = &fields[0];
        assert!(!phone.is_checked);
        assert!(!phone.is_recommended);
        assert!(fields[1].is_checked && fields[1].is_recommended);
    }

    #[test]
    fn test_build_sync_fields_marks_recommended_even_when_unchecked() {
        let config = CampaignMonitorConfiguration {
            sync_fields: vec!["telephone1".to_string()],
            ..Default::default()
        };
        let fields = build_sync_fields(
            vec![
                attribute("firstname", Some("First Name"), true),
                attribute("telephone1", Some("Business Phone"), true),
            ],
            &config,
        );

        let first = fields.iter().find(|f| f.logical_name == "firstname").unwrap();
        assert!(first.is_recommended);
        assert!(!first.is_checked);
        let phone = fields.iter().find(|f| f.logical_name == "telephone1").unwrap();
        assert!(phone.is_checked);
    }

    #[test]
    fn test_build_sync_views_selects_configured_view() {
        let selected = Uuid::new_v4();
        let other = Uuid::new_v4();
        let config = CampaignMonitorConfiguration {
            sync_view_id: Some(selected),
            ..Default::default()
        };

        let views = build_sync_views(
            vec![
                SavedView {
                    id: other,
                    name: Some("Active Contacts".to_string()),
                },
                SavedView {
                    id: selected,
                    name: Some("My Contacts".to_string()),
                },
                SavedView {
                    id: Uuid::new_v4(),
                    name: Some("Inactive Contacts".to_string()),
                },
            ],
            &config,
        );

        let names: Vec<_> = views.iter().map(|v| v.view_name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["Active Contacts", "Inactive Contacts", "My Contacts"]);
        assert!(views[2].is_selected);
        assert!(!views[0].is_selected);
    }

    #[test]
    fn test_sync_field_serializes_pascal_case() {
        let field = SyncField {
            display_name: "First Name".to_string(),
            logical_name: "firstname".to_string(),
            is_checked: true,
            is_recommended: true,
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["DisplayName"], "First Name");
        assert_eq!(json["LogicalName"], "firstname");
        assert_eq!(json["IsChecked"], true);
        assert_eq!(json["IsRecommended"], true);
    }
}
