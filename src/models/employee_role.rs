//! Employee role DTOs and the paginated list envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One assignment of a role to an employee.
///
/// `id` and the timestamps are assigned by the server and never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRole {
    pub id: i64,
    pub employee_id: i64,
    pub role_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// DTO for creating a role assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRole {
    pub employee_id: i64,
    pub role_id: i64,
}

/// DTO for replacing the mutable fields of a role assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeRole {
    pub employee_id: i64,
    pub role_id: i64,
}

impl From<CreateEmployeeRole> for UpdateEmployeeRole {
    fn from(data: CreateEmployeeRole) -> Self {
        Self {
            employee_id: data.employee_id,
            role_id: data.role_id,
        }
    }
}

/// One page of role assignments plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RolePage {
    pub data: Vec<EmployeeRole>,
    pub meta: PageMeta,
}

/// Pagination summary returned by the server.
///
/// Only `current_page` and `last_page` are interpreted; everything else the
/// server sends is captured but opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PageMeta {
    /// Whether the "previous" control is enabled on `page`.
    pub fn has_prev(&self, page: u32) -> bool {
        page > 1
    }

    /// Whether the "next" control is enabled on `page`.
    pub fn has_next(&self, page: u32) -> bool {
        page < self.last_page
    }
}

/// Form draft for the create and edit screens.
///
/// Holds raw textual input; [`RoleDraft::parse`] is the explicit conversion
/// and validation step, nothing is sent to the server before it succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDraft {
    pub employee_id: String,
    pub role_id: String,
}

impl Default for RoleDraft {
    fn default() -> Self {
        Self {
            employee_id: "0".to_string(),
            role_id: "0".to_string(),
        }
    }
}

impl RoleDraft {
    /// Pre-fill the draft from an existing record.
    pub fn from_record(record: &EmployeeRole) -> Self {
        Self {
            employee_id: record.employee_id.to_string(),
            role_id: record.role_id.to_string(),
        }
    }

    /// Convert the textual input into a create payload.
    ///
    /// Both fields must parse as non-negative integers.
    pub fn parse(&self) -> Result<CreateEmployeeRole, AppError> {
        let employee_id = parse_id_field(&self.employee_id, "Identifiant employé invalide")?;
        let role_id = parse_id_field(&self.role_id, "Identifiant rôle invalide")?;
        Ok(CreateEmployeeRole { employee_id, role_id })
    }
}

fn parse_id_field(input: &str, message: &str) -> Result<i64, AppError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| AppError::validation(message))?;
    if value < 0 {
        return Err(AppError::validation(message));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(current_page: u32, last_page: u32) -> PageMeta {
        PageMeta {
            current_page,
            last_page,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_draft_parses_valid_input() {
        let draft = RoleDraft {
            employee_id: "7".to_string(),
            role_id: "2".to_string(),
        };
        let data = draft.parse().unwrap();
        assert_eq!(data.employee_id, 7);
        assert_eq!(data.role_id, 2);
    }

    #[test]
    fn test_draft_trims_whitespace() {
        let draft = RoleDraft {
            employee_id: " 12 ".to_string(),
            role_id: "3".to_string(),
        };
        assert_eq!(draft.parse().unwrap().employee_id, 12);
    }

    #[test]
    fn test_draft_rejects_empty_input() {
        let draft = RoleDraft {
            employee_id: String::new(),
            role_id: "2".to_string(),
        };
        assert!(draft.parse().is_err());
    }

    #[test]
    fn test_draft_rejects_non_numeric_input() {
        let draft = RoleDraft {
            employee_id: "abc".to_string(),
            role_id: "2".to_string(),
        };
        assert!(draft.parse().is_err());
    }

    #[test]
    fn test_draft_rejects_negative_input() {
        let draft = RoleDraft {
            employee_id: "7".to_string(),
            role_id: "-1".to_string(),
        };
        assert!(draft.parse().is_err());
    }

    #[test]
    fn test_draft_from_record() {
        let record = EmployeeRole {
            id: 1,
            employee_id: 7,
            role_id: 2,
            created_at: None,
            updated_at: None,
        };
        let draft = RoleDraft::from_record(&record);
        assert_eq!(draft.employee_id, "7");
        assert_eq!(draft.role_id, "2");
    }

    #[test]
    fn test_pagination_controls_three_pages() {
        let m = meta(1, 3);
        assert!(!m.has_prev(1));
        assert!(m.has_next(1));
        assert!(m.has_prev(2));
        assert!(m.has_next(2));
        assert!(m.has_prev(3));
        assert!(!m.has_next(3));
    }

    #[test]
    fn test_pagination_single_page() {
        let m = meta(1, 1);
        assert!(!m.has_prev(1));
        assert!(!m.has_next(1));
    }

    #[test]
    fn test_deserialize_page_with_opaque_meta() {
        let payload = r#"{
            "data": [
                {"id": 1, "employee_id": 7, "role_id": 2,
                 "created_at": "2025-11-25T07:36:58Z", "updated_at": null}
            ],
            "meta": {"current_page": 1, "last_page": 3, "total": 42, "per_page": 15}
        }"#;

        let page: RolePage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].employee_id, 7);
        assert!(page.data[0].created_at.is_some());
        assert!(page.data[0].updated_at.is_none());
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.meta.extra["total"], 42);
    }

    #[test]
    fn test_create_payload_has_no_server_fields() {
        let data = CreateEmployeeRole {
            employee_id: 7,
            role_id: 2,
        };
        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["employee_id"], 7);
        assert_eq!(object["role_id"], 2);
    }

    #[test]
    fn test_record_without_timestamps_deserializes() {
        let record: EmployeeRole =
            serde_json::from_str(r#"{"id": 5, "employee_id": 1, "role_id": 9}"#).unwrap();
        assert_eq!(record.id, 5);
        assert!(record.created_at.is_none());
    }
}
