use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// SeaORM entity for the `contact` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birthday: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub address: Option<String>,
    pub contact_num: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for create, update and bulk upload. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub gender: Option<String>,
    pub birthday: Option<Date>,
    pub address: Option<String>,
    pub contact_num: Option<String>,
}

impl ContactInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name must not be blank"));
        }
        Ok(())
    }

    /// Active model for an insert; the id is left to the database.
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            gender: Set(self.gender),
            birthday: Set(self.birthday),
            address: Set(self.address),
            contact_num: Set(self.contact_num),
        }
    }

    /// Active model replacing every mutable column of row `id`.
    pub fn into_replacement(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: Unchanged(id),
            ..self.into_new_active_model()
        }
    }

    pub fn into_model(self, id: i32) -> Model {
        Model {
            id,
            name: self.name,
            gender: self.gender,
            birthday: self.birthday,
            address: self.address,
            contact_num: self.contact_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn alice() -> ContactInput {
        ContactInput {
            name: "Alice".into(),
            gender: Some("Female".into()),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
            address: Some("1 Main St".into()),
            contact_num: Some("555-0001".into()),
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut input = alice();
        input.name = "   ".into();
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));

        assert!(alice().validate().is_ok());
    }

    #[test]
    fn input_deserializes_from_camel_case_and_ignores_id() {
        let input: ContactInput = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Alice",
            "gender": "Female",
            "birthday": "1990-01-01",
            "address": "1 Main St",
            "contactNum": "555-0001",
        }))
        .unwrap();

        assert_eq!(input, alice());
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let input: ContactInput =
            serde_json::from_value(serde_json::json!({ "name": "Bob" })).unwrap();
        assert_eq!(input.gender, None);
        assert_eq!(input.birthday, None);
        assert_eq!(input.contact_num, None);
    }

    #[test]
    fn model_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(alice().into_model(1)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["contactNum"], "555-0001");
        assert_eq!(json["birthday"], "1990-01-01");
    }

    #[test]
    fn replacement_keeps_id_unchanged() {
        let active = alice().into_replacement(7);
        assert_eq!(active.id, Unchanged(7));
        assert_eq!(active.name, Set("Alice".to_string()));
    }
}
