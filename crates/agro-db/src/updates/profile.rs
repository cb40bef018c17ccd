//! Profile update builder. `user_id` and `email` are not editable here.

use agro_core::enums::{Department, Role};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Option<String>>,
}

#[derive(Default)]
pub struct ProfileUpdateBuilder(ProfileUpdate);

impl ProfileUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_name(mut self, val: impl Into<String>) -> Self {
        self.0.first_name = Some(val.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, val: impl Into<String>) -> Self {
        self.0.last_name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn role(mut self, val: Role) -> Self {
        self.0.role = Some(val);
        self
    }

    #[must_use]
    pub const fn department(mut self, val: Department) -> Self {
        self.0.department = Some(val);
        self
    }

    #[must_use]
    pub fn sex(mut self, val: Option<String>) -> Self {
        self.0.sex = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> ProfileUpdate {
        self.0
    }
}
