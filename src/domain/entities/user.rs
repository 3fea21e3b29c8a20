//! User entity representing an account holder.

use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

/// An account holder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Input data for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Partial update for an existing user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl Resource for User {
    type Create = NewUser;
    type Patch = UserPatch;

    const NAME: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: NewUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}
