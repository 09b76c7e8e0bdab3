// ABOUTME: Static profile card model backing the profile page

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub goal: String,
}
