use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Planet as embedded inside a base document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub size: u32,
    pub planet: PlanetRef,
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// Building template from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub size: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    /// Fabrication duration in seconds.
    pub time: u64,
    #[serde(default)]
    pub amount: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub resource: NamedRef,
    pub catalog: CatalogItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    #[serde(rename = "_id")]
    pub id: String,
    pub catalog: CatalogItem,
    pub base: BaseRef,
    #[serde(default)]
    pub producing: Option<Recipe>,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub queue: Vec<Recipe>,
}

impl Building {
    /// Recipe in fabrication and its start, only when both halves are set.
    pub fn active_production(&self) -> Option<(&Recipe, DateTime<Utc>)> {
        match (&self.producing, self.start_time) {
            (Some(recipe), Some(started_at)) => Some((recipe, started_at)),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.producing.is_none()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Authenticated player session, persisted in browser session storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub id: String,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            token: auth.access_token,
            user_id: auth.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBase {
    pub name: String,
    pub size: u32,
    pub planet: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseEdit {
    pub name: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBuilding {
    pub catalog: String,
    pub base: String,
}

/// Partial building update. Outer `None` leaves a field untouched,
/// `Some(None)` sends an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producing: Option<Option<String>>,
    #[serde(rename = "startTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Option<String>>,
}

impl BuildingUpdate {
    pub fn queue(ids: Vec<String>) -> Self {
        Self {
            queue: Some(ids),
            ..Self::default()
        }
    }

    pub fn start(recipe_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            producing: Some(Some(recipe_id.to_string())),
            start_time: Some(Some(
                now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            )),
            ..Self::default()
        }
    }

    pub fn cancel_production() -> Self {
        Self {
            producing: Some(None),
            start_time: Some(None),
            ..Self::default()
        }
    }
}
