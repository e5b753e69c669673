use serde::Serialize;

use crate::error::ApiError;
use crate::model::{BaseEdit, BuildingUpdate, Credentials, NewBase, NewBuilding, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One HTTP call against the game API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub authorization: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            authorization: None,
        }
    }

    fn authorized(mut self, session: &Session) -> Self {
        self.authorization = Some(session.bearer());
        self
    }

    fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    /// Serialized body, if any.
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(|body| body.to_string())
    }
}

fn require(session: Option<&Session>) -> Result<&Session, ApiError> {
    session
        .filter(|session| !session.token.is_empty())
        .ok_or(ApiError::MissingAuth)
}

pub fn login(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/auth/login").json(credentials)
}

pub fn register(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/auth/register").json(credentials)
}

pub fn list(session: Option<&Session>, collection: &str) -> Result<ApiRequest, ApiError> {
    let session = require(session)?;
    Ok(ApiRequest::new(Method::Get, format!("/{collection}")).authorized(session))
}

pub fn create_base(
    session: Option<&Session>,
    name: &str,
    size: u32,
    planet_id: Option<&str>,
) -> Result<ApiRequest, ApiError> {
    let session = require(session)?;
    let planet = planet_id.ok_or(ApiError::MissingSelection(
        "No planet selected. Please select a planet first.",
    ))?;
    let body = NewBase {
        name: name.to_string(),
        size,
        planet: planet.to_string(),
        user: session.user_id.clone(),
    };
    ApiRequest::new(Method::Post, "/bases")
        .authorized(session)
        .json(&body)
}

pub fn update_base(
    session: Option<&Session>,
    base_id: &str,
    edit: &BaseEdit,
) -> Result<ApiRequest, ApiError> {
    let session = require(session)?;
    ApiRequest::new(Method::Put, format!("/bases/{base_id}"))
        .authorized(session)
        .json(edit)
}

pub fn delete_base(session: Option<&Session>, base_id: &str) -> Result<ApiRequest, ApiError> {
    let session = require(session)?;
    Ok(ApiRequest::new(Method::Delete, format!("/bases/{base_id}")).authorized(session))
}

pub const NO_CATALOG_MESSAGE: &str = "Select a catalog item to build.";

pub fn create_building(
    session: Option<&Session>,
    catalog_id: &str,
    base_id: Option<&str>,
) -> Result<ApiRequest, ApiError> {
    let no_base = ApiError::MissingSelection(
        "No auth token found or no base selected. Please log in and select a base first.",
    );
    let session = require(session).map_err(|_| no_base.clone())?;
    let base = base_id.ok_or(no_base)?;
    if catalog_id.is_empty() {
        return Err(ApiError::MissingSelection(NO_CATALOG_MESSAGE));
    }
    let body = NewBuilding {
        catalog: catalog_id.to_string(),
        base: base.to_string(),
    };
    ApiRequest::new(Method::Post, "/buildings")
        .authorized(session)
        .json(&body)
}

pub fn update_building(
    session: Option<&Session>,
    building_id: &str,
    update: &BuildingUpdate,
) -> Result<ApiRequest, ApiError> {
    let session = require(session)?;
    ApiRequest::new(Method::Put, format!("/buildings/{building_id}"))
        .authorized(session)
        .json(update)
}

pub fn delete_building(
    session: Option<&Session>,
    building_id: &str,
) -> Result<ApiRequest, ApiError> {
    let session = require(session)?;
    Ok(ApiRequest::new(Method::Delete, format!("/buildings/{building_id}")).authorized(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> Session {
        Session {
            token: "tok".into(),
            user_id: "u1".into(),
        }
    }

    #[test]
    fn url_joins_without_double_slash() {
        let req = list(Some(&session()), "planets").unwrap();
        assert_eq!(req.url("https://api.example.test/"), "https://api.example.test/planets");
        assert_eq!(req.url("http://localhost:8081"), "http://localhost:8081/planets");
    }

    #[test]
    fn authenticated_requests_carry_bearer_token() {
        let req = delete_base(Some(&session()), "b7").unwrap();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/bases/b7");
        assert_eq!(req.authorization.as_deref(), Some("Bearer tok"));
        assert!(req.body.is_none());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let blank = Session {
            token: String::new(),
            user_id: "u1".into(),
        };
        assert_eq!(list(Some(&blank), "bases"), Err(ApiError::MissingAuth));
    }

    #[test]
    fn create_base_sends_owner_and_planet() {
        let req = create_base(Some(&session()), "Dock", 25, Some("p1")).unwrap();
        assert_eq!(
            req.body,
            Some(json!({ "name": "Dock", "size": 25, "planet": "p1", "user": "u1" }))
        );
    }

    #[test]
    fn create_base_checks_auth_before_planet() {
        assert_eq!(
            create_base(None, "Dock", 25, None),
            Err(ApiError::MissingAuth)
        );
        assert!(matches!(
            create_base(Some(&session()), "Dock", 25, None),
            Err(ApiError::MissingSelection(_))
        ));
    }

    #[test]
    fn create_building_requires_base() {
        assert!(matches!(
            create_building(Some(&session()), "c1", None),
            Err(ApiError::MissingSelection(_))
        ));
        let req = create_building(Some(&session()), "c1", Some("b1")).unwrap();
        assert_eq!(req.body, Some(json!({ "catalog": "c1", "base": "b1" })));
    }

    #[test]
    fn create_building_checks_session_and_base_before_catalog() {
        let no_session = create_building(None, "", Some("b1")).unwrap_err();
        assert!(matches!(no_session, ApiError::MissingSelection(m) if m.starts_with("No auth token")));
        assert!(matches!(
            create_building(Some(&session()), "", None),
            Err(ApiError::MissingSelection(m)) if m.starts_with("No auth token")
        ));
        assert_eq!(
            create_building(Some(&session()), "", Some("b1")).unwrap_err(),
            ApiError::MissingSelection(NO_CATALOG_MESSAGE)
        );
    }

    #[test]
    fn login_is_unauthenticated() {
        let req = login(&Credentials {
            username: "pilot@example.test".into(),
            password: "hunter2".into(),
        })
        .unwrap();
        assert!(req.authorization.is_none());
        assert_eq!(req.path, "/auth/login");
        let body: serde_json::Value = serde_json::from_str(&req.body_text().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "username": "pilot@example.test", "password": "hunter2" })
        );
    }
}
