use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{
    AuthResponse, Base, BaseEdit, Building, BuildingUpdate, CatalogItem, Credentials, Planet,
    Recipe, Session,
};
use crate::request::{self, ApiRequest};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests. Only transport-level failures are errors here;
/// non-2xx statuses come back as a `RawResponse`.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn exchange(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.exchange(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let auth: AuthResponse = self.fetch_json(request::login(credentials)?).await?;
        Ok(auth.into())
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.exchange(request::register(credentials)?).await?;
        Ok(())
    }

    pub async fn planets(&self, session: Option<&Session>) -> Result<Vec<Planet>, ApiError> {
        self.fetch_json(request::list(session, "planets")?).await
    }

    /// Owned bases only; unowned bases are filtered out.
    pub async fn bases(&self, session: Option<&Session>) -> Result<Vec<Base>, ApiError> {
        let bases: Vec<Base> = self.fetch_json(request::list(session, "bases")?).await?;
        Ok(bases.into_iter().filter(|base| base.user.is_some()).collect())
    }

    pub async fn create_base(
        &self,
        session: Option<&Session>,
        name: &str,
        size: u32,
        planet_id: Option<&str>,
    ) -> Result<(), ApiError> {
        self.exchange(request::create_base(session, name, size, planet_id)?)
            .await?;
        Ok(())
    }

    pub async fn update_base(
        &self,
        session: Option<&Session>,
        base_id: &str,
        edit: &BaseEdit,
    ) -> Result<(), ApiError> {
        self.exchange(request::update_base(session, base_id, edit)?)
            .await?;
        Ok(())
    }

    pub async fn delete_base(&self, session: Option<&Session>, base_id: &str) -> Result<(), ApiError> {
        self.exchange(request::delete_base(session, base_id)?).await?;
        Ok(())
    }

    pub async fn buildings(&self, session: Option<&Session>) -> Result<Vec<Building>, ApiError> {
        self.fetch_json(request::list(session, "buildings")?).await
    }

    pub async fn create_building(
        &self,
        session: Option<&Session>,
        catalog_id: &str,
        base_id: Option<&str>,
    ) -> Result<(), ApiError> {
        self.exchange(request::create_building(session, catalog_id, base_id)?)
            .await?;
        Ok(())
    }

    pub async fn update_building(
        &self,
        session: Option<&Session>,
        building_id: &str,
        update: &BuildingUpdate,
    ) -> Result<(), ApiError> {
        self.exchange(request::update_building(session, building_id, update)?)
            .await?;
        Ok(())
    }

    pub async fn delete_building(
        &self,
        session: Option<&Session>,
        building_id: &str,
    ) -> Result<(), ApiError> {
        self.exchange(request::delete_building(session, building_id)?)
            .await?;
        Ok(())
    }

    pub async fn catalogs(&self, session: Option<&Session>) -> Result<Vec<CatalogItem>, ApiError> {
        self.fetch_json(request::list(session, "catalogs")?).await
    }

    pub async fn recipes(&self, session: Option<&Session>) -> Result<Vec<Recipe>, ApiError> {
        self.fetch_json(request::list(session, "recipes")?).await
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::testing::{ScriptedTransport, ok};
    use super::*;
    use crate::error::{MISSING_AUTH_MESSAGE, Operation, RETRY_LATER_MESSAGE};
    use crate::request::Method;

    fn session() -> Session {
        Session {
            token: "tok".into(),
            user_id: "u1".into(),
        }
    }

    #[test]
    fn create_base_without_session_never_hits_transport() {
        let api = ApiClient::new(ScriptedTransport::default());
        let err = block_on(api.create_base(None, "Dock", 25, Some("p1"))).unwrap_err();
        assert!(api.transport().sent.borrow().is_empty());
        assert_eq!(err.user_message(Operation::CreateBase), MISSING_AUTH_MESSAGE);
    }

    #[test]
    fn login_returns_session() {
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok(
            r#"{"access_token":"abc","id":"u9"}"#,
        )]));
        let credentials = Credentials {
            username: "pilot".into(),
            password: "pw".into(),
        };
        let session = block_on(api.login(&credentials)).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user_id, "u9");
    }

    #[test]
    fn rejected_login_surfaces_server_message() {
        let api = ApiClient::new(ScriptedTransport::replying(vec![Ok(RawResponse {
            status: 401,
            body: r#"{"message":"Invalid credentials"}"#.into(),
        })]));
        let credentials = Credentials {
            username: "pilot".into(),
            password: "bad".into(),
        };
        let err = block_on(api.login(&credentials)).unwrap_err();
        assert_eq!(err.user_message(Operation::Login), "Invalid credentials");
    }

    #[test]
    fn bases_drop_unowned_entries() {
        let body = json!([
            { "_id": "a", "name": "Mine", "size": 25, "planet": { "_id": "p", "name": "Vega" },
              "user": { "_id": "u1", "username": "pilot" } },
            { "_id": "b", "name": "Ruin", "size": 10, "planet": { "_id": "p", "name": "Vega" },
              "user": null }
        ]);
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok(&body.to_string())]));
        let bases = block_on(api.bases(Some(&session()))).unwrap();
        assert_eq!(bases.len(), 1);
        assert_eq!(bases[0].id, "a");
    }

    #[test]
    fn queue_update_is_a_single_put() {
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok("{}")]));
        block_on(api.update_building(
            Some(&session()),
            "b1",
            &BuildingUpdate::queue(vec!["r1".into()]),
        ))
        .unwrap();
        let sent = api.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/buildings/b1");
        assert_eq!(sent[0].body, Some(json!({ "queue": ["r1"] })));
    }

    #[test]
    fn network_failure_reports_retry_message() {
        let api = ApiClient::new(ScriptedTransport::replying(vec![Err(ApiError::Network(
            "connection refused".into(),
        ))]));
        let err = block_on(api.planets(Some(&session()))).unwrap_err();
        assert_eq!(err.user_message(Operation::FetchPlanets), RETRY_LATER_MESSAGE);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let api = ApiClient::new(ScriptedTransport::replying(vec![ok("not json")]));
        let err = block_on(api.recipes(Some(&session()))).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
