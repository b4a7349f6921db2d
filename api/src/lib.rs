use std::{future::Future, pin::pin, time::Duration};

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use tracing::{debug, error};
use url::form_urlencoded;

pub mod car;
pub mod location;
pub mod profile;

pub const DEFAULT_API_BASE_URL: &str = "https://rent-api.rubik.dev";

// the rental api identifies resources with either numeric or string ids depending on the
// endpoint, so we normalize both to strings as soon as they come off the wire
pub fn de_resource_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

// request context
//
// what every request needs besides its own parameters: the api location, the caller's
// language and, for authenticated calls, the bearer token
#[derive(Clone, Debug, PartialEq)]
pub struct ApiContext {
    pub base_url: String,
    pub locale: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>, locale: impl Into<String>, timeout: Duration) -> Self {
        ApiContext {
            base_url: base_url.into(),
            locale: locale.into(),
            token: None,
            timeout,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let base = self.base_url.trim_end_matches('/');

        if query.is_empty() {
            return format!("{base}{path}");
        }

        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter())
            .finish();

        format!("{base}{path}?{encoded}")
    }

    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Accept-Language", self.locale.clone()),
            ("Accept", String::from("application/json")),
            ("Content-Type", String::from("application/json")),
        ];

        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {token}")));
        }

        headers
    }
}

// every request type renders itself as an ordered list of query pairs
pub trait QueryString {
    fn query(&self) -> Vec<(String, String)>;
}

pub async fn get_json<T>(ctx: &ApiContext, path: &str, query: &[(String, String)]) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let url = ctx.url(path, query);
    debug!({ url = %url }, "sending request");

    let mut builder = Request::get(&url);
    for (name, value) in ctx.headers() {
        builder = builder.header(name, &value);
    }

    let exchange = async move {
        let resp = builder.send().await?;

        if resp.ok() {
            Ok(resp.json::<T>().await?)
        } else {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(anyhow::Error::msg(format!("{path} returned {status}: {body}")))
        }
    };

    let result = with_timeout(ctx.timeout, exchange).await;

    if let Err(err) = &result {
        error!({ url = %url }, "request failed: {err}");
    }

    result
}

// gloo-net has no notion of a deadline, so we race the exchange against a timer and drop
// whichever side loses
async fn with_timeout<T>(
    timeout: Duration,
    exchange: impl Future<Output = anyhow::Result<T>>,
) -> anyhow::Result<T> {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);

    let exchange = pin!(exchange);
    let timer = pin!(TimeoutFuture::new(millis));

    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(anyhow::Error::msg(format!(
            "request timed out after {millis}ms"
        ))),
    }
}

// generates `pub async fn snake_name(ctx, req) -> anyhow::Result<NameResp>` for a GET endpoint
// whose request type is `NameReq`
#[macro_export]
macro_rules! endpoint {
    ($name:ident, $path:literal) => {
        paste::paste! {
            pub async fn [<$name:snake>](
                ctx: &$crate::ApiContext,
                req: &[<$name:camel Req>],
            ) -> anyhow::Result<[<$name:camel Resp>]> {
                $crate::get_json(ctx, $path, &$crate::QueryString::query(req)).await
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ApiContext {
        ApiContext::new("https://rent.example/", "de", Duration::from_secs(20))
    }

    #[test]
    fn url_without_query_has_no_separator() {
        assert_eq!(ctx().url("/api/my-profiles", &[]), "https://rent.example/api/my-profiles");
    }

    #[test]
    fn url_encodes_bracketed_keys_and_spaces() {
        let query = vec![(String::from("filter[search]"), String::from("Berlin Airport"))];

        assert_eq!(
            ctx().url("/api/locations", &query),
            "https://rent.example/api/locations?filter%5Bsearch%5D=Berlin+Airport"
        );
    }

    #[test]
    fn anonymous_requests_carry_locale_and_json_headers() {
        let headers = ctx().headers();

        assert_eq!(
            headers,
            vec![
                ("Accept-Language", String::from("de")),
                ("Accept", String::from("application/json")),
                ("Content-Type", String::from("application/json")),
            ]
        );
    }

    #[test]
    fn authenticated_requests_add_bearer_token() {
        let headers = ctx().with_token("abc123").headers();

        assert!(headers.contains(&("Authorization", String::from("Bearer abc123"))));
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn resource_ids_accept_numbers_and_strings() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "de_resource_id")]
            id: String,
        }

        let numeric: Holder = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let text: Holder = serde_json::from_str(r#"{"id": "loc-7"}"#).unwrap();

        assert_eq!(numeric.id, "7");
        assert_eq!(text.id, "loc-7");
    }
}
