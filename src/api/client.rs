use crate::analysis::summary::{summarize, ProfileSummary};
use crate::config::Config;
use crate::error::AppError;
use crate::query::ProfileQuery;
use tracing::{debug, warn};

use super::endpoints::{LANG_PARAM, USER_AGENT, USER_PARAM};
use super::models::*;

pub struct RatingsClient {
    config: Config,
}

impl RatingsClient {
    pub fn new(config: Config) -> Self {
        RatingsClient { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn execute_request(&self, query: &ProfileQuery) -> Result<String, AppError> {
        debug!(
            url = %self.config.ratings_url,
            user = query.username(),
            lang = %query.language(),
            "requesting profile"
        );

        let response = ureq::get(&self.config.ratings_url)
            .set("User-Agent", USER_AGENT)
            .query(USER_PARAM, query.username())
            .query(LANG_PARAM, query.language().code())
            .call();

        match response {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::NetworkError(e.to_string())),
            Err(ureq::Error::Status(code, _)) => Err(AppError::NetworkError(format!(
                "ratings API answered with HTTP {}",
                code
            ))),
            Err(e) => Err(AppError::NetworkError(e.to_string())),
        }
    }

    /// Performs exactly one request for the queried player.
    pub fn fetch_profile(&self, query: &ProfileQuery) -> Result<UpstreamProfile, AppError> {
        let body = self.execute_request(query)?;
        parse_profile_response(&body, query.username())
    }

    pub fn stats(&self, query: &ProfileQuery) -> Result<ProfileSummary, AppError> {
        let profile = self.fetch_profile(query)?;
        summarize(&profile, &self.config.rank_image_url)
    }
}

pub fn parse_profile_response(body: &str, username: &str) -> Result<UpstreamProfile, AppError> {
    let envelope: ProfileEnvelope = serde_json::from_str(body)
        .map_err(|e| AppError::NetworkError(format!("malformed response body: {}", e)))?;

    debug!(response_type = ?envelope.response_type, "received profile envelope");

    if envelope.response_type == ResponseType::NotFound {
        warn!(user = username, "player not found");
        return Err(AppError::PlayerNotFound(username.to_string()));
    }

    serde_json::from_value(envelope.response)
        .map_err(|e| AppError::NetworkError(format!("malformed profile: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn profile_json() -> serde_json::Value {
        json!({
            "name": "Tanker",
            "hasPremium": false,
            "rank": 5,
            "caughtGolds": 2,
            "earnedCrystals": 1000,
            "kills": 7,
            "deaths": 3,
            "gearScore": 1200,
            "score": 500,
            "scoreNext": 800,
            "rating": {
                "score": { "position": 10, "value": 500 },
                "golds": { "position": -1, "value": 0 },
                "crystals": { "position": 3, "value": 1000 },
                "efficiency": { "position": 7, "value": 12345 }
            },
            "previousRating": {
                "score": { "position": 12, "value": 400 },
                "golds": { "position": -1, "value": 0 },
                "crystals": { "position": 3, "value": 1000 }
            },
            "suppliesUsage": [],
            "modesPlayed": [],
            "turretsPlayed": [],
            "resistanceModules": []
        })
    }

    #[test]
    fn ok_body_parses_into_profile() {
        let body = json!({ "responseType": "OK", "response": profile_json() }).to_string();
        let profile = parse_profile_response(&body, "Tanker").unwrap();
        assert_eq!(profile.name, "Tanker");
        assert_eq!(profile.rating.golds.position, -1);
        assert!(profile.previous_rating.efficiency.is_none());
    }

    #[test]
    fn not_found_marker_wins_over_payload() {
        let body = json!({ "responseType": "NOT_FOUND", "response": profile_json() }).to_string();
        assert!(matches!(
            parse_profile_response(&body, "Ghost"),
            Err(AppError::PlayerNotFound(name)) if name == "Ghost"
        ));

        let body = json!({ "responseType": "NOT_FOUND", "response": null }).to_string();
        assert!(matches!(
            parse_profile_response(&body, "Ghost"),
            Err(AppError::PlayerNotFound(_))
        ));

        let body = json!({ "responseType": "NOT_FOUND" }).to_string();
        assert!(matches!(
            parse_profile_response(&body, "Ghost"),
            Err(AppError::PlayerNotFound(_))
        ));
    }

    #[test]
    fn unknown_marker_is_not_treated_as_not_found() {
        let body = json!({ "responseType": "SOMETHING_NEW", "response": profile_json() });
        let body = body.to_string();
        assert!(parse_profile_response(&body, "Tanker").is_ok());
    }

    #[test]
    fn malformed_body_is_a_network_error() {
        assert!(matches!(
            parse_profile_response("<html>busy</html>", "Tanker"),
            Err(AppError::NetworkError(_))
        ));
        assert!(matches!(
            parse_profile_response(r#"{"responseType":"OK","response":{"name":"x"}}"#, "Tanker"),
            Err(AppError::NetworkError(_))
        ));
    }

    fn client_for(url: &str) -> RatingsClient {
        RatingsClient::new(Config {
            ratings_url: url.to_string(),
            ..Config::default()
        })
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        let client = client_for("http://127.0.0.1:1/");
        let query = ProfileQuery::for_user("Tanker").unwrap();
        assert!(matches!(
            client.fetch_profile(&query),
            Err(AppError::NetworkError(_))
        ));
    }

    #[test]
    fn server_error_status_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\n\
                      Content-Length: 0\r\n\
                      Connection: close\r\n\r\n",
                )
                .unwrap();
        });

        let client = client_for(&format!("http://{}/api/eu/profile/", addr));
        let query = ProfileQuery::for_user("Tanker").unwrap();
        let result = client.fetch_profile(&query);
        server.join().unwrap();

        match result {
            Err(AppError::NetworkError(message)) => assert!(message.contains("500"), "{message}"),
            other => panic!("expected a network error, got {:?}", other),
        }
    }
}
