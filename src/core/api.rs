use serde::Deserialize;
use std::time::Duration;

// ── Trailhead API Client ─────────────────────────────────────────────────────
//
// Three read-only endpoints, each `GET {base}{path}?username=<u>` returning
// JSON.  The remote schema is owned by a third party; field names are
// mirrored with serde renames and every field is defaulted so partial or
// error-shaped payloads still decode.

pub const DEFAULT_BASE_URL: &str = "https://trailhead-api.herokuapp.com/api";

const PROFILE_PATH: &str = "/profile";
const RANK_PATH: &str = "/rank";
const AWARDS_PATH: &str = "/awards";

const USER_AGENT: &str = "trailtrack-desktop/0.1";

// ── Response DTOs ────────────────────────────────────────────────────────────

/// `/profile` payload.  A failed lookup comes back as `{ "error": "..." }`
/// with the remaining fields absent, so everything is defaulted.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub profile_photo_url: String,
    #[serde(default)]
    pub profile_user: ProfileUser,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfileUser {
    #[serde(rename = "FirstName", default)]
    pub first_name: String,
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    #[serde(rename = "Id", default)]
    pub id: String,
    /// Trailblazer role, e.g. "Developer".
    #[serde(rename = "TBID_Role__c", default)]
    pub role: String,
    #[serde(rename = "CompanyName", default)]
    pub company: String,
    /// Free-text bio; null for profiles that never filled it in.
    #[serde(rename = "AboutMe", default)]
    pub about: Option<String>,
}

/// `/rank` payload — aggregate gamification statistics.
#[derive(Debug, Deserialize, Clone)]
pub struct RankResponse {
    #[serde(rename = "RankImageUrl", default)]
    pub rank_image_url: String,
    #[serde(rename = "CompletedTrailTotal", default)]
    pub completed_trail_total: u64,
    #[serde(rename = "EarnedBadgeTotal", default)]
    pub earned_badge_total: u64,
    #[serde(rename = "EarnedPointTotal", default)]
    pub earned_point_total: u64,
}

/// `/awards` payload — one entry per earned credential.
#[derive(Debug, Deserialize, Clone)]
pub struct AwardsResponse {
    #[serde(default)]
    pub awards: Vec<AwardEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AwardEntry {
    #[serde(rename = "AwardType", default)]
    pub award_type: String,
    #[serde(rename = "Award", default)]
    pub award: AwardDetail,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AwardDetail {
    #[serde(rename = "LearningUrl", default)]
    pub learning_url: String,
    #[serde(rename = "ImageUrl", default)]
    pub image_url: String,
    #[serde(rename = "Label", default)]
    pub label: String,
}

// ── Client ───────────────────────────────────────────────────────────────────

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, String> {
        url::Url::parse(base_url).map_err(|e| format!("Invalid API base URL: {}", e))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Client configured from the saved settings.
    pub fn from_settings() -> Result<Self, String> {
        let settings = super::settings::read_settings()?;
        Self::new(&settings.api_base_url, settings.request_timeout_secs)
    }

    fn endpoint(&self, path: &str, username: &str) -> String {
        format!(
            "{}{}?username={}",
            self.base_url,
            path,
            urlencoding::encode(username)
        )
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileResponse, String> {
        self.get_json(PROFILE_PATH, username).await
    }

    pub async fn fetch_rank(&self, username: &str) -> Result<RankResponse, String> {
        self.get_json(RANK_PATH, username).await
    }

    pub async fn fetch_awards(&self, username: &str) -> Result<AwardsResponse, String> {
        self.get_json(AWARDS_PATH, username).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        username: &str,
    ) -> Result<T, String> {
        let url = self.endpoint(path, username);

        let resp = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("Trailhead API returned status {}", resp.status()));
        }

        resp.json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_profile_response() {
        let raw = json!({
            "profilePhotoUrl": "https://img.example/p.png",
            "profileUser": {
                "FirstName": "Alice",
                "LastName": "A",
                "Id": "005xx0000012345",
                "TBID_Role__c": "Developer",
                "CompanyName": "Acme",
                "AboutMe": "Hi there"
            }
        });
        let profile: ProfileResponse = serde_json::from_value(raw).unwrap();
        assert!(profile.error.is_none());
        assert_eq!(profile.profile_photo_url, "https://img.example/p.png");
        assert_eq!(profile.profile_user.first_name, "Alice");
        assert_eq!(profile.profile_user.role, "Developer");
        assert_eq!(profile.profile_user.about.as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_parse_error_shape() {
        // A bad username comes back with only an error field.
        let profile: ProfileResponse =
            serde_json::from_value(json!({ "error": "no such user" })).unwrap();
        assert_eq!(profile.error.as_deref(), Some("no such user"));
        assert_eq!(profile.profile_user.id, "");
    }

    #[test]
    fn test_parse_null_about_me() {
        let raw = json!({
            "profilePhotoUrl": "u",
            "profileUser": {
                "FirstName": "B",
                "LastName": "C",
                "Id": "1",
                "TBID_Role__c": "",
                "CompanyName": "",
                "AboutMe": null
            }
        });
        let profile: ProfileResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(profile.profile_user.about, None);
    }

    #[test]
    fn test_parse_rank_response() {
        let raw = json!({
            "RankImageUrl": "https://img.example/rank.png",
            "CompletedTrailTotal": 12,
            "EarnedBadgeTotal": 47,
            "EarnedPointTotal": 61450
        });
        let rank: RankResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(rank.completed_trail_total, 12);
        assert_eq!(rank.earned_badge_total, 47);
        assert_eq!(rank.earned_point_total, 61450);
    }

    #[test]
    fn test_parse_awards_response() {
        let raw = json!({
            "awards": [
                {
                    "AwardType": "Module",
                    "Award": {
                        "LearningUrl": "https://trailhead.example/m1",
                        "ImageUrl": "https://img.example/m1.png",
                        "Label": "Apex Basics"
                    }
                },
                {
                    "AwardType": "Trail",
                    "Award": {
                        "LearningUrl": "https://trailhead.example/t1",
                        "ImageUrl": "https://img.example/t1.png",
                        "Label": "Admin Beginner"
                    }
                }
            ]
        });
        let awards: AwardsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(awards.awards.len(), 2);
        assert_eq!(awards.awards[0].award.label, "Apex Basics");
        assert_eq!(awards.awards[1].award_type, "Trail");
    }

    #[test]
    fn test_endpoint_encodes_username() {
        let client = ApiClient::new("https://api.example/api/", 10).unwrap();
        assert_eq!(
            client.endpoint(PROFILE_PATH, "user name+x"),
            "https://api.example/api/profile?username=user%20name%2Bx"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(ApiClient::new("not a url", 10).is_err());
    }
}
