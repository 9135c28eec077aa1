//! # Authentication Configuration Module
//!
//! OAuth 프로바이더 등록 정보, 세션 쿠키, OAuth state 수명 등
//! 인증 관련 설정을 환경변수에서 읽어오는 모듈입니다.
//! Spring Security의 `spring.security.oauth2.client.registration.*` 설정과
//! 같은 역할을 합니다.
//!
//! ## 지원하는 프로바이더
//!
//! | Registration ID | 프로토콜 | name attribute key |
//! |-----------------|----------|--------------------|
//! | `google` | OIDC | `sub` |
//! | `github` | OAuth 2.0 | `id` |
//! | `kakao` | OAuth 2.0 | `id` |
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! # Kakao는 client secret 사용이 선택입니다
//! export KAKAO_CLIENT_SECRET="optional"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export GITHUB_REDIRECT_URI="http://localhost:8080/login/oauth2/code/github"
//! export SESSION_COOKIE_NAME="SESSION"
//! export SESSION_TTL_MINUTES="30"
//! export SESSION_COOKIE_SECURE="false"
//! export OAUTH_STATE_TTL_MINUTES="10"
//! export LOGIN_SUCCESS_URL="/"
//! ```

use std::env;
use std::fmt;
use crate::config::data_config::Environment;
use crate::errors::errors::{AppError, AppResult};

/// 지원하는 소셜 로그인 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    /// Google (OpenID Connect)
    Google,

    /// GitHub OAuth App
    GitHub,

    /// Kakao Login
    Kakao,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 3] = [SocialProvider::Google, SocialProvider::GitHub, SocialProvider::Kakao];

    /// URL 경로의 provider 를 변환합니다. 대소문자는 구분하지 않습니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::from_registration_id(&s.to_lowercase())
            .ok_or_else(|| format!("Unsupported auth provider: {}", s))
    }

    /// 정확히 일치하는 소문자 registration id 만 인식합니다.
    pub fn from_registration_id(registration_id: &str) -> Option<Self> {
        match registration_id {
            "google" => Some(SocialProvider::Google),
            "github" => Some(SocialProvider::GitHub),
            "kakao" => Some(SocialProvider::Kakao),
            _ => None,
        }
    }

    /// URL 경로와 설정 키에 쓰이는 소문자 registration id
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::GitHub => "github",
            SocialProvider::Kakao => "kakao",
        }
    }

    /// 인증 주체(Principal)의 이름으로 사용할 attribute 키
    pub fn name_attribute_key(&self) -> &'static str {
        match self {
            SocialProvider::Google => "sub",
            SocialProvider::GitHub | SocialProvider::Kakao => "id",
        }
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            SocialProvider::Google => "GOOGLE",
            SocialProvider::GitHub => "GITHUB",
            SocialProvider::Kakao => "KAKAO",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 프로바이더 하나의 OAuth 클라이언트 등록 정보
///
/// 환경변수 `{PROVIDER}_*` 에서 로드되며, 엔드포인트 URI는 각 프로바이더의
/// 공개 기본값을 가지므로 테스트 환경에서만 덮어쓰면 됩니다.
#[derive(Debug, Clone)]
pub struct OAuthRegistration {
    pub provider: SocialProvider,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub user_info_uri: String,
    pub scopes: Vec<String>,
}

impl OAuthRegistration {
    /// 환경변수에서 프로바이더 등록 정보를 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - client id 또는 (google/github의) client secret 누락
    pub fn for_provider(provider: SocialProvider) -> AppResult<Self> {
        let prefix = provider.env_prefix();

        let client_id = required_var(&format!("{}_CLIENT_ID", prefix))?;
        let client_secret = match provider {
            SocialProvider::Kakao => optional_var(&format!("{}_CLIENT_SECRET", prefix)),
            _ => Some(required_var(&format!("{}_CLIENT_SECRET", prefix))?),
        };

        let registration = Self::with_defaults(provider, client_id, client_secret);

        Ok(Self {
            redirect_uri: optional_var(&format!("{}_REDIRECT_URI", prefix)).unwrap_or(registration.redirect_uri),
            auth_uri: optional_var(&format!("{}_AUTH_URI", prefix)).unwrap_or(registration.auth_uri),
            token_uri: optional_var(&format!("{}_TOKEN_URI", prefix)).unwrap_or(registration.token_uri),
            user_info_uri: optional_var(&format!("{}_USER_INFO_URI", prefix)).unwrap_or(registration.user_info_uri),
            ..registration
        })
    }

    /// 프로바이더 공개 엔드포인트 기본값으로 등록 정보를 만듭니다.
    pub fn with_defaults(provider: SocialProvider, client_id: String, client_secret: Option<String>) -> Self {
        let (auth_uri, token_uri, user_info_uri, scopes): (&str, &str, &str, &[&str]) = match provider {
            SocialProvider::Google => (
                "https://accounts.google.com/o/oauth2/v2/auth",
                "https://oauth2.googleapis.com/token",
                "https://openidconnect.googleapis.com/v1/userinfo",
                &["openid", "profile", "email"],
            ),
            SocialProvider::GitHub => (
                "https://github.com/login/oauth/authorize",
                "https://github.com/login/oauth/access_token",
                "https://api.github.com/user",
                &["read:user", "user:email"],
            ),
            SocialProvider::Kakao => (
                "https://kauth.kakao.com/oauth/authorize",
                "https://kauth.kakao.com/oauth/token",
                "https://kapi.kakao.com/v2/user/me",
                &["profile_nickname", "account_email"],
            ),
        };

        Self {
            provider,
            client_id,
            client_secret,
            redirect_uri: format!("http://localhost:8080/login/oauth2/code/{}", provider.as_str()),
            auth_uri: auth_uri.to_string(),
            token_uri: token_uri.to_string(),
            user_info_uri: user_info_uri.to_string(),
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 공백으로 구분된 scope 문자열
    pub fn scope(&self) -> String {
        self.scopes.join(" ")
    }
}

/// 세션 쿠키 및 세션 저장소 설정
pub struct SessionConfig;

impl SessionConfig {
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "SESSION".to_string())
    }

    pub fn ttl_minutes() -> i64 {
        env::var("SESSION_TTL_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }

    pub fn ttl_seconds() -> u64 {
        minutes_to_seconds(Self::ttl_minutes())
    }

    /// `SESSION_COOKIE_SECURE` 가 없으면 실행 환경에 따라 결정합니다.
    pub fn cookie_secure() -> bool {
        match env::var("SESSION_COOKIE_SECURE") {
            Ok(v) => v.eq_ignore_ascii_case("true"),
            Err(_) => Environment::current().requires_secure_cookies(),
        }
    }
}

/// OAuth 로그인 플로우 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// 발급한 state 값의 유효 시간 (분)
    pub fn state_ttl_minutes() -> i64 {
        env::var("OAUTH_STATE_TTL_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }

    /// 로그인 성공 후 리다이렉트할 경로
    pub fn login_success_url() -> String {
        env::var("LOGIN_SUCCESS_URL").unwrap_or_else(|_| "/".to_string())
    }

    /// 프로바이더 API 호출 타임아웃 (초)
    pub fn http_timeout_seconds() -> u64 {
        env::var("OAUTH_HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

fn required_var(key: &str) -> AppResult<String> {
    optional_var(key).ok_or_else(|| AppError::ConfigurationError(format!("{} must be set", key)))
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 분 단위 TTL 을 초로 바꿉니다. 최소 1분이며 오버플로 시 최대값에서 멈춥니다.
fn minutes_to_seconds(minutes: i64) -> u64 {
    (minutes.max(1) as u64).saturating_mul(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_provider_from_string() {
        assert_eq!(SocialProvider::from_str("google").unwrap(), SocialProvider::Google);
        assert_eq!(SocialProvider::from_str("github").unwrap(), SocialProvider::GitHub);
        assert_eq!(SocialProvider::from_str("kakao").unwrap(), SocialProvider::Kakao);

        // 대소문자 무관 테스트
        assert_eq!(SocialProvider::from_str("GitHub").unwrap(), SocialProvider::GitHub);
        assert_eq!(SocialProvider::from_str("KAKAO").unwrap(), SocialProvider::Kakao);

        assert!(SocialProvider::from_str("twitter").is_err());
        assert!(SocialProvider::from_str("").is_err());
    }

    #[test]
    fn test_registration_id_is_exact() {
        assert_eq!(SocialProvider::from_registration_id("kakao"), Some(SocialProvider::Kakao));
        assert_eq!(SocialProvider::from_registration_id("Kakao"), None);
        assert_eq!(SocialProvider::from_registration_id(" github"), None);
    }

    #[test]
    fn test_session_ttl_seconds_is_clamped() {
        assert_eq!(minutes_to_seconds(30), 1_800);
        assert_eq!(minutes_to_seconds(0), 60);
        assert_eq!(minutes_to_seconds(-10), 60);
        assert_eq!(minutes_to_seconds(i64::MAX), u64::MAX);
    }

    #[test]
    fn test_name_attribute_keys() {
        assert_eq!(SocialProvider::Google.name_attribute_key(), "sub");
        assert_eq!(SocialProvider::GitHub.name_attribute_key(), "id");
        assert_eq!(SocialProvider::Kakao.name_attribute_key(), "id");
    }

    #[test]
    fn test_social_provider_serialization() {
        let json = serde_json::to_string(&SocialProvider::GitHub).unwrap();
        assert_eq!(json, "\"github\"");
        let deserialized: SocialProvider = serde_json::from_str("\"kakao\"").unwrap();
        assert_eq!(deserialized, SocialProvider::Kakao);
    }

    #[test]
    fn test_registration_defaults() {
        let github = OAuthRegistration::with_defaults(SocialProvider::GitHub, "cid".to_string(), Some("secret".to_string()));
        assert_eq!(github.token_uri, "https://github.com/login/oauth/access_token");
        assert_eq!(github.redirect_uri, "http://localhost:8080/login/oauth2/code/github");
        assert_eq!(github.scope(), "read:user user:email");

        let kakao = OAuthRegistration::with_defaults(SocialProvider::Kakao, "rest-key".to_string(), None);
        assert_eq!(kakao.user_info_uri, "https://kapi.kakao.com/v2/user/me");
        assert!(kakao.client_secret.is_none());

        let google = OAuthRegistration::with_defaults(SocialProvider::Google, "cid".to_string(), Some("s".to_string()));
        assert_eq!(google.scope(), "openid profile email");
    }
}
