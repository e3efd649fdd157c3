use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlatformDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "characterLimit")]
    pub character_limit: usize,
}

pub const PLATFORMS: [PlatformDescriptor; 6] = [
    PlatformDescriptor { id: "linkedin", name: "LinkedIn", character_limit: 3000 },
    PlatformDescriptor { id: "facebook", name: "Facebook", character_limit: 63206 },
    PlatformDescriptor { id: "x", name: "X", character_limit: 280 },
    PlatformDescriptor { id: "threads", name: "Threads", character_limit: 500 },
    PlatformDescriptor { id: "truth", name: "Truth Social", character_limit: 500 },
    PlatformDescriptor { id: "bluetick", name: "BlueTick", character_limit: 280 },
];

pub const BLUETICK_LIMIT: usize = 280;
pub const BLUESKY_LIMIT: usize = 300;
pub const TRUTH_SOCIAL_LIMIT: usize = 500;
pub const LINKEDIN_LIMIT: usize = 3000;
pub const X_LIMIT: usize = 280;

/// Limit applied by the generic formatter when the platform is unknown.
pub const DEFAULT_LIMIT: usize = 280;

/// Character limit used by the generic `/api/format/{platform}` formatter.
pub fn generic_limit(platform: &str) -> usize {
    match platform.to_ascii_lowercase().as_str() {
        "twitter" | "x" => 280,
        "linkedin" => 3000,
        "facebook" => 63206,
        "bluesky" => 300,
        // threads gets its catalog limit rather than the default
        "truth" | "threads" => 500,
        _ => DEFAULT_LIMIT,
    }
}

/// Which formatter handles a `/api/format/{platform}` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatTarget {
    BlueTick,
    Bluesky,
    TruthSocial,
    LinkedIn,
    X,
    Generic(String),
}

impl FormatTarget {
    pub fn from_path(platform: &str) -> Self {
        match platform.to_ascii_lowercase().as_str() {
            "bluetick" => FormatTarget::BlueTick,
            "bluesky" => FormatTarget::Bluesky,
            "truthsocial" => FormatTarget::TruthSocial,
            "linkedin" => FormatTarget::LinkedIn,
            "x" => FormatTarget::X,
            _ => FormatTarget::Generic(platform.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        let ids: Vec<_> = PLATFORMS.iter().map(|p| p.id).collect();
        assert_eq!(ids, ["linkedin", "facebook", "x", "threads", "truth", "bluetick"]);
        assert!(PLATFORMS.iter().all(|p| p.character_limit > 0));
    }

    #[test]
    fn test_descriptor_serializes_camel_case_limit() {
        let value = serde_json::to_value(PLATFORMS[2]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "x", "name": "X", "characterLimit": 280})
        );
    }

    #[test]
    fn test_generic_limit_lookup() {
        assert_eq!(generic_limit("Facebook"), 63206);
        assert_eq!(generic_limit("truth"), 500);
        assert_eq!(generic_limit("Threads"), 500);
        assert_eq!(generic_limit("myspace"), DEFAULT_LIMIT);
    }

    #[test]
    fn test_format_target_dispatch() {
        assert_eq!(FormatTarget::from_path("BlueTick"), FormatTarget::BlueTick);
        assert_eq!(FormatTarget::from_path("truthsocial"), FormatTarget::TruthSocial);
        assert_eq!(
            FormatTarget::from_path("facebook"),
            FormatTarget::Generic("facebook".to_string())
        );
    }
}
