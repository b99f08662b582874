//! Post scheduling: content model and request assembly.
//!
//! The scheduling endpoint takes a bulk envelope whose per-network
//! content differs by content type. Content is modeled as a tagged
//! variant so the content-type handling is exhaustive: media-carrying
//! types attach a `media` list, link posts attach a `url`, everything
//! else is text-only.

use super::{PublerAction, WorkspaceRequirement};
use crate::error::{ConnectorError, ConnectorResult};
use crate::params::{ParamSet, ParameterDef, ParameterKind};
use crate::request::RequestSpec;
use chrono::DateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const NETWORKS: &[&str] = &[
    "facebook",
    "instagram",
    "twitter",
    "linkedin",
    "pinterest",
    "google",
    "youtube",
    "tiktok",
    "telegram",
    "mastodon",
    "threads",
    "bluesky",
];

pub const CONTENT_TYPES: &[&str] = &[
    "photo", "video", "link", "carousel", "story", "reel", "short", "gif", "document", "status",
    "poll", "event", "offer",
];

pub const POST_STATES: &[&str] =
    &["scheduled", "draft", "draft_private", "draft_public", "recurring"];

/// Social networks Publer can schedule to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Pinterest,
    Google,
    Youtube,
    Tiktok,
    Telegram,
    Mastodon,
    Threads,
    Bluesky,
}

impl Network {
    pub fn parse(value: &str) -> ConnectorResult<Self> {
        match value {
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "pinterest" => Ok(Self::Pinterest),
            "google" => Ok(Self::Google),
            "youtube" => Ok(Self::Youtube),
            "tiktok" => Ok(Self::Tiktok),
            "telegram" => Ok(Self::Telegram),
            "mastodon" => Ok(Self::Mastodon),
            "threads" => Ok(Self::Threads),
            "bluesky" => Ok(Self::Bluesky),
            other => {
                Err(ConnectorError::validation(format!("unsupported network '{}'", other)))
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Pinterest => "pinterest",
            Self::Google => "google",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::Telegram => "telegram",
            Self::Mastodon => "mastodon",
            Self::Threads => "threads",
            Self::Bluesky => "bluesky",
        }
    }
}

/// Declared content type of a scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Photo,
    Video,
    Link,
    Carousel,
    Story,
    Reel,
    Short,
    Gif,
    Document,
    Status,
    Poll,
    Event,
    Offer,
}

impl ContentType {
    pub fn parse(value: &str) -> ConnectorResult<Self> {
        match value {
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            "link" => Ok(Self::Link),
            "carousel" => Ok(Self::Carousel),
            "story" => Ok(Self::Story),
            "reel" => Ok(Self::Reel),
            "short" => Ok(Self::Short),
            "gif" => Ok(Self::Gif),
            "document" => Ok(Self::Document),
            "status" => Ok(Self::Status),
            "poll" => Ok(Self::Poll),
            "event" => Ok(Self::Event),
            "offer" => Ok(Self::Offer),
            other => {
                Err(ConnectorError::validation(format!("unsupported content type '{}'", other)))
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Link => "link",
            Self::Carousel => "carousel",
            Self::Story => "story",
            Self::Reel => "reel",
            Self::Short => "short",
            Self::Gif => "gif",
            Self::Document => "document",
            Self::Status => "status",
            Self::Poll => "poll",
            Self::Event => "event",
            Self::Offer => "offer",
        }
    }

    /// Media kind attached to each media id for media-carrying types;
    /// `None` for link and text-only types.
    pub fn media_kind(self) -> Option<MediaKind> {
        match self {
            Self::Photo | Self::Carousel | Self::Story => Some(MediaKind::Image),
            Self::Video | Self::Reel | Self::Short => Some(MediaKind::Video),
            Self::Gif => Some(MediaKind::Gif),
            Self::Document => Some(MediaKind::Document),
            Self::Link | Self::Status | Self::Poll | Self::Event | Self::Offer => None,
        }
    }

    pub fn requires_media(self) -> bool {
        self.media_kind().is_some()
    }
}

/// Underlying media kind tag carried by each media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Gif,
    Document,
}

/// Lifecycle state of the scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostState {
    Scheduled,
    Draft,
    DraftPrivate,
    DraftPublic,
    Recurring,
}

impl PostState {
    pub fn parse(value: &str) -> ConnectorResult<Self> {
        match value {
            "scheduled" => Ok(Self::Scheduled),
            "draft" => Ok(Self::Draft),
            "draft_private" => Ok(Self::DraftPrivate),
            "draft_public" => Ok(Self::DraftPublic),
            "recurring" => Ok(Self::Recurring),
            other => {
                Err(ConnectorError::validation(format!("unsupported post state '{}'", other)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAttachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Network-specific post content. The variant is decided by the content
/// type, so every content type maps to exactly one wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NetworkContent {
    Media {
        #[serde(rename = "type")]
        content_type: ContentType,
        text: String,
        media: Vec<MediaAttachment>,
    },
    Link {
        #[serde(rename = "type")]
        content_type: ContentType,
        text: String,
        url: String,
    },
    Text {
        #[serde(rename = "type")]
        content_type: ContentType,
        text: String,
    },
}

impl NetworkContent {
    /// Assemble content for `content_type`, enforcing its required
    /// fields: a non-empty media-id list for media types, a link URL for
    /// link posts.
    pub fn assemble(
        content_type: ContentType,
        text: &str,
        media_ids: &[String],
        link_url: Option<&str>,
    ) -> ConnectorResult<Self> {
        if let Some(kind) = content_type.media_kind() {
            if media_ids.is_empty() {
                return Err(ConnectorError::validation(format!(
                    "Media IDs are required for {} posts",
                    content_type.as_str()
                )));
            }
            let media = media_ids
                .iter()
                .map(|id| MediaAttachment { id: id.clone(), kind })
                .collect();
            return Ok(Self::Media { content_type, text: text.to_string(), media });
        }

        if content_type == ContentType::Link {
            let url = link_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .ok_or_else(|| {
                    ConnectorError::validation("Link URL is required for link posts")
                })?;
            return Ok(Self::Link {
                content_type,
                text: text.to_string(),
                url: url.to_string(),
            });
        }

        Ok(Self::Text { content_type, text: text.to_string() })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountTarget {
    pub id: String,
    pub scheduled_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostEntry {
    pub networks: IndexMap<String, NetworkContent>,
    pub accounts: Vec<AccountTarget>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkEnvelope {
    pub state: PostState,
    pub posts: Vec<PostEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchedulePayload {
    pub bulk: BulkEnvelope,
}

/// Schedules a post to one social network for one or more accounts.
/// Text-only posts use the `status` content type; media and link posts
/// carry their extra fields per content type.
pub struct SchedulePost;

impl PublerAction for SchedulePost {
    fn name(&self) -> &'static str {
        "schedule_post"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        vec![
            ParameterDef::new("network", ParameterKind::Options).options(NETWORKS).required(),
            ParameterDef::new("contentType", ParameterKind::Options)
                .options(CONTENT_TYPES)
                .required(),
            ParameterDef::string("postText").required(),
            ParameterDef::new("mediaIds", ParameterKind::MultiValue).show_when(
                "contentType",
                &["photo", "video", "carousel", "story", "reel", "short", "gif", "document"],
            ),
            ParameterDef::string("linkUrl").show_when("contentType", &["link"]),
            ParameterDef::new("accountIds", ParameterKind::MultiValue).required(),
            ParameterDef::new("scheduledAt", ParameterKind::DateTime).required(),
            ParameterDef::new("state", ParameterKind::Options)
                .options(POST_STATES)
                .default_value("scheduled"),
        ]
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::Header
    }

    fn build_request(&self, params: &ParamSet) -> ConnectorResult<RequestSpec> {
        let network = Network::parse(params.required_string("network")?)?;
        let content_type = ContentType::parse(params.required_string("contentType")?)?;
        let text = params.required_string("postText")?;

        let account_ids = params.id_list("accountIds");
        if account_ids.is_empty() {
            return Err(ConnectorError::validation("at least one account ID is required"));
        }

        let scheduled_at = params.required_string("scheduledAt")?;
        DateTime::parse_from_rfc3339(scheduled_at).map_err(|err| {
            ConnectorError::validation(format!("invalid scheduledAt '{}': {}", scheduled_at, err))
        })?;

        let state = PostState::parse(params.required_string("state")?)?;

        let media_ids = params.id_list("mediaIds");
        let content =
            NetworkContent::assemble(content_type, text, &media_ids, params.optional_string("linkUrl"))?;

        let accounts = account_ids
            .into_iter()
            .map(|id| AccountTarget { id, scheduled_at: scheduled_at.to_string() })
            .collect();

        let mut networks = IndexMap::new();
        networks.insert(network.as_str().to_string(), content);

        let payload = SchedulePayload {
            bulk: BulkEnvelope { state, posts: vec![PostEntry { networks, accounts }] },
        };

        Ok(RequestSpec::post("/api/v1/posts/schedule").json_body(serde_json::to_value(payload)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use publer_core::{ParamValue, StaticParams};
    use serde_json::json;

    fn base_params() -> StaticParams {
        StaticParams::new().shared([
            ("network", ParamValue::from("facebook")),
            ("postText", ParamValue::from("hello world")),
            ("accountIds", ParamValue::from("a1, a2")),
            ("scheduledAt", ParamValue::from("2026-02-15T14:16:00+02:00")),
        ])
    }

    fn build(provider: &StaticParams) -> ConnectorResult<RequestSpec> {
        let set = ParamSet::resolve(&SchedulePost.parameters(), provider, 0)?;
        SchedulePost.build_request(&set)
    }

    #[test]
    fn photo_post_maps_media_ids_to_image_attachments() {
        let provider = base_params()
            .shared([("contentType", ParamValue::from("photo")), ("mediaIds", ParamValue::from("m1,m2"))]);
        let body = build(&provider).unwrap().body.unwrap();

        assert_eq!(
            body["bulk"]["posts"][0]["networks"]["facebook"],
            json!({
                "type": "photo",
                "text": "hello world",
                "media": [
                    { "id": "m1", "type": "image" },
                    { "id": "m2", "type": "image" }
                ]
            })
        );
    }

    #[test]
    fn link_post_embeds_url_and_omits_media() {
        let provider = base_params().shared([
            ("contentType", ParamValue::from("link")),
            ("linkUrl", ParamValue::from("https://x.test")),
        ]);
        let body = build(&provider).unwrap().body.unwrap();

        let content = &body["bulk"]["posts"][0]["networks"]["facebook"];
        assert_eq!(
            *content,
            json!({ "type": "link", "text": "hello world", "url": "https://x.test" })
        );
        assert!(content.get("media").is_none());
    }

    #[test]
    fn status_post_is_text_only() {
        let provider = base_params().shared([("contentType", ParamValue::from("status"))]);
        let body = build(&provider).unwrap().body.unwrap();
        assert_eq!(
            body["bulk"]["posts"][0]["networks"]["facebook"],
            json!({ "type": "status", "text": "hello world" })
        );
    }

    #[test]
    fn envelope_carries_state_and_account_targets() {
        let provider = base_params().shared([("contentType", ParamValue::from("status"))]);
        let body = build(&provider).unwrap().body.unwrap();

        assert_eq!(body["bulk"]["state"], "scheduled");
        assert_eq!(
            body["bulk"]["posts"][0]["accounts"],
            json!([
                { "id": "a1", "scheduled_at": "2026-02-15T14:16:00+02:00" },
                { "id": "a2", "scheduled_at": "2026-02-15T14:16:00+02:00" }
            ])
        );
    }

    #[test]
    fn reel_and_carousel_map_to_their_media_kinds() {
        assert_eq!(ContentType::Carousel.media_kind(), Some(MediaKind::Image));
        assert_eq!(ContentType::Story.media_kind(), Some(MediaKind::Image));
        assert_eq!(ContentType::Reel.media_kind(), Some(MediaKind::Video));
        assert_eq!(ContentType::Short.media_kind(), Some(MediaKind::Video));
        assert_eq!(ContentType::Gif.media_kind(), Some(MediaKind::Gif));
        assert_eq!(ContentType::Document.media_kind(), Some(MediaKind::Document));
        assert_eq!(ContentType::Link.media_kind(), None);
        assert_eq!(ContentType::Poll.media_kind(), None);
        assert!(ContentType::Photo.requires_media());
        assert!(!ContentType::Status.requires_media());
    }

    #[test]
    fn media_post_without_media_ids_fails_validation() {
        let provider = base_params().shared([("contentType", ParamValue::from("video"))]);
        let err = build(&provider).unwrap_err();
        assert!(matches!(err, ConnectorError::Validation(_)));
        assert!(err.to_string().contains("Media IDs"));
    }

    #[test]
    fn link_post_without_url_fails_validation() {
        let provider = base_params().shared([("contentType", ParamValue::from("link"))]);
        let err = build(&provider).unwrap_err();
        assert!(err.to_string().contains("Link URL"));
    }

    #[test]
    fn empty_account_id_list_after_cleaning_fails_validation() {
        let provider = base_params().shared([
            ("contentType", ParamValue::from("status")),
            ("accountIds", ParamValue::from(" , ,")),
        ]);
        let err = build(&provider).unwrap_err();
        assert!(err.to_string().contains("account ID"));
    }

    #[test]
    fn garbled_scheduled_at_fails_validation() {
        let provider = base_params().shared([
            ("contentType", ParamValue::from("status")),
            ("scheduledAt", ParamValue::from("next tuesday")),
        ]);
        let err = build(&provider).unwrap_err();
        assert!(err.to_string().contains("scheduledAt"));
    }
}
